//! Status bar
//!
//! Displays the latest status message and the current screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use stagebook_app::{App, StatusLevel};

use crate::theme;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let message = match app.status() {
        Some(status) => {
            let color = match status.level {
                StatusLevel::Info => theme::GREEN,
                StatusLevel::Error => theme::RED,
            };
            Span::styled(status.message.as_str(), Style::new().fg(color))
        },
        None => Span::raw(""),
    };

    let status_line = Line::from(vec![Span::raw(" "), message]);
    let paragraph = Paragraph::new(status_line)
        .style(Style::new().bg(theme::LIGHT_GREY).fg(theme::TEXT_PRIMARY));
    frame.render_widget(paragraph, area);

    let screen = Line::styled(format!("{} ", app.route().name()), theme::muted());
    frame.render_widget(screen.alignment(Alignment::Right), area);
}
