//! Shared frame of the sign-in screens.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::Paragraph,
};

use super::{FORM_MAX_WIDTH, centered_column};
use crate::theme::{self, spacing};

/// Subtitle under the welcome heading on login and passcode screens.
pub(super) const WELCOME_SUBTITLE: [&str; 2] =
    ["Only one step away from the", "wonderful world of artists!"];

/// Heading block for a sign-in screen.
pub(super) struct Header<'a> {
    pub title: &'a str,
    pub subtitle: &'a [&'a str],
    pub show_skip: bool,
}

/// Draw the header and return the area left for the form and the hint row.
pub(super) fn render_header(frame: &mut Frame, header: &Header<'_>, area: Rect) -> (Rect, Rect) {
    let column = centered_column(area, FORM_MAX_WIDTH);
    let subtitle_height = u16::try_from(header.subtitle.len()).unwrap_or(u16::MAX);

    let [skip, _, title, subtitle, _, body, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(spacing::L),
        Constraint::Length(1),
        Constraint::Length(subtitle_height),
        Constraint::Length(spacing::XL),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(column);

    if header.show_skip {
        frame.render_widget(Line::styled("SKIP", theme::link()).alignment(Alignment::Right), skip);
    }
    frame.render_widget(Line::styled(header.title, theme::heading()), title);

    let subtitle_style = Style::new().add_modifier(Modifier::BOLD);
    let subtitle_text: Text = header.subtitle.iter().map(|line| Line::raw(*line)).collect();
    frame.render_widget(Paragraph::new(subtitle_text).style(subtitle_style), subtitle);

    (body, hints)
}

/// Keyboard hints along the bottom of a sign-in screen.
pub(super) fn render_hints(frame: &mut Frame, hints: &[(&str, &str)], area: Rect) {
    frame.render_widget(Line::styled(hint_text(hints), theme::muted()), area);
}

/// `key action · key action` text.
pub(super) fn hint_text(hints: &[(&str, &str)]) -> String {
    hints.iter().map(|(key, action)| format!("{key} {action}")).collect::<Vec<_>>().join(" · ")
}
