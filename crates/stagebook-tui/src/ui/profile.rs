//! Profile tab

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Text},
    widgets::{Paragraph, Wrap},
};
use stagebook_app::{App, Loadable};

use super::widgets::icon;
use crate::theme::{self, spacing};

/// Render the profile tab.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.profile();
    let [title, _, body] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(spacing::S),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(Line::styled(view.title(), theme::heading()), title);

    match view.profile() {
        Loadable::Ready(profile) => {
            let text = Text::from(vec![
                Line::styled(format!("@{}", profile.handle), theme::muted()),
                Line::raw(profile.role.as_str()),
                Line::raw(format!("{} {}", icon("MapPin"), profile.location)),
                Line::default(),
                Line::raw(profile.bio.as_str()),
            ]);
            frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), body);
        },
        Loadable::Failed(message) => {
            frame.render_widget(Line::styled(message.as_str(), theme::error()), body);
        },
        Loadable::Idle | Loadable::Loading => {},
    }
}
