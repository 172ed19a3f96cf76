//! Login screen
//!
//! Mobile number entry with the Continue button and terms notice.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Text},
    widgets::Paragraph,
};
use stagebook_app::App;

use super::{
    auth::{self, Header, WELCOME_SUBTITLE},
    widgets::{Button, TextInput},
};
use crate::theme::{self, spacing};

const TERMS: [&str; 2] = ["By continuing, you agree with our terms", "of service and privacy policy"];

const HINTS: [(&str, &str); 4] =
    [("Enter", "continue"), ("r", "register"), ("s", "skip"), ("Esc", "quit")];

/// Render the login screen.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form = app.login();
    let header = Header { title: "Welcome!", subtitle: &WELCOME_SUBTITLE, show_skip: true };
    let (body, hints) = auth::render_header(frame, &header, area);

    let [input_area, button_area, _, terms_area] = Layout::vertical([
        Constraint::Length(TextInput::HEIGHT),
        Constraint::Length(Button::HEIGHT),
        Constraint::Length(spacing::M),
        Constraint::Length(2),
    ])
    .areas(body);

    let input = TextInput::new(form.mobile(), !form.is_loading());
    if let Some(position) = input.cursor_position(input_area) {
        frame.set_cursor_position(position);
    }
    frame.render_widget(input, input_area);

    let button = Button::primary("Continue").loading(form.is_loading());
    frame.render_widget(button, button_area);

    let terms: Text = TERMS.iter().map(|line| Line::raw(*line)).collect();
    frame.render_widget(
        Paragraph::new(terms).alignment(Alignment::Center).style(theme::muted()),
        terms_area,
    );

    auth::render_hints(frame, &HINTS, hints);
}

#[cfg(test)]
mod tests {
    use stagebook_app::{AppEvent, KeyInput};

    use crate::ui::testing::{cursor, render_rows, row_with};

    use super::*;

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle(AppEvent::Key(KeyInput::Char(c)));
        }
    }

    #[test]
    fn empty_form_shows_placeholder_and_terms() {
        let app = App::default();
        let rows = render_rows(&app, 60, 30);

        assert!(row_with(&rows, "SKIP").is_some());
        assert!(row_with(&rows, "Welcome!").is_some());
        assert!(row_with(&rows, "Mobile number").is_some());
        assert!(row_with(&rows, "Continue").is_some());
        assert_eq!(
            row_with(&rows, "privacy").as_deref(),
            Some("of service and privacy policy")
        );
    }

    #[test]
    fn invalid_number_shows_error_under_input() {
        let mut app = App::default();
        type_str(&mut app, "12345");
        app.handle(AppEvent::Key(KeyInput::Enter));

        let rows = render_rows(&app, 60, 30);
        assert_eq!(
            row_with(&rows, "valid mobile").as_deref(),
            Some("Please enter a valid mobile number")
        );
        assert!(row_with(&rows, "12345").is_some());
    }

    #[test]
    fn loading_replaces_button_label() {
        let mut app = App::default();
        type_str(&mut app, "9876543210");
        app.handle(AppEvent::Key(KeyInput::Enter));

        let rows = render_rows(&app, 60, 30);
        assert!(row_with(&rows, "Please wait...").is_some());
        assert!(row_with(&rows, "Continue").is_none());
    }

    #[test]
    fn cursor_follows_typed_digits() {
        let mut app = App::default();
        let (x0, y0) = cursor(&app, 60, 30);
        type_str(&mut app, "987");
        let (x3, y3) = cursor(&app, 60, 30);

        assert_eq!(y0, y3);
        assert_eq!(x3, x0 + 3);
    }
}
