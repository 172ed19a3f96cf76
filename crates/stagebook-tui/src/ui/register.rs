//! Registration screen

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use stagebook_app::{App, RegisterField};

use super::{
    auth::{self, Header},
    widgets::{Button, TextInput},
};

const FIELDS: [RegisterField; 3] = [RegisterField::Name, RegisterField::Email, RegisterField::Password];

const HINTS: [(&str, &str); 3] = [("Tab", "next field"), ("Enter", "register"), ("Esc", "back")];

/// Render the registration screen.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form = app.register();
    let header = Header {
        title: "Create Account",
        subtitle: &["Join the wonderful world of artists!"],
        show_skip: false,
    };
    let (body, hints) = auth::render_header(frame, &header, area);

    let [name_area, email_area, password_area, button_area] = Layout::vertical([
        Constraint::Length(TextInput::HEIGHT),
        Constraint::Length(TextInput::HEIGHT),
        Constraint::Length(TextInput::HEIGHT),
        Constraint::Length(Button::HEIGHT),
    ])
    .areas(body);

    for (field, field_area) in FIELDS.into_iter().zip([name_area, email_area, password_area]) {
        let focused = form.focused() == field && !form.is_loading();
        let input = TextInput::new(form.field(field), focused);
        if let Some(position) = input.cursor_position(field_area) {
            frame.set_cursor_position(position);
        }
        frame.render_widget(input, field_area);
    }

    frame.render_widget(Button::primary("Register").loading(form.is_loading()), button_area);

    auth::render_hints(frame, &HINTS, hints);
}
