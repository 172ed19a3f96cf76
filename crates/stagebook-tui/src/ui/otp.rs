//! Passcode screen
//!
//! Segmented code cells, validation message, Continue and the resend row.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};
use stagebook_app::{App, OtpForm};

use super::{
    auth::{self, Header, WELCOME_SUBTITLE},
    widgets::Button,
};
use crate::theme::{self, spacing};

const HINTS: [(&str, &str); 4] = [("Enter", "verify"), ("r", "resend"), ("Esc", "back"), ("s", "skip")];

/// Render the passcode screen.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(otp) = app.otp() else {
        return;
    };
    let header = Header { title: "Welcome!", subtitle: &WELCOME_SUBTITLE, show_skip: true };
    let (body, hints) = auth::render_header(frame, &header, area);

    let [prompt_area, _, cells_area, error_area, _, button_area, _, resend_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(spacing::S),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(spacing::S),
            Constraint::Length(Button::HEIGHT),
            Constraint::Length(spacing::S),
            Constraint::Length(1),
        ])
        .areas(body);

    frame.render_widget(
        Line::styled(format!("Enter the code sent to {}", otp.identifier()), theme::muted()),
        prompt_area,
    );

    render_cells(frame, otp, cells_area);

    if let Some(error) = otp.visible_error() {
        frame.render_widget(Line::styled(error, theme::error()), error_area);
    }

    let button = Button::primary("Continue")
        .disabled(!otp.can_submit())
        .loading(otp.is_loading());
    frame.render_widget(button, button_area);

    frame.render_widget(resend_line(otp), resend_area);

    auth::render_hints(frame, &HINTS, hints);
}

/// One bordered box per cell; the focused box takes the terminal cursor.
fn render_cells(frame: &mut Frame, otp: &OtpForm, area: Rect) {
    let input = otp.input();
    let cells = input.cells(otp.code());
    let has_error = otp.visible_error().is_some();

    let count = u16::try_from(cells.len()).unwrap_or(u16::MAX);
    let wide = count.saturating_mul(6).saturating_sub(1) <= area.width;
    let (cell_width, gap) = if wide { (5, 1) } else { (3, 0) };

    let areas = Layout::horizontal(cells.iter().map(|_| Constraint::Length(cell_width)))
        .flex(Flex::Center)
        .spacing(gap)
        .split(area);

    for (index, (cell, cell_area)) in cells.iter().zip(areas.iter()).enumerate() {
        let focused = index == input.focused_cell();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::border(focused, has_error));
        let digit = cell.map(String::from).unwrap_or_default();
        frame.render_widget(
            Paragraph::new(digit)
                .alignment(Alignment::Center)
                .style(Style::new().add_modifier(Modifier::BOLD))
                .block(block),
            *cell_area,
        );

        if focused && !otp.is_loading() && cell_area.width >= 3 && cell_area.height >= 2 {
            frame.set_cursor_position(Position::new(
                cell_area.x + cell_area.width / 2,
                cell_area.y + 1,
            ));
        }
    }
}

/// `Didn't receive OTP? Resend in 12s`
fn resend_line(otp: &OtpForm) -> Line<'static> {
    let action = if otp.is_resending() {
        Span::styled("Sending...", theme::muted())
    } else if otp.cooldown().can_resend() {
        Span::styled(otp.cooldown().label(), theme::link())
    } else {
        Span::styled(otp.cooldown().label(), theme::muted())
    };
    Line::from(vec![Span::raw("Didn't receive OTP? "), action]).alignment(Alignment::Center)
}
