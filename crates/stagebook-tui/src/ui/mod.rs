//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into a frame.

mod auth;
mod home;
mod login;
mod otp;
mod profile;
mod register;
mod status;
mod tabs;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    widgets::Block,
};
use stagebook_app::{App, Route};

use crate::theme;

/// Widest the sign-in column gets.
const FORM_MAX_WIDTH: u16 = 48;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    frame.render_widget(Block::new().style(theme::screen()), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MAIN_AREA_MIN_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    let [main_area, status_area] = chunks.as_ref() else {
        return;
    };

    match app.route() {
        Route::Login => login::render(frame, app, *main_area),
        Route::Otp { .. } => otp::render(frame, app, *main_area),
        Route::Register => register::render(frame, app, *main_area),
        Route::Tabs(tab) => tabs::render(frame, app, *tab, *main_area),
    }
    status::render(frame, app, *status_area);
}

/// Centre a column of at most `max_width` cells in `area`.
fn centered_column(area: Rect, max_width: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(max_width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    column
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod testing {
    use ratatui::{Terminal, backend::TestBackend};
    use stagebook_app::App;

    /// Render `app` into a `width` x `height` buffer and return its rows,
    /// trailing blanks trimmed.
    pub(crate) fn render_rows(app: &App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| super::render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>().trim_end().to_owned())
            .collect()
    }

    /// The first row containing `needle`, trimmed.
    pub(crate) fn row_with(rows: &[String], needle: &str) -> Option<String> {
        rows.iter().find(|row| row.contains(needle)).map(|row| row.trim().to_owned())
    }

    /// Cursor position after rendering a screen that places one.
    pub(crate) fn cursor(app: &App, width: u16, height: u16) -> (u16, u16) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| super::render(frame, app)).unwrap();
        let position = terminal.get_cursor_position().unwrap();
        (position.x, position.y)
    }
}
