//! Tab area
//!
//! Content of the selected tab above the bottom tab bar. The comment sheet
//! covers both when open.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    text::Line,
    widgets::{Block, Borders},
};
use stagebook_app::{App, Tab};

use super::{home, profile, widgets::icon};
use crate::theme::{self, spacing};

const TAB_BAR_HEIGHT: u16 = 2;

/// Render the tab area for `tab`.
pub fn render(frame: &mut Frame, app: &App, tab: Tab, area: Rect) {
    let [content, bar] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(TAB_BAR_HEIGHT)]).areas(area);
    let content = content.inner(Margin::new(spacing::S, spacing::XS));

    match tab {
        Tab::Home => home::render(frame, app, content),
        Tab::BookArtist | Tab::Dashboard => render_placeholder(frame, tab, content),
        Tab::Profile => profile::render(frame, app, content),
    }
    render_tab_bar(frame, tab, bar);

    if let Some(sheet) = app.sheet() {
        home::render_sheet(frame, sheet, area);
    }
}

/// Tabs with nothing behind them yet.
fn render_placeholder(frame: &mut Frame, tab: Tab, area: Rect) {
    let [title, note] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
    frame.render_widget(Line::styled(tab.label(), theme::heading()), title);
    frame.render_widget(Line::styled("Coming soon", theme::muted()), note);
}

/// Icon and label per tab, the active one highlighted.
fn render_tab_bar(frame: &mut Frame, active: Tab, area: Rect) {
    let block = Block::new().borders(Borders::TOP).border_style(theme::border(false, false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let slots = Layout::horizontal(Tab::ALL.map(|_| Constraint::Fill(1))).split(inner);
    for (tab, slot) in Tab::ALL.into_iter().zip(slots.iter()) {
        let style = if tab == active { theme::link() } else { theme::muted() };
        let label = format!("{} {} {}", tab.index() + 1, icon(tab.icon()), tab.label());
        frame.render_widget(Line::styled(label, style).alignment(Alignment::Center), *slot);
    }
}
