//! Reusable components
//!
//! Buttons, text inputs, icons, post cards and the bottom sheet frame.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};
use stagebook_app::{SnapPoint, TextField};
use stagebook_core::Post;

use crate::theme;

/// Look up the glyph for an icon name.
///
/// Unknown names render as a middle dot so layouts stay aligned.
pub fn icon(name: &str) -> &'static str {
    match name {
        "House" => "⌂",
        "Sparkle" => "✦",
        "Widget" => "▦",
        "User" => "☺",
        "MapPin" => "⌖",
        "Bell" => "♪",
        "ChatCircle" => "✉",
        "PaperPlane" | "PaperPlaneTilt" => "➤",
        "Bookmark" => "⚑",
        "DotsThree" => "⋯",
        _ => "·",
    }
}

/// Button look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled with the brand colour.
    Primary,
    /// Outlined.
    Secondary,
}

/// Full-width action button.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    title: &'a str,
    variant: ButtonVariant,
    disabled: bool,
    loading: bool,
}

impl<'a> Button<'a> {
    /// Rows a button occupies.
    pub const HEIGHT: u16 = 3;

    /// Filled button.
    pub fn primary(title: &'a str) -> Self {
        Self { title, variant: ButtonVariant::Primary, disabled: false, loading: false }
    }

    /// Outlined button.
    pub fn secondary(title: &'a str) -> Self {
        Self { title, variant: ButtonVariant::Secondary, disabled: false, loading: false }
    }

    /// Grey the button out.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Show progress instead of the title. A loading button is also disabled.
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Text shown on the button.
    pub fn label(&self) -> &str {
        if self.loading { "Please wait..." } else { self.title }
    }

    /// Whether pressing the button does anything.
    pub fn is_enabled(&self) -> bool {
        !self.disabled && !self.loading
    }

    fn style(&self) -> Style {
        let style = match (self.variant, self.is_enabled()) {
            (ButtonVariant::Primary, true) => Style::new().bg(theme::BRAND_PRIMARY).fg(theme::WHITE),
            (ButtonVariant::Secondary, true) => Style::new().fg(theme::BRAND_PRIMARY),
            (ButtonVariant::Primary, false) => Style::new().bg(theme::GREY).fg(theme::WHITE),
            (ButtonVariant::Secondary, false) => Style::new().fg(theme::GREY),
        };
        style.add_modifier(Modifier::BOLD)
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        let block = Block::bordered().border_type(BorderType::Rounded).style(style);
        Paragraph::new(self.label())
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

/// Single-line text input with placeholder and error line.
#[derive(Debug, Clone, Copy)]
pub struct TextInput<'a> {
    field: &'a TextField,
    focused: bool,
}

impl<'a> TextInput<'a> {
    /// Rows an input occupies: three for the box, one for the error.
    pub const HEIGHT: u16 = 4;

    /// Input showing `field`.
    pub fn new(field: &'a TextField, focused: bool) -> Self {
        Self { field, focused }
    }

    /// Terminal cursor for the field, if focused.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused || area.width < 3 || area.height == 0 {
            return None;
        }
        let inner_width = area.width - 2;
        let column = self.field.cursor() - self.scroll(inner_width);
        let column = u16::try_from(column).unwrap_or(inner_width).min(inner_width - 1);
        Some(Position::new(area.x + 1 + column, area.y + 1))
    }

    /// Characters hidden off the left edge so the cursor stays visible.
    fn scroll(&self, inner_width: u16) -> usize {
        let visible = usize::from(inner_width.max(1));
        self.field.cursor().saturating_sub(visible - 1)
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [box_area, error_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);
        let error = self.field.visible_error();

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::border(self.focused, error.is_some()));

        let content = if self.field.is_empty() {
            Line::styled(self.field.placeholder(), theme::muted())
        } else {
            let skip = self.scroll(box_area.width.saturating_sub(2));
            Line::raw(self.field.display_value().chars().skip(skip).collect::<String>())
        };
        Paragraph::new(content).block(block).render(box_area, buf);

        if let Some(error) = error {
            Line::styled(error, theme::error()).render(error_area, buf);
        }
    }
}

/// A post in the home feed.
#[derive(Debug, Clone, Copy)]
pub struct PostCard<'a> {
    post: &'a Post,
    selected: bool,
}

impl<'a> PostCard<'a> {
    /// Rows a card occupies.
    pub const HEIGHT: u16 = 8;

    /// Card for `post`.
    pub fn new(post: &'a Post, selected: bool) -> Self {
        Self { post, selected }
    }
}

impl Widget for PostCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let post = self.post;
        let border = if self.selected {
            Style::new().fg(theme::BRAND_PRIMARY)
        } else {
            Style::new().fg(theme::BORDER_SECONDARY)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .style(Style::new().bg(theme::LIGHT_GREY));
        let inner = block.inner(area);
        block.render(area, buf);

        let [author, byline, description, footer, actions] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Line::from(vec![
            Span::styled(post.name.as_str(), Style::new().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" @{}", post.handle), theme::muted()),
        ])
        .render(author, buf);
        Line::raw(icon("DotsThree")).alignment(Alignment::Right).render(author, buf);

        Line::styled(format!("{} - {}", post.role, post.location), theme::muted())
            .render(byline, buf);

        Paragraph::new(post.description.as_str())
            .wrap(Wrap { trim: true })
            .render(description, buf);

        Line::from(vec![
            Span::styled("Read more", theme::link()),
            Span::raw("  "),
            Span::styled(post.posted.as_str(), theme::muted()),
        ])
        .render(footer, buf);

        Line::styled(
            format!(
                "{} Comment   {} Share   {} Save",
                icon("ChatCircle"),
                icon("PaperPlane"),
                icon("Bookmark")
            ),
            theme::muted(),
        )
        .render(actions, buf);
    }
}

/// Bottom-anchored area covered by a sheet resting at `snap`.
pub fn sheet_area(area: Rect, snap: SnapPoint) -> Rect {
    let height = u32::from(area.height) * u32::from(snap.percent()) / 100;
    let height = u16::try_from(height).unwrap_or(area.height).min(area.height);
    Rect { y: area.y + area.height - height, height, ..area }
}

#[cfg(test)]
mod tests {
    use stagebook_app::{FieldKind, KeyInput};

    use super::*;

    #[test]
    fn loading_button_is_disabled_and_relabelled() {
        let button = Button::primary("Continue").loading(true);
        assert!(!button.is_enabled());
        assert_eq!(button.label(), "Please wait...");

        let button = Button::secondary("Register");
        assert!(button.is_enabled());
        assert_eq!(button.label(), "Register");
    }

    #[test]
    fn sheet_covers_bottom_fraction() {
        let area = Rect::new(0, 0, 80, 40);

        let half = sheet_area(area, SnapPoint::Half);
        assert_eq!((half.y, half.height), (20, 20));

        let full = sheet_area(area, SnapPoint::Full);
        assert_eq!((full.y, full.height), (6, 34));
        assert_eq!(full.y + full.height, area.bottom());
    }

    #[test]
    fn cursor_tracks_field_and_scrolls() {
        let mut field = TextField::new(FieldKind::Phone, "Mobile number");
        for c in "9876543210".chars() {
            field.handle_key(KeyInput::Char(c));
        }
        let area = Rect::new(2, 5, 8, 4);

        let input = TextInput::new(&field, true);
        assert_eq!(input.cursor_position(area), Some(Position::new(8, 6)));

        field.handle_key(KeyInput::Home);
        let input = TextInput::new(&field, true);
        assert_eq!(input.cursor_position(area), Some(Position::new(3, 6)));

        assert_eq!(TextInput::new(&field, false).cursor_position(area), None);
    }

    #[test]
    fn unknown_icon_keeps_width() {
        assert_eq!(icon("House"), "⌂");
        assert_eq!(icon("ShoppingCart"), "·");
    }
}
