//! Design tokens.
//!
//! Colours and spacing shared by every screen, carried over from the mobile
//! design system. Spacing is expressed in terminal cells.

use ratatui::style::{Color, Modifier, Style};

/// Brand primary, used for actions and focus.
pub const BRAND_PRIMARY: Color = Color::Rgb(0x4e, 0xb0, 0xff);
/// Brand secondary, used for headings.
pub const BRAND_SECONDARY: Color = Color::Rgb(0x80, 0x63, 0xff);
/// Black.
pub const BLACK: Color = Color::Rgb(0x00, 0x00, 0x00);
/// White.
pub const WHITE: Color = Color::Rgb(0xff, 0xff, 0xff);
/// Grey, used for disabled controls.
pub const GREY: Color = Color::Rgb(0xaa, 0xaa, 0xaa);
/// Light grey, used for card backgrounds.
pub const LIGHT_GREY: Color = Color::Rgb(0xf5, 0xf5, 0xf5);
/// Body text.
pub const TEXT_PRIMARY: Color = Color::Rgb(0x00, 0x00, 0x00);
/// Secondary text, placeholders and hints.
pub const TEXT_SECONDARY: Color = Color::Rgb(0x70, 0x70, 0x70);
/// Errors.
pub const RED: Color = Color::Rgb(0xff, 0x0c, 0x0c);
/// Success.
pub const GREEN: Color = Color::Rgb(0x34, 0xc7, 0x59);
/// Unfocused borders.
pub const BORDER_SECONDARY: Color = Color::Rgb(0x99, 0x99, 0x99);

/// Spacing scale in cells.
pub mod spacing {
    /// Extra small.
    pub const XS: u16 = 0;
    /// Small.
    pub const S: u16 = 1;
    /// Medium.
    pub const M: u16 = 1;
    /// Large.
    pub const L: u16 = 2;
    /// Extra large.
    pub const XL: u16 = 3;
    /// Double extra large.
    pub const XXL: u16 = 4;
}

/// Base style painted under every screen.
pub fn screen() -> Style {
    Style::new().bg(WHITE).fg(TEXT_PRIMARY)
}

/// Screen heading.
pub fn heading() -> Style {
    Style::new().fg(BRAND_SECONDARY).add_modifier(Modifier::BOLD)
}

/// Secondary text.
pub fn muted() -> Style {
    Style::new().fg(TEXT_SECONDARY)
}

/// Error text.
pub fn error() -> Style {
    Style::new().fg(RED)
}

/// Clickable text, like SKIP or Resend.
pub fn link() -> Style {
    Style::new().fg(BRAND_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Border for an input, by focus and error state.
pub fn border(focused: bool, has_error: bool) -> Style {
    match (focused, has_error) {
        (_, true) => Style::new().fg(RED),
        (true, false) => Style::new().fg(BRAND_PRIMARY),
        (false, false) => Style::new().fg(BORDER_SECONDARY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_monotonic() {
        let scale = [spacing::XS, spacing::S, spacing::M, spacing::L, spacing::XL, spacing::XXL];
        assert!(scale.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn error_border_wins_over_focus() {
        assert_eq!(border(true, true), error());
        assert_eq!(border(true, false).fg, Some(BRAND_PRIMARY));
    }
}
