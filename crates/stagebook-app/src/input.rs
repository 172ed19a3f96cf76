//! Keys as the app sees them.
//!
//! The terminal front end and the simulation harness both produce
//! [`KeyInput`], so screen logic never depends on crossterm.

/// A key press delivered to the focused screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character. Screens without a focused text field treat a few
    /// letters as shortcuts.
    Char(char),
    /// Submit the form, open comments or send a comment.
    Enter,
    /// Erase before the cursor, or clear the focused code cell.
    Backspace,
    /// Erase at the cursor.
    Delete,
    /// Next field or tab.
    Tab,
    /// Previous field or tab.
    BackTab,
    /// Go back one route or dismiss the comment sheet.
    Esc,
    /// Cursor or code cell left.
    Left,
    /// Cursor or code cell right.
    Right,
    /// Previous post, or grow the comment sheet.
    Up,
    /// Next post, or shrink the comment sheet.
    Down,
    /// First position.
    Home,
    /// Last position.
    End,
    /// Ctrl+C / Ctrl+D. Quits from any screen.
    Interrupt,
}

impl KeyInput {
    /// The ASCII digit this key types, if any.
    pub fn digit(self) -> Option<char> {
        match self {
            Self::Char(c) if c.is_ascii_digit() => Some(c),
            _ => None,
        }
    }

    /// Zero-based index for the `1`..`9` shortcut keys.
    pub fn shortcut_index(self) -> Option<usize> {
        match self {
            Self::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_from_ascii_chars() {
        assert_eq!(KeyInput::Char('7').digit(), Some('7'));
        assert_eq!(KeyInput::Char('a').digit(), None);
        assert_eq!(KeyInput::Char('٣').digit(), None);
        assert_eq!(KeyInput::Enter.digit(), None);
    }

    #[test]
    fn shortcut_index_is_zero_based() {
        assert_eq!(KeyInput::Char('1').shortcut_index(), Some(0));
        assert_eq!(KeyInput::Char('4').shortcut_index(), Some(3));
        assert_eq!(KeyInput::Char('0').shortcut_index(), None);
        assert_eq!(KeyInput::Tab.shortcut_index(), None);
    }
}
