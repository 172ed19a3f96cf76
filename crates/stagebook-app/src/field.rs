//! Single-line text fields for the forms.
//!
//! A field owns its buffer and cursor and handles character-level editing.
//! Validation lives in the forms; a field only stores the resulting message
//! and decides when to show it.

use crate::KeyInput;

/// Kind of field. Controls which characters are accepted and masking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Mobile number: digits and `+` only.
    Phone,
    /// Display name.
    Name,
    /// Email address.
    Email,
    /// Password, rendered masked.
    Password,
    /// Free text comment.
    Comment,
}

impl FieldKind {
    fn accepts(self, c: char) -> bool {
        match self {
            Self::Phone => c.is_ascii_digit() || c == '+',
            Self::Name | Self::Email | Self::Password | Self::Comment => !c.is_control(),
        }
    }

    /// Whether the value is hidden when rendered.
    pub fn is_masked(self) -> bool {
        matches!(self, Self::Password)
    }
}

/// Mask character for password fields.
pub const MASK_CHAR: char = '•';

/// Editable text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    kind: FieldKind,
    placeholder: String,
    value: String,
    /// Cursor position in chars, `0..=len`.
    cursor: usize,
    /// Set once the user has left the field.
    touched: bool,
    error: Option<String>,
}

impl TextField {
    /// Create an empty field.
    pub fn new(kind: FieldKind, placeholder: impl Into<String>) -> Self {
        Self {
            kind,
            placeholder: placeholder.into(),
            value: String::new(),
            cursor: 0,
            touched: false,
            error: None,
        }
    }

    /// Field kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Placeholder shown while empty.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the field holds no text.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Text as rendered: masked for passwords.
    pub fn display_value(&self) -> String {
        if self.kind.is_masked() {
            self.value.chars().map(|_| MASK_CHAR).collect()
        } else {
            self.value.clone()
        }
    }

    /// Handle an editing key. Returns whether the key was consumed; a
    /// character the field rejects is not.
    ///
    /// Keys with form-level meaning (Enter, Tab, Esc, Up, Down) are not
    /// consumed.
    pub fn handle_key(&mut self, key: KeyInput) -> bool {
        match key {
            KeyInput::Char(c) => self.insert(c),
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.remove_at(self.cursor);
                }
                true
            },
            KeyInput::Delete => {
                self.remove_at(self.cursor);
                true
            },
            KeyInput::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            },
            KeyInput::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                true
            },
            KeyInput::Home => {
                self.cursor = 0;
                true
            },
            KeyInput::End => {
                self.cursor = self.char_len();
                true
            },
            _ => false,
        }
    }

    /// Insert pasted text at the cursor, dropping rejected characters.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            let _ = self.insert(c);
        }
    }

    /// Empty the field. Touched state and error are kept.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Mark the field as visited.
    pub fn blur(&mut self) {
        self.touched = true;
    }

    /// Whether the user has left the field at least once.
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Store the latest validation result.
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Latest validation message, shown or not.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validation message to render. Hidden until the field is touched.
    pub fn visible_error(&self) -> Option<&str> {
        if self.touched { self.error() } else { None }
    }

    fn insert(&mut self, c: char) -> bool {
        if !self.kind.accepts(c) {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        true
    }

    fn remove_at(&mut self, cursor: usize) {
        if cursor < self.char_len() {
            let at = self.byte_offset(cursor);
            self.value.remove(at);
        }
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, cursor: usize) -> usize {
        self.value.char_indices().nth(cursor).map_or(self.value.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(field: &mut TextField, text: &str) {
        for c in text.chars() {
            field.handle_key(KeyInput::Char(c));
        }
    }

    #[test]
    fn phone_field_filters_letters() {
        let mut field = TextField::new(FieldKind::Phone, "Enter your mobile number");
        type_text(&mut field, "+91 98x76");
        assert_eq!(field.value(), "+919876");
        assert_eq!(field.cursor(), 7);
    }

    #[test]
    fn editing_respects_cursor() {
        let mut field = TextField::new(FieldKind::Name, "Name");
        type_text(&mut field, "abc");

        field.handle_key(KeyInput::Home);
        field.handle_key(KeyInput::Delete);
        assert_eq!(field.value(), "bc");

        field.handle_key(KeyInput::End);
        field.handle_key(KeyInput::Left);
        field.handle_key(KeyInput::Backspace);
        assert_eq!(field.value(), "c");
        assert_eq!(field.cursor(), 0);

        field.handle_key(KeyInput::Right);
        field.handle_key(KeyInput::Right);
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn multibyte_text_edits_by_char() {
        let mut field = TextField::new(FieldKind::Comment, "Add a comment");
        type_text(&mut field, "héllo");
        field.handle_key(KeyInput::Left);
        field.handle_key(KeyInput::Left);
        field.handle_key(KeyInput::Left);
        field.handle_key(KeyInput::Backspace);
        assert_eq!(field.value(), "hllo");
    }

    #[test]
    fn password_renders_masked() {
        let mut field = TextField::new(FieldKind::Password, "Password");
        field.insert_str("secret");
        assert_eq!(field.display_value(), "••••••");
        assert_eq!(field.value(), "secret");
    }

    #[test]
    fn error_hidden_until_blur() {
        let mut field = TextField::new(FieldKind::Email, "Email");
        field.set_error(Some("Email is required".into()));
        assert_eq!(field.visible_error(), None);

        field.blur();
        assert_eq!(field.visible_error(), Some("Email is required"));
    }

    #[test]
    fn form_keys_are_not_consumed() {
        let mut field = TextField::new(FieldKind::Name, "Name");
        assert!(!field.handle_key(KeyInput::Enter));
        assert!(!field.handle_key(KeyInput::Tab));
        assert!(!field.handle_key(KeyInput::Esc));
    }
}
