//! Segmented one-time-passcode input.
//!
//! A row of `N` single-digit cells over a code value owned by the host form.
//! The widget is a controlled view: it never stores the code itself. Every
//! event reads the latest value from the host through [`CodeInputHost`],
//! computes the next value, and reports it back immediately. The only state
//! the widget owns is which cell has focus.
//!
//! # Events
//!
//! - [`SegmentedCodeInput::on_change_text`]: a cell's text changed. Platforms
//!   deliver a whole paste payload to the focused cell, so this covers typing,
//!   deleting and pasting.
//! - [`SegmentedCodeInput::on_key_press`]: a key was pressed in a cell. Only
//!   Backspace on an empty cell matters, since no text change fires there.
//! - [`SegmentedCodeInput::on_focus`]: the user moved into a cell directly.
//!
//! # Completion
//!
//! The host is told once per transition from fewer than `N` digits to exactly
//! `N`. Leaving the complete state is silent; re-completing fires again.

use crate::KeyInput;

/// Cell count used by the passcode screen.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Keep only ASCII digits, in their original order.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Host side of the controlled code input.
///
/// The host owns the canonical value. The widget reads it at the start of
/// every event, so rapid input never works from a stale copy.
pub trait CodeInputHost {
    /// Current canonical value.
    fn value(&self) -> &str;

    /// Called with the new full value after every text change.
    fn on_value_change(&mut self, value: &str);

    /// Called when the value reaches full length.
    fn on_complete(&mut self, _value: &str) {}
}

/// Keys the widget distinguishes in [`SegmentedCodeInput::on_key_press`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKey {
    /// Backspace.
    Backspace,
    /// Anything else.
    Other,
}

/// Focus control for one cell.
///
/// Opaque to callers: the only way to move focus is
/// [`FocusHandles::request_focus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusHandle {
    cell: usize,
    focused: bool,
}

impl FocusHandle {
    /// Index of the cell this handle controls.
    pub fn cell(&self) -> usize {
        self.cell
    }

    /// Whether this cell currently has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

/// One focus handle per cell, exactly one of them focused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusHandles {
    handles: Vec<FocusHandle>,
    focused: usize,
}

impl FocusHandles {
    fn new(count: usize) -> Self {
        let handles =
            (0..count).map(|cell| FocusHandle { cell, focused: cell == 0 }).collect();
        Self { handles, focused: 0 }
    }

    /// Move focus to `cell`. Out-of-range requests are ignored.
    ///
    /// Returns whether focus is now on `cell`.
    pub fn request_focus(&mut self, cell: usize) -> bool {
        if cell >= self.handles.len() {
            return false;
        }
        if let Some(previous) = self.handles.get_mut(self.focused) {
            previous.focused = false;
        }
        if let Some(next) = self.handles.get_mut(cell) {
            next.focused = true;
        }
        self.focused = cell;
        true
    }

    /// Index of the focused cell.
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Iterate handles in cell order.
    pub fn iter(&self) -> impl Iterator<Item = &FocusHandle> {
        self.handles.iter()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Always false; a code input has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Segmented code input widget.
#[derive(Debug, Clone)]
pub struct SegmentedCodeInput {
    length: usize,
    focus: FocusHandles,
    error: Option<String>,
}

impl Default for SegmentedCodeInput {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl SegmentedCodeInput {
    /// Create a widget with `length` cells (at least one), focus on cell 0.
    pub fn new(length: usize) -> Self {
        let length = length.max(1);
        Self { length, focus: FocusHandles::new(length), error: None }
    }

    /// Number of cells.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Index of the focused cell.
    pub fn focused_cell(&self) -> usize {
        self.focus.focused()
    }

    /// Per-cell focus handles, for rendering.
    pub fn handles(&self) -> &FocusHandles {
        &self.focus
    }

    /// Whether `value` fills every cell.
    pub fn is_complete(&self, value: &str) -> bool {
        value.chars().count() == self.length
    }

    /// Error message shown under the cells. Passive display state only.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the displayed error message.
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Cell contents for `value`, padded with `None` to the cell count.
    pub fn cells(&self, value: &str) -> Vec<Option<char>> {
        let mut chars = value.chars();
        (0..self.length).map(|_| chars.next()).collect()
    }

    /// Announce an initial value that is already complete.
    ///
    /// Call once when the host first shows the widget.
    pub fn mount<H: CodeInputHost + ?Sized>(&mut self, host: &mut H) {
        if self.is_complete(host.value()) {
            let value = host.value().to_owned();
            host.on_complete(&value);
        }
    }

    /// Focus back on the first cell and drop any error.
    pub fn reset(&mut self) {
        self.focus.request_focus(0);
        self.error = None;
    }

    /// Handle a text change delivered to `cell`.
    ///
    /// `raw` is sanitized first. More than one digit is a paste and replaces
    /// the whole value; exactly one digit replaces the cell; nothing left is a
    /// deletion. Returns the new value, which has also been reported to the
    /// host.
    pub fn on_change_text<H: CodeInputHost + ?Sized>(
        &mut self,
        raw: &str,
        cell: usize,
        host: &mut H,
    ) -> String {
        let cell = cell.min(self.length - 1);
        let digits = sanitize(raw);
        let previous = host.value().to_owned();

        let mut chars = digits.chars();
        let next = match (chars.next(), chars.next()) {
            (Some(_), Some(_)) => {
                let pasted: String = digits.chars().take(self.length).collect();
                let pasted_len = pasted.chars().count();
                self.focus.request_focus(pasted_len.min(self.length - 1));
                pasted
            },
            (Some(digit), None) => {
                let updated = replace_cell(&previous, cell, digit, self.length);
                if cell < self.length - 1 {
                    self.focus.request_focus(cell + 1);
                }
                updated
            },
            (None, _) => {
                let updated = clear_cell(&previous, cell);
                if cell > 0 {
                    self.focus.request_focus(cell - 1);
                }
                updated
            },
        };

        host.on_value_change(&next);
        if !self.is_complete(&previous) && self.is_complete(&next) {
            tracing::debug!(length = self.length, "code input complete");
            host.on_complete(&next);
        }
        next
    }

    /// Handle a key press in `cell`.
    ///
    /// Backspace in an empty cell moves focus back one cell without touching
    /// the value. Everything else is left to [`Self::on_change_text`].
    pub fn on_key_press<H: CodeInputHost + ?Sized>(&mut self, key: CellKey, cell: usize, host: &H) {
        let empty = host.value().chars().nth(cell).is_none();
        if key == CellKey::Backspace && empty && cell > 0 {
            self.focus.request_focus(cell - 1);
        }
    }

    /// The user moved directly into `cell`.
    pub fn on_focus(&mut self, cell: usize) {
        self.focus.request_focus(cell);
    }

    /// Translate a terminal key into cell events on the focused cell.
    ///
    /// Emulates a number-pad keyboard: digits are typed, other characters
    /// are ignored. Backspace fires the key press first and then, if the cell
    /// held a digit, the resulting empty text change. Arrows and Home/End move
    /// focus. Returns whether the key was consumed.
    pub fn handle_key<H: CodeInputHost + ?Sized>(&mut self, key: KeyInput, host: &mut H) -> bool {
        let cell = self.focused_cell();
        if let Some(digit) = key.digit() {
            let mut buf = [0u8; 4];
            self.on_change_text(digit.encode_utf8(&mut buf), cell, host);
            return true;
        }
        match key {
            KeyInput::Char(_) => true,
            KeyInput::Backspace => {
                let filled = host.value().chars().nth(cell).is_some();
                self.on_key_press(CellKey::Backspace, cell, host);
                if filled {
                    self.on_change_text("", cell, host);
                }
                true
            },
            KeyInput::Left => {
                self.on_focus(cell.saturating_sub(1));
                true
            },
            KeyInput::Right => {
                self.on_focus((cell + 1).min(self.length - 1));
                true
            },
            KeyInput::Home => {
                self.on_focus(0);
                true
            },
            KeyInput::End => {
                self.on_focus(self.length - 1);
                true
            },
            _ => false,
        }
    }
}

/// Put `digit` at `cell`, or append it when `cell` is past the end.
fn replace_cell(value: &str, cell: usize, digit: char, length: usize) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    match chars.get_mut(cell) {
        Some(slot) => *slot = digit,
        None => chars.push(digit),
    }
    chars.into_iter().take(length).collect()
}

/// Remove the digit at `cell`; later digits close the gap.
fn clear_cell(value: &str, cell: usize) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    if cell < chars.len() {
        chars.remove(cell);
    }
    chars.into_iter().collect()
}
