//! Internal clipboard slot and selection editing.
//!
//! Cut/copy/paste go through a single in-process string slot owned by the
//! session; the system clipboard is never touched. Offsets are character
//! indices, matching what the text widget reports.

/// A selection as a start offset and length, both in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub len: usize,
}

impl Selection {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// An empty selection (a plain caret) at `at`.
    pub fn caret(at: usize) -> Self {
        Self { start: at, len: 0 }
    }

    /// Builds a selection from two ends in either order.
    pub fn between(a: usize, b: usize) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Self {
            start,
            len: end - start,
        }
    }

    /// Covers the whole of `text`.
    pub fn all(text: &str) -> Self {
        Self {
            start: 0,
            len: text.chars().count(),
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Shrinks the selection so it lies inside `text`.
    pub fn clamped(self, text: &str) -> Self {
        let total = text.chars().count();
        let start = self.start.min(total);
        let end = self.end().min(total);
        Self {
            start,
            len: end - start,
        }
    }

    /// The selected slice of `text`.
    pub fn text_in<'a>(&self, text: &'a str) -> &'a str {
        let sel = self.clamped(text);
        &text[byte_offset(text, sel.start)..byte_offset(text, sel.end())]
    }
}

/// Converts a character index to a byte offset, clamped to the text length.
pub fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(i, _)| i)
}

/// The single shared cut/copy/paste slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardSlot {
    value: Option<String>,
}

impl ClipboardSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored value, if anything has been copied yet.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Stores the selected text. An empty selection stores an empty string.
    pub fn copy(&mut self, text: &str, selection: Selection) {
        self.value = Some(selection.text_in(text).to_string());
    }

    /// Stores the selected text and removes it from `text`.
    ///
    /// Returns the caret left behind at the selection start.
    pub fn cut(&mut self, text: &mut String, selection: Selection) -> Selection {
        let sel = selection.clamped(text);
        self.copy(text, sel);
        let start = byte_offset(text, sel.start);
        let end = byte_offset(text, sel.end());
        text.replace_range(start..end, "");
        Selection::caret(sel.start)
    }

    /// Inserts the stored value at `caret`.
    ///
    /// Returns the caret after the inserted text, or `None` if nothing has
    /// been copied yet.
    pub fn paste(&self, text: &mut String, caret: usize) -> Option<usize> {
        let value = self.value.as_deref()?;
        let caret = caret.min(text.chars().count());
        text.insert_str(byte_offset(text, caret), value);
        Some(caret + value.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_between_orders_ends() {
        assert_eq!(Selection::between(7, 3), Selection::new(3, 4));
        assert_eq!(Selection::between(3, 7), Selection::new(3, 4));
    }

    #[test]
    fn test_selection_all() {
        let sel = Selection::all("héllo");
        assert_eq!(sel, Selection::new(0, 5));
    }

    #[test]
    fn test_selection_clamped() {
        assert_eq!(Selection::new(3, 10).clamped("hello"), Selection::new(3, 2));
        assert_eq!(Selection::new(9, 1).clamped("hello"), Selection::new(5, 0));
    }

    #[test]
    fn test_text_in_uses_char_offsets() {
        let text = "añb ñ";
        assert_eq!(Selection::new(1, 2).text_in(text), "ñb");
        assert_eq!(Selection::new(4, 1).text_in(text), "ñ");
    }

    #[test]
    fn test_copy_stores_selection() {
        let mut slot = ClipboardSlot::new();
        slot.copy("hello world", Selection::new(6, 5));
        assert_eq!(slot.value(), Some("world"));
    }

    #[test]
    fn test_copy_empty_selection_stores_empty_string() {
        let mut slot = ClipboardSlot::new();
        slot.copy("hello", Selection::caret(2));
        assert_eq!(slot.value(), Some(""));
    }

    #[test]
    fn test_cut_removes_selection() {
        let mut slot = ClipboardSlot::new();
        let mut text = "hello world".to_string();
        let caret = slot.cut(&mut text, Selection::new(5, 6));
        assert_eq!(text, "hello");
        assert_eq!(slot.value(), Some(" world"));
        assert_eq!(caret, Selection::caret(5));
    }

    #[test]
    fn test_cut_multibyte() {
        let mut slot = ClipboardSlot::new();
        let mut text = "naïve café".to_string();
        slot.cut(&mut text, Selection::new(2, 1));
        assert_eq!(text, "nave café");
        assert_eq!(slot.value(), Some("ï"));
    }

    #[test]
    fn test_paste_with_empty_slot_is_noop() {
        let slot = ClipboardSlot::new();
        let mut text = "abc".to_string();
        assert_eq!(slot.paste(&mut text, 1), None);
        assert_eq!(text, "abc");
    }

    #[test]
    fn test_paste_inserts_and_advances_caret() {
        let mut slot = ClipboardSlot::new();
        slot.copy("XYZ", Selection::new(0, 2));
        let mut text = "abc".to_string();
        assert_eq!(slot.paste(&mut text, 1), Some(3));
        assert_eq!(text, "aXYbc");
    }

    #[test]
    fn test_paste_past_end_appends() {
        let mut slot = ClipboardSlot::new();
        slot.copy("!", Selection::all("!"));
        let mut text = "hi".to_string();
        assert_eq!(slot.paste(&mut text, 99), Some(3));
        assert_eq!(text, "hi!");
    }

    #[test]
    fn test_cut_then_paste_round_trip() {
        let mut slot = ClipboardSlot::new();
        let mut text = "one two three".to_string();
        let caret = slot.cut(&mut text, Selection::new(4, 4));
        assert_eq!(text, "one three");
        slot.paste(&mut text, caret.start);
        assert_eq!(text, "one two three");
    }
}
