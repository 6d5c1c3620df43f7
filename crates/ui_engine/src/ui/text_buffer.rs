//! Text edit buffer
//!
//! Growable UTF-8 storage with a cursor and an optional selection. Buffers
//! live in the context's persistent state table and survive across frames;
//! the transient widget tree only refers to them by identity.
//!
//! All offsets are byte offsets that always sit on `char` boundaries within
//! `[0, len]`.

use std::ops::Range;
use std::str::Utf8Error;

/// Persistent text storage for a text field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    storage: String,
    cursor: usize,
    selection: Option<Range<usize>>,
}

impl TextBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `value` with the cursor at the end
    pub fn with_text(value: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set(value);
        buffer
    }

    /// Current content
    pub fn get(&self) -> String {
        self.storage.clone()
    }

    /// Borrow the current content
    pub fn as_str(&self) -> &str {
        &self.storage
    }

    /// Replace the content with `value`
    ///
    /// The cursor moves to the end and the selection is cleared.
    pub fn set(&mut self, value: &str) {
        self.storage.clear();
        if !value.is_empty() {
            self.storage.push_str(value);
        }
        self.cursor = self.storage.len();
        self.selection = None;
    }

    /// Replace the content with raw bytes that must be valid UTF-8
    ///
    /// Invalid input is rejected and the buffer is left untouched.
    pub fn set_bytes(&mut self, bytes: &[u8]) -> Result<(), Utf8Error> {
        let value = std::str::from_utf8(bytes)?;
        self.set(value);
        Ok(())
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Buffer holds no text
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Number of characters
    pub fn char_count(&self) -> usize {
        self.storage.chars().count()
    }

    /// Cursor byte offset
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selected byte range, if any
    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// Selected text, if any
    pub fn selected_text(&self) -> Option<&str> {
        self.selection.as_ref().map(|range| &self.storage[range.clone()])
    }

    // ---------------------------------------------------------------------
    // Edit path used by the text field while it is being composed
    // ---------------------------------------------------------------------

    fn floor_boundary(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.storage.len());
        while !self.storage.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }

    fn prev_boundary(&self, offset: usize) -> usize {
        self.storage[..offset]
            .char_indices()
            .next_back()
            .map_or(0, |(index, _)| index)
    }

    fn next_boundary(&self, offset: usize) -> usize {
        self.storage[offset..]
            .chars()
            .next()
            .map_or(offset, |c| offset + c.len_utf8())
    }

    /// Remove the selected text, leaving the cursor at its start
    fn delete_selection(&mut self) -> bool {
        match self.selection.take() {
            Some(range) if !range.is_empty() => {
                self.storage.replace_range(range.clone(), "");
                self.cursor = range.start;
                true
            }
            _ => false,
        }
    }

    /// Place the cursor, snapping down to a character boundary
    pub(crate) fn set_cursor(&mut self, offset: usize) {
        self.cursor = self.floor_boundary(offset);
        self.selection = None;
    }

    /// Select a byte range, snapped to character boundaries; the cursor moves to its end
    pub(crate) fn select(&mut self, range: Range<usize>) {
        let start = self.floor_boundary(range.start);
        let end = self.floor_boundary(range.end);
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        self.cursor = end;
        self.selection = (start != end).then_some(start..end);
    }

    /// Select the whole content
    pub(crate) fn select_all(&mut self) {
        self.select(0..self.storage.len());
    }

    /// Insert text at the cursor, replacing the selection
    ///
    /// With `max_chars`, input is truncated so the content never exceeds that
    /// many characters. Returns `true` when the content changed.
    pub(crate) fn insert(&mut self, text: &str, max_chars: Option<usize>) -> bool {
        let removed = self.delete_selection();
        let text = match max_chars {
            Some(limit) => {
                let room = limit.saturating_sub(self.char_count());
                match text.char_indices().nth(room) {
                    Some((cut, _)) => &text[..cut],
                    None => text,
                }
            }
            None => text,
        };
        if text.is_empty() {
            return removed;
        }
        self.storage.insert_str(self.cursor, text);
        self.cursor += text.len();
        true
    }

    /// Delete the selection or the character before the cursor
    pub(crate) fn delete_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        let start = self.prev_boundary(self.cursor);
        self.storage.replace_range(start..self.cursor, "");
        self.cursor = start;
        true
    }

    /// Delete the selection or the character after the cursor
    pub(crate) fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor >= self.storage.len() {
            return false;
        }
        let end = self.next_boundary(self.cursor);
        self.storage.replace_range(self.cursor..end, "");
        true
    }

    /// Move the cursor one character left, collapsing any selection to its start
    pub(crate) fn move_left(&mut self) {
        match self.selection.take() {
            Some(range) => self.cursor = range.start,
            None => self.cursor = self.prev_boundary(self.cursor),
        }
    }

    /// Move the cursor one character right, collapsing any selection to its end
    pub(crate) fn move_right(&mut self) {
        match self.selection.take() {
            Some(range) => self.cursor = range.end,
            None => self.cursor = self.next_boundary(self.cursor),
        }
    }

    /// Move the cursor to the start
    pub(crate) fn move_home(&mut self) {
        self.set_cursor(0);
    }

    /// Move the cursor to the end
    pub(crate) fn move_end(&mut self) {
        self.set_cursor(self.storage.len());
    }
}
