//! An `EditorView` that keeps everything in memory.
//!
//! Behaves like a plain text widget with a private clipboard and its own
//! bounded undo history. Used to drive the controller without a display.

use std::ops::Range;

use crate::app::domain::format::FormatState;
use crate::app::domain::view::EditorView;
use crate::app::services::history::{Edit, EditHistory};

#[derive(Debug, Default)]
pub struct MemoryView {
    text: String,
    cursor: usize,
    selection: Option<Range<usize>>,
    clipboard: String,
    history: EditHistory,
    title: String,
    format: Option<FormatState>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Last format applied by the controller, if any.
    pub fn format(&self) -> Option<&FormatState> {
        self.format.as_ref()
    }

    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }

    pub fn set_clipboard(&mut self, text: &str) {
        self.clipboard = text.to_string();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clearing the selection. Out-of-range or mid-character
    /// positions snap back to the nearest preceding character boundary.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = self.snap(pos);
        self.selection = None;
    }

    /// Select a byte range. Returns `false` (and selects nothing) if the range
    /// is empty or does not fall on character boundaries.
    pub fn select(&mut self, range: Range<usize>) -> bool {
        let valid = range.start < range.end
            && range.end <= self.text.len()
            && self.text.is_char_boundary(range.start)
            && self.text.is_char_boundary(range.end);
        if valid {
            self.cursor = range.end;
            self.selection = Some(range);
        } else {
            self.selection = None;
        }
        valid
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selection.clone().map(|r| &self.text[r])
    }

    /// Type `text` at the cursor, replacing the selection if there is one.
    pub fn insert(&mut self, text: &str) {
        self.remove_selection();
        if text.is_empty() {
            return;
        }
        let pos = self.cursor;
        self.text.insert_str(pos, text);
        self.cursor = pos + text.len();
        self.history.push(Edit::Insert { pos, text: text.to_string() });
    }

    /// Delete the character before the cursor. Returns `false` at the start.
    pub fn backspace(&mut self) -> bool {
        if self.remove_selection() {
            return true;
        }
        let Some(ch) = self.text[..self.cursor].chars().next_back() else {
            return false;
        };
        let start = self.cursor - ch.len_utf8();
        self.delete_range(start..self.cursor);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    fn snap(&self, pos: usize) -> usize {
        let mut pos = pos.min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn delete_range(&mut self, range: Range<usize>) {
        let removed: String = self.text.drain(range.clone()).collect();
        self.cursor = range.start;
        self.history.push(Edit::Delete { pos: range.start, text: removed });
    }

    fn remove_selection(&mut self) -> bool {
        match self.selection.take() {
            Some(range) => {
                self.delete_range(range);
                true
            }
            None => false,
        }
    }
}

impl EditorView for MemoryView {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = 0;
        self.selection = None;
        self.history.clear();
    }

    fn undo(&mut self) -> bool {
        let Some(edit) = self.history.pop() else {
            return false;
        };
        match edit {
            Edit::Insert { pos, text } => {
                self.text.replace_range(pos..pos + text.len(), "");
                self.cursor = pos;
            }
            Edit::Delete { pos, text } => {
                self.text.insert_str(pos, &text);
                self.cursor = pos + text.len();
            }
        }
        self.selection = None;
        true
    }

    fn cut(&mut self) -> bool {
        let Some(selected) = self.selected_text().map(str::to_string) else {
            return false;
        };
        self.clipboard = selected;
        self.remove_selection()
    }

    fn copy(&mut self) {
        if let Some(selected) = self.selected_text().map(str::to_string) {
            self.clipboard = selected;
        }
    }

    fn paste(&mut self) -> bool {
        if self.clipboard.is_empty() {
            return false;
        }
        let clip = self.clipboard.clone();
        self.insert(&clip);
        true
    }

    fn delete_selection(&mut self) -> bool {
        self.remove_selection()
    }

    fn apply_format(&mut self, format: &FormatState) {
        self.format = Some(format.clone());
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
}
