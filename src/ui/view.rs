use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    enums::{Color, Font},
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use crate::app::domain::format::{FormatState, Rgb};
use crate::app::domain::messages::Message;
use crate::app::domain::view::EditorView;

/// `EditorView` backed by the main window's `TextEditor`.
///
/// User edits reach the controller as `Message::BufferModified` from the
/// buffer's modify callback. Programmatic loads through `set_text` raise the
/// `loading` flag so they are not reported as edits.
pub struct FltkView {
    editor: TextEditor,
    buffer: TextBuffer,
    window: Window,
    loading: Rc<Cell<bool>>,
}

impl FltkView {
    pub fn new(mut editor: TextEditor, window: Window, sender: Sender<Message>) -> Self {
        let mut buffer = TextBuffer::default();
        let loading = Rc::new(Cell::new(false));

        let suppressed = loading.clone();
        buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if (inserted > 0 || deleted > 0) && !suppressed.get() {
                sender.send(Message::BufferModified);
            }
        });
        editor.set_buffer(buffer.clone());

        Self {
            editor,
            buffer,
            window,
            loading,
        }
    }

    fn has_selection(&self) -> bool {
        self.buffer.selection_position().is_some()
    }
}

impl EditorView for FltkView {
    fn text(&self) -> String {
        self.buffer.text()
    }

    fn set_text(&mut self, text: &str) {
        self.loading.set(true);
        self.buffer.set_text(text);
        self.loading.set(false);
        self.editor.set_insert_position(0);
        self.editor.show_insert_position();
    }

    fn undo(&mut self) -> bool {
        let before = self.buffer.text();
        let _ = self.editor.undo();
        self.buffer.text() != before
    }

    fn cut(&mut self) -> bool {
        let had_selection = self.has_selection();
        self.editor.cut();
        had_selection
    }

    fn copy(&mut self) {
        self.editor.copy();
    }

    fn paste(&mut self) -> bool {
        // The clipboard arrives as a later FL_PASTE event; the modify
        // callback reports the edit.
        self.editor.paste();
        false
    }

    fn delete_selection(&mut self) -> bool {
        if !self.has_selection() {
            return false;
        }
        self.buffer.remove_selection();
        true
    }

    fn apply_format(&mut self, format: &FormatState) {
        let Rgb { r, g, b } = format.color;
        self.editor.set_text_font(Font::by_name(&format.font_family));
        self.editor.set_text_size(format.font_size.get() as i32);
        self.editor.set_text_color(Color::from_rgb(r, g, b));
        self.editor.redraw();
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_label(title);
    }
}
