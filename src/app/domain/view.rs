//! Seams between the editor controller and whatever draws it.
//!
//! `EditorView` is the text widget plus window chrome, `Prompter` is the set of
//! modal dialogs. The FLTK implementations live in `crate::ui`; the headless
//! `MemoryView` lives in `crate::app::infrastructure::memory_view`.

use std::path::PathBuf;

use super::document::Document;
use super::format::{FontSize, FormatState, Rgb};

/// Answer to "Do you want to save changes?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    Save,
    Discard,
    Cancel,
}

pub trait EditorView {
    fn text(&self) -> String;

    /// Replace the whole buffer. Must not be reported back as a user edit.
    fn set_text(&mut self, text: &str);

    /// Returns `false` when there was nothing to undo.
    fn undo(&mut self) -> bool;

    /// Returns `true` if the buffer changed as a direct result of the call.
    fn cut(&mut self) -> bool;

    fn copy(&mut self);

    /// Returns `true` if the buffer changed as a direct result of the call.
    /// Toolkits that deliver clipboard contents asynchronously return `false`
    /// and report the edit through their modify notification instead.
    fn paste(&mut self) -> bool;

    /// Remove the active selection. Returns `false` when nothing was selected.
    fn delete_selection(&mut self) -> bool;

    fn apply_format(&mut self, format: &FormatState);

    fn set_title(&mut self, title: &str);
}

pub trait Prompter {
    fn confirm_save(&mut self, document: &Document) -> SaveChoice;

    fn choose_open_path(&mut self) -> Option<PathBuf>;

    fn choose_save_path(&mut self) -> Option<PathBuf>;

    fn choose_font_family(&mut self, current: &str) -> Option<String>;

    fn choose_font_size(&mut self, current: FontSize) -> Option<FontSize>;

    fn choose_color(&mut self, current: Rgb) -> Option<Rgb>;

    fn show_error(&mut self, title: &str, message: &str);

    fn show_about(&mut self);
}
