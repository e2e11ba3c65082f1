//! The editor session controller.
//!
//! Owns the document bookkeeping and the format state, and turns `Message`s
//! into view updates, dialogs and file I/O. Everything runs synchronously on
//! the UI thread.

use std::path::{Path, PathBuf};

use crate::app::domain::document::Document;
use crate::app::domain::format::FormatState;
use crate::app::domain::messages::Message;
use crate::app::domain::view::{EditorView, Prompter, SaveChoice};
use crate::app::services::file_io::{WriteMode, read_document, write_document};
use crate::app::services::text_ops::with_default_extension;

/// What the event loop should do after a message was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct EditorController<V, P> {
    view: V,
    prompter: P,
    document: Document,
    format: FormatState,
}

impl<V: EditorView, P: Prompter> EditorController<V, P> {
    pub fn new(mut view: V, prompter: P, format: FormatState) -> Self {
        let document = Document::new_untitled();
        view.apply_format(&format);
        view.set_title(&document.title());
        Self {
            view,
            prompter,
            document,
            format,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn format(&self) -> &FormatState {
        &self.format
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }

    pub fn dispatch(&mut self, message: Message) -> Flow {
        log::debug!("Handling {:?}", message);
        match message {
            Message::FileNew => {
                self.file_new();
            }
            Message::FileOpen => {
                self.file_open();
            }
            Message::FileSave => {
                self.file_save();
            }
            Message::FileSaveAs => {
                self.file_save_as();
            }
            Message::FileExit | Message::WindowClose => {
                if self.request_exit() {
                    return Flow::Quit;
                }
            }
            Message::EditUndo => {
                self.undo();
            }
            Message::EditCut => self.cut(),
            Message::EditCopy => self.copy(),
            Message::EditPaste => self.paste(),
            Message::EditDelete => {
                self.delete();
            }
            Message::FormatFontFamily => {
                self.change_font_family();
            }
            Message::FormatFontSize => {
                self.change_font_size();
            }
            Message::FormatFontColor => {
                self.change_font_color();
            }
            Message::ShowAbout => self.prompter.show_about(),
            Message::BufferModified => self.mark_dirty(),
        }
        Flow::Continue
    }

    /// Called whenever the buffer content changes.
    pub fn mark_dirty(&mut self) {
        if self.document.mark_dirty() {
            self.refresh_title();
        }
    }

    // --- File operations ---

    /// Returns `false` if the user backed out.
    pub fn file_new(&mut self) -> bool {
        if !self.resolve_unsaved_changes() {
            return false;
        }
        self.view.set_text("");
        self.document.reset();
        self.refresh_title();
        log::info!("Started a new document");
        true
    }

    /// Returns `true` if a file was loaded.
    pub fn file_open(&mut self) -> bool {
        if !self.resolve_unsaved_changes() {
            return false;
        }
        match self.prompter.choose_open_path() {
            Some(path) => self.open_path(path),
            None => false,
        }
    }

    /// Load `path` into the buffer without asking anything first.
    ///
    /// On failure the buffer, path and dirty flag are left as they were.
    pub fn open_path(&mut self, path: PathBuf) -> bool {
        match read_document(&path) {
            Ok(content) => {
                self.view.set_text(&content);
                log::info!("Opened {} ({} bytes)", path.display(), content.len());
                self.document.attach(path);
                self.refresh_title();
                true
            }
            Err(e) => {
                log::warn!("{}", e);
                self.prompter
                    .show_error("Open Error", &format!("Failed to open file: {}", e));
                false
            }
        }
    }

    /// Returns `true` if the buffer reached disk.
    pub fn file_save(&mut self) -> bool {
        match self.document.file_path().map(Path::to_path_buf) {
            Some(path) => self.write_to(path, WriteMode::TrimTrailingNewline),
            None => self.file_save_as(),
        }
    }

    /// Returns `true` if the buffer reached disk.
    pub fn file_save_as(&mut self) -> bool {
        match self.prompter.choose_save_path() {
            Some(path) => self.write_to(with_default_extension(path), WriteMode::Verbatim),
            None => false,
        }
    }

    /// Returns `true` if the application may quit.
    pub fn request_exit(&mut self) -> bool {
        let proceed = self.resolve_unsaved_changes();
        if proceed {
            log::info!("Exiting");
        }
        proceed
    }

    fn write_to(&mut self, path: PathBuf, mode: WriteMode) -> bool {
        let text = self.view.text();
        match write_document(&path, &text, mode) {
            Ok(()) => {
                log::info!("Saved {}", path.display());
                self.document.attach(path);
                self.refresh_title();
                true
            }
            Err(e) => {
                log::warn!("{}", e);
                self.prompter
                    .show_error("Save Error", &format!("Failed to save file: {}", e));
                false
            }
        }
    }

    /// Save-confirmation flow. Returns `true` when the caller may go on with
    /// a destructive action. Only an explicit Cancel holds the caller back,
    /// even when the chosen save did not reach disk.
    fn resolve_unsaved_changes(&mut self) -> bool {
        if !self.document.is_dirty() {
            return true;
        }
        match self.prompter.confirm_save(&self.document) {
            SaveChoice::Save => {
                if !self.file_save() {
                    log::warn!("Unsaved changes were not written, continuing");
                }
                true
            }
            SaveChoice::Discard => {
                log::info!("Discarding unsaved changes");
                true
            }
            SaveChoice::Cancel => false,
        }
    }

    // --- Edit ---

    /// Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.view.undo();
        if undone {
            self.mark_dirty();
        }
        undone
    }

    pub fn cut(&mut self) {
        if self.view.cut() {
            self.mark_dirty();
        }
    }

    pub fn copy(&mut self) {
        self.view.copy();
    }

    pub fn paste(&mut self) {
        if self.view.paste() {
            self.mark_dirty();
        }
    }

    /// Returns `false` (and changes nothing) without an active selection.
    pub fn delete(&mut self) -> bool {
        let deleted = self.view.delete_selection();
        if deleted {
            self.mark_dirty();
        }
        deleted
    }

    // --- Format ---

    pub fn change_font_family(&mut self) -> bool {
        let Some(family) = self.prompter.choose_font_family(&self.format.font_family) else {
            return false;
        };
        let family = family.trim();
        if family.is_empty() {
            return false;
        }
        self.format.font_family = family.to_string();
        self.apply_format();
        true
    }

    pub fn change_font_size(&mut self) -> bool {
        match self.prompter.choose_font_size(self.format.font_size) {
            Some(size) => {
                self.format.font_size = size;
                self.apply_format();
                true
            }
            None => false,
        }
    }

    pub fn change_font_color(&mut self) -> bool {
        match self.prompter.choose_color(self.format.color) {
            Some(color) => {
                self.format.color = color;
                self.apply_format();
                true
            }
            None => false,
        }
    }

    fn apply_format(&mut self) {
        log::debug!(
            "Applying font {} {}pt {}",
            self.format.font_family,
            self.format.font_size,
            self.format.color
        );
        self.view.apply_format(&self.format);
    }

    fn refresh_title(&mut self) {
        self.view.set_title(&self.document.title());
    }
}
