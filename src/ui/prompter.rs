use std::path::{Path, PathBuf};

use fltk::dialog::{self, ColorMode};

use super::dialogs::about::show_about_dialog;
use super::dialogs::font_family::show_font_family_dialog;
use super::dialogs::font_size::show_font_size_dialog;
use super::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::app::domain::document::Document;
use crate::app::domain::format::{FontSize, Rgb};
use crate::app::domain::view::{Prompter, SaveChoice};
use crate::app::services::text_ops::UNTITLED;

/// `Prompter` backed by FLTK's modal dialogs.
#[derive(Debug, Default)]
pub struct FltkPrompter {
    /// Last directory used in a file open/save dialog.
    last_directory: Option<String>,
}

impl FltkPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    fn remember_directory(&mut self, path: &str) {
        if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_directory = Some(parent.to_string_lossy().to_string());
        }
    }
}

impl Prompter for FltkPrompter {
    fn confirm_save(&mut self, document: &Document) -> SaveChoice {
        let name = document
            .file_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| UNTITLED.to_string());
        let choice = dialog::choice2_default(
            &format!("Do you want to save changes to {}?", name),
            "Save",
            "Discard",
            "Cancel",
        );
        match choice {
            Some(0) => SaveChoice::Save,
            Some(1) => SaveChoice::Discard,
            _ => SaveChoice::Cancel,
        }
    }

    fn choose_open_path(&mut self) -> Option<PathBuf> {
        let path = native_open_dialog(self.last_directory.as_deref())?;
        self.remember_directory(&path);
        Some(PathBuf::from(path))
    }

    fn choose_save_path(&mut self) -> Option<PathBuf> {
        let path = native_save_dialog(self.last_directory.as_deref())?;
        self.remember_directory(&path);
        Some(PathBuf::from(path))
    }

    fn choose_font_family(&mut self, current: &str) -> Option<String> {
        show_font_family_dialog(current)
    }

    fn choose_font_size(&mut self, current: FontSize) -> Option<FontSize> {
        show_font_size_dialog(current)
    }

    fn choose_color(&mut self, _current: Rgb) -> Option<Rgb> {
        dialog::color_chooser("Choose font color", ColorMode::Byte)
            .map(|(r, g, b)| Rgb::new(r, g, b))
    }

    fn show_error(&mut self, title: &str, message: &str) {
        dialog::message_title(title);
        dialog::alert_default(message);
    }

    fn show_about(&mut self) {
        show_about_dialog();
    }
}
