use fltk::dialog;

/// FLTK's chooser adds an "All Files (*)" entry next to this pattern.
pub const TEXT_FILES_PATTERN: &str = "*.txt";

pub fn native_open_dialog(dir: Option<&str>) -> Option<String> {
    dialog::file_chooser("Open File", TEXT_FILES_PATTERN, dir.unwrap_or("."), false)
}

pub fn native_save_dialog(dir: Option<&str>) -> Option<String> {
    dialog::file_chooser("Save As", TEXT_FILES_PATTERN, dir.unwrap_or("."), false)
}
