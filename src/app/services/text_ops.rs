use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "FerrisNote";
pub const UNTITLED: &str = "Untitled";
pub const DEFAULT_EXTENSION: &str = "txt";

/// Build the window title for a document
///
/// `<path> - FerrisNote`, or `Untitled - FerrisNote` without a path, with a
/// leading `*` while there are unsaved changes.
pub fn window_title(path: Option<&Path>, dirty: bool) -> String {
    let prefix = if dirty { "*" } else { "" };
    match path {
        Some(path) => format!("{}{} - {}", prefix, path.display(), APP_NAME),
        None => format!("{}{} - {}", prefix, UNTITLED, APP_NAME),
    }
}

/// Strip exactly one trailing line break (`\n` or `\r\n`).
pub fn trim_trailing_newline(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

/// Append the default `.txt` extension when the chosen name has none.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_untitled() {
        assert_eq!(window_title(None, false), "Untitled - FerrisNote");
        assert_eq!(window_title(None, true), "*Untitled - FerrisNote");
    }

    #[test]
    fn test_title_with_path() {
        let path = Path::new("/home/user/notes.txt");
        assert_eq!(window_title(Some(path), false), "/home/user/notes.txt - FerrisNote");
        assert_eq!(window_title(Some(path), true), "*/home/user/notes.txt - FerrisNote");
    }

    #[test]
    fn test_trim_single_newline_only() {
        assert_eq!(trim_trailing_newline("hello\n"), "hello");
        assert_eq!(trim_trailing_newline("hello\n\n"), "hello\n");
        assert_eq!(trim_trailing_newline("hello\r\n"), "hello");
        assert_eq!(trim_trailing_newline("hello"), "hello");
        assert_eq!(trim_trailing_newline(""), "");
        assert_eq!(trim_trailing_newline("\n"), "");
    }

    #[test]
    fn test_trim_keeps_other_whitespace() {
        assert_eq!(trim_trailing_newline("hello  "), "hello  ");
        assert_eq!(trim_trailing_newline("hello \n"), "hello ");
    }

    #[test]
    fn test_default_extension_added() {
        assert_eq!(with_default_extension(PathBuf::from("/tmp/notes")), PathBuf::from("/tmp/notes.txt"));
    }

    #[test]
    fn test_existing_extension_kept() {
        assert_eq!(with_default_extension(PathBuf::from("/tmp/notes.md")), PathBuf::from("/tmp/notes.md"));
        assert_eq!(with_default_extension(PathBuf::from("a.txt")), PathBuf::from("a.txt"));
    }
}
