use std::fs;
use std::path::Path;

use super::text_ops::trim_trailing_newline;
use crate::app::infrastructure::error::{AppError, Result};

/// How buffer text is turned into file content.
///
/// `Save` to an existing path trims one trailing newline; `Save As` writes
/// the buffer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    TrimTrailingNewline,
    Verbatim,
}

impl WriteMode {
    pub fn apply(self, text: &str) -> &str {
        match self {
            Self::TrimTrailingNewline => trim_trailing_newline(text),
            Self::Verbatim => text,
        }
    }
}

/// Read a whole text file. Non-UTF-8 content is an error.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| AppError::read(path, e))
}

/// Write `text` to `path`, truncating whatever was there.
pub fn write_document(path: &Path, text: &str, mode: WriteMode) -> Result<()> {
    fs::write(path, mode.apply(text)).map_err(|e| AppError::write(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_verbatim_keeps_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        write_document(&path, "hello\n", WriteMode::Verbatim).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_write_trimmed_drops_one_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        write_document(&path, "hello\n\n", WriteMode::TrimTrailingNewline).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_write_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "a much longer previous content").unwrap();
        write_document(&path, "short", WriteMode::Verbatim).unwrap();
        assert_eq!(read_document(&path).unwrap(), "short");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, AppError::Read { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        assert!(matches!(read_document(&path), Err(AppError::Read { .. })));
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/a.txt");
        let err = write_document(&path, "x", WriteMode::Verbatim).unwrap_err();
        assert!(matches!(err, AppError::Write { .. }));
    }

    #[test]
    fn test_unicode_content_survives() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("u.txt");
        write_document(&path, "Hello 世界 \u{1f980}", WriteMode::Verbatim).unwrap();
        assert_eq!(read_document(&path).unwrap(), "Hello 世界 \u{1f980}");
    }
}
