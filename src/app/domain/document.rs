use std::path::{Path, PathBuf};

use crate::app::services::text_ops::window_title;

/// Bookkeeping for the single open document.
///
/// The text itself lives in the editor view's buffer; the document only
/// tracks where it came from and whether it changed since then.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Document {
    file_path: Option<PathBuf>,
    dirty: bool,
}

impl Document {
    pub fn new_untitled() -> Self {
        Self::default()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns `true` on the clean -> dirty transition, `false` if the
    /// document was already dirty.
    pub fn mark_dirty(&mut self) -> bool {
        !std::mem::replace(&mut self.dirty, true)
    }

    /// Associate the document with a file it was just loaded from or saved to.
    pub fn attach(&mut self, path: PathBuf) {
        self.file_path = Some(path);
        self.dirty = false;
    }

    pub fn reset(&mut self) {
        self.file_path = None;
        self.dirty = false;
    }

    pub fn title(&self) -> String {
        window_title(self.file_path(), self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_clean_and_untitled() {
        let doc = Document::new_untitled();
        assert!(!doc.is_dirty());
        assert!(doc.file_path().is_none());
        assert_eq!(doc.title(), "Untitled - FerrisNote");
    }

    #[test]
    fn test_mark_dirty_reports_transition_once() {
        let mut doc = Document::new_untitled();
        assert!(doc.mark_dirty());
        assert!(!doc.mark_dirty());
        assert!(doc.is_dirty());
        assert_eq!(doc.title(), "*Untitled - FerrisNote");
    }

    #[test]
    fn test_attach_sets_path_and_cleans() {
        let mut doc = Document::new_untitled();
        doc.mark_dirty();
        doc.attach(PathBuf::from("/tmp/notes.txt"));
        assert!(!doc.is_dirty());
        assert_eq!(doc.file_path(), Some(Path::new("/tmp/notes.txt")));
        assert_eq!(doc.title(), "/tmp/notes.txt - FerrisNote");
    }

    #[test]
    fn test_reset_forgets_path() {
        let mut doc = Document::new_untitled();
        doc.attach(PathBuf::from("a.txt"));
        doc.mark_dirty();
        doc.reset();
        assert_eq!(doc, Document::new_untitled());
    }
}
