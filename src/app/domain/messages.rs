/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileExit,
    WindowClose,

    // Edit
    EditUndo,
    EditCut,
    EditCopy,
    EditPaste,
    EditDelete,

    // Format
    FormatFontFamily,
    FormatFontSize,
    FormatFontColor,

    // Help
    ShowAbout,

    /// Sent by the text buffer's modify callback on user edits.
    BufferModified,
}
