//! FLTK front end: main window, menu bar, dialogs, and the `EditorView` /
//! `Prompter` implementations the controller drives.

pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod prompter;
pub mod view;
