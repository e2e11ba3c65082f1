use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::messages::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Exit", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileExit) });

    // Edit
    menu.add("Edit/Undo", Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::EditUndo) });
    menu.add("Edit/Cut", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCut) });
    menu.add("Edit/Copy", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCopy) });
    menu.add("Edit/Paste", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditPaste) });
    menu.add("Edit/Delete", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditDelete) });

    // Format
    menu.add("Format/Font Family...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FormatFontFamily) });
    menu.add("Format/Font Size...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FormatFontSize) });
    menu.add("Format/Font Color...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FormatFontColor) });

    // Help
    menu.add("Help/About FerrisNote", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
