use fltk::{
    enums::Color,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::settings::AppSettings;
use crate::app::services::text_ops::window_title;

pub const MENU_HEIGHT: i32 = 30;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
}

pub fn build_main_window(settings: &AppSettings) -> MainWidgets {
    let (w, h) = (settings.window_width, settings.window_height);
    let mut wind = Window::new(100, 100, w, h, None);
    wind.set_label(&window_title(None, false));
    wind.set_xclass("FerrisNote");

    let mut flex = Flex::new(0, 0, w, h, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    // The buffer is attached later by FltkView
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_color(Color::White);
    text_editor.set_cursor_color(Color::Black);
    text_editor.set_selection_color(Color::from_rgb(173, 216, 230));
    if settings.word_wrap_enabled {
        text_editor.wrap_mode(WrapMode::AtBounds, 0);
    }

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        menu,
        text_editor,
    }
}
