#![cfg_attr(all(target_os = "windows", not(debug_assertions)), windows_subsystem = "windows")]

use clap::Parser;
use fltk::{app, enums::Event, prelude::*};

use ferris_note::app::infrastructure::logging::init_logging;
use ferris_note::app::{AppSettings, EditorController, Flow, Message};
use ferris_note::cli::Cli;
use ferris_note::ui::main_window::build_main_window;
use ferris_note::ui::menu::build_menu;
use ferris_note::ui::prompter::FltkPrompter;
use ferris_note::ui::view::FltkView;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = AppSettings::load(cli.config.as_deref());

    let app = app::App::default().load_system_fonts();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&settings);
    build_menu(&mut widgets.menu, &sender);

    // Window close (X button) goes through the same unsaved-changes flow as
    // File/Exit. Escape also fires this callback and is ignored.
    widgets.wind.set_callback({
        let s = sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    let view = FltkView::new(widgets.text_editor.clone(), widgets.wind.clone(), sender);
    let mut controller = EditorController::new(view, FltkPrompter::new(), settings.format());

    widgets.wind.show();

    if let Some(path) = cli.path {
        controller.open_path(path);
    }

    log::info!("FerrisNote {} ready", env!("CARGO_PKG_VERSION"));

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if controller.dispatch(msg) == Flow::Quit {
                widgets.wind.hide();
                break;
            }
        }
    }
}
