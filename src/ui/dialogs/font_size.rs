use fltk::dialog;

use crate::app::domain::format::{FontSize, MAX_FONT_SIZE, MIN_FONT_SIZE};

/// Ask for a font size, re-prompting until the input is valid or cancelled.
pub fn show_font_size_dialog(current: FontSize) -> Option<FontSize> {
    let prompt = format!(
        "Enter font size ({}-{}, e.g. 8, 12, 16):",
        MIN_FONT_SIZE, MAX_FONT_SIZE
    );
    let mut default = current.to_string();
    loop {
        let input = dialog::input_default(&prompt, &default)?;
        match parse_font_size(&input) {
            Some(size) => return Some(size),
            None => {
                dialog::message_default(&format!(
                    "Font size must be a whole number between {} and {}",
                    MIN_FONT_SIZE, MAX_FONT_SIZE
                ));
                default = input;
            }
        }
    }
}

pub fn parse_font_size(input: &str) -> Option<FontSize> {
    input.trim().parse::<u32>().ok().and_then(FontSize::new)
}
