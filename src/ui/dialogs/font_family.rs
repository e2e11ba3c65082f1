use fltk::{
    app,
    button::Button,
    frame::Frame,
    menu::Choice,
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Show the font family picker and return the chosen family if the user
/// clicked Apply.
pub fn show_font_family_dialog(current: &str) -> Option<String> {
    let families = font_families(app::fonts());

    let mut dialog = Window::default()
        .with_size(300, 160)
        .with_label("Choose Font Family")
        .center_screen();
    dialog.make_modal(true);

    Frame::default()
        .with_pos(20, 15)
        .with_size(260, 25)
        .with_label("Select Font Family:");

    let mut family_choice = Choice::default().with_pos(20, 50).with_size(260, 30);
    for family in &families {
        // '/' would open a submenu in FLTK menu labels
        family_choice.add_choice(&family.replace('/', "\\/"));
    }
    if let Some(idx) = families.iter().position(|f| f == current) {
        family_choice.set_value(idx as i32);
    }

    let mut apply_btn = Button::default()
        .with_pos(110, 110)
        .with_size(80, 30)
        .with_label("Apply");
    let mut cancel_btn = Button::default()
        .with_pos(200, 110)
        .with_size(80, 30)
        .with_label("Cancel");

    dialog.end();
    dialog.show();

    let result: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));

    let result_apply = result.clone();
    let dialog_apply = dialog.clone();
    let choice_apply = family_choice.clone();
    apply_btn.set_callback(move |_| {
        let idx = choice_apply.value();
        if idx >= 0 {
            *result_apply.borrow_mut() = families.get(idx as usize).cloned();
        }
        dialog_apply.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        dialog_cancel.clone().hide();
    });

    dialog.set_callback(move |w| {
        w.hide();
    });

    super::run_dialog(&dialog);

    result.borrow().clone()
}

/// Deduplicated, sorted font names. FLTK pads some system font names with a
/// leading space.
pub fn font_families(raw: Vec<String>) -> Vec<String> {
    let mut families: Vec<String> = raw
        .into_iter()
        .filter_map(|name| {
            let name = name.trim().to_string();
            (!name.is_empty()).then_some(name)
        })
        .collect();
    families.sort();
    families.dedup();
    families
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_families_trims_and_dedups() {
        let raw = vec![
            " Sans".to_string(),
            "Courier".to_string(),
            "Sans".to_string(),
            "   ".to_string(),
            "Helvetica".to_string(),
        ];
        assert_eq!(font_families(raw), vec!["Courier", "Helvetica", "Sans"]);
    }

    #[test]
    fn test_font_families_empty() {
        assert!(font_families(Vec::new()).is_empty());
    }
}
