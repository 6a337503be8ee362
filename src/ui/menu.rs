use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::{ActiveTab, AppSettings, ColorMode, Message};

pub const DARK_MODE_ITEM: &str = "View/Toggle Dark Mode";
pub const LINE_NUMBERS_ITEM: &str = "View/Toggle Line Numbers";
pub const WORD_WRAP_ITEM: &str = "View/Toggle Word Wrap";
pub const HIGHLIGHTING_ITEM: &str = "View/Toggle Syntax Highlighting";

/// Check state of every View toggle for the given settings and color mode.
pub fn view_toggle_states(settings: &AppSettings, mode: ColorMode) -> [(&'static str, bool); 4] {
    [
        (DARK_MODE_ITEM, mode.is_dark()),
        (LINE_NUMBERS_ITEM, settings.line_numbers_enabled),
        (WORD_WRAP_ITEM, settings.word_wrap_enabled),
        (HIGHLIGHTING_ITEM, settings.highlighting_enabled),
    ]
}

/// Re-check the View toggles. The theme can also change from the tab bar,
/// which never touches the menu on its own.
pub fn sync_view_toggles(menu: &mut MenuBar, settings: &AppSettings, mode: ColorMode) {
    for (path, on) in view_toggle_states(settings, mode) {
        if let Some(mut item) = menu.find_item(path) {
            if on {
                item.set();
            } else {
                item.clear();
            }
        }
    }
}

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, settings: &AppSettings, initial_mode: ColorMode) {
    let s = *sender;

    // File
    menu.add("File/Run in Browser", Shortcut::Ctrl | 'r', MenuFlag::Normal, move |_| s.send(Message::RunInBrowser));
    menu.add("File/Clear All Tabs", Shortcut::Ctrl | Shortcut::Shift | 'k', MenuFlag::MenuDivider, move |_| s.send(Message::ClearAll));
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, move |_| s.send(Message::FileQuit));

    // Tabs, Ctrl+1..Ctrl+4 in panel order
    for (tab, key) in ActiveTab::ALL.into_iter().zip(['1', '2', '3', '4']) {
        let path = format!("Tabs/{}", tab.label());
        menu.add(&path, Shortcut::Ctrl | key, MenuFlag::Normal, move |_| s.send(Message::SelectTab(tab)));
    }

    // View
    menu.add(DARK_MODE_ITEM, Shortcut::Ctrl | 'd', MenuFlag::Toggle, move |_| s.send(Message::ToggleTheme));
    menu.add(LINE_NUMBERS_ITEM, Shortcut::None, MenuFlag::Toggle, move |_| s.send(Message::ToggleLineNumbers));
    menu.add(WORD_WRAP_ITEM, Shortcut::None, MenuFlag::Toggle, move |_| s.send(Message::ToggleWordWrap));
    menu.add(HIGHLIGHTING_ITEM, Shortcut::None, MenuFlag::Toggle, move |_| s.send(Message::ToggleHighlighting));
    sync_view_toggles(menu, settings, initial_mode);

    // Format
    menu.add("Format/Font Size/Small (14)", Shortcut::None, MenuFlag::Normal, move |_| s.send(Message::SetFontSize(14)));
    menu.add("Format/Font Size/Medium (18)", Shortcut::None, MenuFlag::Normal, move |_| s.send(Message::SetFontSize(18)));
    menu.add("Format/Font Size/Large (22)", Shortcut::None, MenuFlag::Normal, move |_| s.send(Message::SetFontSize(22)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(states: [(&'static str, bool); 4], path: &str) -> bool {
        states.iter().find(|(p, _)| *p == path).map(|(_, on)| *on).unwrap()
    }

    #[test]
    fn test_dark_mode_check_follows_color_mode() {
        let settings = AppSettings::default();
        assert!(!checked(view_toggle_states(&settings, ColorMode::Light), DARK_MODE_ITEM));
        assert!(checked(view_toggle_states(&settings, ColorMode::Light.toggled()), DARK_MODE_ITEM));
    }

    #[test]
    fn test_view_toggles_follow_settings() {
        let settings = AppSettings {
            line_numbers_enabled: false,
            word_wrap_enabled: true,
            highlighting_enabled: false,
            ..AppSettings::default()
        };
        let states = view_toggle_states(&settings, ColorMode::Dark);
        assert!(!checked(states, LINE_NUMBERS_ITEM));
        assert!(checked(states, WORD_WRAP_ITEM));
        assert!(!checked(states, HIGHLIGHTING_ITEM));
    }
}
