use fltk::{enums::Color, menu::MenuBar, prelude::*, text::TextEditor, window::Window};

use crate::app::domain::ColorMode;

/// Recolor the editor chrome. The Output panel is left alone: the user's
/// document decides its own colors.
pub fn apply_theme<'a>(
    editors: impl IntoIterator<Item = &'a mut TextEditor>,
    window: &mut Window,
    menu: &mut MenuBar,
    mode: ColorMode,
) {
    for editor in editors {
        style_editor(editor, mode);
    }

    match mode {
        ColorMode::Dark => {
            window.set_color(Color::from_rgb(25, 25, 25));
            window.set_label_color(Color::from_rgb(220, 220, 220));
            menu.set_color(Color::from_rgb(35, 35, 35));
            menu.set_text_color(Color::from_rgb(220, 220, 220));
            menu.set_selection_color(Color::from_rgb(60, 60, 60));
        }
        ColorMode::Light => {
            window.set_color(Color::from_rgb(240, 240, 240));
            window.set_label_color(Color::Black);
            menu.set_color(Color::from_rgb(240, 240, 240));
            menu.set_text_color(Color::Black);
            menu.set_selection_color(Color::from_rgb(200, 200, 200));
        }
    }

    window.redraw();
    menu.redraw();
}

fn style_editor(editor: &mut TextEditor, mode: ColorMode) {
    match mode {
        ColorMode::Dark => {
            editor.set_color(Color::from_rgb(30, 30, 30));
            editor.set_text_color(Color::from_rgb(220, 220, 220));
            editor.set_cursor_color(Color::White);
            editor.set_selection_color(Color::from_rgb(70, 70, 100));
            editor.set_linenumber_bgcolor(Color::from_rgb(40, 40, 40));
            editor.set_linenumber_fgcolor(Color::from_rgb(150, 150, 150));
        }
        ColorMode::Light => {
            editor.set_color(Color::White);
            editor.set_text_color(Color::Black);
            editor.set_cursor_color(Color::Black);
            editor.set_selection_color(Color::from_rgb(173, 216, 230));
            editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
            editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));
        }
    }
    editor.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, mode: ColorMode) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    let on: i32 = if mode.is_dark() { 1 } else { 0 };

    // 20 is DWMWA_USE_IMMERSIVE_DARK_MODE; builds 1809-1903 only know 19
    for attribute in [20, 19] {
        unsafe {
            let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
