#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use fltk::{app, prelude::*};

use code_pad::app::controllers::playground::Playground;
use code_pad::app::domain::{AppSettings, Message};
use code_pad::app::infrastructure::logging;
use code_pad::app::services::store::open_with_fallback;
use code_pad::app::state::AppState;
use code_pad::ui::main_window::build_main_window;
use code_pad::ui::menu::build_menu;
#[cfg(target_os = "windows")]
use code_pad::ui::theme::set_windows_titlebar_theme;

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let app = app::App::default();
    let settings = AppSettings::load();
    let color_mode = settings.theme_mode.resolve();

    let (sender, receiver) = app::channel::<Message>();
    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender, &settings, color_mode);

    let (store, store_warning) = open_with_fallback(&settings.storage_file());
    let playground = Playground::load(store, &settings.source_defaults(), color_mode);
    let mut state = AppState::new(playground, widgets, sender, settings);

    state.widgets.wind.show();
    #[cfg(target_os = "windows")]
    set_windows_titlebar_theme(&state.widgets.wind, color_mode);
    if let Some(notice) = store_warning {
        state.notify(notice);
    }

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::SourceModified(kind) => state.on_source_modified(kind),
                Message::SelectTab(tab) => state.select_tab(tab),
                Message::ToggleTheme => state.toggle_theme(),
                Message::ClearAll => state.clear_all(),
                Message::RunInBrowser => state.run_in_browser(),
                Message::DismissNotice(generation) => state.dismiss_notice(generation),
                Message::ToggleLineNumbers => state.toggle_line_numbers(),
                Message::ToggleWordWrap => state.toggle_word_wrap(),
                Message::ToggleHighlighting => state.toggle_highlighting(),
                Message::SetFontSize(size) => state.set_font_size(size),
                Message::FileQuit | Message::WindowClose => {
                    state.shutdown();
                    app.quit();
                }
            }
        }
    }
}
