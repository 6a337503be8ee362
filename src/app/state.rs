use fltk::{app::Sender, prelude::*};

use super::controllers::highlight::HighlightController;
use super::controllers::playground::Playground;
use super::controllers::preview::PreviewController;
use super::domain::{ActiveTab, AppSettings, ColorMode, Effect, Message, Notice, PlaygroundEvent, SourceKind};
use super::services::store::KeyValueStore;
use crate::ui::editor_pane::{fltk_font, EditorPane};
use crate::ui::main_window::MainWidgets;
use crate::ui::menu::sync_view_toggles;
use crate::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

/// Couples the playground to the widgets. Message handlers translate widget
/// activity into `PlaygroundEvent`s and feed the resulting effects back to
/// the view.
pub struct AppState {
    pub playground: Playground<Box<dyn KeyValueStore>>,
    pub widgets: MainWidgets,
    pub sender: Sender<Message>,
    pub settings: AppSettings,
    pub highlight: HighlightController,
    pub preview: PreviewController,
}

impl AppState {
    pub fn new(
        playground: Playground<Box<dyn KeyValueStore>>,
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: AppSettings,
    ) -> Self {
        let mode = playground.color_mode();
        let highlight = HighlightController::new(
            mode,
            fltk_font(settings.font),
            settings.font_size as i32,
            settings.highlighting_enabled,
        );

        let mut state = Self {
            playground,
            widgets,
            sender,
            settings,
            highlight,
            preview: PreviewController::new(),
        };

        let options = state.settings.editor_options();
        for pane in &mut state.widgets.panes {
            pane.apply_options(&options);
        }
        // Panes follow the window through the Flex layout unless pinned
        if !options.automatic_layout {
            state.widgets.wind.make_resizable(false);
        }
        state.reload_panes();
        state.apply_color_mode(mode);
        state.apply_effects(vec![Effect::TabChanged(state.playground.active_tab())]);
        state
    }

    fn pane_mut(&mut self, kind: SourceKind) -> Option<&mut EditorPane> {
        self.widgets.panes.iter_mut().find(|p| p.kind == kind)
    }

    /// A pane's text changed, by typing or by `reload_panes`.
    pub fn on_source_modified(&mut self, kind: SourceKind) {
        let Some(pane) = self.widgets.panes.iter_mut().find(|p| p.kind == kind) else {
            return;
        };
        let text = pane.text();
        self.highlight.restyle(kind, &text, &mut pane.style_buffer);
        pane.bind_styles(self.highlight.style_table());

        if self.settings.line_numbers_enabled {
            pane.set_line_numbers(true);
        }

        // Loading playground text into a pane fires the same callback as typing
        if text == self.playground.source(kind) {
            return;
        }

        let effects = self.playground.handle(PlaygroundEvent::Edit { kind, text });
        self.apply_effects(effects);
    }

    /// Entering the Output tab also opens the full document in the browser,
    /// the only surface here that applies its styles and runs its script.
    pub fn select_tab(&mut self, tab: ActiveTab) {
        let entering_output = tab == ActiveTab::Output && self.playground.active_tab() != tab;
        let effects = self.playground.handle(PlaygroundEvent::SelectTab(tab));
        self.apply_effects(effects);
        if entering_output {
            self.run_in_browser();
        }
    }

    pub fn toggle_theme(&mut self) {
        let effects = self.playground.handle(PlaygroundEvent::ToggleTheme);
        self.apply_effects(effects);
    }

    pub fn clear_all(&mut self) {
        let effects = self.playground.handle(PlaygroundEvent::ClearAll);
        self.apply_effects(effects);
    }

    /// Write the composed document to disk and hand it to the system browser.
    pub fn run_in_browser(&mut self) {
        let doc = self.playground.compose();
        let notice = match self.preview.run_in_browser(&doc) {
            Ok(path) => Notice::success(format!("Opened {}", path.display())),
            Err(e) => {
                tracing::error!("Run in browser failed: {}", e);
                Notice::warning(format!("Could not open the browser: {}", e))
            }
        };
        self.apply_effects(vec![Effect::ShowNotice(notice)]);
    }

    pub fn notify(&mut self, notice: Notice) {
        self.apply_effects(vec![Effect::ShowNotice(notice)]);
    }

    pub fn dismiss_notice(&mut self, generation: u64) {
        self.widgets.notice.dismiss(generation, &mut self.widgets.flex);
    }

    pub fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RenderOutput(doc) => {
                    self.widgets.output.show_document(&doc);
                    if let Err(e) = self.preview.refresh(&doc) {
                        tracing::warn!("Failed to refresh browser preview: {}", e);
                    }
                }
                Effect::TabChanged(tab) => self.show_panel(tab),
                Effect::ThemeChanged(mode) => self.apply_color_mode(mode),
                Effect::SourcesReplaced => self.reload_panes(),
                Effect::ShowNotice(notice) => {
                    let duration = self.settings.notice_duration();
                    let mode = self.playground.color_mode();
                    self.widgets.notice.show(
                        &notice,
                        mode,
                        duration,
                        &mut self.widgets.flex,
                        self.sender,
                    );
                }
            }
        }
    }

    /// Exactly one panel is visible; the hidden ones keep their widgets and buffers.
    fn show_panel(&mut self, tab: ActiveTab) {
        let active = tab.source();
        for pane in &mut self.widgets.panes {
            if Some(pane.kind) == active {
                pane.editor.show();
            } else {
                pane.editor.hide();
            }
        }
        if tab == ActiveTab::Output {
            self.widgets.output.view.show();
        } else {
            self.widgets.output.view.hide();
        }
        self.widgets.content.layout();
        self.widgets.tab_bar.set_active(tab);

        if let Some(pane) = active.and_then(|kind| self.pane_mut(kind)) {
            let _ = pane.editor.take_focus();
        }
    }

    fn reload_panes(&mut self) {
        for kind in SourceKind::ALL {
            let text = self.playground.source(kind).to_string();
            let changed = match self.pane_mut(kind) {
                Some(pane) => pane.load_text(&text),
                None => continue,
            };
            // Unchanged text fires no callback, so style it here
            if !changed {
                self.on_source_modified(kind);
            }
        }
    }

    fn apply_color_mode(&mut self, mode: ColorMode) {
        let widgets = &mut self.widgets;
        apply_theme(
            widgets.panes.iter_mut().map(|p| &mut p.editor),
            &mut widgets.wind,
            &mut widgets.menu,
            mode,
        );
        widgets.tab_bar.apply_theme(mode);
        sync_view_toggles(&mut widgets.menu, &self.settings, mode);
        #[cfg(target_os = "windows")]
        if widgets.wind.shown() {
            set_windows_titlebar_theme(&widgets.wind, mode);
        }

        self.highlight.set_color_mode(mode);
        self.restyle_all();
    }

    fn restyle_all(&mut self) {
        for pane in &mut self.widgets.panes {
            let text = pane.text();
            self.highlight.restyle(pane.kind, &text, &mut pane.style_buffer);
        }
        let table = self.highlight.style_table();
        for pane in &mut self.widgets.panes {
            pane.bind_styles(table.clone());
            pane.editor.redraw();
        }
    }

    pub fn toggle_line_numbers(&mut self) {
        self.settings.line_numbers_enabled = !self.settings.line_numbers_enabled;
        let enabled = self.settings.line_numbers_enabled;
        for pane in &mut self.widgets.panes {
            pane.set_line_numbers(enabled);
            pane.editor.redraw();
        }
        self.save_settings();
    }

    pub fn toggle_word_wrap(&mut self) {
        self.settings.word_wrap_enabled = !self.settings.word_wrap_enabled;
        let enabled = self.settings.word_wrap_enabled;
        for pane in &mut self.widgets.panes {
            pane.set_word_wrap(enabled);
        }
        self.save_settings();
    }

    pub fn toggle_highlighting(&mut self) {
        self.highlight.highlighting_enabled = !self.highlight.highlighting_enabled;
        self.settings.highlighting_enabled = self.highlight.highlighting_enabled;
        self.restyle_all();
        self.save_settings();
    }

    pub fn set_font_size(&mut self, size: i32) {
        self.settings.font_size = size.max(1) as u32;
        self.highlight.set_font(fltk_font(self.settings.font), size);
        for pane in &mut self.widgets.panes {
            pane.set_font_size(size);
        }
        self.restyle_all();
        self.save_settings();
    }

    fn save_settings(&self) {
        if let Err(e) = self.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }

    /// Called once before the event loop exits.
    pub fn shutdown(&mut self) {
        self.preview.cleanup();
        tracing::info!("shutting down");
    }
}
