use crate::app::domain::{
    ActiveTab, ColorMode, Effect, Notice, PlaygroundEvent, SourceBuffer, SourceDefaults, SourceKind,
};
use crate::app::infrastructure::error::Result;
use crate::app::services::composer::ComposedDocument;
use crate::app::services::store::KeyValueStore;

const CLEARED_TEXT: &str = "Clear the All Tabs.";

/// The three sources, the view shell state and the store they persist to.
///
/// Every source change is written through to the store before the call
/// returns; there is no dirty state.
pub struct Playground<S: KeyValueStore> {
    html: SourceBuffer,
    css: SourceBuffer,
    js: SourceBuffer,
    active_tab: ActiveTab,
    color_mode: ColorMode,
    store: S,
}

impl<S: KeyValueStore> Playground<S> {
    /// Restore the sources from `store`, using `defaults` for missing keys.
    pub fn load(store: S, defaults: &SourceDefaults, color_mode: ColorMode) -> Self {
        let init = |kind| SourceBuffer::initialize(kind, &store, defaults.for_kind(kind));
        let (html, css, js) = (init(SourceKind::Html), init(SourceKind::Css), init(SourceKind::Js));
        tracing::info!(
            html = html.text().len(),
            css = css.text().len(),
            js = js.text().len(),
            "sources restored"
        );
        Self {
            html,
            css,
            js,
            active_tab: ActiveTab::default(),
            color_mode,
            store,
        }
    }

    pub fn buffer(&self, kind: SourceKind) -> &SourceBuffer {
        match kind {
            SourceKind::Html => &self.html,
            SourceKind::Css => &self.css,
            SourceKind::Js => &self.js,
        }
    }

    fn buffer_mut(&mut self, kind: SourceKind) -> &mut SourceBuffer {
        match kind {
            SourceKind::Html => &mut self.html,
            SourceKind::Css => &mut self.css,
            SourceKind::Js => &mut self.js,
        }
    }

    pub fn source(&self, kind: SourceKind) -> &str {
        self.buffer(kind).text()
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Single entry point for user actions.
    pub fn handle(&mut self, event: PlaygroundEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            PlaygroundEvent::Edit { kind, text } => {
                if let Err(e) = self.set_source(kind, text) {
                    effects.push(Effect::ShowNotice(Notice::warning(format!(
                        "Could not save your code: {}",
                        e
                    ))));
                }
                self.push_render_if_visible(&mut effects);
            }
            PlaygroundEvent::SelectTab(tab) => {
                self.select_tab(tab);
                effects.push(Effect::TabChanged(tab));
                self.push_render_if_visible(&mut effects);
            }
            PlaygroundEvent::ToggleTheme => {
                effects.push(Effect::ThemeChanged(self.toggle_theme()));
            }
            PlaygroundEvent::ClearAll => {
                let notice = self.clear_all();
                effects.push(Effect::SourcesReplaced);
                effects.push(Effect::ShowNotice(notice));
                self.push_render_if_visible(&mut effects);
            }
        }
        effects
    }

    fn push_render_if_visible(&self, effects: &mut Vec<Effect>) {
        if self.active_tab == ActiveTab::Output {
            effects.push(Effect::RenderOutput(self.compose()));
        }
    }

    /// Replace one source and write the full snapshot to the store.
    /// The in-memory value is updated even when persisting fails.
    pub fn set_source(&mut self, kind: SourceKind, text: impl Into<String>) -> Result<()> {
        self.buffer_mut(kind).set(text);
        self.persist_snapshot()
    }

    /// Write all three sources under their fixed keys. Every key is attempted;
    /// the first failure is returned.
    pub fn persist_snapshot(&mut self) -> Result<()> {
        let mut first_err = None;
        for kind in SourceKind::ALL {
            let key = kind.store_key();
            let value = match kind {
                SourceKind::Html => self.html.text(),
                SourceKind::Css => self.css.text(),
                SourceKind::Js => self.js.text(),
            };
            if let Err(e) = self.store.write(key, value) {
                tracing::warn!(key, "Failed to persist source: {}", e);
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Empty all three buffers and drop their stored entries.
    /// Removals are independent; one failing does not stop the others.
    pub fn clear_all(&mut self) -> Notice {
        let mut failed = 0;
        for kind in SourceKind::ALL {
            self.buffer_mut(kind).clear();
            if let Err(e) = self.store.remove(kind.store_key()) {
                tracing::warn!(key = kind.store_key(), "Failed to remove stored source: {}", e);
                failed += 1;
            }
        }

        if failed == 0 {
            tracing::info!("all sources cleared");
            Notice::success(CLEARED_TEXT)
        } else {
            Notice::warning(format!(
                "Clear the All Tabs: {} saved source(s) could not be removed.",
                failed
            ))
        }
    }

    pub fn select_tab(&mut self, tab: ActiveTab) {
        if self.active_tab != tab {
            tracing::debug!(from = ?self.active_tab, to = ?tab, "tab selected");
        }
        self.active_tab = tab;
    }

    pub fn toggle_theme(&mut self) -> ColorMode {
        self.color_mode = self.color_mode.toggled();
        self.color_mode
    }

    /// Build the output document from the current sources.
    pub fn compose(&self) -> ComposedDocument {
        ComposedDocument::new(self.html.text(), self.css.text(), self.js.text())
    }
}
