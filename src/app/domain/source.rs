use crate::app::services::store::KeyValueStore;

/// Which of the three editor panes a piece of source belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Html,
    Css,
    Js,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [SourceKind::Html, SourceKind::Css, SourceKind::Js];

    /// Fixed key the source is persisted under.
    pub fn store_key(self) -> &'static str {
        match self {
            Self::Html => "htmlCode",
            Self::Css => "cssCode",
            Self::Js => "jsCode",
        }
    }

    /// Label shown on the pane's tab
    pub fn label(self) -> &'static str {
        match self {
            Self::Html => "Html",
            Self::Css => "CSS",
            Self::Js => "Javascript",
        }
    }

    /// File extension used to pick the highlighting grammar
    pub fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Js => "js",
        }
    }
}

/// One editable source fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    kind: SourceKind,
    text: String,
}

impl SourceBuffer {
    pub fn new(kind: SourceKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    /// Load the buffer from the store, falling back to `default` when the key
    /// is absent. A stored empty string is a real value and wins over the
    /// default. Read failures are logged and treated as absent.
    pub fn initialize<S: KeyValueStore + ?Sized>(kind: SourceKind, store: &S, default: &str) -> Self {
        let text = match store.read(kind.store_key()) {
            Ok(Some(stored)) => stored,
            Ok(None) => default.to_string(),
            Err(e) => {
                tracing::warn!(key = kind.store_key(), "Failed to read stored source: {}", e);
                default.to_string()
            }
        };
        Self { kind, text }
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the held text. Any string is accepted.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// Text a pane starts with when nothing is stored for it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceDefaults {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl SourceDefaults {
    /// All panes start empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Small placeholder skeletons for each language.
    pub fn starter() -> Self {
        Self {
            html: STARTER_HTML.to_string(),
            css: STARTER_CSS.to_string(),
            js: STARTER_JS.to_string(),
        }
    }

    pub fn for_kind(&self, kind: SourceKind) -> &str {
        match kind {
            SourceKind::Html => &self.html,
            SourceKind::Css => &self.css,
            SourceKind::Js => &self.js,
        }
    }
}

const STARTER_HTML: &str = r#"<h1>Hello, World!</h1>
<p>This is a sample HTML snippet.</p>"#;

const STARTER_CSS: &str = r#"body {
    font-family: Arial, sans-serif;
    background-color: #f0f0f0;
    color: #333;
}"#;

const STARTER_JS: &str = r#"// Sample JavaScript code
document.addEventListener('DOMContentLoaded', () => {
    console.log('Hello, World!');
});"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::store::MemoryStore;

    #[test]
    fn test_store_keys_are_fixed() {
        assert_eq!(SourceKind::Html.store_key(), "htmlCode");
        assert_eq!(SourceKind::Css.store_key(), "cssCode");
        assert_eq!(SourceKind::Js.store_key(), "jsCode");
    }

    #[test]
    fn test_initialize_prefers_stored_value() {
        let mut store = MemoryStore::new();
        store.write("cssCode", "h1{color:red}").unwrap();
        let buf = SourceBuffer::initialize(SourceKind::Css, &store, "body{}");
        assert_eq!(buf.text(), "h1{color:red}");
        assert_eq!(buf.kind(), SourceKind::Css);
    }

    #[test]
    fn test_initialize_falls_back_to_default() {
        let store = MemoryStore::new();
        let buf = SourceBuffer::initialize(SourceKind::Js, &store, "// hi");
        assert_eq!(buf.text(), "// hi");
    }

    #[test]
    fn test_stored_empty_string_wins_over_default() {
        let mut store = MemoryStore::new();
        store.write("htmlCode", "").unwrap();
        let buf = SourceBuffer::initialize(SourceKind::Html, &store, STARTER_HTML);
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn test_set_accepts_anything() {
        let mut buf = SourceBuffer::new(SourceKind::Html, "<p>old</p>");
        buf.set("");
        assert_eq!(buf.text(), "");
        buf.set("</script><script>alert(1)</script>");
        assert_eq!(buf.text(), "</script><script>alert(1)</script>");
        buf.clear();
        assert!(buf.text().is_empty());
    }

    #[test]
    fn test_defaults() {
        let empty = SourceDefaults::empty();
        assert!(SourceKind::ALL.iter().all(|k| empty.for_kind(*k).is_empty()));

        let starter = SourceDefaults::starter();
        assert!(starter.for_kind(SourceKind::Html).contains("<h1>"));
        assert!(starter.for_kind(SourceKind::Css).contains("font-family"));
        assert!(starter.for_kind(SourceKind::Js).contains("console.log"));
    }
}
