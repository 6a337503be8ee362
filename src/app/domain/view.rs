use super::source::SourceKind;

/// The four mutually exclusive panels of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveTab {
    #[default]
    Html,
    Css,
    Js,
    Output,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 4] = [ActiveTab::Html, ActiveTab::Css, ActiveTab::Js, ActiveTab::Output];

    /// The source edited in this tab, `None` for the output panel.
    pub fn source(self) -> Option<SourceKind> {
        match self {
            Self::Html => Some(SourceKind::Html),
            Self::Css => Some(SourceKind::Css),
            Self::Js => Some(SourceKind::Js),
            Self::Output => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self.source() {
            Some(kind) => kind.label(),
            None => "Output",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            Self::Output => "Show the Output",
            _ => "Click me!",
        }
    }
}

impl From<SourceKind> for ActiveTab {
    fn from(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Html => Self::Html,
            SourceKind::Css => Self::Css,
            SourceKind::Js => Self::Js,
        }
    }
}

/// Editor chrome color mode. Never affects the composed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}
