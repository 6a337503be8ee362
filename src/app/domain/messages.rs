use crate::app::services::composer::ComposedDocument;

use super::notice::Notice;
use super::source::SourceKind;
use super::view::{ActiveTab, ColorMode};

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks send one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Editing
    SourceModified(SourceKind),

    // View shell
    SelectTab(ActiveTab),
    ToggleTheme,
    ClearAll,
    RunInBrowser,
    DismissNotice(u64),

    // View
    ToggleLineNumbers,
    ToggleWordWrap,
    ToggleHighlighting,
    SetFontSize(i32),

    // Application
    FileQuit,
    WindowClose,
}

/// Input to the playground controller, free of any widget types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaygroundEvent {
    Edit { kind: SourceKind, text: String },
    SelectTab(ActiveTab),
    ToggleTheme,
    ClearAll,
}

/// What the view has to do after the playground handled an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Push the composed document to the display surface.
    RenderOutput(ComposedDocument),
    TabChanged(ActiveTab),
    ThemeChanged(ColorMode),
    /// Buffers were replaced from outside the editors; editors must reload them.
    SourcesReplaced,
    ShowNotice(Notice),
}
