use fltk::{
    enums::Font,
    text::{StyleTableEntry, TextBuffer},
};

use crate::app::domain::{ColorMode, SourceKind};
use crate::app::services::syntax::{plain_style, SyntaxHighlighter};

/// Keeps each pane's style buffer in step with its text.
///
/// Playground sources are small enough that every edit re-highlights the
/// whole pane.
pub struct HighlightController {
    highlighter: SyntaxHighlighter,
    pub highlighting_enabled: bool,
}

impl HighlightController {
    pub fn new(mode: ColorMode, font: Font, font_size: i32, highlighting_enabled: bool) -> Self {
        Self {
            highlighter: SyntaxHighlighter::new(mode, font, font_size),
            highlighting_enabled,
        }
    }

    pub fn style_table(&self) -> Vec<StyleTableEntry> {
        self.highlighter.style_table()
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.highlighter.set_color_mode(mode);
    }

    pub fn set_font(&mut self, font: Font, size: i32) {
        self.highlighter.set_font(font, size);
    }

    /// Style string for `text`, plain when highlighting is off.
    pub fn style_for(&mut self, kind: SourceKind, text: &str) -> String {
        if self.highlighting_enabled {
            self.highlighter.highlight(kind, text)
        } else {
            plain_style(text)
        }
    }

    /// Recompute the whole style buffer of one pane.
    pub fn restyle(&mut self, kind: SourceKind, text: &str, style_buffer: &mut TextBuffer) {
        let styles = self.style_for(kind, text);
        style_buffer.set_text(&styles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_highlighting_is_plain() {
        let mut hl = HighlightController::new(ColorMode::Light, Font::Courier, 18, false);
        assert_eq!(hl.style_for(SourceKind::Css, "a{}"), "AAA");
    }

    #[test]
    fn test_enabled_highlighting_matches_length() {
        let mut hl = HighlightController::new(ColorMode::Dark, Font::Courier, 18, true);
        let text = "<p class=\"x\">ok</p>";
        assert_eq!(hl.style_for(SourceKind::Html, text).len(), text.len());
    }
}
