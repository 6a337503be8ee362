mod lines;
mod style_map;

use fltk::enums::{Color, Font};
use fltk::text::StyleTableEntry;
use syntect::highlighting::{HighlightIterator, HighlightState, Highlighter, ThemeSet};
use syntect::parsing::{ParseState, ScopeStack, SyntaxSet};

use lines::LinesWithEndings;
use style_map::StyleMap;

use crate::app::domain::{ColorMode, SourceKind};

const LIGHT_THEME: &str = "base16-ocean.light";
const DARK_THEME: &str = "base16-ocean.dark";

/// Style character for unstyled text
pub const DEFAULT_STYLE: char = 'A';

/// Turns source text into an FLTK style string (one char per byte).
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: &'static str,
    style_map: StyleMap,
}

impl SyntaxHighlighter {
    pub fn new(mode: ColorMode, font: Font, font_size: i32) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme_for(mode),
            style_map: StyleMap::new(plain_color(mode), font, font_size),
        }
    }

    /// Highlight the whole text. Falls back to plain style when no grammar matches.
    pub fn highlight(&mut self, kind: SourceKind, text: &str) -> String {
        let Some(syntax) = self.syntax_set.find_syntax_by_extension(kind.extension()) else {
            tracing::debug!(?kind, "no grammar found, using plain style");
            return plain_style(text);
        };
        let theme = &self.theme_set.themes[self.theme_name];
        let highlighter = Highlighter::new(theme);
        let mut parse_state = ParseState::new(syntax);
        let mut highlight_state = HighlightState::new(&highlighter, ScopeStack::new());
        let mut style_string = String::with_capacity(text.len());

        for line in LinesWithEndings::new(text) {
            let ops = parse_state.parse_line(line, &self.syntax_set).unwrap_or_default();
            let iter = HighlightIterator::new(&mut highlight_state, &ops, line, &highlighter);
            for (style, piece) in iter {
                let ch = self.style_map.get_or_insert(style.foreground);
                // FLTK styles bytes, not chars
                style_string.extend(std::iter::repeat_n(ch, piece.len()));
            }
        }

        style_string
    }

    /// Switch between the light and dark theme. Clears the style map.
    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.theme_name = theme_for(mode);
        self.style_map.reset(plain_color(mode));
    }

    pub fn set_font(&mut self, font: Font, size: i32) {
        self.style_map.update_font(font, size);
    }

    /// Style table for FLTK's set_highlight_data.
    pub fn style_table(&self) -> Vec<StyleTableEntry> {
        self.style_map.entries().to_vec()
    }
}

fn plain_color(mode: ColorMode) -> Color {
    match mode {
        ColorMode::Light => Color::Black,
        ColorMode::Dark => Color::from_rgb(220, 220, 220),
    }
}

fn theme_for(mode: ColorMode) -> &'static str {
    match mode {
        ColorMode::Light => LIGHT_THEME,
        ColorMode::Dark => DARK_THEME,
    }
}

/// Style string that renders every byte with the default style.
pub fn plain_style(text: &str) -> String {
    std::iter::repeat_n(DEFAULT_STYLE, text.len()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighter() -> SyntaxHighlighter {
        SyntaxHighlighter::new(ColorMode::Light, Font::Courier, 18)
    }

    #[test]
    fn test_style_string_covers_every_byte() {
        let mut hl = highlighter();
        for (kind, text) in [
            (SourceKind::Html, "<h1 class=\"x\">Hi 🦀</h1>\n<p>body</p>"),
            (SourceKind::Css, "h1 {\n  color: red;\n}\n"),
            (SourceKind::Js, "const x = 'ü';\nconsole.log(x);"),
        ] {
            assert_eq!(hl.highlight(kind, text).len(), text.len(), "{:?}", kind);
        }
    }

    #[test]
    fn test_highlighting_produces_several_styles() {
        let mut hl = highlighter();
        let styles = hl.highlight(SourceKind::Js, "function f() { return \"s\"; } // note\n");
        let distinct: std::collections::HashSet<char> = styles.chars().collect();
        assert!(distinct.len() > 1);
        assert!(hl.style_table().len() > 1);
    }

    #[test]
    fn test_empty_text() {
        let mut hl = highlighter();
        assert_eq!(hl.highlight(SourceKind::Css, ""), "");
    }

    #[test]
    fn test_color_mode_switch_resets_table() {
        let mut hl = highlighter();
        hl.highlight(SourceKind::Html, "<div>x</div>");
        hl.set_color_mode(ColorMode::Dark);
        assert_eq!(hl.style_table().len(), 1);
        let styles = hl.highlight(SourceKind::Html, "<div>x</div>");
        assert_eq!(styles.len(), "<div>x</div>".len());
    }

    #[test]
    fn test_plain_style() {
        assert_eq!(plain_style("abc"), "AAA");
        assert_eq!(plain_style("é"), "AA");
    }
}
