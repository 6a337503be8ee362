use std::collections::HashMap;

use fltk::enums::{Color, Font};
use fltk::text::StyleTableEntry;
use syntect::highlighting::Color as SyntectColor;

use super::DEFAULT_STYLE;

// Style chars run 'A'..='Z'
const MAX_STYLES: usize = 26;

/// Maps syntect foreground colors to FLTK style characters.
/// The table grows as new colors show up; 'A' is always the plain style.
pub struct StyleMap {
    color_to_char: HashMap<(u8, u8, u8), char>,
    entries: Vec<StyleTableEntry>,
    plain: Color,
    font: Font,
    font_size: i32,
}

impl StyleMap {
    pub fn new(plain: Color, font: Font, font_size: i32) -> Self {
        let mut map = Self {
            color_to_char: HashMap::new(),
            entries: Vec::new(),
            plain,
            font,
            font_size,
        };
        map.insert_default();
        map
    }

    fn insert_default(&mut self) {
        self.entries.push(StyleTableEntry {
            color: self.plain,
            font: self.font,
            size: self.font_size,
        });
        self.color_to_char.insert((0, 0, 0), DEFAULT_STYLE);
    }

    pub fn get_or_insert(&mut self, color: SyntectColor) -> char {
        let key = (color.r, color.g, color.b);
        if let Some(&ch) = self.color_to_char.get(&key) {
            return ch;
        }

        let idx = self.entries.len();
        if idx >= MAX_STYLES {
            return (b'A' + (MAX_STYLES - 1) as u8) as char;
        }
        let ch = (b'A' + idx as u8) as char;
        self.entries.push(StyleTableEntry {
            color: Color::from_rgb(color.r, color.g, color.b),
            font: self.font,
            size: self.font_size,
        });
        self.color_to_char.insert(key, ch);
        ch
    }

    pub fn entries(&self) -> &[StyleTableEntry] {
        &self.entries
    }

    /// Drop every color mapping and restart with a new plain color.
    pub fn reset(&mut self, plain: Color) {
        self.plain = plain;
        self.clear();
    }

    pub fn clear(&mut self) {
        self.color_to_char.clear();
        self.entries.clear();
        self.insert_default();
    }

    pub fn update_font(&mut self, font: Font, size: i32) {
        self.font = font;
        self.font_size = size;
        for entry in &mut self.entries {
            entry.font = font;
            entry.size = size;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: u8, g: u8, b: u8) -> SyntectColor {
        SyntectColor { r, g, b, a: 255 }
    }

    #[test]
    fn test_same_color_same_char() {
        let mut map = StyleMap::new(Color::Black, Font::Courier, 18);
        let first = map.get_or_insert(rgb(200, 10, 10));
        assert_eq!(first, 'B');
        assert_eq!(map.get_or_insert(rgb(200, 10, 10)), 'B');
        assert_eq!(map.get_or_insert(rgb(10, 200, 10)), 'C');
        assert_eq!(map.entries().len(), 3);
    }

    #[test]
    fn test_table_caps_at_z() {
        let mut map = StyleMap::new(Color::Black, Font::Courier, 18);
        for i in 0..40u8 {
            map.get_or_insert(rgb(i, i, 100));
        }
        assert_eq!(map.entries().len(), MAX_STYLES);
        assert_eq!(map.get_or_insert(rgb(250, 250, 250)), 'Z');
    }

    #[test]
    fn test_update_font_applies_to_entries() {
        let mut map = StyleMap::new(Color::Black, Font::Courier, 18);
        map.get_or_insert(rgb(1, 2, 3));
        map.update_font(Font::Screen, 12);
        assert!(map.entries().iter().all(|e| e.size == 12));
    }

    #[test]
    fn test_reset_keeps_only_plain_entry() {
        let mut map = StyleMap::new(Color::Black, Font::Courier, 18);
        map.get_or_insert(rgb(9, 9, 9));
        map.reset(Color::White);
        assert_eq!(map.entries().len(), 1);
        assert_eq!(map.entries()[0].color, Color::White);
        assert_eq!(map.get_or_insert(rgb(9, 9, 9)), 'B');
    }
}
