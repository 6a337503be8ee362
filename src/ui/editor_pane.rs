use fltk::{
    app::Sender,
    enums::{Color, Font},
    prelude::*,
    text::{StyleTableEntry, TextBuffer, TextEditor, WrapMode},
};

use crate::app::domain::{EditorOptions, FontChoice, Message, SourceKind};
use crate::app::infrastructure::buffer::{buffer_text_no_leak, replace_text_if_changed};

/// One source editor: the text widget plus its text and style buffers.
pub struct EditorPane {
    pub kind: SourceKind,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub style_buffer: TextBuffer,
}

impl EditorPane {
    /// Create the pane. Every insert or delete posts
    /// `Message::SourceModified(kind)`; the style buffer is padded or trimmed
    /// in the same callback so it always matches the text length.
    pub fn new(kind: SourceKind, sender: Sender<Message>) -> Self {
        let mut buffer = TextBuffer::default();
        let style_buffer = TextBuffer::default();

        let mut style_buf = style_buffer.clone();
        buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted == 0 && deleted == 0 {
                return;
            }
            if inserted > 0 {
                let filler: String = std::iter::repeat_n('A', inserted as usize).collect();
                style_buf.insert(pos, &filler);
            }
            if deleted > 0 {
                style_buf.remove(pos, pos + deleted);
            }
            sender.send(Message::SourceModified(kind));
        });

        let mut editor = TextEditor::new(0, 0, 0, 0, "");
        editor.set_buffer(buffer.clone());
        editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
        editor.set_linenumber_fgcolor(Color::from_rgb(100, 100, 100));

        Self {
            kind,
            editor,
            buffer,
            style_buffer,
        }
    }

    pub fn text(&self) -> String {
        buffer_text_no_leak(&self.buffer)
    }

    /// Load text coming from the playground rather than from typing.
    pub fn load_text(&mut self, text: &str) -> bool {
        replace_text_if_changed(&mut self.buffer, text)
    }

    pub fn bind_styles(&mut self, table: Vec<StyleTableEntry>) {
        self.editor.set_highlight_data(self.style_buffer.clone(), table);
    }

    pub fn apply_options(&mut self, options: &EditorOptions) {
        self.editor.set_text_font(fltk_font(options.font));
        self.editor.set_text_size(options.font_size);
        self.set_word_wrap(options.word_wrap);
        self.set_line_numbers(options.line_numbers);
    }

    pub fn set_word_wrap(&mut self, enabled: bool) {
        if enabled {
            self.editor.wrap_mode(WrapMode::AtBounds, 0);
        } else {
            self.editor.wrap_mode(WrapMode::None, 0);
        }
        self.editor.redraw();
    }

    /// Size the gutter to the line count, or hide it.
    pub fn set_line_numbers(&mut self, enabled: bool) {
        if !enabled {
            self.editor.set_linenumber_width(0);
            return;
        }
        let line_count = self.buffer.count_lines(0, self.buffer.length());
        let digits = ((line_count + 1) as f64).log10().floor() as i32 + 1;
        self.editor.set_linenumber_width((digits * 8 + 16).max(40));
    }

    pub fn set_font_size(&mut self, size: i32) {
        self.editor.set_text_size(size);
        self.editor.redraw();
    }
}

pub fn fltk_font(choice: FontChoice) -> Font {
    match choice {
        FontChoice::ScreenBold => Font::ScreenBold,
        FontChoice::Courier => Font::Courier,
        FontChoice::HelveticaMono => Font::Screen,
    }
}
