use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
};

use crate::app::domain::{ActiveTab, ColorMode, Message};

pub const TAB_BAR_HEIGHT: i32 = 32;

const TAB_WIDTH: i32 = 110;
const ICON_BUTTON_WIDTH: i32 = 38;

struct Palette {
    bar: Color,
    tab: Color,
    active_tab: Color,
    text: Color,
}

impl Palette {
    fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => Self {
                bar: Color::from_rgb(240, 240, 240),
                tab: Color::from_rgb(225, 225, 225),
                active_tab: Color::White,
                text: Color::Black,
            },
            ColorMode::Dark => Self {
                bar: Color::from_rgb(35, 35, 35),
                tab: Color::from_rgb(45, 45, 45),
                active_tab: Color::from_rgb(30, 30, 30),
                text: Color::from_rgb(220, 220, 220),
            },
        }
    }
}

/// Tab strip for the four panels plus the theme and clear buttons.
pub struct TabBar {
    pub widget: Flex,
    tabs: Vec<(ActiveTab, Button)>,
    theme_button: Button,
    clear_button: Button,
    active: ActiveTab,
    mode: ColorMode,
}

impl TabBar {
    pub fn new(sender: Sender<Message>) -> Self {
        let mut widget = Flex::default().with_size(0, TAB_BAR_HEIGHT);
        widget.set_type(FlexType::Row);
        widget.set_frame(FrameType::FlatBox);

        let mut tabs = Vec::with_capacity(ActiveTab::ALL.len());
        for tab in ActiveTab::ALL {
            let mut button = Button::default().with_label(tab.label());
            button.set_frame(FrameType::FlatBox);
            button.set_tooltip(tab.tooltip());
            button.set_callback(move |_| sender.send(Message::SelectTab(tab)));
            widget.fixed(&button, TAB_WIDTH);
            tabs.push((tab, button));
        }

        // spacer pushes the icon buttons to the right edge
        Frame::default();

        let mut theme_button = Button::default();
        theme_button.set_frame(FrameType::FlatBox);
        theme_button.set_tooltip("Toggle theme");
        theme_button.set_callback(move |_| sender.send(Message::ToggleTheme));
        widget.fixed(&theme_button, ICON_BUTTON_WIDTH);

        let mut clear_button = Button::default().with_label("@refresh");
        clear_button.set_frame(FrameType::FlatBox);
        clear_button.set_tooltip("Clean the code");
        clear_button.set_callback(move |_| sender.send(Message::ClearAll));
        widget.fixed(&clear_button, ICON_BUTTON_WIDTH);

        widget.end();

        let mut bar = Self {
            widget,
            tabs,
            theme_button,
            clear_button,
            active: ActiveTab::default(),
            mode: ColorMode::default(),
        };
        bar.restyle();
        bar
    }

    pub fn set_active(&mut self, tab: ActiveTab) {
        self.active = tab;
        self.restyle();
    }

    pub fn apply_theme(&mut self, mode: ColorMode) {
        self.mode = mode;
        self.restyle();
    }

    fn restyle(&mut self) {
        let palette = Palette::for_mode(self.mode);
        self.widget.set_color(palette.bar);

        for (tab, button) in &mut self.tabs {
            let is_active = *tab == self.active;
            button.set_color(if is_active { palette.active_tab } else { palette.tab });
            button.set_label_color(palette.text);
            button.set_label_font(if is_active {
                fltk::enums::Font::HelveticaBold
            } else {
                fltk::enums::Font::Helvetica
            });
            button.set_align(Align::Center | Align::Inside);
        }

        // Show the mode the button switches to
        let icon = match self.mode {
            ColorMode::Light => "☾",
            ColorMode::Dark => "☀",
        };
        for button in [&mut self.theme_button, &mut self.clear_button] {
            button.set_color(palette.tab);
            button.set_label_color(palette.text);
        }
        self.theme_button.set_label(icon);

        self.widget.redraw();
    }
}
