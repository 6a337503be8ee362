use fltk::{
    app::Sender,
    enums::Event,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use crate::app::domain::{Message, SourceKind};
use super::editor_pane::EditorPane;
use super::notice::NoticeBanner;
use super::output_view::OutputView;
use super::tab_bar::{TabBar, TAB_BAR_HEIGHT};

pub const WINDOW_TITLE: &str = "CodePad";

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub tab_bar: TabBar,
    pub notice: NoticeBanner,
    /// Holds the four panels; only the active one is visible
    pub content: Flex,
    pub panes: Vec<EditorPane>,
    pub output: OutputView,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 1100, 760, WINDOW_TITLE);
    wind.set_xclass("CodePad");

    let mut flex = Flex::new(0, 0, 1100, 760, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let tab_bar = TabBar::new(*sender);
    flex.fixed(&tab_bar.widget, TAB_BAR_HEIGHT);

    let notice = NoticeBanner::new();
    flex.fixed(&notice.frame, 0);

    // Flex skips hidden children, so hiding three panels gives the fourth all the room
    let mut content = Flex::default();
    content.set_type(FlexType::Column);
    let panes: Vec<EditorPane> = SourceKind::ALL
        .into_iter()
        .map(|kind| EditorPane::new(kind, *sender))
        .collect();
    let output = OutputView::new();
    content.end();

    flex.end();
    wind.end();
    wind.resizable(&flex);

    // Only an explicit close request quits; FLTK also fires the callback on Escape
    let s = *sender;
    wind.set_callback(move |_| {
        if fltk::app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        flex,
        menu,
        tab_bar,
        notice,
        content,
        panes,
        output,
    }
}
