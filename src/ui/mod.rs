//! FLTK widgets: window, menu, tab strip, notice banner and the four panels.

pub mod editor_pane;
pub mod main_window;
pub mod menu;
pub mod notice;
pub mod output_view;
pub mod tab_bar;
pub mod theme;
