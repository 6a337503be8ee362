use std::time::Duration;

use fltk::{
    app::{self, Sender},
    enums::{Color, FrameType},
    frame::Frame,
    group::Flex,
    prelude::*,
};

use crate::app::domain::{ColorMode, Message, Notice, NoticeLevel};

pub const NOTICE_HEIGHT: i32 = 30;

/// Banner under the tab strip that hides itself after a delay.
pub struct NoticeBanner {
    pub frame: Frame,
    generation: u64,
}

impl NoticeBanner {
    pub fn new() -> Self {
        let mut frame = Frame::default().with_size(0, 0);
        frame.set_frame(FrameType::FlatBox);
        frame.set_label_size(13);
        frame.hide();
        Self { frame, generation: 0 }
    }

    /// Show `notice` and schedule `Message::DismissNotice` after `duration`.
    /// A newer notice invalidates the pending dismissal of an older one.
    pub fn show(
        &mut self,
        notice: &Notice,
        mode: ColorMode,
        duration: Duration,
        flex: &mut Flex,
        sender: Sender<Message>,
    ) {
        self.generation += 1;
        let generation = self.generation;

        let (bg, fg) = colors(notice.level, mode);
        self.frame.set_color(bg);
        self.frame.set_label_color(fg);
        self.frame.set_label(&format!("  {}", notice.text));
        self.frame.show();
        flex.fixed(&self.frame, NOTICE_HEIGHT);
        flex.layout();

        app::add_timeout3(duration.as_secs_f64(), move |_| {
            sender.send(Message::DismissNotice(generation));
        });
    }

    /// Hide the banner if `generation` is still the latest notice.
    pub fn dismiss(&mut self, generation: u64, flex: &mut Flex) {
        if generation != self.generation || !self.frame.visible() {
            return;
        }
        self.frame.hide();
        flex.fixed(&self.frame, 0);
        flex.layout();
    }
}

impl Default for NoticeBanner {
    fn default() -> Self {
        Self::new()
    }
}

fn colors(level: NoticeLevel, mode: ColorMode) -> (Color, Color) {
    match (level, mode) {
        (NoticeLevel::Success, ColorMode::Light) => (Color::from_rgb(198, 246, 213), Color::Black),
        (NoticeLevel::Success, ColorMode::Dark) => (Color::from_rgb(34, 84, 61), Color::White),
        (NoticeLevel::Warning, ColorMode::Light) => (Color::from_rgb(255, 250, 205), Color::Black),
        (NoticeLevel::Warning, ColorMode::Dark) => (Color::from_rgb(139, 128, 0), Color::White),
    }
}
