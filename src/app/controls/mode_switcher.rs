// SPDX-License-Identifier: MPL-2.0

//! Photo/Video mode switcher

use cosmic::Element;
use cosmic::widget;

use crate::app::state::{AppModel, Message};
use crate::fl;
use crate::session::SessionMode;

impl AppModel {
    /// Build the mode switcher row
    ///
    /// The video button only appears when the caller allows video and a
    /// microphone is available; switching is locked while recording.
    pub fn build_mode_switcher(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();
        let locked = self.capture.recording.is_recording();

        let class_for = |mode: SessionMode| {
            if self.mode == mode {
                cosmic::theme::Button::Suggested
            } else {
                cosmic::theme::Button::Text
            }
        };

        let mut photo_button =
            widget::button::text(fl!("mode-photo")).class(class_for(SessionMode::Photo));
        if !locked {
            photo_button = photo_button.on_press(Message::SetMode(SessionMode::Photo));
        }

        let mut row = widget::row()
            .push(photo_button)
            .spacing(spacing.space_xxs);

        if self.video_available() {
            let mut video_button =
                widget::button::text(fl!("mode-video")).class(class_for(SessionMode::Video));
            if !locked {
                video_button = video_button.on_press(Message::SetMode(SessionMode::Video));
            }
            row = row.push(video_button);
        }

        row.into()
    }
}
