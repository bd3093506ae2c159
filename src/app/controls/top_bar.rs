// SPDX-License-Identifier: MPL-2.0

//! Top bar: dismiss on the left, flip camera on the right
//!
//! Hidden entirely while recording, matching the rest of the chrome.

use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, icon};

use crate::app::state::{AppModel, Message};

impl AppModel {
    pub fn build_top_bar(&self) -> Option<Element<'_, Message>> {
        if self.capture.recording.is_recording() {
            return None;
        }
        let spacing = cosmic::theme::spacing();

        let close_button = widget::button::icon(icon::from_name("window-close-symbolic"))
            .on_press(Message::Dismiss);

        let mut row = widget::row()
            .align_y(Alignment::Center)
            .padding(spacing.space_xs)
            .push(close_button)
            .push(widget::horizontal_space().width(Length::Fill));

        // Flipping only makes sense with a second camera to flip to
        let current = self.session.config().map(|c| c.facing);
        let can_flip = current
            .map(|facing| self.session.has_facing(facing.toggled()))
            .unwrap_or(false);
        if can_flip {
            row = row.push(
                widget::button::icon(icon::from_name("camera-switch-symbolic"))
                    .on_press(Message::ToggleFacing),
            );
        }

        Some(row.into())
    }
}
