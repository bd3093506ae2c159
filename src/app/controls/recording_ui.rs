// SPDX-License-Identifier: MPL-2.0

//! Recording indicator and timer

use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length};
use cosmic::widget;

use crate::app::state::{AppModel, Message};

impl AppModel {
    /// Build the recording indicator: red dot, elapsed time, and the ceiling
    ///
    /// Returns None when not recording.
    pub fn build_recording_indicator<'a>(&self) -> Option<Element<'a, Message>> {
        if !self.capture.recording.is_recording() {
            return None;
        }
        let spacing = cosmic::theme::spacing();

        let red_dot =
            widget::container(widget::Space::new(Length::Fixed(12.0), Length::Fixed(12.0))).style(
                |_theme| widget::container::Style {
                    background: Some(Background::Color(Color::from_rgb(1.0, 0.0, 0.0))),
                    border: cosmic::iced::Border {
                        radius: [6.0; 4].into(),
                        ..Default::default()
                    },
                    ..Default::default()
                },
            );

        let elapsed = self.capture.recording.duration_secs();
        let ceiling = self.options.max_video_duration_secs;
        let label = format!(
            "{:02}:{:02} / {:02}:{:02}",
            elapsed / 60,
            elapsed % 60,
            ceiling / 60,
            ceiling % 60
        );

        Some(
            widget::row()
                .align_y(Alignment::Center)
                .spacing(spacing.space_xxs)
                .push(red_dot)
                .push(widget::text(label).size(14))
                .into(),
        )
    }
}
