// SPDX-License-Identifier: MPL-2.0

//! Shutter button widget

use cosmic::Element;
use cosmic::iced::{Background, Color, Length};
use cosmic::widget;

use crate::app::state::{AppModel, Message};
use crate::constants::ui;
use crate::session::SessionMode;

impl AppModel {
    /// Build the shutter button
    ///
    /// A filled circle inside a ring. The fill color comes from the caller
    /// options (white for photo, red for video by default); recording and the
    /// press animation shrink the circle.
    pub fn build_capture_button(&self) -> Element<'_, Message> {
        let color = match self.mode {
            SessionMode::Video if self.capture.recording.is_recording() => Color {
                a: 1.0,
                ..darken(self.options.record_button_color)
            },
            SessionMode::Video => self.options.record_button_color,
            SessionMode::Photo if self.capture.is_capturing => Color::from_rgb(0.7, 0.7, 0.7),
            SessionMode::Photo => self.options.photo_button_color,
        };

        let (inner_size, outer_size) = if self.capture.recording.is_recording() {
            (ui::CAPTURE_BUTTON_INNER * 0.70, ui::CAPTURE_BUTTON_OUTER * 0.70)
        } else if self.capture.is_capturing {
            (ui::CAPTURE_BUTTON_INNER * 0.85, ui::CAPTURE_BUTTON_OUTER * 0.85)
        } else {
            (ui::CAPTURE_BUTTON_INNER, ui::CAPTURE_BUTTON_OUTER)
        };

        let inner = widget::container(widget::Space::new(
            Length::Fixed(inner_size),
            Length::Fixed(inner_size),
        ))
        .style(move |_theme| widget::container::Style {
            background: Some(Background::Color(color)),
            border: cosmic::iced::Border {
                radius: [ui::CAPTURE_BUTTON_RADIUS * (inner_size / ui::CAPTURE_BUTTON_INNER); 4]
                    .into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let button = widget::button::custom(inner)
            .on_press(match self.mode {
                SessionMode::Photo => Message::CapturePhoto,
                SessionMode::Video => Message::ToggleRecording,
            })
            .padding(0)
            .width(Length::Fixed(outer_size))
            .height(Length::Fixed(outer_size));

        // Fixed-size wrapper so the layout never shifts when the button
        // shrinks during recording
        widget::container(button)
            .width(Length::Fixed(ui::CAPTURE_BUTTON_OUTER))
            .height(Length::Fixed(ui::CAPTURE_BUTTON_OUTER))
            .center_x(Length::Fixed(ui::CAPTURE_BUTTON_OUTER))
            .center_y(Length::Fixed(ui::CAPTURE_BUTTON_OUTER))
            .into()
    }
}

fn darken(color: Color) -> Color {
    Color::from_rgb(color.r * 0.65, color.g * 0.65, color.b * 0.65)
}
