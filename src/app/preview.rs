// SPDX-License-Identifier: MPL-2.0

//! Live preview widget: the most recent camera frame, letterboxed on black

use cosmic::Element;
use cosmic::iced::{Background, Color, ContentFit, Length};
use cosmic::widget::{self, image};

use crate::app::state::{AppModel, Message};
use crate::fl;

impl AppModel {
    /// Build the full-bleed camera preview
    ///
    /// Shows black while no frame has arrived yet and while a rotation is
    /// settling, so the user never sees a half-rotated image.
    pub fn build_camera_preview(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match (&self.capture.current_frame, self.preview_hidden) {
            (Some(frame), false) => {
                let handle =
                    image::Handle::from_rgba(frame.width, frame.height, frame.data.to_vec());
                widget::image(handle)
                    .content_fit(ContentFit::Cover)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into()
            }
            _ => widget::Space::new(Length::Fill, Length::Fill).into(),
        };

        widget::container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| widget::container::Style {
                background: Some(Background::Color(Color::BLACK)),
                ..Default::default()
            })
            .into()
    }

    /// Placeholder shown instead of the preview when no camera exists
    pub fn build_no_camera_notice(&self) -> Element<'_, Message> {
        widget::container(widget::text(fl!("no-camera")).size(16))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme| widget::container::Style {
            background: Some(Background::Color(Color::BLACK)),
            text_color: Some(Color::WHITE),
            ..Default::default()
        })
        .into()
    }
}
