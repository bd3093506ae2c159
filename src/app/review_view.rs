// SPDX-License-Identifier: GPL-3.0-only

//! Post-capture review screen: the captured media with retake and accept

use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, ContentFit, Length};
use cosmic::widget::{self, icon, image};

use crate::app::state::{AppModel, Message, ReviewState};
use crate::fl;
use crate::media::MediaKind;

impl AppModel {
    pub fn build_review_view<'a>(&'a self, review: &'a ReviewState) -> Element<'a, Message> {
        let media: Element<'a, Message> = match review.media.kind {
            MediaKind::Photo => {
                let handle = image::Handle::from_bytes(review.media.bytes.as_ref().clone());
                widget::image(handle)
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into()
            }
            MediaKind::Video => match &review.video_frame {
                Some(frame) => {
                    let handle =
                        image::Handle::from_rgba(frame.width, frame.height, frame.data.to_vec());
                    widget::image(handle)
                        .content_fit(ContentFit::Contain)
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .into()
                }
                // First playback frame has not arrived yet
                None => widget::Space::new(Length::Fill, Length::Fill).into(),
            },
        };

        let spacing = cosmic::theme::spacing();

        let retake_button =
            widget::button::icon(icon::from_name("go-previous-symbolic")).on_press(Message::Retake);
        let top_bar = widget::row()
            .padding(spacing.space_xs)
            .push(retake_button)
            .push(widget::horizontal_space().width(Length::Fill));

        let accept_label = self
            .options
            .accept_label
            .clone()
            .unwrap_or_else(|| fl!("use-media"));
        let accept_button = widget::button::suggested(accept_label).on_press(Message::Accept);
        let bottom_bar = widget::container(accept_button)
            .width(Length::Fill)
            .padding(spacing.space_l)
            .align_x(Alignment::Center);

        let chrome = widget::column()
            .push(top_bar)
            .push(widget::vertical_space().height(Length::Fill))
            .push(bottom_bar)
            .width(Length::Fill)
            .height(Length::Fill);

        widget::container(
            cosmic::iced::widget::stack![media, chrome]
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| widget::container::Style {
            background: Some(Background::Color(Color::BLACK)),
            ..Default::default()
        })
        .into()
    }
}
