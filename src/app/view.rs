// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! Three top-level screens: the permission gate, the live capture screen,
//! and the review screen. The live screen is a stack of the full-bleed
//! preview with the control chrome layered on top.

use cosmic::Element;
use cosmic::iced::{Alignment, Background, Color, Length};
use cosmic::widget;

use crate::app::state::{AppModel, Message};
use crate::fl;

impl AppModel {
    pub fn view(&self) -> Element<'_, Message> {
        if self.permissions.camera.is_denied() {
            return self.build_permission_view();
        }
        if let Some(review) = &self.capture.review {
            return self.build_review_view(review);
        }
        self.build_live_view()
    }

    fn build_live_view(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let preview = if self.permissions.camera.is_granted() {
            if self.session.config().is_some() {
                self.build_camera_preview()
            } else {
                self.build_no_camera_notice()
            }
        } else {
            // Permission check still in flight
            centered_notice(fl!("checking-permissions"))
        };

        let mut chrome = widget::column().width(Length::Fill).height(Length::Fill);
        if let Some(top_bar) = self.build_top_bar() {
            chrome = chrome.push(top_bar);
        }
        if let Some(error) = &self.capture.last_error {
            chrome = chrome.push(
                widget::container(widget::text(error.clone()).size(14))
                    .width(Length::Fill)
                    .align_x(Alignment::Center)
                    .padding(spacing.space_xs)
                    .style(|_theme| widget::container::Style {
                        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.6))),
                        text_color: Some(Color::from_rgb(1.0, 0.6, 0.6)),
                        ..Default::default()
                    }),
            );
        }
        chrome = chrome.push(widget::vertical_space().height(Length::Fill));

        if let Some(indicator) = self.build_recording_indicator() {
            chrome = chrome.push(
                widget::container(indicator)
                    .width(Length::Fill)
                    .align_x(Alignment::Center)
                    .padding(spacing.space_xs),
            );
        }

        let mut bottom = widget::column()
            .align_x(Alignment::Center)
            .spacing(spacing.space_s)
            .push(self.build_capture_button());
        if !self.capture.recording.is_recording() {
            bottom = bottom.push(self.build_mode_switcher());
        }
        chrome = chrome.push(
            widget::container(bottom)
                .width(Length::Fill)
                .align_x(Alignment::Center)
                .padding(spacing.space_l),
        );

        widget::container(
            cosmic::iced::widget::stack![preview, chrome]
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

    /// Full-screen gate shown when camera access is denied
    fn build_permission_view(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let content = widget::column()
            .align_x(Alignment::Center)
            .spacing(spacing.space_m)
            .push(widget::text::title3(fl!("permission-denied-title")))
            .push(widget::text(fl!("permission-denied-body")).size(14))
            .push(
                widget::row()
                    .spacing(spacing.space_s)
                    .push(
                        widget::button::suggested(fl!("open-settings"))
                            .on_press(Message::OpenPrivacySettings),
                    )
                    .push(widget::button::standard(fl!("cancel")).on_press(Message::Dismiss)),
            );

        widget::container(content)
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

fn centered_notice<'a>(text: String) -> Element<'a, Message> {
    widget::container(widget::text(text).size(16))
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
