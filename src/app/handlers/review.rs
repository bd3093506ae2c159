// SPDX-License-Identifier: GPL-3.0-only

//! Post-capture review screen

use cosmic::Task;
use tracing::info;

use crate::app::state::{AppModel, Message};
use crate::session::CameraFrame;

impl AppModel {
    pub(crate) fn handle_review_frame(
        &mut self,
        frame: CameraFrame,
    ) -> Task<cosmic::Action<Message>> {
        if let Some(review) = &mut self.capture.review {
            review.video_frame = Some(frame);
        }
        Task::none()
    }

    /// Discard the capture and go back to the live preview
    ///
    /// The scratch file stays on disk; the next capture overwrites it.
    pub(crate) fn handle_retake(&mut self) -> Task<cosmic::Action<Message>> {
        if self.capture.review.is_some() {
            info!("capture discarded");
        }
        self.capture.clear_review();
        Task::none()
    }

    /// Hand the capture to the caller and dismiss the component
    pub(crate) fn handle_accept(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(review) = self.capture.review.take() else {
            return Task::none();
        };
        info!(path = %review.media.path.display(), kind = ?review.media.kind, "capture accepted");
        if let Some(callback) = &self.options.on_media {
            callback(&review.media.path, &review.media.bytes);
        }
        self.dismiss()
    }

    /// Close without accepting anything
    pub(crate) fn handle_dismiss(&mut self) -> Task<cosmic::Action<Message>> {
        info!("capture dismissed");
        self.dismiss()
    }

    fn dismiss(&mut self) -> Task<cosmic::Action<Message>> {
        if self.options.exit_on_dismiss {
            std::process::exit(0);
        }
        // Embedded use: drop back to the live preview
        self.capture.clear_review();
        Task::none()
    }
}
