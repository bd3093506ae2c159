// SPDX-License-Identifier: GPL-3.0-only

//! Message dispatch
//!
//! `update` routes every message to a focused handler method; the handlers
//! live in `handlers`, grouped by functional domain.

use cosmic::Task;

use crate::app::state::{AppModel, Message};

impl AppModel {
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== System =====
            Message::UpdateConfig(config) => self.handle_update_config(config),
            Message::CameraPermission(state) => self.handle_camera_permission(state),
            Message::MicrophonePermission(state) => self.handle_microphone_permission(state),
            Message::OpenPrivacySettings => self.handle_open_privacy_settings(),

            // ===== Session =====
            Message::CamerasEnumerated(result) => self.handle_cameras_enumerated(result),
            Message::ToggleFacing => self.handle_toggle_facing(),
            Message::SetMode(mode) => self.handle_set_mode(mode),
            Message::SessionFailed(err) => self.handle_session_failed(err),
            Message::PreviewFrame(frame) => self.handle_preview_frame(frame),
            Message::OrientationChanged(orientation) => {
                self.handle_orientation_changed(orientation)
            }
            Message::OrientationSettled(orientation) => {
                self.handle_orientation_settled(orientation)
            }

            // ===== Capture =====
            Message::CapturePhoto => self.handle_capture_photo(),
            Message::PhotoSaved(result) => self.handle_photo_saved(result),
            Message::ToggleRecording => self.handle_toggle_recording(),
            Message::RecordingTick(serial) => self.handle_recording_tick(serial),
            Message::RecordingFinished(result) => self.handle_recording_finished(result),

            // ===== Review =====
            Message::ReviewFrame(frame) => self.handle_review_frame(frame),
            Message::Accept => self.handle_accept(),
            Message::Retake => self.handle_retake(),
            Message::Dismiss => self.handle_dismiss(),
        }
    }
}
