// SPDX-License-Identifier: GPL-3.0-only

//! Session configuration, preview frames, and orientation handling

use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use tracing::{debug, info, warn};

use crate::app::state::{AppModel, Message};
use crate::constants::timing;
use crate::errors::SessionError;
use crate::orientation::DeviceOrientation;
use crate::session::{CameraDevice, CameraFrame, Facing, SessionMode};

impl AppModel {
    pub(crate) fn handle_cameras_enumerated(
        &mut self,
        result: Result<Vec<CameraDevice>, SessionError>,
    ) -> Task<cosmic::Action<Message>> {
        match result {
            Ok(devices) => {
                info!(count = devices.len(), "cameras enumerated");
                self.session.set_devices(devices);
                self.maybe_start_session()
            }
            Err(err) => {
                warn!(error = %err, "camera enumeration failed");
                self.capture.last_error = Some(err.to_string());
                Task::none()
            }
        }
    }

    /// Configure the session once both the devices and the camera
    /// permission have arrived
    pub(crate) fn maybe_start_session(&mut self) -> Task<cosmic::Action<Message>> {
        if !self.permissions.camera.is_granted()
            || self.session.devices().is_empty()
            || self.session.config().is_some()
        {
            return Task::none();
        }
        // Prefer the remembered facing, but fall back to whatever camera
        // exists; laptops usually only have a front one.
        let facing = if self.session.has_facing(self.config.last_facing) {
            self.config.last_facing
        } else if let Some(first) = self.session.first_facing() {
            first
        } else {
            self.capture.last_error = Some(SessionError::NoCameraFound.to_string());
            return Task::none();
        };
        self.reconfigure(self.mode, facing);
        Task::none()
    }

    /// Commit a new configuration and reset per-session state
    ///
    /// On failure the previous configuration stays committed and the error
    /// is surfaced in the UI.
    pub(crate) fn reconfigure(&mut self, mode: SessionMode, facing: Facing) {
        match self.session.configure(mode, facing) {
            Ok(_) => {
                self.mode = mode;
                self.capture.reset_for_new_session();
            }
            Err(err) => {
                warn!(error = %err, ?mode, %facing, "session configuration failed");
                self.capture.last_error = Some(err.to_string());
            }
        }
    }

    pub(crate) fn handle_toggle_facing(&mut self) -> Task<cosmic::Action<Message>> {
        if self.capture.recording.is_recording() {
            return Task::none();
        }
        let current = self
            .session
            .config()
            .map(|c| c.facing)
            .unwrap_or(self.config.last_facing);
        let target = current.toggled();
        self.reconfigure(self.mode, target);

        if self.session.config().map(|c| c.facing) == Some(target) {
            self.config.last_facing = target;
            if let Some(handler) = self.config_handler.as_ref() {
                if let Err(err) = self.config.write_entry(handler) {
                    warn!(error = %err, "failed to persist camera facing");
                }
            }
        }
        Task::none()
    }

    pub(crate) fn handle_set_mode(&mut self, mode: SessionMode) -> Task<cosmic::Action<Message>> {
        if self.capture.recording.is_recording() || mode == self.mode {
            return Task::none();
        }
        if mode == SessionMode::Video && !self.video_available() {
            debug!("video mode unavailable");
            return Task::none();
        }
        let facing = self
            .session
            .config()
            .map(|c| c.facing)
            .unwrap_or(self.config.last_facing);
        self.reconfigure(mode, facing);
        Task::none()
    }

    /// Whether the mode switcher should offer video at all
    pub(crate) fn video_available(&self) -> bool {
        self.options.video_allowed && self.permissions.microphone.is_granted()
    }

    pub(crate) fn handle_session_failed(
        &mut self,
        err: SessionError,
    ) -> Task<cosmic::Action<Message>> {
        warn!(error = %err, "session failed");
        self.capture.last_error = Some(err.to_string());
        Task::none()
    }

    pub(crate) fn handle_preview_frame(
        &mut self,
        frame: CameraFrame,
    ) -> Task<cosmic::Action<Message>> {
        self.capture.current_frame = Some(frame);
        Task::none()
    }

    /// A rotation started: blank the preview and wait for it to settle
    /// before applying the new capture orientation
    pub(crate) fn handle_orientation_changed(
        &mut self,
        orientation: DeviceOrientation,
    ) -> Task<cosmic::Action<Message>> {
        if orientation == self.device_orientation {
            return Task::none();
        }
        debug!(?orientation, "device orientation changed");
        self.device_orientation = orientation;
        self.preview_hidden = true;
        Self::delay_task(
            timing::ORIENTATION_SETTLE_MS,
            Message::OrientationSettled(orientation),
        )
    }

    pub(crate) fn handle_orientation_settled(
        &mut self,
        orientation: DeviceOrientation,
    ) -> Task<cosmic::Action<Message>> {
        // A newer rotation superseded this one; its own settle is in flight
        if orientation != self.device_orientation {
            return Task::none();
        }
        self.capture_orientation = orientation.into();
        self.preview_hidden = false;
        Task::none()
    }
}
