// SPDX-License-Identifier: GPL-3.0-only

//! Permission results, config persistence, and external launches

use cosmic::Task;
use tracing::info;

use crate::app::state::{AppModel, Message};
use crate::config::Config;
use crate::permissions::{self, PermissionState};

impl AppModel {
    pub(crate) fn handle_update_config(&mut self, config: Config) -> Task<cosmic::Action<Message>> {
        self.config = config;
        Task::none()
    }

    pub(crate) fn handle_camera_permission(
        &mut self,
        state: PermissionState,
    ) -> Task<cosmic::Action<Message>> {
        info!(?state, "camera permission resolved");
        self.permissions.camera = state;
        if state.is_granted() {
            self.maybe_start_session()
        } else {
            Task::none()
        }
    }

    pub(crate) fn handle_microphone_permission(
        &mut self,
        state: PermissionState,
    ) -> Task<cosmic::Action<Message>> {
        info!(?state, "microphone permission resolved");
        self.permissions.microphone = state;
        Task::none()
    }

    pub(crate) fn handle_open_privacy_settings(&mut self) -> Task<cosmic::Action<Message>> {
        permissions::open_privacy_settings();
        Task::none()
    }
}
