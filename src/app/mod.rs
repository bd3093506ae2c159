// SPDX-License-Identifier: MPL-2.0

//! Application module: model, message handling, and UI rendering
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, CaptureOptions)
//! - `preview`: Live camera preview widget
//! - `review_view`: Post-capture review screen
//! - `controls`: Shutter button, mode switcher, recording timer, top bar
//! - `view`: Screen composition
//! - `update`: Message dispatch
//! - `handlers`: Handler methods, grouped by domain
//! - `subscriptions`: Preview frames, sensor orientation, review playback

mod controls;
mod handlers;
mod preview;
mod review_view;
mod state;
mod subscriptions;
mod update;
mod view;

use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::{Element, Task};
use tracing::error;

use crate::config::Config;
use crate::errors::SessionError;
use crate::orientation::{CaptureOrientation, DeviceOrientation};
use crate::permissions::{self, Permissions};
use crate::session::{SessionManager, SessionMode, enumeration};
use crate::storage::ScratchDir;
pub use state::{AppModel, CaptureOptions, CaptureState, Message, RecordingState, ReviewState};

impl cosmic::Application for AppModel {
    type Executor = cosmic::executor::Default;

    /// Caller-facing capture options
    type Flags = CaptureOptions;

    type Message = Message;

    const APP_ID: &'static str = "org.cosmic-utils.CameraCapture";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    fn init(core: cosmic::Core, flags: Self::Flags) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let (config_handler, config) =
            match cosmic_config::Config::new(Self::APP_ID, Config::VERSION) {
                Ok(handler) => {
                    let config = match Config::get_entry(&handler) {
                        Ok(config) => config,
                        Err((errors, config)) => {
                            error!(?errors, "errors loading config");
                            config
                        }
                    };
                    (Some(handler), config)
                }
                Err(err) => {
                    error!(%err, "failed to create config handler");
                    (None, Config::default())
                }
            };

        let scratch = ScratchDir::create().unwrap_or_else(|err| {
            error!(error = %err, "failed to create scratch directory");
            ScratchDir::at_temp_root()
        });

        if let Err(err) = gstreamer::init() {
            error!(error = %err, "failed to initialize GStreamer");
        }

        let app = AppModel {
            core,
            options: flags,
            config,
            config_handler,
            permissions: Permissions::default(),
            session: SessionManager::new(),
            mode: SessionMode::Photo,
            capture: CaptureState::default(),
            preview_hidden: false,
            device_orientation: DeviceOrientation::FaceUp,
            capture_orientation: CaptureOrientation::Portrait,
            scratch,
        };

        let enumerate_task = Task::perform(
            async {
                tokio::task::spawn_blocking(enumeration::enumerate_cameras)
                    .await
                    .map_err(|e| SessionError::BackendError(e.to_string()))
                    .and_then(|result| result)
            },
            |result| cosmic::Action::App(Message::CamerasEnumerated(result)),
        );
        let camera_permission_task = Task::perform(permissions::check_camera_permission(), |s| {
            cosmic::Action::App(Message::CameraPermission(s))
        });
        let microphone_permission_task =
            Task::perform(permissions::check_microphone_permission(), |s| {
                cosmic::Action::App(Message::MicrophonePermission(s))
            });

        (
            app,
            Task::batch([
                enumerate_task,
                camera_permission_task,
                microphone_permission_task,
            ]),
        )
    }

    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        AppModel::update(self, message)
    }

    fn view(&self) -> Element<'_, Self::Message> {
        AppModel::view(self)
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        let config_sub = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        Subscription::batch([
            config_sub,
            subscriptions::preview(self),
            subscriptions::orientation(),
            subscriptions::review_playback(self),
        ])
    }
}
