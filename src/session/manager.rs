// SPDX-License-Identifier: GPL-3.0-only

//! Session manager: owns the device list, the state machine, and the
//! committed configuration

use super::types::{CameraDevice, Facing, SessionConfig, SessionMode, SessionState};
use crate::errors::SessionError;

/// Coordinates configuration changes against the session state machine
///
/// Configuration is all-or-nothing: `configure` either commits a complete
/// `SessionConfig` and bumps the generation counter, or returns a typed
/// error and leaves the previous configuration untouched.
#[derive(Debug, Default)]
pub struct SessionManager {
    devices: Vec<CameraDevice>,
    state: SessionState,
    config: Option<SessionConfig>,
    /// Bumped on every committed configuration; keys the preview stream so
    /// a reconfigure tears the old pipeline down
    generation: u64,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> Option<&SessionConfig> {
        self.config.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn devices(&self) -> &[CameraDevice] {
        &self.devices
    }

    pub fn set_devices(&mut self, devices: Vec<CameraDevice>) {
        self.devices = devices;
    }

    /// Whether a device with the given facing exists
    pub fn has_facing(&self, facing: Facing) -> bool {
        self.devices.iter().any(|d| d.facing == facing)
    }

    /// First discovered device's facing, if any
    pub fn first_facing(&self) -> Option<Facing> {
        self.devices.first().map(|d| d.facing)
    }

    /// Commit a new session configuration
    ///
    /// Fails without side effects when no camera exists, no camera matches
    /// the requested facing, or a recording is in progress.
    pub fn configure(
        &mut self,
        mode: SessionMode,
        facing: Facing,
    ) -> Result<SessionConfig, SessionError> {
        if !self.state.can_configure() {
            return Err(SessionError::InvalidTransition {
                from: self.state,
                to: SessionState::Configuring,
            });
        }
        if self.devices.is_empty() {
            return Err(SessionError::NoCameraFound);
        }
        let device = self
            .devices
            .iter()
            .find(|d| d.facing == facing)
            .cloned()
            .ok_or(SessionError::NoMatchingDevice(facing))?;

        self.state = SessionState::Configuring;
        let config = SessionConfig {
            device,
            mode,
            facing,
        };
        self.config = Some(config.clone());
        self.generation += 1;
        self.state = match mode {
            SessionMode::Photo => SessionState::RunningPhoto,
            SessionMode::Video => SessionState::RunningVideo,
        };
        tracing::info!(?mode, %facing, generation = self.generation, "session configured");
        Ok(config)
    }

    /// Transition into `Recording`
    pub fn begin_recording(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::RunningVideo => {
                self.state = SessionState::Recording;
                Ok(())
            }
            from => Err(SessionError::InvalidTransition {
                from,
                to: SessionState::Recording,
            }),
        }
    }

    /// Transition back out of `Recording`
    ///
    /// Tolerates being called after a reconfigure already replaced the
    /// session, since the recorder finishes asynchronously.
    pub fn end_recording(&mut self) {
        if self.state == SessionState::Recording {
            self.state = SessionState::RunningVideo;
        }
    }

    /// Drop the committed configuration and return to `Idle`
    pub fn shutdown(&mut self) {
        self.state = SessionState::Idle;
        self.config = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front_and_back() -> Vec<CameraDevice> {
        vec![
            CameraDevice {
                name: "Front Camera".into(),
                target: Some("41".into()),
                facing: Facing::Front,
            },
            CameraDevice {
                name: "Rear Camera".into(),
                target: Some("42".into()),
                facing: Facing::Back,
            },
        ]
    }

    #[test]
    fn configure_without_devices_is_typed_error() {
        let mut manager = SessionManager::new();
        let err = manager
            .configure(SessionMode::Photo, Facing::Back)
            .unwrap_err();
        assert!(matches!(err, SessionError::NoCameraFound));
        assert_eq!(manager.state(), SessionState::Idle);
        assert!(manager.config().is_none());
    }

    #[test]
    fn configure_missing_facing_keeps_previous_config() {
        let mut manager = SessionManager::new();
        manager.set_devices(vec![CameraDevice {
            name: "Front Camera".into(),
            target: None,
            facing: Facing::Front,
        }]);
        manager
            .configure(SessionMode::Photo, Facing::Front)
            .unwrap();
        let generation = manager.generation();

        let err = manager
            .configure(SessionMode::Photo, Facing::Back)
            .unwrap_err();
        assert!(matches!(err, SessionError::NoMatchingDevice(Facing::Back)));
        assert_eq!(manager.state(), SessionState::RunningPhoto);
        assert_eq!(manager.config().unwrap().facing, Facing::Front);
        assert_eq!(manager.generation(), generation);
    }

    #[test]
    fn configure_commits_atomically_and_bumps_generation() {
        let mut manager = SessionManager::new();
        manager.set_devices(front_and_back());

        manager.configure(SessionMode::Photo, Facing::Back).unwrap();
        assert_eq!(manager.state(), SessionState::RunningPhoto);
        assert_eq!(manager.generation(), 1);

        manager
            .configure(SessionMode::Video, Facing::Front)
            .unwrap();
        assert_eq!(manager.state(), SessionState::RunningVideo);
        assert_eq!(manager.generation(), 2);
        assert_eq!(manager.config().unwrap().facing, Facing::Front);
    }

    #[test]
    fn recording_blocks_reconfigure() {
        let mut manager = SessionManager::new();
        manager.set_devices(front_and_back());
        manager
            .configure(SessionMode::Video, Facing::Back)
            .unwrap();
        manager.begin_recording().unwrap();

        let err = manager
            .configure(SessionMode::Video, Facing::Front)
            .unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidTransition {
                from: SessionState::Recording,
                ..
            }
        ));

        manager.end_recording();
        assert_eq!(manager.state(), SessionState::RunningVideo);
        assert!(
            manager
                .configure(SessionMode::Video, Facing::Front)
                .is_ok()
        );
    }

    #[test]
    fn recording_requires_video_session() {
        let mut manager = SessionManager::new();
        manager.set_devices(front_and_back());
        manager.configure(SessionMode::Photo, Facing::Back).unwrap();
        assert!(manager.begin_recording().is_err());
    }
}
