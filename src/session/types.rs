// SPDX-License-Identifier: GPL-3.0-only

//! Shared types for the capture session

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which physical camera is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Facing {
    Front,
    #[default]
    Back,
}

impl Facing {
    /// The opposite facing (used by the flip-camera button)
    pub fn toggled(self) -> Self {
        match self {
            Facing::Front => Facing::Back,
            Facing::Back => Facing::Front,
        }
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Facing::Front => write!(f, "front"),
            Facing::Back => write!(f, "back"),
        }
    }
}

/// Capture mode the session is configured for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionMode {
    #[default]
    Photo,
    Video,
}

/// Capture session state machine
///
/// Mutated only by the `SessionManager`; everything else reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No configuration committed
    #[default]
    Idle,
    /// A configure is in flight; no configuration is committed yet
    Configuring,
    /// Committed with a still-image output
    RunningPhoto,
    /// Committed with a movie-file output (plus microphone input)
    RunningVideo,
    /// Movie-file output actively writing
    Recording,
}

impl SessionState {
    /// Whether this state allows starting a new configure
    pub fn can_configure(&self) -> bool {
        !matches!(self, SessionState::Recording)
    }
}

/// A camera device discovered through GStreamer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraDevice {
    /// Human-readable device name
    pub name: String,
    /// PipeWire object serial for `pipewiresrc target-object`; `None` lets
    /// PipeWire auto-select
    pub target: Option<String>,
    /// Facing classification derived from device properties
    pub facing: Facing,
}

/// Committed session configuration (all-or-nothing swap)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub device: CameraDevice,
    pub mode: SessionMode,
    pub facing: Facing,
}

/// A single decoded RGBA frame from the preview pipeline
#[derive(Debug, Clone)]
pub struct CameraFrame {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA pixels
    pub data: Arc<[u8]>,
}

/// Channel used by pipelines to deliver frames
pub type FrameSender = futures::channel::mpsc::Sender<CameraFrame>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_toggle_roundtrips() {
        assert_eq!(Facing::Front.toggled(), Facing::Back);
        assert_eq!(Facing::Back.toggled(), Facing::Front);
        assert_eq!(Facing::Front.toggled().toggled(), Facing::Front);
    }

    #[test]
    fn recording_state_blocks_configure() {
        assert!(SessionState::Idle.can_configure());
        assert!(SessionState::RunningPhoto.can_configure());
        assert!(SessionState::RunningVideo.can_configure());
        assert!(!SessionState::Recording.can_configure());
    }
}
