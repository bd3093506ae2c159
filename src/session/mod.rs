// SPDX-License-Identifier: GPL-3.0-only

//! Camera session: device discovery, the configuration state machine, and
//! the GStreamer pipelines that feed it

pub mod enumeration;
pub mod manager;
pub mod pipeline;
pub mod recorder;
pub mod types;

pub use manager::SessionManager;
pub use pipeline::PreviewPipeline;
pub use recorder::MovieRecorder;
pub use types::{CameraDevice, CameraFrame, Facing, SessionConfig, SessionMode, SessionState};
