// SPDX-License-Identifier: MPL-2.0

//! Camera capture component for the COSMIC desktop
//!
//! A full-screen capture surface: live preview, photo and video capture,
//! front/back switching, and a post-capture review screen that hands the
//! accepted file back to the caller.
//!
//! # Architecture
//!
//! - [`app`]: Application model, UI, and message handling
//! - [`session`]: Device discovery, the session state machine, pipelines
//! - [`media`]: Capture classification, photo encoding, review playback
//! - [`orientation`]: Sensor orientation to capture orientation mapping
//! - [`permissions`]: Camera/microphone permission gate
//! - [`config`]: Persisted configuration
//! - [`storage`]: Scratch-file handling for capture output

pub mod app;
pub mod config;
pub mod constants;
pub mod errors;
pub mod i18n;
pub mod media;
pub mod orientation;
pub mod permissions;
pub mod session;
pub mod storage;

// Re-export the embedding surface
pub use app::{AppModel, CaptureOptions, Message};
pub use config::Config;
pub use errors::AppError;
pub use media::{CapturedMedia, MediaKind};
