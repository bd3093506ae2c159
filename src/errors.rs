// SPDX-License-Identifier: MPL-2.0

//! Error types for the capture component

use crate::session::types::{Facing, SessionState};
use std::fmt;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Capture-session errors
    Session(SessionError),
    /// Recording-related errors
    Recording(RecordingError),
    /// Photo capture errors
    Photo(PhotoError),
    /// Storage/filesystem errors
    Storage(String),
    /// Generic error with message
    Other(String),
}

/// Capture-session errors
///
/// Session configuration is all-or-nothing: a failed configure leaves the
/// previous configuration committed and reports one of these variants to
/// the caller instead of logging and moving on.
#[derive(Debug, Clone)]
pub enum SessionError {
    /// No camera devices found at all
    NoCameraFound,
    /// No camera matches the requested facing
    NoMatchingDevice(Facing),
    /// Session configuration could not be applied
    ConfigurationFailed(String),
    /// A state transition was requested that the session state machine forbids
    InvalidTransition {
        from: SessionState,
        to: SessionState,
    },
    /// Pipeline/backend error (GStreamer)
    BackendError(String),
}

/// Recording-specific errors
#[derive(Debug, Clone)]
pub enum RecordingError {
    /// Failed to start recording
    StartFailed(String),
    /// Failed to stop recording
    StopFailed(String),
    /// No recording in progress
    NotRecording,
    /// Pipeline error during recording
    PipelineError(String),
}

/// Photo capture errors
#[derive(Debug, Clone)]
pub enum PhotoError {
    /// No frame available for capture
    NoFrameAvailable,
    /// Encoding failed
    EncodingFailed(String),
    /// Save failed
    SaveFailed(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Session(e) => write!(f, "Session error: {}", e),
            AppError::Recording(e) => write!(f, "Recording error: {}", e),
            AppError::Photo(e) => write!(f, "Photo error: {}", e),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoCameraFound => write!(f, "No camera devices found"),
            SessionError::NoMatchingDevice(facing) => {
                write!(f, "No {} camera available", facing)
            }
            SessionError::ConfigurationFailed(msg) => {
                write!(f, "Session configuration failed: {}", msg)
            }
            SessionError::InvalidTransition { from, to } => {
                write!(f, "Invalid session transition: {:?} -> {:?}", from, to)
            }
            SessionError::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl fmt::Display for RecordingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordingError::StartFailed(msg) => write!(f, "Failed to start recording: {}", msg),
            RecordingError::StopFailed(msg) => write!(f, "Failed to stop recording: {}", msg),
            RecordingError::NotRecording => write!(f, "No recording in progress"),
            RecordingError::PipelineError(msg) => write!(f, "Pipeline error: {}", msg),
        }
    }
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoError::NoFrameAvailable => write!(f, "No frame available for capture"),
            PhotoError::EncodingFailed(msg) => write!(f, "Encoding failed: {}", msg),
            PhotoError::SaveFailed(msg) => write!(f, "Save failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for SessionError {}
impl std::error::Error for RecordingError {}
impl std::error::Error for PhotoError {}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        AppError::Session(err)
    }
}

impl From<RecordingError> for AppError {
    fn from(err: RecordingError) -> Self {
        AppError::Recording(err)
    }
}

impl From<PhotoError> for AppError {
    fn from(err: PhotoError) -> Self {
        AppError::Photo(err)
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for PhotoError {
    fn from(err: std::io::Error) -> Self {
        PhotoError::SaveFailed(err.to_string())
    }
}
