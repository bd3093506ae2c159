// SPDX-License-Identifier: GPL-3.0-only

//! Application model and message types

use cosmic::iced::Color;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::oneshot;

use crate::config::Config;
use crate::constants::capture;
use crate::errors::{PhotoError, RecordingError, SessionError};
use crate::media::CapturedMedia;
use crate::orientation::{CaptureOrientation, DeviceOrientation};
use crate::permissions::{PermissionState, Permissions};
use crate::session::{CameraDevice, CameraFrame, SessionManager, SessionMode};
use crate::storage::ScratchDir;

/// Invoked when the user accepts a capture: absolute path plus file contents
pub type MediaCallback = Arc<dyn Fn(&Path, &[u8]) + Send + Sync>;

/// Caller-facing knobs for the capture component
#[derive(Clone)]
pub struct CaptureOptions {
    /// Called with the accepted capture; `None` just logs the path
    pub on_media: Option<MediaCallback>,
    /// Label of the accept button; defaults to a localized "Use This Media"
    pub accept_label: Option<String>,
    /// Fill color of the shutter button in photo mode
    pub photo_button_color: Color,
    /// Fill color of the shutter button in video mode
    pub record_button_color: Color,
    /// Whether video mode is offered at all
    pub video_allowed: bool,
    /// Recording length ceiling; the recorder is stopped exactly once when
    /// the elapsed duration reaches it
    pub max_video_duration_secs: u64,
    /// Quit the process when the component is dismissed (standalone binary)
    pub exit_on_dismiss: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            on_media: None,
            accept_label: None,
            photo_button_color: Color::WHITE,
            record_button_color: Color::from_rgb(0.86, 0.15, 0.15),
            video_allowed: true,
            max_video_duration_secs: capture::DEFAULT_MAX_VIDEO_DURATION_SECS,
            exit_on_dismiss: false,
        }
    }
}

impl std::fmt::Debug for CaptureOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureOptions")
            .field("on_media", &self.on_media.as_ref().map(|_| "…"))
            .field("accept_label", &self.accept_label)
            .field("video_allowed", &self.video_allowed)
            .field("max_video_duration_secs", &self.max_video_duration_secs)
            .field("exit_on_dismiss", &self.exit_on_dismiss)
            .finish()
    }
}

/// Outcome of a recording-duration tick
pub enum TickOutcome {
    /// No recording in progress
    Inactive,
    /// Keep ticking
    Continue,
    /// The ceiling was reached; the caller must fire this stop signal.
    /// Returned at most once per recording.
    Cutoff(oneshot::Sender<()>),
}

/// Recording lifecycle as seen by the UI
#[derive(Debug, Default)]
pub enum RecordingState {
    #[default]
    Idle,
    Recording {
        /// Stamps the recording; duration ticks carry it so a chain left
        /// over from a stopped recording cannot drive a new one
        serial: u64,
        /// Whole elapsed seconds, driven by the periodic tick
        ticks: u64,
        /// Taken exactly once, by the stop button or the duration cutoff
        stop_sender: Option<oneshot::Sender<()>>,
    },
}

impl RecordingState {
    pub fn start(serial: u64, stop_sender: oneshot::Sender<()>) -> Self {
        RecordingState::Recording {
            serial,
            ticks: 0,
            stop_sender: Some(stop_sender),
        }
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, RecordingState::Recording { .. })
    }

    /// Elapsed recording duration in whole seconds
    pub fn duration_secs(&self) -> u64 {
        match self {
            RecordingState::Idle => 0,
            RecordingState::Recording { ticks, .. } => *ticks,
        }
    }

    /// Take the stop signal, if it has not been fired yet
    pub fn take_stop_sender(&mut self) -> Option<oneshot::Sender<()>> {
        match self {
            RecordingState::Idle => None,
            RecordingState::Recording { stop_sender, .. } => stop_sender.take(),
        }
    }

    /// Advance the duration counter by one tick and decide what to do next.
    ///
    /// A tick stamped for a different recording returns `Inactive`, which
    /// ends its chain without touching the current counter.
    pub fn register_tick(&mut self, tick_serial: u64, ceiling_secs: u64) -> TickOutcome {
        let RecordingState::Recording {
            serial,
            ticks,
            stop_sender,
            ..
        } = self
        else {
            return TickOutcome::Inactive;
        };
        if *serial != tick_serial {
            return TickOutcome::Inactive;
        }
        if *ticks < ceiling_secs {
            *ticks += 1;
        }
        if *ticks >= ceiling_secs {
            match stop_sender.take() {
                Some(sender) => TickOutcome::Cutoff(sender),
                None => TickOutcome::Continue,
            }
        } else {
            TickOutcome::Continue
        }
    }
}

/// Review screen state: the finished capture plus, for videos, the latest
/// playback frame
#[derive(Debug)]
pub struct ReviewState {
    pub media: CapturedMedia,
    pub video_frame: Option<CameraFrame>,
}

/// Per-capture transient state, cleared when the session is reconfigured
/// or the review screen is left
#[derive(Debug, Default)]
pub struct CaptureState {
    pub recording: RecordingState,
    pub review: Option<ReviewState>,
    /// Latest live preview frame
    pub current_frame: Option<CameraFrame>,
    /// Shutter pressed, encode still in flight
    pub is_capturing: bool,
    pub last_error: Option<String>,
    /// Total recordings started; never reset, so serials stay unique
    recordings_started: u64,
}

impl CaptureState {
    /// Start a recording stamped with a fresh serial; returns the serial
    /// the duration-tick chain must carry.
    pub fn begin_recording(&mut self, stop_sender: oneshot::Sender<()>) -> u64 {
        self.recordings_started += 1;
        let serial = self.recordings_started;
        self.recording = RecordingState::start(serial, stop_sender);
        serial
    }

    /// A committed configuration replaces the session wholesale; any
    /// recording progress, review, or stale frame belongs to the old one.
    pub fn reset_for_new_session(&mut self) {
        let started = self.recordings_started;
        *self = CaptureState::default();
        self.recordings_started = started;
    }

    /// Leave the review screen and return to the live preview
    pub fn clear_review(&mut self) {
        self.review = None;
        self.recording = RecordingState::Idle;
        self.is_capturing = false;
        self.last_error = None;
    }
}

/// The main application model
pub struct AppModel {
    pub core: cosmic::Core,
    pub options: CaptureOptions,
    pub config: Config,
    pub config_handler: Option<cosmic::cosmic_config::Config>,

    pub permissions: Permissions,
    pub session: SessionManager,
    pub mode: SessionMode,
    pub capture: CaptureState,

    /// Preview is blanked while a rotation settles
    pub preview_hidden: bool,
    pub device_orientation: DeviceOrientation,
    pub capture_orientation: CaptureOrientation,

    pub scratch: ScratchDir,
}

/// Messages emitted by the UI and by background tasks
#[derive(Debug, Clone)]
pub enum Message {
    UpdateConfig(Config),

    CameraPermission(PermissionState),
    MicrophonePermission(PermissionState),
    OpenPrivacySettings,

    CamerasEnumerated(Result<Vec<CameraDevice>, SessionError>),
    ToggleFacing,
    SetMode(SessionMode),
    SessionFailed(SessionError),
    PreviewFrame(CameraFrame),

    OrientationChanged(DeviceOrientation),
    OrientationSettled(DeviceOrientation),

    CapturePhoto,
    PhotoSaved(Result<CapturedMedia, PhotoError>),

    ToggleRecording,
    /// Carries the serial of the recording whose chain scheduled it
    RecordingTick(u64),
    RecordingFinished(Result<CapturedMedia, RecordingError>),

    ReviewFrame(CameraFrame),
    Accept,
    Retake,
    Dismiss,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn recording_with_channel() -> (RecordingState, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        (RecordingState::start(1, tx), rx)
    }

    fn capture_with_recording() -> (CaptureState, u64, oneshot::Receiver<()>) {
        let mut capture = CaptureState::default();
        let (tx, rx) = oneshot::channel();
        let serial = capture.begin_recording(tx);
        (capture, serial, rx)
    }

    #[test]
    fn duration_counts_ticks() {
        let (mut state, _rx) = recording_with_channel();
        assert_eq!(state.duration_secs(), 0);
        for _ in 0..5 {
            assert!(matches!(state.register_tick(1, 15), TickOutcome::Continue));
        }
        assert_eq!(state.duration_secs(), 5);
    }

    #[test]
    fn ceiling_fires_cutoff_exactly_once() {
        let (mut state, mut rx) = recording_with_channel();
        for _ in 0..14 {
            assert!(matches!(state.register_tick(1, 15), TickOutcome::Continue));
        }
        let outcome = state.register_tick(1, 15);
        let TickOutcome::Cutoff(sender) = outcome else {
            panic!("fifteenth tick must hit the ceiling");
        };
        sender.send(()).ok();
        assert!(rx.try_recv().is_ok());

        // Further ticks never produce a second stop signal, and the
        // reported duration stays pinned at the ceiling.
        for _ in 0..3 {
            assert!(matches!(state.register_tick(1, 15), TickOutcome::Continue));
        }
        assert_eq!(state.duration_secs(), 15);
    }

    #[test]
    fn manual_stop_disarms_cutoff() {
        let (mut state, _rx) = recording_with_channel();
        assert!(state.take_stop_sender().is_some());
        assert!(state.take_stop_sender().is_none());
        for _ in 0..20 {
            assert!(!matches!(state.register_tick(1, 15), TickOutcome::Cutoff(_)));
        }
    }

    #[test]
    fn idle_state_reports_inactive_ticks() {
        let mut state = RecordingState::Idle;
        assert!(matches!(state.register_tick(1, 15), TickOutcome::Inactive));
        assert_eq!(state.duration_secs(), 0);
    }

    #[test]
    fn stale_tick_from_previous_recording_is_ignored() {
        // A stopped recording can leave one last tick in flight; when a new
        // recording starts inside that window, the stale tick must not
        // advance the new counter or keep its own chain alive.
        let (mut capture, first, _rx1) = capture_with_recording();
        capture.recording = RecordingState::Idle;

        let (tx, _rx2) = oneshot::channel();
        let second = capture.begin_recording(tx);
        assert_ne!(first, second);

        assert!(matches!(
            capture.recording.register_tick(first, 15),
            TickOutcome::Inactive
        ));
        assert_eq!(capture.recording.duration_secs(), 0);

        assert!(matches!(
            capture.recording.register_tick(second, 15),
            TickOutcome::Continue
        ));
        assert_eq!(capture.recording.duration_secs(), 1);
    }

    #[test]
    fn new_session_resets_duration_and_review() {
        let (mut capture, serial, _rx) = capture_with_recording();
        for _ in 0..4 {
            capture.recording.register_tick(serial, 15);
        }
        capture.last_error = Some("pipeline stalled".into());
        assert_eq!(capture.recording.duration_secs(), 4);

        capture.reset_for_new_session();
        assert_eq!(capture.recording.duration_secs(), 0);
        assert!(!capture.recording.is_recording());
        assert!(capture.review.is_none());
        assert!(capture.current_frame.is_none());
        assert!(capture.last_error.is_none());

        // Serials keep growing across resets so a pre-reset tick can never
        // match a post-reset recording.
        let (tx, _rx) = oneshot::channel();
        let next = capture.begin_recording(tx);
        assert!(next > serial);
    }

    #[test]
    fn clearing_review_returns_to_live_state() {
        let mut capture = CaptureState::default();
        capture.is_capturing = true;
        capture.last_error = Some("encode failed".into());
        capture.review = Some(ReviewState {
            media: CapturedMedia {
                path: PathBuf::from("/tmp/photo.jpg"),
                bytes: Arc::new(vec![0xFF, 0xD8]),
                kind: crate::media::MediaKind::Photo,
            },
            video_frame: None,
        });
        let (tx, _rx) = oneshot::channel();
        capture.begin_recording(tx);

        capture.clear_review();
        assert!(capture.review.is_none());
        assert!(!capture.recording.is_recording());
        assert!(!capture.is_capturing);
        assert!(capture.last_error.is_none());
    }
}
