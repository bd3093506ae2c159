// SPDX-License-Identifier: GPL-3.0-only

//! Photo capture and video recording

use cosmic::Task;
use tracing::{info, warn};

use crate::app::state::{AppModel, Message, RecordingState, ReviewState, TickOutcome};
use crate::constants::capture::DURATION_TICK_MS;
use crate::errors::{PhotoError, RecordingError};
use crate::media::{CapturedMedia, photo};
use crate::session::{MovieRecorder, SessionMode};

impl AppModel {
    /// Create a delayed task that sends a message after the given millis
    pub(crate) fn delay_task(millis: u64, message: Message) -> Task<cosmic::Action<Message>> {
        Task::perform(
            async move {
                tokio::time::sleep(tokio::time::Duration::from_millis(millis)).await;
                message
            },
            cosmic::Action::App,
        )
    }

    /// Encode the most recent preview frame to `photo.jpg`
    pub(crate) fn handle_capture_photo(&mut self) -> Task<cosmic::Action<Message>> {
        if self.capture.is_capturing || self.capture.review.is_some() {
            return Task::none();
        }
        let Some(frame) = self.capture.current_frame.clone() else {
            self.capture.last_error = Some(PhotoError::NoFrameAvailable.to_string());
            return Task::none();
        };

        self.capture.is_capturing = true;
        let path = self.scratch.photo_path();
        let save_task = Task::perform(
            async move {
                tokio::task::spawn_blocking(move || photo::encode_and_save(&frame, &path))
                    .await
                    .map_err(|e| PhotoError::EncodingFailed(e.to_string()))
                    .and_then(|result| result)
            },
            |result| cosmic::Action::App(Message::PhotoSaved(result)),
        );
        save_task
    }

    pub(crate) fn handle_photo_saved(
        &mut self,
        result: Result<CapturedMedia, PhotoError>,
    ) -> Task<cosmic::Action<Message>> {
        self.capture.is_capturing = false;
        match result {
            Ok(media) => {
                self.capture.review = Some(ReviewState {
                    media,
                    video_frame: None,
                });
            }
            Err(err) => {
                warn!(error = %err, "photo capture failed");
                self.capture.last_error = Some(err.to_string());
            }
        }
        Task::none()
    }

    /// Start a recording, or signal the running one to stop
    pub(crate) fn handle_toggle_recording(&mut self) -> Task<cosmic::Action<Message>> {
        if self.capture.recording.is_recording() {
            if let Some(sender) = self.capture.recording.take_stop_sender() {
                info!("stop requested");
                let _ = sender.send(());
            }
            return Task::none();
        }

        if self.mode != SessionMode::Video {
            self.capture.last_error = Some(RecordingError::NotRecording.to_string());
            return Task::none();
        }
        let Some(config) = self.session.config().cloned() else {
            return Task::none();
        };
        if let Err(err) = self.session.begin_recording() {
            self.capture.last_error = Some(err.to_string());
            return Task::none();
        }

        let include_audio = self.permissions.microphone.is_granted();
        let orientation = self.capture_orientation;
        let mirror = self.config.mirror_preview && config.facing == crate::session::Facing::Front;
        let output = self.scratch.video_path();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel();
        let serial = self.capture.begin_recording(stop_tx);

        let record_task = Task::perform(
            async move {
                let recorder = tokio::task::spawn_blocking(move || {
                    let recorder =
                        MovieRecorder::new(&config, orientation, mirror, include_audio, &output)?;
                    recorder.start()?;
                    Ok::<_, RecordingError>(recorder)
                })
                .await
                .map_err(|e| RecordingError::StartFailed(e.to_string()))
                .and_then(|result| result)?;

                // Either the stop button or the duration cutoff fires this
                let _ = stop_rx.await;

                let path = tokio::task::spawn_blocking(move || recorder.stop())
                    .await
                    .map_err(|e| RecordingError::StopFailed(e.to_string()))
                    .and_then(|result| result)?;
                CapturedMedia::load(path)
                    .await
                    .map_err(|e| RecordingError::StopFailed(e.to_string()))
            },
            |result| cosmic::Action::App(Message::RecordingFinished(result)),
        );
        Task::batch([
            record_task,
            Self::delay_task(DURATION_TICK_MS, Message::RecordingTick(serial)),
        ])
    }

    /// Advance the recording duration; stop exactly once at the ceiling.
    /// Ticks stamped for an earlier recording end their chain here.
    pub(crate) fn handle_recording_tick(&mut self, serial: u64) -> Task<cosmic::Action<Message>> {
        let ceiling = self.options.max_video_duration_secs;
        match self.capture.recording.register_tick(serial, ceiling) {
            TickOutcome::Inactive => Task::none(),
            TickOutcome::Continue => {
                Self::delay_task(DURATION_TICK_MS, Message::RecordingTick(serial))
            }
            TickOutcome::Cutoff(sender) => {
                info!(ceiling, "recording duration ceiling reached");
                let _ = sender.send(());
                Self::delay_task(DURATION_TICK_MS, Message::RecordingTick(serial))
            }
        }
    }

    pub(crate) fn handle_recording_finished(
        &mut self,
        result: Result<CapturedMedia, RecordingError>,
    ) -> Task<cosmic::Action<Message>> {
        self.session.end_recording();
        self.capture.recording = RecordingState::Idle;
        match result {
            Ok(media) => {
                info!(path = %media.path.display(), "recording ready for review");
                self.capture.review = Some(ReviewState {
                    media,
                    video_frame: None,
                });
            }
            Err(err) => {
                warn!(error = %err, "recording failed");
                self.capture.last_error = Some(err.to_string());
            }
        }
        Task::none()
    }
}
