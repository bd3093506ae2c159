// SPDX-License-Identifier: GPL-3.0-only

//! Movie recorder: camera (and microphone) to a QuickTime file

use gstreamer as gst;
use gstreamer::prelude::*;
use std::path::{Path, PathBuf};

use super::types::SessionConfig;
use crate::constants::pipeline;
use crate::errors::RecordingError;
use crate::orientation::CaptureOrientation;

/// Writes H.264 video (and AAC audio) into a `.mov` container
///
/// `stop` flushes the muxer with an end-of-stream event before tearing the
/// pipeline down, so the file always ends up playable.
pub struct MovieRecorder {
    pipeline: gst::Pipeline,
    output: PathBuf,
    finished: bool,
}

impl MovieRecorder {
    pub fn new(
        config: &SessionConfig,
        orientation: CaptureOrientation,
        mirror: bool,
        include_audio: bool,
        output: &Path,
    ) -> Result<Self, RecordingError> {
        gst::init().map_err(|e| RecordingError::PipelineError(e.to_string()))?;

        let source = match &config.device.target {
            Some(serial) => format!("pipewiresrc target-object={serial}"),
            None => "pipewiresrc".to_string(),
        };
        let mirror_method = if mirror { "horizontal-flip" } else { "none" };
        let location = output.display();
        let mut description = format!(
            "{source} ! queue \
             ! videoconvert \
             ! videoflip method={mirror_method} \
             ! videoflip method={rotate} \
             ! x264enc tune=zerolatency speed-preset=veryfast \
             ! h264parse \
             ! queue \
             ! qtmux name=mux \
             ! filesink location=\"{location}\"",
            rotate = orientation.videoflip_method(),
        );
        if include_audio {
            description.push_str(
                " autoaudiosrc ! queue ! audioconvert ! audioresample \
                 ! avenc_aac ! aacparse ! queue ! mux.",
            );
        }
        tracing::debug!(%description, "building recording pipeline");

        let element = gst::parse::launch(&description)
            .map_err(|e| RecordingError::PipelineError(e.to_string()))?;
        let pipeline = element
            .downcast::<gst::Pipeline>()
            .map_err(|_| RecordingError::PipelineError("not a pipeline".into()))?;

        Ok(Self {
            pipeline,
            output: output.to_path_buf(),
            finished: false,
        })
    }

    /// Start writing to the output file
    pub fn start(&self) -> Result<(), RecordingError> {
        self.pipeline
            .set_state(gst::State::Playing)
            .map_err(|e| RecordingError::StartFailed(e.to_string()))?;
        // Confirm the pipeline actually reaches Playing so a dead source
        // surfaces as a start failure rather than an empty file
        let (result, _, _) = self
            .pipeline
            .state(gst::ClockTime::from_seconds(pipeline::START_TIMEOUT_SECS));
        result.map_err(|e| RecordingError::StartFailed(e.to_string()))?;
        tracing::info!(path = %self.output.display(), "recording started");
        Ok(())
    }

    /// Finalize the file. Blocking; run it off the UI thread.
    pub fn stop(mut self) -> Result<PathBuf, RecordingError> {
        self.pipeline.send_event(gst::event::Eos::new());

        let bus = self
            .pipeline
            .bus()
            .ok_or_else(|| RecordingError::StopFailed("pipeline has no bus".into()))?;
        let timeout = gst::ClockTime::from_seconds(pipeline::EOS_TIMEOUT_SECS);
        let mut flushed = false;
        while let Some(message) = bus.timed_pop(timeout) {
            match message.view() {
                gst::MessageView::Eos(_) => {
                    flushed = true;
                    break;
                }
                gst::MessageView::Error(err) => {
                    tracing::warn!(error = %err.error(), "recording pipeline error on stop");
                    break;
                }
                _ => {}
            }
        }

        self.pipeline
            .set_state(gst::State::Null)
            .map_err(|e| RecordingError::StopFailed(e.to_string()))?;
        self.finished = true;

        if !flushed {
            tracing::warn!("muxer did not confirm end of stream before timeout");
        }
        tracing::info!(path = %self.output.display(), "recording finalized");
        Ok(self.output.clone())
    }
}

impl Drop for MovieRecorder {
    fn drop(&mut self) {
        if !self.finished {
            let _ = self.pipeline.set_state(gst::State::Null);
        }
    }
}
