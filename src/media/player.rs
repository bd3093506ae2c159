// SPDX-License-Identifier: GPL-3.0-only

//! Looping playback of a recorded movie for the review screen

use gstreamer as gst;
use gstreamer::prelude::*;
use gstreamer_app::AppSink;
use gstreamer_video::VideoInfo;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::errors::AppError;
use crate::session::types::{CameraFrame, FrameSender};

/// Decodes a movie file and delivers RGBA frames to the review surface
///
/// Playback starts on `play` and loops until the player is dropped. Audio
/// tracks in the file are decoded and played through the default output.
pub struct ReviewPlayer {
    pipeline: gst::Pipeline,
    running: Arc<AtomicBool>,
}

impl ReviewPlayer {
    pub fn new(path: &Path, sender: FrameSender) -> Result<Self, AppError> {
        gst::init().map_err(|e| AppError::Other(e.to_string()))?;

        let location = path.display();
        let description = format!(
            "filesrc location=\"{location}\" ! decodebin name=decode \
             decode. ! queue ! videoconvert ! video/x-raw,format=RGBA \
             ! appsink name=review_sink \
             decode. ! queue ! audioconvert ! audioresample ! autoaudiosink",
        );
        let element = gst::parse::launch(&description)
            .map_err(|e| AppError::Other(format!("review pipeline: {e}")))?;
        let pipeline = element
            .downcast::<gst::Pipeline>()
            .map_err(|_| AppError::Other("review pipeline: not a pipeline".into()))?;

        let appsink = pipeline
            .by_name("review_sink")
            .and_then(|e| e.downcast::<AppSink>().ok())
            .ok_or_else(|| AppError::Other("review pipeline: appsink missing".into()))?;
        install_frame_callback(&appsink, sender);

        let running = Arc::new(AtomicBool::new(true));
        spawn_loop_thread(&pipeline, Arc::clone(&running));

        Ok(Self { pipeline, running })
    }

    pub fn play(&self) -> Result<(), AppError> {
        self.pipeline
            .set_state(gst::State::Playing)
            .map(|_| ())
            .map_err(|e| AppError::Other(format!("review playback: {e}")))
    }

}

impl Drop for ReviewPlayer {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Err(e) = self.pipeline.set_state(gst::State::Null) {
            tracing::warn!(error = %e, "failed to stop review player");
        }
    }
}

/// Watch the bus and restart playback on end of stream
fn spawn_loop_thread(pipeline: &gst::Pipeline, running: Arc<AtomicBool>) {
    let Some(bus) = pipeline.bus() else {
        return;
    };
    let pipeline = pipeline.clone();
    std::thread::spawn(move || {
        let poll = gst::ClockTime::from_mseconds(500);
        while running.load(Ordering::Relaxed) {
            let Some(message) = bus.timed_pop(poll) else {
                continue;
            };
            match message.view() {
                gst::MessageView::Eos(_) => {
                    let seeked = pipeline.seek_simple(
                        gst::SeekFlags::FLUSH | gst::SeekFlags::KEY_UNIT,
                        gst::ClockTime::ZERO,
                    );
                    if let Err(e) = seeked {
                        tracing::warn!(error = %e, "failed to restart review playback");
                        break;
                    }
                }
                gst::MessageView::Error(err) => {
                    tracing::warn!(error = %err.error(), "review playback error");
                    break;
                }
                _ => {}
            }
        }
    });
}

fn install_frame_callback(appsink: &AppSink, sender: FrameSender) {
    appsink.set_callbacks(
        gstreamer_app::AppSinkCallbacks::builder()
            .new_sample(move |sink| {
                let sample = sink.pull_sample().map_err(|_| gst::FlowError::Eos)?;
                let buffer = sample.buffer().ok_or(gst::FlowError::Error)?;
                let caps = sample.caps().ok_or(gst::FlowError::Error)?;
                let info = VideoInfo::from_caps(caps).map_err(|_| gst::FlowError::Error)?;
                let map = buffer.map_readable().map_err(|_| gst::FlowError::Error)?;

                let frame = CameraFrame {
                    width: info.width(),
                    height: info.height(),
                    data: Arc::from(map.as_slice()),
                };
                let _ = sender.clone().try_send(frame);
                Ok(gst::FlowSuccess::Ok)
            })
            .build(),
    );
}
