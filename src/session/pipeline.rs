// SPDX-License-Identifier: GPL-3.0-only

//! Live preview pipeline: PipeWire source to RGBA frames

use gstreamer as gst;
use gstreamer::prelude::*;
use gstreamer_app::AppSink;
use gstreamer_video::VideoInfo;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::oneshot;

use super::types::{CameraFrame, FrameSender, SessionConfig};
use crate::constants::{pipeline, timing};
use crate::errors::SessionError;
use crate::orientation::CaptureOrientation;

/// A running preview pipeline
///
/// Frames arrive on the channel handed to `new`. Dropping the value tears
/// the pipeline down.
pub struct PreviewPipeline {
    pipeline: gst::Pipeline,
    running: Arc<AtomicBool>,
    error_rx: Option<oneshot::Receiver<SessionError>>,
}

impl PreviewPipeline {
    /// Build and start a preview pipeline for a committed configuration
    pub fn new(
        config: &SessionConfig,
        orientation: CaptureOrientation,
        mirror: bool,
        sender: FrameSender,
    ) -> Result<Self, SessionError> {
        gst::init().map_err(|e| SessionError::BackendError(e.to_string()))?;

        let source = match &config.device.target {
            Some(serial) => format!("pipewiresrc target-object={serial}"),
            None => "pipewiresrc".to_string(),
        };
        let mirror_method = if mirror { "horizontal-flip" } else { "none" };
        let description = format!(
            "{source} ! queue leaky=downstream max-size-buffers={max_buffers} \
             ! videoconvert \
             ! videoflip method={mirror_method} \
             ! videoflip method={rotate} \
             ! videoconvert \
             ! video/x-raw,format=RGBA \
             ! appsink name=preview_sink sync=false",
            max_buffers = pipeline::MAX_BUFFERS,
            rotate = orientation.videoflip_method(),
        );
        tracing::debug!(%description, "building preview pipeline");

        let element = gst::parse::launch(&description)
            .map_err(|e| SessionError::ConfigurationFailed(e.to_string()))?;
        let pipeline = element
            .downcast::<gst::Pipeline>()
            .map_err(|_| SessionError::ConfigurationFailed("not a pipeline".into()))?;

        let appsink = pipeline
            .by_name("preview_sink")
            .and_then(|e| e.downcast::<AppSink>().ok())
            .ok_or_else(|| SessionError::ConfigurationFailed("appsink missing".into()))?;
        appsink.set_max_buffers(pipeline::MAX_BUFFERS);
        appsink.set_drop(true);
        install_frame_callback(&appsink, sender);

        pipeline
            .set_state(gst::State::Playing)
            .map_err(|e| SessionError::ConfigurationFailed(e.to_string()))?;

        let running = Arc::new(AtomicBool::new(true));
        let error_rx = spawn_bus_thread(&pipeline, Arc::clone(&running));

        Ok(Self {
            pipeline,
            running,
            error_rx: Some(error_rx),
        })
    }

    /// Resolve when the pipeline dies underneath us
    ///
    /// PipeWire sources normally never end; this fires when the device
    /// disappears or the pipeline fails.
    pub async fn wait_error(&mut self) -> SessionError {
        if let Some(rx) = &mut self.error_rx {
            let result = rx.await;
            self.error_rx = None;
            if let Ok(err) = result {
                return err;
            }
        }
        // Bus thread exited without reporting; park until torn down
        futures::future::pending::<()>().await;
        unreachable!()
    }
}

/// Watch the bus off-thread and report the first fatal condition
fn spawn_bus_thread(
    pipeline: &gst::Pipeline,
    running: Arc<AtomicBool>,
) -> oneshot::Receiver<SessionError> {
    let (error_tx, error_rx) = oneshot::channel();
    let Some(bus) = pipeline.bus() else {
        return error_rx;
    };
    std::thread::spawn(move || {
        let poll = gst::ClockTime::from_mseconds(500);
        while running.load(Ordering::Relaxed) {
            let Some(message) = bus.timed_pop(poll) else {
                continue;
            };
            match message.view() {
                gst::MessageView::Error(err) => {
                    let _ = error_tx.send(SessionError::BackendError(err.error().to_string()));
                    return;
                }
                gst::MessageView::Eos(_) => {
                    let _ =
                        error_tx.send(SessionError::BackendError("camera stream ended".into()));
                    return;
                }
                _ => {}
            }
        }
    });
    error_rx
}

impl Drop for PreviewPipeline {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Err(e) = self.pipeline.set_state(gst::State::Null) {
            tracing::warn!(error = %e, "failed to stop preview pipeline");
        }
    }
}

fn install_frame_callback(appsink: &AppSink, sender: FrameSender) {
    let frame_count = AtomicU64::new(0);
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

                let count = frame_count.fetch_add(1, Ordering::Relaxed);
                if count % timing::FRAME_LOG_INTERVAL == 0 {
                    tracing::trace!(
                        count,
                        width = frame.width,
                        height = frame.height,
                        "preview frame"
                    );
                }

                // Drop frames when the UI is behind rather than stall capture
                let mut sender = sender.clone();
                if sender.try_send(frame).is_err() && count % timing::FRAME_LOG_INTERVAL == 0 {
                    tracing::trace!("preview channel full, dropping frame");
                }
                Ok(gst::FlowSuccess::Ok)
            })
            .build(),
    );
}
