// SPDX-License-Identifier: GPL-3.0-only

//! Background streams feeding the UI: preview frames, sensor orientation,
//! and review playback

use cosmic::iced::Subscription;
use cosmic::iced::futures::{SinkExt, StreamExt};
use tracing::{debug, info, warn};

use super::state::{AppModel, Message};
use crate::constants::pipeline::FRAME_CHANNEL_CAPACITY;
use crate::media::player::ReviewPlayer;
use crate::orientation::DeviceOrientation;
use crate::session::types::FrameSender;
use crate::session::{Facing, PreviewPipeline};

const SENSOR_PROXY_DEST: &str = "net.hadess.SensorProxy";
const SENSOR_PROXY_PATH: &str = "/net/hadess/SensorProxy";

fn frame_channel() -> (FrameSender, futures::channel::mpsc::Receiver<crate::session::CameraFrame>)
{
    futures::channel::mpsc::channel(FRAME_CHANNEL_CAPACITY)
}

/// Live preview stream for the committed session configuration
///
/// Keyed on the configuration generation plus the rendering parameters, so
/// a reconfigure, a rotation, or a mirror toggle tears the pipeline down
/// and builds a fresh one.
pub fn preview(model: &AppModel) -> Subscription<Message> {
    let streaming = model.permissions.camera.is_granted()
        && model.capture.review.is_none()
        && model.session.config().is_some();
    if !streaming {
        return Subscription::none();
    }
    let Some(config) = model.session.config().cloned() else {
        return Subscription::none();
    };

    let orientation = model.capture_orientation;
    let mirror = model.config.mirror_preview && config.facing == Facing::Front;
    let generation = model.session.generation();

    Subscription::run_with_id(
        ("preview", generation, orientation, mirror),
        cosmic::iced::stream::channel(FRAME_CHANNEL_CAPACITY, move |mut output| async move {
            info!(generation, %orientation, mirror, "preview stream started");
            let (sender, mut receiver) = frame_channel();

            let mut pipeline = match PreviewPipeline::new(&config, orientation, mirror, sender) {
                Ok(pipeline) => pipeline,
                Err(err) => {
                    warn!(error = %err, "preview pipeline failed to start");
                    let _ = output.send(Message::SessionFailed(err)).await;
                    futures::future::pending::<()>().await;
                    unreachable!();
                }
            };

            loop {
                tokio::select! {
                    maybe_frame = receiver.next() => {
                        let Some(frame) = maybe_frame else { break };
                        if output.send(Message::PreviewFrame(frame)).await.is_err() {
                            break;
                        }
                    }
                    // The source died underneath us (device unplugged,
                    // PipeWire restart)
                    err = pipeline.wait_error() => {
                        warn!(error = %err, "preview stream died");
                        let _ = output.send(Message::SessionFailed(err)).await;
                        break;
                    }
                }
            }

            drop(pipeline);
            futures::future::pending::<()>().await;
        }),
    )
}

/// Device-orientation events from iio-sensor-proxy
///
/// Devices without an accelerometer (desktops, most laptops) simply never
/// produce an event, leaving the capture orientation at portrait.
pub fn orientation() -> Subscription<Message> {
    Subscription::run_with_id(
        "sensor-orientation",
        cosmic::iced::stream::channel(16, move |mut output| async move {
            if let Err(err) = watch_accelerometer(&mut output).await {
                debug!(error = %err, "orientation sensor unavailable");
            }
            futures::future::pending::<()>().await;
        }),
    )
}

async fn watch_accelerometer(
    output: &mut futures::channel::mpsc::Sender<Message>,
) -> Result<(), zbus::Error> {
    let connection = zbus::Connection::system().await?;
    let proxy = zbus::Proxy::new(
        &connection,
        SENSOR_PROXY_DEST,
        SENSOR_PROXY_PATH,
        SENSOR_PROXY_DEST,
    )
    .await?;

    let has_accelerometer: bool = proxy.get_property("HasAccelerometer").await?;
    if !has_accelerometer {
        debug!("no accelerometer on this device");
        return Ok(());
    }
    proxy.call_method("ClaimAccelerometer", &()).await?;
    info!("accelerometer claimed");

    let initial: String = proxy.get_property("AccelerometerOrientation").await?;
    let _ = output
        .send(Message::OrientationChanged(
            DeviceOrientation::from_sensor_proxy(&initial),
        ))
        .await;

    let mut changes = proxy
        .receive_property_changed::<String>("AccelerometerOrientation")
        .await;
    while let Some(change) = changes.next().await {
        let value = change.get().await?;
        let orientation = DeviceOrientation::from_sensor_proxy(&value);
        debug!(%value, ?orientation, "orientation changed");
        if output
            .send(Message::OrientationChanged(orientation))
            .await
            .is_err()
        {
            break;
        }
    }
    Ok(())
}

/// Review playback stream; active only while reviewing a video
///
/// Dropping the subscription (retake, accept, dismiss) stops playback.
pub fn review_playback(model: &AppModel) -> Subscription<Message> {
    let Some(review) = &model.capture.review else {
        return Subscription::none();
    };
    if review.media.kind != crate::media::MediaKind::Video {
        return Subscription::none();
    }
    let path = review.media.path.clone();

    Subscription::run_with_id(
        ("review", path.clone()),
        cosmic::iced::stream::channel(FRAME_CHANNEL_CAPACITY, move |mut output| async move {
            let (sender, mut receiver) = frame_channel();
            let player = match ReviewPlayer::new(&path, sender) {
                Ok(player) => player,
                Err(err) => {
                    warn!(error = %err, "review player failed to start");
                    futures::future::pending::<()>().await;
                    unreachable!();
                }
            };
            if let Err(err) = player.play() {
                warn!(error = %err, "review playback did not start");
            }

            while let Some(frame) = receiver.next().await {
                if output.send(Message::ReviewFrame(frame)).await.is_err() {
                    break;
                }
            }
            drop(player);
            futures::future::pending::<()>().await;
        }),
    )
}
