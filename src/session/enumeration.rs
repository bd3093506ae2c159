// SPDX-License-Identifier: GPL-3.0-only

//! Camera and audio source discovery through the GStreamer device monitor

use gstreamer as gst;
use gstreamer::prelude::*;

use super::types::{CameraDevice, Facing};
use crate::errors::SessionError;

/// Enumerate video sources exposed by PipeWire
///
/// Blocking; run it off the UI thread.
pub fn enumerate_cameras() -> Result<Vec<CameraDevice>, SessionError> {
    gst::init().map_err(|e| SessionError::BackendError(e.to_string()))?;

    let monitor = gst::DeviceMonitor::new();
    monitor.add_filter(Some("Video/Source"), None);
    monitor
        .start()
        .map_err(|e| SessionError::BackendError(e.to_string()))?;

    let mut cameras = Vec::new();
    for device in monitor.devices() {
        let name = device.display_name().to_string();
        let properties = device.properties();

        let target = properties.as_ref().and_then(|props| {
            props
                .get::<u64>("object.serial")
                .map(|serial| serial.to_string())
                .ok()
        });

        let facing = classify_facing(&name, properties.as_ref());

        tracing::debug!(%name, ?target, %facing, "discovered camera");
        cameras.push(CameraDevice {
            name,
            target,
            facing,
        });
    }
    monitor.stop();

    Ok(cameras)
}

/// Whether at least one camera is visible to the device monitor
///
/// Used as a permission heuristic when the desktop portal is unavailable:
/// a sandboxed process with camera access revoked sees no devices.
pub fn any_camera_present() -> bool {
    enumerate_cameras().map(|c| !c.is_empty()).unwrap_or(false)
}

/// Whether at least one audio capture source exists
pub fn any_audio_source_present() -> bool {
    if gst::init().is_err() {
        return false;
    }
    let monitor = gst::DeviceMonitor::new();
    monitor.add_filter(Some("Audio/Source"), None);
    if monitor.start().is_err() {
        return false;
    }
    let present = !monitor.devices().is_empty();
    monitor.stop();
    present
}

/// Classify a device as front- or back-facing
///
/// Prefers explicit location properties (libcamera exposes these on phones
/// and convertibles), then falls back to name heuristics. Laptop webcams
/// rarely carry a location and almost always face the user.
fn classify_facing(name: &str, properties: Option<&gst::Structure>) -> Facing {
    if let Some(props) = properties {
        for key in ["api.libcamera.location", "camera.position"] {
            if let Ok(location) = props.get::<String>(key) {
                return match location.as_str() {
                    "front" | "user" => Facing::Front,
                    _ => Facing::Back,
                };
            }
        }
    }

    let lowered = name.to_lowercase();
    if ["front", "user", "integrated", "built-in"]
        .iter()
        .any(|hint| lowered.contains(hint))
    {
        Facing::Front
    } else {
        Facing::Back
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_heuristics_classify_facing() {
        assert_eq!(classify_facing("Integrated Camera", None), Facing::Front);
        assert_eq!(classify_facing("Front Camera", None), Facing::Front);
        assert_eq!(classify_facing("USB 4K Capture", None), Facing::Back);
        assert_eq!(classify_facing("Rear Camera", None), Facing::Back);
    }
}
