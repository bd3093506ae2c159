// SPDX-License-Identifier: GPL-3.0-only

//! Device-orientation to capture-orientation mapping
//!
//! Physical device orientation is reported by iio-sensor-proxy (see
//! `app::subscriptions`). The capture orientation applied to the preview and
//! to saved media is derived here.
//!
//! Landscape left/right are intentionally swapped relative to the naive
//! mapping: the sensor is mounted rotated relative to the display, so a
//! device rotated left presents a right-rotated image. Do not "fix" this.

use std::fmt;

/// Physical orientation of the device as reported by the accelerometer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceOrientation {
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    FaceUp,
    FaceDown,
}

impl DeviceOrientation {
    /// All orientations, for exhaustive tests and UI iteration
    pub const ALL: [DeviceOrientation; 6] = [
        DeviceOrientation::Portrait,
        DeviceOrientation::PortraitUpsideDown,
        DeviceOrientation::LandscapeLeft,
        DeviceOrientation::LandscapeRight,
        DeviceOrientation::FaceUp,
        DeviceOrientation::FaceDown,
    ];

    /// Parse the `AccelerometerOrientation` property strings emitted by
    /// iio-sensor-proxy. Unknown values (including "undefined") are treated
    /// as face-up, which maps to portrait downstream.
    pub fn from_sensor_proxy(value: &str) -> Self {
        match value {
            "normal" => DeviceOrientation::Portrait,
            "bottom-up" => DeviceOrientation::PortraitUpsideDown,
            "left-up" => DeviceOrientation::LandscapeLeft,
            "right-up" => DeviceOrientation::LandscapeRight,
            _ => DeviceOrientation::FaceUp,
        }
    }
}

/// Orientation applied to the capture connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaptureOrientation {
    #[default]
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
}

impl From<DeviceOrientation> for CaptureOrientation {
    fn from(orientation: DeviceOrientation) -> Self {
        match orientation {
            DeviceOrientation::Portrait => CaptureOrientation::Portrait,
            DeviceOrientation::PortraitUpsideDown => CaptureOrientation::PortraitUpsideDown,
            // Swapped on purpose (sensor mounting correction)
            DeviceOrientation::LandscapeLeft => CaptureOrientation::LandscapeRight,
            DeviceOrientation::LandscapeRight => CaptureOrientation::LandscapeLeft,
            // Flat on a table: keep portrait
            DeviceOrientation::FaceUp | DeviceOrientation::FaceDown => {
                CaptureOrientation::Portrait
            }
        }
    }
}

impl CaptureOrientation {
    /// The `videoflip` method name realizing this orientation in the
    /// preview pipeline
    pub fn videoflip_method(&self) -> &'static str {
        match self {
            CaptureOrientation::Portrait => "none",
            CaptureOrientation::PortraitUpsideDown => "rotate-180",
            CaptureOrientation::LandscapeLeft => "counterclockwise",
            CaptureOrientation::LandscapeRight => "clockwise",
        }
    }
}

impl fmt::Display for CaptureOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaptureOrientation::Portrait => "portrait",
            CaptureOrientation::PortraitUpsideDown => "portrait-upside-down",
            CaptureOrientation::LandscapeLeft => "landscape-left",
            CaptureOrientation::LandscapeRight => "landscape-right",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_total() {
        // Every device orientation maps somewhere; no panic path exists.
        for orientation in DeviceOrientation::ALL {
            let _ = CaptureOrientation::from(orientation);
        }
    }

    #[test]
    fn face_up_and_face_down_map_to_portrait() {
        assert_eq!(
            CaptureOrientation::from(DeviceOrientation::FaceUp),
            CaptureOrientation::Portrait
        );
        assert_eq!(
            CaptureOrientation::from(DeviceOrientation::FaceDown),
            CaptureOrientation::Portrait
        );
    }

    #[test]
    fn landscape_mapping_is_swapped() {
        assert_eq!(
            CaptureOrientation::from(DeviceOrientation::LandscapeLeft),
            CaptureOrientation::LandscapeRight
        );
        assert_eq!(
            CaptureOrientation::from(DeviceOrientation::LandscapeRight),
            CaptureOrientation::LandscapeLeft
        );
    }

    #[test]
    fn portrait_orientations_map_directly() {
        assert_eq!(
            CaptureOrientation::from(DeviceOrientation::Portrait),
            CaptureOrientation::Portrait
        );
        assert_eq!(
            CaptureOrientation::from(DeviceOrientation::PortraitUpsideDown),
            CaptureOrientation::PortraitUpsideDown
        );
    }

    #[test]
    fn sensor_proxy_strings_parse() {
        assert_eq!(
            DeviceOrientation::from_sensor_proxy("normal"),
            DeviceOrientation::Portrait
        );
        assert_eq!(
            DeviceOrientation::from_sensor_proxy("left-up"),
            DeviceOrientation::LandscapeLeft
        );
        assert_eq!(
            DeviceOrientation::from_sensor_proxy("undefined"),
            DeviceOrientation::FaceUp
        );
    }
}
