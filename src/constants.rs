// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Capture output and timing constants
pub mod capture {
    /// Default maximum video recording duration in seconds.
    ///
    /// Once the recorded duration reaches this ceiling, recording is stopped
    /// automatically (exactly once).
    pub const DEFAULT_MAX_VIDEO_DURATION_SECS: u64 = 15;

    /// Interval between recording-duration ticks in milliseconds
    pub const DURATION_TICK_MS: u64 = 1_000;

    /// File name of the most recent still capture in the scratch directory
    pub const PHOTO_FILE_NAME: &str = "photo.jpg";

    /// File name of the most recent recording in the scratch directory
    pub const VIDEO_FILE_NAME: &str = "video.mov";

    /// JPEG quality used when encoding stills (0-100)
    pub const JPEG_QUALITY: u8 = 80;
}

/// Pipeline tuning
pub mod pipeline {
    /// Maximum buffered frames in the preview appsink
    pub const MAX_BUFFERS: u32 = 2;

    /// Capacity of the preview frame channel
    pub const FRAME_CHANNEL_CAPACITY: usize = 100;

    /// Timeout waiting for a pipeline to reach PLAYING, in seconds
    pub const START_TIMEOUT_SECS: u64 = 5;

    /// Timeout waiting for EOS when finalizing a recording, in seconds
    pub const EOS_TIMEOUT_SECS: u64 = 5;
}

/// Preview/orientation timing
pub mod timing {
    /// How long the preview stays hidden while an orientation change settles,
    /// in milliseconds. Masks the pipeline restart behind the rotation.
    pub const ORIENTATION_SETTLE_MS: u64 = 200;

    /// Frame-log throttling interval (log every N frames)
    pub const FRAME_LOG_INTERVAL: u64 = 300;
}

/// UI sizing
pub mod ui {
    /// Inner capture button circle diameter
    pub const CAPTURE_BUTTON_INNER: f32 = 64.0;

    /// Outer capture button ring diameter
    pub const CAPTURE_BUTTON_OUTER: f32 = 76.0;

    /// Capture button corner radius (half the inner diameter)
    pub const CAPTURE_BUTTON_RADIUS: f32 = 32.0;
}
