// SPDX-License-Identifier: MPL-2.0

//! Scratch-file storage for capture output
//!
//! Captured media is written to a per-run scratch directory under the system
//! temp dir: `photo.jpg` for stills and `video.mov` for recordings. Only the
//! most recent capture is kept; a retake overwrites it.

use crate::constants::capture;
use std::path::PathBuf;
use tracing::info;

/// Per-run scratch directory for capture output
#[derive(Debug, Clone)]
pub struct ScratchDir {
    root: PathBuf,
}

impl ScratchDir {
    /// Create the scratch directory under the system temp dir.
    ///
    /// The directory name includes the process id so concurrent instances do
    /// not clobber each other's captures.
    pub fn create() -> std::io::Result<Self> {
        let root = std::env::temp_dir().join(format!("camera-capture-{}", std::process::id()));
        std::fs::create_dir_all(&root)?;
        info!(path = %root.display(), "Scratch directory ready");
        Ok(Self { root })
    }

    /// Create a scratch directory rooted at an explicit path (used by tests)
    pub fn at(root: PathBuf) -> std::io::Result<Self> {
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Fall back to the bare temp dir when the per-run directory cannot be
    /// created. Captures then land directly in the temp dir.
    pub fn at_temp_root() -> Self {
        Self {
            root: std::env::temp_dir(),
        }
    }

    /// Path the next still capture will be written to
    pub fn photo_path(&self) -> PathBuf {
        self.root.join(capture::PHOTO_FILE_NAME)
    }

    /// Path the next recording will be written to
    pub fn video_path(&self) -> PathBuf {
        self.root.join(capture::VIDEO_FILE_NAME)
    }
}

/// Read a capture file back into memory (for the completion callback)
pub async fn read_media_bytes(path: PathBuf) -> std::io::Result<Vec<u8>> {
    tokio::fs::read(path).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_paths_use_fixed_names() {
        let dir = std::env::temp_dir().join("camera-capture-test-scratch");
        let scratch = ScratchDir::at(dir.clone()).unwrap();
        assert_eq!(scratch.photo_path(), dir.join("photo.jpg"));
        assert_eq!(scratch.video_path(), dir.join("video.mov"));
        let _ = std::fs::remove_dir_all(dir);
    }
}
