// SPDX-License-Identifier: GPL-3.0-only

//! Captured media: classification, photo encoding, and review playback

pub mod photo;
pub mod player;

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// What kind of media a captured file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
}

impl MediaKind {
    /// Classify by file extension: `.mov` is video, anything else is a photo
    pub fn from_path(path: &Path) -> Self {
        let is_movie = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("mov"));
        if is_movie {
            MediaKind::Video
        } else {
            MediaKind::Photo
        }
    }
}

/// A finished capture ready for review
#[derive(Debug, Clone)]
pub struct CapturedMedia {
    pub path: PathBuf,
    /// Full file contents, shared cheaply across the UI
    pub bytes: Arc<Vec<u8>>,
    pub kind: MediaKind,
}

impl CapturedMedia {
    /// Load a finished capture from disk
    pub async fn load(path: PathBuf) -> std::io::Result<Self> {
        let bytes = crate::storage::read_media_bytes(path.clone()).await?;
        let kind = MediaKind::from_path(&path);
        Ok(Self {
            path,
            bytes: Arc::new(bytes),
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mov_extension_classifies_as_video() {
        assert_eq!(MediaKind::from_path(Path::new("video.mov")), MediaKind::Video);
        assert_eq!(MediaKind::from_path(Path::new("VIDEO.MOV")), MediaKind::Video);
        assert_eq!(
            MediaKind::from_path(Path::new("/tmp/session/clip.Mov")),
            MediaKind::Video
        );
    }

    #[test]
    fn everything_else_classifies_as_photo() {
        assert_eq!(MediaKind::from_path(Path::new("photo.jpg")), MediaKind::Photo);
        assert_eq!(MediaKind::from_path(Path::new("clip.mp4")), MediaKind::Photo);
        assert_eq!(MediaKind::from_path(Path::new("no_extension")), MediaKind::Photo);
        assert_eq!(MediaKind::from_path(Path::new("movfile")), MediaKind::Photo);
    }
}
