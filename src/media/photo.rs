// SPDX-License-Identifier: GPL-3.0-only

//! Still-image encoding

use image::codecs::jpeg::JpegEncoder;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use super::{CapturedMedia, MediaKind};
use crate::constants::capture::JPEG_QUALITY;
use crate::errors::PhotoError;
use crate::session::CameraFrame;

/// Encode a preview frame as JPEG and write it to `path`
///
/// Blocking; run it off the UI thread.
pub fn encode_and_save(frame: &CameraFrame, path: &Path) -> Result<CapturedMedia, PhotoError> {
    let rgba =
        image::RgbaImage::from_raw(frame.width, frame.height, frame.data.to_vec())
            .ok_or_else(|| PhotoError::EncodingFailed("frame size mismatch".into()))?;
    let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(Cursor::new(&mut bytes), JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(|e| PhotoError::EncodingFailed(e.to_string()))?;

    std::fs::write(path, &bytes)?;
    tracing::info!(path = %path.display(), size = bytes.len(), "photo saved");

    Ok(CapturedMedia {
        path: path.to_path_buf(),
        bytes: Arc::new(bytes),
        kind: MediaKind::Photo,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_frame(width: u32, height: u32) -> CameraFrame {
        let data: Vec<u8> = std::iter::repeat([200u8, 60, 30, 255])
            .take((width * height) as usize)
            .flatten()
            .collect();
        CameraFrame {
            width,
            height,
            data: Arc::from(data.as_slice()),
        }
    }

    #[test]
    fn encodes_frame_to_jpeg_file() {
        let dir = std::env::temp_dir().join(format!("photo-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("photo.jpg");

        let media = encode_and_save(&solid_frame(32, 24), &path).unwrap();
        assert_eq!(media.kind, MediaKind::Photo);
        assert_eq!(media.path, path);
        // JPEG magic bytes
        assert_eq!(&media.bytes[..2], &[0xFF, 0xD8]);
        assert_eq!(std::fs::read(&path).unwrap(), *media.bytes);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn truncated_frame_is_an_encoding_error() {
        let mut frame = solid_frame(32, 24);
        frame.data = Arc::from(&frame.data[..16]);
        let path = std::env::temp_dir().join("never-written.jpg");
        assert!(matches!(
            encode_and_save(&frame, &path),
            Err(PhotoError::EncodingFailed(_))
        ));
    }
}
