// SPDX-License-Identifier: MPL-2.0

//! Integration tests for media classification and photo encoding

use camera_capture::MediaKind;
use camera_capture::media::photo;
use camera_capture::session::CameraFrame;
use std::path::Path;
use std::sync::Arc;

#[test]
fn test_review_classification_matches_scratch_names() {
    // The two scratch file names the component actually writes
    assert_eq!(MediaKind::from_path(Path::new("photo.jpg")), MediaKind::Photo);
    assert_eq!(MediaKind::from_path(Path::new("video.mov")), MediaKind::Video);
}

#[test]
fn test_photo_pipeline_produces_reviewable_jpeg() {
    let width = 64u32;
    let height = 48u32;
    let data: Vec<u8> = std::iter::repeat([10u8, 120, 240, 255])
        .take((width * height) as usize)
        .flatten()
        .collect();
    let frame = CameraFrame {
        width,
        height,
        data: Arc::from(data.as_slice()),
    };

    let dir = std::env::temp_dir().join(format!("capture-it-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("photo.jpg");

    let media = photo::encode_and_save(&frame, &path).expect("photo encode should succeed");
    assert_eq!(MediaKind::from_path(&media.path), MediaKind::Photo);
    assert!(media.bytes.len() > 2, "encoded file should not be empty");

    let decoded = image::load_from_memory(&media.bytes).expect("output should decode as an image");
    assert_eq!(decoded.width(), width);
    assert_eq!(decoded.height(), height);

    std::fs::remove_dir_all(&dir).unwrap();
}
