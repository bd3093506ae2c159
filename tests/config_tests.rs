// SPDX-License-Identifier: MPL-2.0

//! Integration tests for configuration defaults

use camera_capture::Config;
use camera_capture::session::Facing;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(
        config.last_facing,
        Facing::Back,
        "Back camera should be the initial facing"
    );
    assert_eq!(
        config.mirror_preview, true,
        "Mirror preview should be enabled by default"
    );
}

#[test]
fn test_config_roundtrips_through_serde() {
    let config = Config {
        last_facing: Facing::Front,
        mirror_preview: false,
    };
    let encoded = ron::to_string(&config).expect("config should serialize");
    let decoded: Config = ron::from_str(&encoded).expect("config should deserialize");
    assert_eq!(decoded, config);
}
