// SPDX-License-Identifier: GPL-3.0-only

use crate::session::types::Facing;
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};

/// Configuration data that persists between application runs.
#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq, Serialize, Deserialize)]
#[version = 1]
pub struct Config {
    /// Camera facing selected when the component was last dismissed
    pub last_facing: Facing,
    /// Mirror camera preview horizontally (selfie mode)
    pub mirror_preview: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            last_facing: Facing::Back,
            mirror_preview: true, // Default to mirrored (selfie mode)
        }
    }
}
