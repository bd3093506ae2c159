// SPDX-License-Identifier: GPL-3.0-only

//! Message handlers, grouped by functional domain
//!
//! - `session`: device discovery, configuration, preview frames, orientation
//! - `capture`: photo capture and video recording
//! - `review`: the post-capture review screen
//! - `system`: permissions, config persistence, URL launching

pub mod capture;
pub mod review;
pub mod session;
pub mod system;
