// SPDX-License-Identifier: MPL-2.0

//! Reusable UI controls

pub mod capture_button;
pub mod mode_switcher;
pub mod recording_ui;
pub mod top_bar;
