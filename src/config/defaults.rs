// SPDX-License-Identifier: MPL-2.0
//! Default values and valid ranges for configurable settings.

/// Automatic rotation interval for the showcase sections, in milliseconds.
pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = 3000;
pub const MIN_ROTATION_INTERVAL_MS: u64 = 1000;
pub const MAX_ROTATION_INTERVAL_MS: u64 = 30_000;

/// Transition window between the outgoing and incoming item, in milliseconds.
pub const DEFAULT_TRANSITION_MS: u64 = 300;
pub const MAX_TRANSITION_MS: u64 = 2000;

/// Duration of the metric count-up animation on solution cards.
pub const COUNTER_DURATION_MS: u64 = 1500;

/// Scroll offset past which the header switches to its elevated style.
pub const HEADER_ELEVATION_OFFSET: f32 = 10.0;

/// Scroll offset past which the back-to-top button appears.
pub const BACK_TO_TOP_OFFSET: f32 = 300.0;
