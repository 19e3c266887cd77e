// SPDX-License-Identifier: MPL-2.0
//! Reusable custom widgets.

pub mod animated_counter;
pub mod qr_pattern;

pub use animated_counter::AnimatedCounter;
pub use qr_pattern::QrPattern;
