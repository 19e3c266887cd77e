// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page Sections
//!
//! - [`header`] - Sticky navigation bar with section links
//! - [`hero`] - Opening headline and call to action
//! - [`qr_demo`] - Interactive QR personalization showcase
//! - [`solutions`] - Rotating industry solution cards
//! - [`narrative`] - Company story, milestones, and credentials
//! - [`contact_section`] - Contact details and validated inquiry form
//! - [`footer`] - Link columns and copyright
//! - [`settings`] - Language and theme preferences
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (QR pattern, animated counter)
//! - [`styles`] - Centralized styling (buttons, containers, form inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod contact_section;
pub mod design_tokens;
pub mod footer;
pub mod header;
pub mod hero;
pub mod narrative;
pub mod qr_demo;
pub mod settings;
pub mod solutions;
pub mod styles;
pub mod theming;
pub mod widgets;
