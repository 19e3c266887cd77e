// SPDX-License-Identifier: MPL-2.0
//! `qrs_landing` is the QRS-Me marketing site rebuilt as a desktop
//! application with the Iced GUI framework.
//!
//! It renders the landing page sections (hero, interactive QR demo, rotating
//! solution showcase, company narrative, contact form) and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design. The timed rotation behind the showcases lives in [`showcase`]
//! as a reusable, framework-independent state machine.

#![doc(html_root_url = "https://docs.rs/qrs_landing/0.1.0")]

pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod i18n;
pub mod showcase;
pub mod ui;
