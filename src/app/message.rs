// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::content::Section;
use crate::ui::contact_section;
use crate::ui::header;
use crate::ui::hero;
use crate::ui::qr_demo;
use crate::ui::settings;
use crate::ui::solutions;
use iced::widget::scrollable;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Hero(hero::Message),
    Solutions(solutions::Message),
    QrDemo(qr_demo::Message),
    Contact(contact_section::Message),
    Settings(settings::Message),
    /// The landing page scrollable reported a new viewport.
    Scrolled(scrollable::Viewport),
    /// Smooth-scroll the landing page to a section anchor.
    ScrollToSection(Section),
    ScrollToTop,
    /// Periodic tick driving rotation and the metric counters.
    Tick(Instant),
    KeyPressed(iced::keyboard::key::Named),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `QRS_LANDING_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
