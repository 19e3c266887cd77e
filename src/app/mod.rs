// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the landing page sections.
//!
//! The `App` struct wires together the page sections (header, showcases,
//! contact form), localization, and persisted preferences, and translates
//! messages into side effects like config persistence or programmatic
//! scrolling. Policy decisions (window sizing, tick cadence, persistence
//! format) stay close to the main update loop so user-facing behavior is easy
//! to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::ui::contact_section;
use crate::ui::qr_demo;
use crate::ui::solutions;
use crate::ui::theming::ThemeMode;
use iced::{Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state that bridges page sections, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    /// Config directory override from the CLI, threaded through saves.
    config_dir: Option<PathBuf>,
    /// Warning key when the settings file existed but could not be parsed.
    config_warning: Option<String>,
    theme_mode: ThemeMode,
    solutions: solutions::State,
    qr_demo: qr_demo::State,
    contact: contact_section::State,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    /// Current vertical scroll offset of the landing page.
    scroll_offset: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("scroll_offset", &self.scroll_offset)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 900;

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let now = Instant::now();
        let config = Config::default();
        Self {
            i18n: I18n::default(),
            screen: Screen::Landing,
            solutions: solutions::State::new(
                config.showcase.interval(),
                config.showcase.transition(),
                now,
            ),
            qr_demo: qr_demo::State::new(
                config.showcase.interval(),
                config.showcase.transition(),
                now,
            ),
            contact: contact_section::State::new(),
            config,
            config_dir: None,
            config_warning: None,
            theme_mode: ThemeMode::System,
            menu_open: false,
            scroll_offset: 0.0,
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);

        let now = Instant::now();
        let app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            solutions: solutions::State::new(
                config.showcase.interval(),
                config.showcase.transition(),
                now,
            ),
            qr_demo: qr_demo::State::new(
                config.showcase.interval(),
                config.showcase.transition(),
                now,
            ),
            config,
            config_dir,
            config_warning,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_starts_on_landing() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Landing);
        assert!(!app.menu_open);
        assert_eq!(app.scroll_offset, 0.0);
    }

    #[test]
    fn title_is_localized() {
        let app = App::default();
        assert_eq!(app.title(), "QRS-Me");
    }

    #[test]
    fn theme_follows_mode() {
        let mut app = App::default();
        app.theme_mode = ThemeMode::Light;
        assert!(matches!(app.theme(), Theme::Light));
        app.theme_mode = ThemeMode::Dark;
        assert!(matches!(app.theme(), Theme::Dark));
    }
}
