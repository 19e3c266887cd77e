// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Screen};
use crate::config;
use crate::content::Section;
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::hero;
use crate::ui::settings;
use iced::keyboard::key::Named;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

/// Widget id of the landing page scrollable, shared with the view.
pub const SCROLLABLE_ID: &str = "landing-page-scrollable";

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(msg) => match header::update(msg, &mut self.menu_open) {
                HeaderEvent::None => Task::none(),
                HeaderEvent::ScrollTo(section) => scroll_to(section),
                HeaderEvent::OpenSettings => {
                    self.screen = Screen::Settings;
                    Task::none()
                }
            },
            Message::Hero(hero::Message::Explore) => scroll_to(Section::Solutions),
            Message::Solutions(msg) => {
                self.solutions.update(msg, Instant::now());
                Task::none()
            }
            Message::QrDemo(msg) => {
                self.qr_demo.update(msg, Instant::now());
                Task::none()
            }
            Message::Contact(msg) => {
                self.contact.update(msg);
                Task::none()
            }
            Message::Settings(msg) => self.handle_settings(msg),
            Message::Scrolled(viewport) => {
                self.scroll_offset = viewport.absolute_offset().y;
                Task::none()
            }
            Message::ScrollToSection(section) => scroll_to(section),
            Message::ScrollToTop => snap_to(0.0),
            Message::Tick(now) => {
                self.solutions.tick(now);
                self.qr_demo.tick(now);
                Task::none()
            }
            Message::KeyPressed(key) => self.handle_key(key),
        }
    }

    fn handle_settings(&mut self, message: settings::Message) -> Task<Message> {
        match message {
            settings::Message::LanguageSelected(locale) => {
                self.i18n.set_locale(locale.clone());
                self.config.general.language = Some(locale.to_string());
                self.persist_config();
            }
            settings::Message::ThemeSelected(mode) => {
                self.theme_mode = mode;
                self.config.general.theme_mode = mode;
                self.persist_config();
            }
            settings::Message::Back => {
                self.screen = Screen::Landing;
            }
        }
        Task::none()
    }

    /// Saves the config, clearing a stale load warning once a good file has
    /// been written. Persistence is best-effort: a failed save leaves the
    /// running state untouched.
    fn persist_config(&mut self) {
        if config::save_with_override(&self.config, self.config_dir.clone()).is_ok() {
            self.config_warning = None;
        }
    }

    fn handle_key(&mut self, key: Named) -> Task<Message> {
        match (self.screen, key) {
            (Screen::Landing, Named::ArrowRight) => {
                self.qr_demo.select_next(Instant::now());
                Task::none()
            }
            (Screen::Landing, Named::ArrowLeft) => {
                self.qr_demo.select_previous(Instant::now());
                Task::none()
            }
            (Screen::Landing, Named::Escape) => {
                self.menu_open = false;
                Task::none()
            }
            (Screen::Settings, Named::Escape) => {
                self.screen = Screen::Landing;
                Task::none()
            }
            _ => Task::none(),
        }
    }
}

fn scroll_to(section: Section) -> Task<Message> {
    snap_to(section.scroll_target())
}

fn snap_to(y: f32) -> Task<Message> {
    operation::snap_to(Id::new(SCROLLABLE_ID), RelativeOffset { x: 0.0, y })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::contact_section;
    use crate::ui::qr_demo;
    use crate::ui::solutions;
    use crate::ui::theming::ThemeMode;
    use std::time::Duration;

    #[test]
    fn header_settings_event_switches_screen() {
        let mut app = App::default();
        let _ = app.update(Message::Header(header::Message::OpenSettings));
        assert_eq!(app.screen, Screen::Settings);
    }

    #[test]
    fn settings_back_returns_to_landing() {
        let mut app = App::default();
        app.screen = Screen::Settings;
        let _ = app.update(Message::Settings(settings::Message::Back));
        assert_eq!(app.screen, Screen::Landing);
    }

    #[test]
    fn escape_closes_menu_on_landing() {
        let mut app = App::default();
        app.menu_open = true;
        let _ = app.update(Message::KeyPressed(Named::Escape));
        assert!(!app.menu_open);
    }

    #[test]
    fn escape_leaves_settings() {
        let mut app = App::default();
        app.screen = Screen::Settings;
        let _ = app.update(Message::KeyPressed(Named::Escape));
        assert_eq!(app.screen, Screen::Landing);
    }

    #[test]
    fn arrow_keys_step_qr_demo() {
        let mut app = App::default();
        assert_eq!(app.qr_demo.active_index(), 0);

        let _ = app.update(Message::KeyPressed(Named::ArrowRight));
        assert_eq!(app.qr_demo.active_index(), 1);

        let _ = app.update(Message::KeyPressed(Named::ArrowLeft));
        assert_eq!(app.qr_demo.active_index(), 0);
    }

    #[test]
    fn theme_selection_updates_mode() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut app = App::default();
        app.config_dir = Some(dir.path().to_path_buf());

        let _ = app.update(Message::Settings(settings::Message::ThemeSelected(
            ThemeMode::Light,
        )));
        assert_eq!(app.theme_mode, ThemeMode::Light);

        let (saved, _) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(saved.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn tick_advances_both_showcases() {
        let now = Instant::now();
        let interval = Duration::from_millis(3000);
        let transition = Duration::from_millis(300);

        let mut app = App {
            solutions: solutions::State::new(interval, transition, now),
            qr_demo: qr_demo::State::new(interval, transition, now),
            contact: contact_section::State::new(),
            ..App::default()
        };

        let _ = app.update(Message::Tick(now + Duration::from_millis(3000)));
        let _ = app.update(Message::Tick(now + Duration::from_millis(3300)));
        assert_eq!(app.solutions.active_index(), 1);
        assert_eq!(app.qr_demo.active_index(), 1);
    }
}
