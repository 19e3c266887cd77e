// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The tick subscription only runs while something on screen is animating:
//! an active rotation, an in-flight transition, or a metric counter. Keyboard
//! navigation is subscribed on every screen.

use super::{App, Message, Screen};
use iced::keyboard::{self, Key};
use iced::{time, Subscription};
use std::time::{Duration, Instant};

/// Poll cadence for rotation and counter animation.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn subscription(app: &App) -> Subscription<Message> {
    Subscription::batch([create_tick_subscription(app), create_key_subscription()])
}

/// Creates a periodic tick subscription while any showcase animation needs it.
fn create_tick_subscription(app: &App) -> Subscription<Message> {
    let animating = app.screen == Screen::Landing
        && (app.solutions.wants_ticks(Instant::now()) || app.qr_demo.wants_ticks());

    if animating {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

fn create_key_subscription() -> Subscription<Message> {
    keyboard::listen().filter_map(|event| match event {
        keyboard::Event::KeyPressed {
            key: Key::Named(named),
            ..
        } => Some(Message::KeyPressed(named)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_screen_subscribes_to_ticks() {
        // A fresh app has unpaused rotations, so ticks are wanted.
        let app = App::default();
        let _subscription = subscription(&app);
        assert!(app.solutions.wants_ticks(Instant::now()) || app.qr_demo.wants_ticks());
    }

    #[test]
    fn subscription_builds_for_settings_screen() {
        let mut app = App::default();
        app.screen = Screen::Settings;
        let _subscription = subscription(&app);
    }
}
