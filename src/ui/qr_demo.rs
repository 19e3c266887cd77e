// SPDX-License-Identifier: MPL-2.0
//! Interactive QR personalization demo.
//!
//! A simulated QR code cycles through four AI personalization modes. The
//! pattern is regenerated for each mode and cross-fades during transitions.
//! Hovering the code pauses the cycle; the indicator dots jump directly to a
//! mode.

use crate::content::{self, Personalization};
use crate::i18n::I18n;
use crate::showcase::RotationController;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::qr_pattern::{self, QrPattern};
use std::time::{Duration, Instant};

use iced::{
    alignment::Horizontal,
    widget::{button, mouse_area, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Messages emitted by the QR demo section.
#[derive(Debug, Clone)]
pub enum Message {
    Select(usize),
    Entered,
    Exited,
}

/// State of the QR personalization demo.
pub struct State {
    controller: RotationController<Personalization>,
}

impl State {
    pub fn new(interval: Duration, transition: Duration, now: Instant) -> Self {
        let controller =
            RotationController::new(content::personalizations(), interval, transition, now)
                .expect("non-empty catalogue with clamped interval");
        Self { controller }
    }

    pub fn tick(&mut self, now: Instant) {
        self.controller.tick(now);
    }

    pub fn wants_ticks(&self) -> bool {
        self.controller.wants_ticks()
    }

    pub fn active_index(&self) -> usize {
        self.controller.active_index()
    }

    pub fn is_paused(&self) -> bool {
        self.controller.is_paused()
    }

    /// Steps to the next mode, wrapping. Used by keyboard navigation.
    pub fn select_next(&mut self, now: Instant) {
        let next = (self.controller.active_index() + 1) % self.controller.len();
        let _ = self.controller.select(next, now);
    }

    /// Steps to the previous mode, wrapping.
    pub fn select_previous(&mut self, now: Instant) {
        let len = self.controller.len();
        let previous = (self.controller.active_index() + len - 1) % len;
        let _ = self.controller.select(previous, now);
    }

    pub fn update(&mut self, message: Message, now: Instant) {
        match message {
            Message::Select(index) => {
                debug_assert!(index < self.controller.len());
                let _ = self.controller.select(index, now);
            }
            Message::Entered => self.controller.pause(),
            Message::Exited => self.controller.resume(now),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
        let live_badge =
            Container::new(Text::new(i18n.tr("demo-live-label")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::badge(
                    crate::ui::design_tokens::palette::SUCCESS_500,
                ));

        let active = self.controller.active();

        let heading = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(Text::new(i18n.tr("demo-title")).size(typography::TITLE_SM))
            .push(Text::new(i18n.tr("demo-subtitle")).size(typography::BODY_SM));

        let code = mouse_area(self.build_pattern(now))
            .on_enter(Message::Entered)
            .on_exit(Message::Exited);

        let accent = active.accent.mid();
        let mode = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(
                Text::new(i18n.tr(active.name_key))
                    .size(typography::BODY_LG)
                    .style(move |_theme: &Theme| iced::widget::text::Style {
                        color: Some(accent),
                    }),
            )
            .push(Text::new(i18n.tr(active.description_key)).size(typography::BODY_SM));

        let column = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(live_badge)
            .push(heading)
            .push(code)
            .push(mode)
            .push(self.build_indicators())
            .push(build_stats(i18n));

        Container::new(column)
            .padding(spacing::XL)
            .style(styles::container::panel)
            .into()
    }

    /// During a transition the outgoing pattern is replaced by the incoming
    /// one fading in; while idle the active pattern is fully opaque.
    fn build_pattern(&self, now: Instant) -> Element<'static, Message> {
        let active = self.controller.active();
        let fade = self.controller.transition_progress(now).unwrap_or(1.0);
        QrPattern::new(qr_pattern::seed_from_id(active.id), active.accent.mid(), fade)
            .into_element()
    }

    fn build_indicators(&self) -> Element<'_, Message> {
        let mut row = Row::new().spacing(spacing::XS);

        for (index, personalization) in self.controller.items().iter().enumerate() {
            let is_active = index == self.controller.active_index();
            row = row.push(
                button(iced::widget::Space::new())
                    .width(Length::Fixed(sizing::INDICATOR_DOT))
                    .height(Length::Fixed(sizing::INDICATOR_DOT))
                    .on_press(Message::Select(index))
                    .style(styles::button::indicator(
                        personalization.accent.mid(),
                        is_active,
                    )),
            );
        }

        row.into()
    }
}

fn build_stats<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let stat = |value_key: &str, label_key: &str| {
        Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(
                Text::new(i18n.tr(value_key))
                    .size(typography::BODY_LG)
                    .style(|theme: &Theme| iced::widget::text::Style {
                        color: Some(theme.extended_palette().primary.strong.color),
                    }),
            )
            .push(Text::new(i18n.tr(label_key)).size(typography::CAPTION))
    };

    Row::new()
        .spacing(spacing::XL)
        .push(stat("demo-stat-conversion", "demo-stat-conversion-label"))
        .push(stat("demo-stat-adaptation", "demo-stat-adaptation-label"))
        .into()
}
