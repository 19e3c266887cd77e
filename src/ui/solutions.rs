// SPDX-License-Identifier: MPL-2.0
//! Rotating industry solutions showcase.
//!
//! Three solution cards rotate on a timer. Hovering a card pauses the
//! rotation and starts the metric count-up; clicking an indicator dot jumps
//! straight to that card and restarts the cadence. Each card can expand an
//! inline demo panel.

use crate::content::{self, Solution};
use crate::i18n::I18n;
use crate::showcase::RotationController;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::qr_pattern::{self, QrPattern};
use crate::ui::widgets::AnimatedCounter;
use std::time::{Duration, Instant};

use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Messages emitted by the solutions section.
#[derive(Debug, Clone)]
pub enum Message {
    Select(usize),
    CardEntered(usize),
    CardExited,
    ToggleDemo(usize),
}

/// State of the solutions showcase.
pub struct State {
    controller: RotationController<Solution>,
    hovered: Option<usize>,
    expanded_demo: Option<usize>,
    counter: Option<AnimatedCounter>,
}

impl State {
    /// Builds the showcase from the static solution catalogue.
    ///
    /// The catalogue is non-empty and the interval comes from the clamped
    /// config accessors, so construction cannot fail.
    pub fn new(interval: Duration, transition: Duration, now: Instant) -> Self {
        let controller = RotationController::new(content::solutions(), interval, transition, now)
            .expect("non-empty catalogue with clamped interval");

        Self {
            controller,
            hovered: None,
            expanded_demo: None,
            counter: None,
        }
    }

    /// Advances timed rotation and transition state.
    pub fn tick(&mut self, now: Instant) {
        self.controller.tick(now);
    }

    /// Whether this section still needs periodic ticks.
    pub fn wants_ticks(&self, now: Instant) -> bool {
        self.controller.wants_ticks()
            || self.counter.as_ref().is_some_and(|c| c.is_animating(now))
    }

    pub fn active_index(&self) -> usize {
        self.controller.active_index()
    }

    pub fn is_paused(&self) -> bool {
        self.controller.is_paused()
    }

    pub fn update(&mut self, message: Message, now: Instant) {
        match message {
            Message::Select(index) => {
                // Indices come from the rendered dots, so out-of-range here
                // would be a rendering bug rather than user error.
                debug_assert!(index < self.controller.len());
                let _ = self.controller.select(index, now);
            }
            Message::CardEntered(index) => {
                self.hovered = Some(index);
                self.controller.pause();
                let metric = self
                    .controller
                    .items()
                    .get(index)
                    .map_or(0, |solution| solution.metric);
                self.counter = Some(AnimatedCounter::new(metric, now));
            }
            Message::CardExited => {
                self.hovered = None;
                self.counter = None;
                self.controller.resume(now);
            }
            Message::ToggleDemo(index) => {
                self.expanded_demo = if self.expanded_demo == Some(index) {
                    None
                } else {
                    Some(index)
                };
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
        let badge = Container::new(Text::new(i18n.tr("solutions-badge")).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::badge(
                crate::ui::design_tokens::palette::ACCENT_500,
            ));

        let heading = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(Text::new(i18n.tr("solutions-heading-1")).size(typography::TITLE_LG))
            .push(
                Text::new(i18n.tr("solutions-heading-2"))
                    .size(typography::TITLE_LG)
                    .style(|theme: &Theme| iced::widget::text::Style {
                        color: Some(theme.extended_palette().primary.strong.color),
                    }),
            )
            .push(Text::new(i18n.tr("solutions-lede")).size(typography::BODY_LG));

        let mut cards = Row::new().spacing(spacing::LG);
        for (index, solution) in self.controller.items().iter().enumerate() {
            cards = cards.push(self.build_card(i18n, index, solution, now));
        }

        let column = Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(badge)
            .push(heading)
            .push(cards)
            .push(self.build_indicators());

        Container::new(column)
            .width(Length::Fill)
            .padding([spacing::SECTION, spacing::XL])
            .align_x(Horizontal::Center)
            .into()
    }

    fn build_card<'a>(
        &'a self,
        i18n: &'a I18n,
        index: usize,
        solution: &'a Solution,
        now: Instant,
    ) -> Element<'a, Message> {
        let is_active = index == self.controller.active_index();
        let is_hovered = self.hovered == Some(index);

        let industry = Container::new(
            Text::new(i18n.tr(solution.industry_key)).size(typography::CAPTION),
        )
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge(solution.accent.mid()));

        let mut column = Column::new()
            .spacing(spacing::SM)
            .push(industry)
            .push(Text::new(i18n.tr(solution.title_key)).size(typography::TITLE_MD))
            .push(Text::new(i18n.tr(solution.description_key)).size(typography::BODY_SM));

        for key in &solution.benefit_keys {
            column = column.push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(Text::new("✓").size(typography::BODY_SM).style(
                        |theme: &Theme| iced::widget::text::Style {
                            color: Some(theme.extended_palette().success.base.color),
                        },
                    ))
                    .push(Text::new(i18n.tr(key)).size(typography::BODY_SM)),
            );
        }

        column = column.push(self.build_metric(i18n, index, solution, now));

        // The card's mini QR doubles as the demo toggle.
        let mini_qr = QrPattern::new(
            qr_pattern::seed_from_id(solution.id),
            solution.accent.mid(),
            1.0,
        )
        .with_size(sizing::ICON_LG)
        .into_element();

        column = column.push(
            button(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(mini_qr)
                    .push(Text::new(i18n.tr("solutions-demo-try")).size(typography::BODY_SM)),
            )
            .on_press(Message::ToggleDemo(index))
            .style(styles::button::link),
        );

        if self.expanded_demo == Some(index) {
            column = column.push(build_demo_panel(i18n, solution));
        }

        let card = Container::new(column)
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::SOLUTION_CARD_WIDTH))
            .style(styles::container::card(is_hovered || is_active));

        mouse_area(card)
            .on_enter(Message::CardEntered(index))
            .on_exit(Message::CardExited)
            .on_press(Message::Select(index))
            .into()
    }

    fn build_metric<'a>(
        &'a self,
        i18n: &'a I18n,
        index: usize,
        solution: &'a Solution,
        now: Instant,
    ) -> Element<'a, Message> {
        // The counter only runs for the hovered card; other cards show the
        // final value so the page reads correctly without interaction.
        let value = if self.hovered == Some(index) {
            self.counter
                .as_ref()
                .map_or(solution.metric, |c| c.value_at(now))
        } else {
            solution.metric
        };

        let accent = solution.accent.mid();
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr("solutions-success-story")).size(typography::CAPTION))
            .push(
                Row::new()
                    .spacing(spacing::XXS)
                    .push(
                        Text::new(format!("+{value}"))
                            .size(typography::TITLE_MD)
                            .style(move |_theme: &Theme| iced::widget::text::Style {
                                color: Some(accent),
                            }),
                    )
                    .push(
                        Text::new(i18n.tr(solution.metric_suffix_key)).size(typography::BODY_SM),
                    ),
            )
            .push(Text::new(i18n.tr(solution.use_case_key)).size(typography::BODY_SM))
            .into()
    }

    fn build_indicators(&self) -> Element<'_, Message> {
        let mut row = Row::new().spacing(spacing::XS);

        for (index, solution) in self.controller.items().iter().enumerate() {
            let is_active = index == self.controller.active_index();
            row = row.push(
                button(iced::widget::Space::new())
                    .width(Length::Fixed(sizing::INDICATOR_DOT))
                    .height(Length::Fixed(sizing::INDICATOR_DOT))
                    .on_press(Message::Select(index))
                    .style(styles::button::indicator(solution.accent.mid(), is_active)),
            );
        }

        row.into()
    }
}

fn build_demo_panel<'a>(i18n: &'a I18n, solution: &'a Solution) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr(solution.demo_title_key)).size(typography::BODY_LG));

    for key in &solution.demo_feature_keys {
        column = column.push(Text::new(i18n.tr(key)).size(typography::BODY_SM));
    }

    Container::new(column)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State::new(
            Duration::from_millis(3000),
            Duration::from_millis(300),
            Instant::now(),
        )
    }

    #[test]
    fn solutions_view_renders() {
        let i18n = I18n::default();
        let state = state();
        let _element = state.view(&i18n, Instant::now());
    }

    #[test]
    fn hover_pauses_and_starts_counter() {
        let mut state = state();
        let now = Instant::now();

        state.update(Message::CardEntered(1), now);
        assert!(state.is_paused());
        assert!(state.wants_ticks(now));

        state.update(Message::CardExited, now);
        assert!(!state.is_paused());
    }

    #[test]
    fn select_jumps_to_index() {
        let mut state = state();
        let now = Instant::now();

        state.update(Message::Select(2), now);
        assert_eq!(state.active_index(), 2);
    }

    #[test]
    fn toggle_demo_expands_and_collapses() {
        let mut state = state();
        let now = Instant::now();

        state.update(Message::ToggleDemo(0), now);
        assert_eq!(state.expanded_demo, Some(0));

        state.update(Message::ToggleDemo(0), now);
        assert_eq!(state.expanded_demo, None);

        state.update(Message::ToggleDemo(1), now);
        state.update(Message::ToggleDemo(2), now);
        assert_eq!(state.expanded_demo, Some(2));
    }

    #[test]
    fn rotation_advances_without_interaction() {
        let now = Instant::now();
        let mut state = State::new(
            Duration::from_millis(3000),
            Duration::from_millis(300),
            now,
        );

        assert_eq!(state.active_index(), 0);
        state.tick(now + Duration::from_millis(3000));
        state.tick(now + Duration::from_millis(3300));
        assert_eq!(state.active_index(), 1);
    }
}
