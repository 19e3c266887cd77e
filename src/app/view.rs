// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen: the full landing page inside a scrollable, or
//! the settings screen. The back-to-top button floats over the page once the
//! user has scrolled far enough.

use super::update::SCROLLABLE_ID;
use super::{App, Message, Screen};
use crate::config::BACK_TO_TOP_OFFSET;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::footer;
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::hero;
use crate::ui::narrative;
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, tooltip, Column, Container, Id, Stack, Text},
    Element, Length,
};
use std::time::Instant;

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    match app.screen {
        Screen::Landing => view_landing(app),
        Screen::Settings => view_settings(app),
    }
}

fn view_landing(app: &App) -> Element<'_, Message> {
    let now = Instant::now();

    let sections = Column::new()
        .push(hero::view(&app.i18n).map(Message::Hero))
        .push(
            Container::new(app.qr_demo.view(&app.i18n, now).map(Message::QrDemo))
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .padding([spacing::XL, spacing::XL]),
        )
        .push(app.solutions.view(&app.i18n, now).map(Message::Solutions))
        .push(narrative::view(&app.i18n))
        .push(app.contact.view(&app.i18n).map(Message::Contact))
        .push(footer::view(&app.i18n));

    let page = scrollable(sections)
        .id(Id::new(SCROLLABLE_ID))
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    let header_view = header::view(HeaderViewContext {
        i18n: &app.i18n,
        scroll_offset: app.scroll_offset,
        menu_open: app.menu_open,
    })
    .map(Message::Header);

    let content = Column::new()
        .push(header_view)
        .push(page)
        .width(Length::Fill)
        .height(Length::Fill);

    if app.scroll_offset > BACK_TO_TOP_OFFSET {
        Stack::new()
            .push(content)
            .push(build_back_to_top(&app.i18n))
            .into()
    } else {
        content.into()
    }
}

fn build_back_to_top(i18n: &crate::i18n::I18n) -> Element<'_, Message> {
    let control = button(Text::new("↑").size(typography::TITLE_MD))
        .on_press(Message::ScrollToTop)
        .style(styles::button::floating)
        .padding(spacing::SM);

    let control = tooltip(
        control,
        Text::new(i18n.tr("back-to-top")).size(typography::CAPTION),
        tooltip::Position::Left,
    )
    .gap(4);

    Container::new(control)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(spacing::XL)
        .into()
}

fn view_settings(app: &App) -> Element<'_, Message> {
    let content = settings::view(SettingsViewContext {
        i18n: &app.i18n,
        theme_mode: app.theme_mode,
        config_warning: app.config_warning.as_deref(),
    })
    .map(Message::Settings);

    Container::new(
        Container::new(content)
            .max_width(sizing::FORM_MAX_WIDTH)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_view_renders() {
        let app = App::default();
        let _element = view(&app);
    }

    #[test]
    fn landing_view_renders_with_back_to_top() {
        let mut app = App::default();
        app.scroll_offset = BACK_TO_TOP_OFFSET + 100.0;
        let _element = view(&app);
    }

    #[test]
    fn settings_view_renders() {
        let mut app = App::default();
        app.screen = Screen::Settings;
        let _element = view(&app);
    }
}
