// SPDX-License-Identifier: MPL-2.0
//! Sticky page header with section navigation.
//!
//! The header sits above the scrollable page content. While the page is at
//! the top it renders flat; once the user scrolls past a small offset it
//! switches to an elevated style with a shadow. A hamburger menu mirrors the
//! navigation links for narrow windows and gives access to Settings.

use crate::config::HEADER_ELEVATION_OFFSET;
use crate::content::Section;
use crate::i18n::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Current vertical scroll offset of the page, in logical pixels.
    pub scroll_offset: f32,
    pub menu_open: bool,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    NavigateTo(Section),
    OpenSettings,
    StartBuilding,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    ScrollTo(Section),
    OpenSettings,
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::NavigateTo(section) => {
            *menu_open = false;
            Event::ScrollTo(section)
        }
        Message::OpenSettings => {
            *menu_open = false;
            Event::OpenSettings
        }
        Message::StartBuilding => {
            *menu_open = false;
            Event::ScrollTo(Section::Contact)
        }
    }
}

/// Render the header bar, plus the dropdown menu when open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let elevated = ctx.scroll_offset > HEADER_ELEVATION_OFFSET;

    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_bar(&ctx, elevated));

    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_bar<'a>(ctx: &ViewContext<'a>, elevated: bool) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("window-title"))
        .size(typography::TITLE_MD)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().primary.strong.color),
        });

    let mut row = Row::new()
        .spacing(spacing::LG)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(iced::widget::Space::new().width(Length::Fill));

    for section in Section::ALL {
        row = row.push(
            button(Text::new(ctx.i18n.tr(section.label_key())).size(typography::BODY))
                .on_press(Message::NavigateTo(section))
                .style(styles::button::link)
                .padding([spacing::XXS, spacing::XS]),
        );
    }

    row = row
        .push(
            button(Text::new(ctx.i18n.tr("header-cta")).size(typography::BODY))
                .on_press(Message::StartBuilding)
                .style(styles::button::primary)
                .padding([spacing::XS, spacing::MD]),
        )
        .push(
            button(Text::new(ctx.i18n.tr("header-menu")).size(typography::BODY))
                .on_press(Message::ToggleMenu)
                .style(styles::button::link)
                .padding(spacing::XS),
        );

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::header(elevated))
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);

    for section in Section::ALL {
        menu_column = menu_column.push(build_menu_item(
            ctx.i18n.tr(section.label_key()),
            Message::NavigateTo(section),
        ));
    }

    menu_column = menu_column.push(build_menu_item(
        ctx.i18n.tr("settings-title"),
        Message::OpenSettings,
    ));

    Container::new(menu_column)
        .padding(spacing::XS)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

fn build_menu_item<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(menu_item_style)
        .into()
}

fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.weak.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}
