// SPDX-License-Identifier: MPL-2.0
//! Opening hero section.

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Text},
    Element, Length, Theme,
};

/// Messages emitted by the hero section.
#[derive(Debug, Clone)]
pub enum Message {
    Explore,
}

pub fn view<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let badge = Container::new(Text::new(i18n.tr("header-trust-badge")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge(
            crate::ui::design_tokens::palette::PRIMARY_400,
        ));

    let title = Text::new(i18n.tr("hero-title"))
        .size(typography::DISPLAY)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().primary.strong.color),
        });

    let subtitle = Text::new(i18n.tr("hero-subtitle")).size(typography::BODY_LG);

    let cta = button(Text::new(i18n.tr("hero-cta")).size(typography::BODY_LG))
        .on_press(Message::Explore)
        .style(styles::button::primary)
        .padding([spacing::SM, spacing::XL]);

    let column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(badge)
        .push(title)
        .push(subtitle)
        .push(cta);

    Container::new(column)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::XL])
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_view_renders() {
        let i18n = I18n::default();
        let _element = view(&i18n);
    }
}
