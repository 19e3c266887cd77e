// SPDX-License-Identifier: MPL-2.0
//! Company narrative: story paragraphs, milestones, and AI credentials.
//!
//! Entirely static content, so the section has no state and no messages of
//! its own; it renders for whatever message type the caller embeds it in.

use crate::content;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Row, Text},
    Element, Length, Theme,
};

pub fn view<'a, Message: 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let heading = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("narrative-heading-1")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("narrative-heading-2"))
                .size(typography::TITLE_LG)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().primary.strong.color),
                }),
        )
        .push(Text::new(i18n.tr("narrative-lede")).size(typography::BODY_LG));

    let story = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("narrative-story-1")).size(typography::BODY))
        .push(Text::new(i18n.tr("narrative-story-2")).size(typography::BODY))
        .push(Text::new(i18n.tr("narrative-story-3")).size(typography::BODY));

    let left = Column::new()
        .spacing(spacing::LG)
        .width(Length::FillPortion(1))
        .push(story)
        .push(build_badges(i18n));

    let right = Column::new()
        .spacing(spacing::LG)
        .width(Length::FillPortion(1))
        .push(build_milestones(i18n))
        .push(build_credentials(i18n));

    let body = Row::new()
        .spacing(spacing::XL)
        .push(left)
        .push(right);

    let column = Column::new()
        .spacing(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(heading)
        .push(body);

    Container::new(column)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::XL])
        .align_x(Horizontal::Center)
        .into()
}

fn build_milestones<'a, Message: 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("narrative-milestones-title")).size(typography::TITLE_SM));

    for milestone in content::milestones() {
        column = column.push(
            Row::new()
                .spacing(spacing::MD)
                .push(
                    Text::new(milestone.year)
                        .size(typography::BODY)
                        .style(|theme: &Theme| iced::widget::text::Style {
                            color: Some(theme.extended_palette().primary.strong.color),
                        }),
                )
                .push(Text::new(i18n.tr(milestone.event_key)).size(typography::BODY)),
        );
    }

    Container::new(column)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn build_credentials<'a, Message: 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("narrative-credentials-title")).size(typography::TITLE_SM))
        .push(Text::new(i18n.tr("narrative-credentials-subtitle")).size(typography::BODY_SM));

    for key in content::credential_keys() {
        column = column.push(
            Row::new()
                .spacing(spacing::XS)
                .push(Text::new("•").size(typography::BODY))
                .push(Text::new(i18n.tr(key)).size(typography::BODY)),
        );
    }

    column = column.push(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr("narrative-innovation-title")).size(typography::BODY_LG))
            .push(Text::new(i18n.tr("narrative-innovation-body")).size(typography::BODY_SM)),
    );

    Container::new(column)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn build_badges<'a, Message: 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let badge = |key: &str| {
        Container::new(Text::new(i18n.tr(key)).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::badge(palette::PRIMARY_400))
    };

    Row::new()
        .spacing(spacing::SM)
        .push(badge("narrative-badge-soc2"))
        .push(badge("narrative-badge-award"))
        .push(badge("narrative-badge-fortune"))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrative_view_renders() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(&i18n);
    }
}
