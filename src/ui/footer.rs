// SPDX-License-Identifier: MPL-2.0
//! Page footer with link columns and copyright.

use crate::content;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use chrono::Datelike;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Row, Text},
    Element, Length, Theme,
};

pub fn view<'a, Message: 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let brand = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(i18n.tr("window-title"))
                .size(typography::TITLE_MD)
                .style(|_theme: &Theme| iced::widget::text::Style {
                    color: Some(palette::PRIMARY_400),
                }),
        )
        .push(Text::new(i18n.tr("app-tagline")).size(typography::BODY_SM))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(Text::new(i18n.tr("footer-social-linkedin")).size(typography::CAPTION))
                .push(Text::new(i18n.tr("footer-social-twitter")).size(typography::CAPTION)),
        )
        .width(Length::FillPortion(2));

    let mut columns = Row::new().spacing(spacing::XL).push(brand);
    for column in content::footer_columns() {
        columns = columns.push(build_column(i18n, column));
    }

    let year = chrono::Local::now().year();
    let copyright = Text::new(format!("© {} {}", year, i18n.tr("footer-copyright")))
        .size(typography::CAPTION);

    let content = Column::new()
        .spacing(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(columns)
        .push(copyright);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::XL])
        .align_x(Horizontal::Center)
        .style(styles::container::footer)
        .into()
}

fn build_column<'a, Message: 'a>(
    i18n: &'a I18n,
    column: content::FooterColumn,
) -> Element<'a, Message> {
    let mut list = Column::new()
        .spacing(spacing::XS)
        .width(Length::FillPortion(1))
        .push(Text::new(i18n.tr(column.title_key)).size(typography::BODY_LG));

    for key in column.link_keys {
        list = list.push(Text::new(i18n.tr(key)).size(typography::BODY_SM));
    }

    list.into()
}
