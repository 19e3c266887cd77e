// SPDX-License-Identifier: MPL-2.0
//! Contact section: company contact details and the validated inquiry form.

use crate::contact::{ContactForm, Field};
use crate::content;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, text_input, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Messages emitted by the contact section.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    CompanyChanged(String),
    PhoneChanged(String),
    MessageChanged(String),
    Submit,
}

/// State of the contact section.
#[derive(Debug, Default)]
pub struct State {
    form: ContactForm,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::NameChanged(value) => self.form.set_name(value),
            Message::EmailChanged(value) => self.form.set_email(value),
            Message::CompanyChanged(value) => self.form.set_company(value),
            Message::PhoneChanged(value) => self.form.set_phone(value),
            Message::MessageChanged(value) => self.form.set_message(value),
            Message::Submit => {
                // The submission is a local echo only; the form resets itself
                // and shows the acknowledgment on success.
                let _ = self.form.submit();
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let heading = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(Text::new(i18n.tr("contact-heading-1")).size(typography::TITLE_LG))
            .push(
                Text::new(i18n.tr("contact-heading-2"))
                    .size(typography::TITLE_LG)
                    .style(|theme: &Theme| iced::widget::text::Style {
                        color: Some(theme.extended_palette().primary.strong.color),
                    }),
            )
            .push(Text::new(i18n.tr("contact-lede")).size(typography::BODY_LG));

        let body = Row::new()
            .spacing(spacing::XL)
            .push(build_info(i18n))
            .push(self.build_form(i18n));

        let column = Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(heading)
            .push(body);

        Container::new(column)
            .width(Length::Fill)
            .padding([spacing::SECTION, spacing::XL])
            .align_x(Horizontal::Center)
            .into()
    }

    fn build_form<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("contact-form-title")).size(typography::TITLE_SM))
            .push(Text::new(i18n.tr("contact-form-subtitle")).size(typography::BODY_SM));

        if self.form.acknowledged() {
            column = column.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(
                            Text::new(i18n.tr("contact-success-title")).size(typography::BODY_LG),
                        )
                        .push(Text::new(i18n.tr("contact-success-body")).size(typography::BODY_SM)),
                )
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::notice(palette::SUCCESS_500)),
            );
        }

        column = column
            .push(self.build_field(
                i18n,
                "contact-name-label",
                "contact-name-placeholder",
                &self.form.name,
                Some(Field::Name),
                Message::NameChanged,
            ))
            .push(self.build_field(
                i18n,
                "contact-email-label",
                "contact-email-placeholder",
                &self.form.email,
                Some(Field::Email),
                Message::EmailChanged,
            ))
            .push(self.build_field(
                i18n,
                "contact-company-label",
                "contact-company-placeholder",
                &self.form.company,
                None,
                Message::CompanyChanged,
            ))
            .push(self.build_field(
                i18n,
                "contact-phone-label",
                "contact-phone-placeholder",
                &self.form.phone,
                None,
                Message::PhoneChanged,
            ))
            .push(self.build_field(
                i18n,
                "contact-message-label",
                "contact-message-placeholder",
                &self.form.message,
                Some(Field::Message),
                Message::MessageChanged,
            ));

        column = column
            .push(
                button(Text::new(i18n.tr("contact-submit")).size(typography::BODY_LG))
                    .on_press(Message::Submit)
                    .style(styles::button::primary)
                    .padding([spacing::SM, spacing::XL])
                    .width(Length::Fill),
            )
            .push(Text::new(i18n.tr("contact-privacy-note")).size(typography::CAPTION));

        Container::new(column)
            .padding(spacing::LG)
            .max_width(sizing::FORM_MAX_WIDTH)
            .width(Length::FillPortion(1))
            .style(styles::container::panel)
            .into()
    }

    fn build_field<'a>(
        &'a self,
        i18n: &'a I18n,
        label_key: &str,
        placeholder_key: &str,
        value: &'a str,
        field: Option<Field>,
        on_input: impl Fn(String) -> Message + 'a,
    ) -> Element<'a, Message> {
        let error_key = field.and_then(|f| self.form.error_key(f));

        let mut column = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr(label_key)).size(typography::BODY_SM))
            .push(
                text_input(&i18n.tr(placeholder_key), value)
                    .on_input(on_input)
                    .padding(spacing::SM)
                    .style(styles::form::field(error_key.is_some())),
            );

        if let Some(key) = error_key {
            column = column.push(Text::new(i18n.tr(key)).size(typography::CAPTION).style(
                |theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().danger.base.color),
                },
            ));
        }

        column.into()
    }
}

fn build_info<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let info_row = |label_key: &str, value_key: &str, description_key: &str| {
        Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(i18n.tr(label_key))
                    .size(typography::BODY)
                    .style(|theme: &Theme| iced::widget::text::Style {
                        color: Some(theme.extended_palette().primary.strong.color),
                    }),
            )
            .push(Text::new(i18n.tr(value_key)).size(typography::BODY_LG))
            .push(Text::new(i18n.tr(description_key)).size(typography::BODY_SM))
    };

    let mut trust = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("contact-trust-title")).size(typography::TITLE_SM));
    for key in content::trust_indicator_keys() {
        trust = trust.push(
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

    let response = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(i18n.tr("contact-response-value"))
                .size(typography::TITLE_MD)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().primary.strong.color),
                }),
        )
        .push(Text::new(i18n.tr("contact-response-label")).size(typography::BODY_SM));

    Column::new()
        .spacing(spacing::LG)
        .width(Length::FillPortion(1))
        .push(Text::new(i18n.tr("contact-lede-secondary")).size(typography::BODY))
        .push(info_row(
            "contact-info-email-label",
            "contact-info-email-value",
            "contact-info-email-description",
        ))
        .push(info_row(
            "contact-info-phone-label",
            "contact-info-phone-value",
            "contact-info-phone-description",
        ))
        .push(info_row(
            "contact-info-hours-label",
            "contact-info-hours-value",
            "contact-info-hours-description",
        ))
        .push(trust)
        .push(response)
        .into()
}
