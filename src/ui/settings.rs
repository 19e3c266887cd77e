//! This module defines the UI components for the application's settings view.
//! It provides language selection and theme mode selection, and surfaces a
//! warning when the settings file could not be read.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Horizontal,
    widget::{button, Button, Column, Container, Row, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    /// Warning key from config loading, shown until the settings are saved.
    pub config_warning: Option<&'a str>,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeSelected(ThemeMode),
    Back,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let mut column = Column::new().spacing(spacing::LG).push(title);

    if let Some(key) = ctx.config_warning {
        column = column.push(
            Container::new(Text::new(ctx.i18n.tr(key)).size(typography::BODY_SM))
                .padding(spacing::SM)
                .style(styles::container::notice(palette::WARNING_500)),
        );
    }

    column = column
        .push(build_language_selection(ctx.i18n))
        .push(build_theme_selection(ctx.i18n, ctx.theme_mode))
        .push(
            button(Text::new(ctx.i18n.tr("settings-back")))
                .on_press(Message::Back)
                .style(styles::button::unselected)
                .padding([spacing::XS, spacing::LG]),
        );

    Container::new(
        column
            .width(Length::Shrink)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding(spacing::XL)
    .into()
}

fn build_language_selection(i18n: &I18n) -> Element<'_, Message> {
    let mut column = Column::new()
        .push(Text::new(i18n.tr("settings-language-label")))
        .spacing(spacing::XS);

    for locale in &i18n.available_locales {
        let is_current = i18n.current_locale() == locale;
        let label = locale.to_string();

        let mut entry =
            Button::new(Text::new(label)).on_press(Message::LanguageSelected(locale.clone()));
        entry = if is_current {
            entry.style(styles::button::selected)
        } else {
            entry.style(styles::button::unselected)
        };

        column = column.push(entry);
    }

    column.into()
}

fn build_theme_selection(i18n: &I18n, current: ThemeMode) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for mode in ThemeMode::ALL {
        let mut entry =
            Button::new(Text::new(i18n.tr(mode.label_key()))).on_press(Message::ThemeSelected(mode));
        entry = if mode == current {
            entry.style(styles::button::selected)
        } else {
            entry.style(styles::button::unselected)
        };
        row = row.push(entry);
    }

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("settings-theme-label")))
        .push(row)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            theme_mode: ThemeMode::System,
            config_warning: None,
        });
    }

    #[test]
    fn settings_view_renders_with_warning() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            theme_mode: ThemeMode::Dark,
            config_warning: Some(crate::config::CONFIG_LOAD_WARNING_KEY),
        });
    }
}
