// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the settings screen and form cards.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Sticky page header. Flat while the page is at the top, elevated with a
/// shadow once the user has scrolled.
pub fn header(elevated: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let base = palette.background.base.color;

        container::Style {
            background: Some(Background::Color(Color::from_rgba(
                base.r,
                base.g,
                base.b,
                if elevated { opacity::SURFACE } else { opacity::OPAQUE },
            ))),
            shadow: if elevated { shadow::SM } else { shadow::NONE },
            ..Default::default()
        }
    }
}

/// Card surface for showcase items. Hovered cards get a brand border.
pub fn card(hovered: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();

        container::Style {
            background: Some(Background::Color(extended.background.weak.color)),
            border: Border {
                color: if hovered {
                    palette::PRIMARY_400
                } else {
                    extended.background.strong.color
                },
                width: border::WIDTH_SM,
                radius: radius::XL.into(),
            },
            shadow: if hovered { shadow::MD } else { shadow::SM },
            ..Default::default()
        }
    }
}

/// Pill badge tinted with an accent color.
pub fn badge(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        text_color: Some(accent),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Inline notice banner, tinted by the semantic color passed in.
pub fn notice(tint: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..tint
        })),
        text_color: Some(tint),
        border: Border {
            color: tint,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Dark footer band, dark in both themes.
pub fn footer(theme: &Theme) -> container::Style {
    let scheme = if matches!(theme, Theme::Light) {
        crate::ui::theming::ColorScheme::light()
    } else {
        crate::ui::theming::ColorScheme::dark()
    };

    container::Style {
        background: Some(Background::Color(scheme.footer_background)),
        text_color: Some(scheme.footer_text),
        ..Default::default()
    }
}
