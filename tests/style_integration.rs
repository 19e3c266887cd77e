// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::{Color, Theme};
    use qrs_landing::ui::design_tokens::{opacity, palette, sizing, spacing};
    use qrs_landing::ui::styles::{button, container, form};
    use qrs_landing::ui::theming::{AppTheme, ThemeMode};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all button styles compile and are callable
        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let _ = button::link(&theme, iced::widget::button::Status::Hovered);
        let _ = button::selected(&theme, iced::widget::button::Status::Active);
        let _ = button::unselected(&theme, iced::widget::button::Status::Active);
        let _ = button::floating(&theme, iced::widget::button::Status::Active);
        let _ = button::indicator(palette::PRIMARY_500, true)(
            &theme,
            iced::widget::button::Status::Active,
        );
    }

    #[test]
    fn all_container_styles_compile() {
        let theme = Theme::Light;

        let _ = container::panel(&theme);
        let _ = container::header(true)(&theme);
        let _ = container::header(false)(&theme);
        let _ = container::card(true)(&theme);
        let _ = container::badge(palette::ACCENT_500)(&theme);
        let _ = container::notice(palette::WARNING_500)(&theme);
        let _ = container::footer(&theme);
    }

    #[test]
    fn form_field_styles_compile() {
        let theme = Theme::Dark;
        let status = iced::widget::text_input::Status::Active;

        let _ = form::field(false)(&theme, status);
        let _ = form::field(true)(&theme, status);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_STRONG;

        // Sizing
        let _ = sizing::QR_PREVIEW;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        // Page colors should be visually opposite between light and dark
        assert!(light.colors.page.r > dark.colors.page.r);

        // Heading colors should also be opposite between light and dark
        assert!(light.colors.heading.r < dark.colors.heading.r);
    }

    #[test]
    fn elevated_header_gains_shadow() {
        let theme = Theme::Light;
        let flat = container::header(false)(&theme);
        let elevated = container::header(true)(&theme);

        assert_eq!(flat.shadow.blur_radius, 0.0);
        assert!(elevated.shadow.blur_radius > 0.0);
    }

    #[test]
    fn notice_tint_propagates_to_text() {
        let theme = Theme::Dark;
        let tint = Color::from_rgb(0.9, 0.2, 0.2);
        let style = container::notice(tint)(&theme);

        assert_eq!(style.text_color, Some(tint));
        assert_eq!(style.border.color, tint);
    }
}
