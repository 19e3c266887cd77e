// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call-to-action button.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Borderless button for navigation links and footer links.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let base = if is_light {
        palette::GRAY_700
    } else {
        palette::GRAY_200
    };

    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
            _ => base,
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for selected/active button state.
/// Use this for primary actions and selected states in toggle groups.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            })),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for unselected/secondary button state.
/// Use this for secondary actions and unselected states in toggle groups.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color, border_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900, palette::GRAY_400)
    } else {
        (palette::GRAY_700, WHITE, palette::GRAY_400)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => {
            let hover_bg = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.38)
            };
            button::Style {
                background: Some(Background::Color(hover_bg)),
                text_color,
                border: Border {
                    color: palette::PRIMARY_500,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        }
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_100
            } else {
                palette::GRAY_700
            })),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Round indicator dot under the rotating showcase. The active dot carries the
/// item's accent color, inactive dots are neutral.
pub fn indicator(accent: Color, active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let is_light = matches!(theme, Theme::Light);
        let inactive = if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        };

        let background = if active {
            accent
        } else if matches!(status, button::Status::Hovered) {
            palette::GRAY_400
        } else {
            inactive
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Floating back-to-top button.
pub fn floating(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Pressed => palette::PRIMARY_600,
        _ => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn link_button_highlights_on_hover() {
        let theme = Theme::Dark;
        let normal = link(&theme, button::Status::Active);
        let hover = link(&theme, button::Status::Hovered);
        assert_ne!(normal.text_color, hover.text_color);
        assert!(normal.background.is_none());
    }

    #[test]
    fn active_indicator_carries_accent() {
        let theme = Theme::Dark;
        let accent = Color::from_rgb(0.5, 0.2, 0.9);
        let style = indicator(accent, true)(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, accent);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn inactive_indicator_is_neutral() {
        let theme = Theme::Light;
        let accent = Color::from_rgb(0.5, 0.2, 0.9);
        let style = indicator(accent, false)(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::GRAY_200);
        } else {
            panic!("Expected background color");
        }
    }
}
