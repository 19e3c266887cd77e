// SPDX-License-Identifier: MPL-2.0
//! Form input styles.

use crate::ui::design_tokens::radius;
use iced::widget::text_input::{Status, Style};
use iced::{Border, Theme};

/// Style for contact form fields. Fields with a validation error keep a red
/// border in every status so the error stays visible while the user types.
pub fn field(has_error: bool) -> impl Fn(&Theme, Status) -> Style {
    move |theme: &Theme, status: Status| {
        let palette = theme.extended_palette();

        let mut style = match status {
            Status::Active | Status::Hovered => Style {
                background: palette.background.base.color.into(),
                border: Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                icon: palette.background.weak.text,
                placeholder: palette.background.strong.text,
                value: palette.background.base.text,
                selection: palette.primary.weak.color,
            },
            Status::Focused { .. } => Style {
                background: palette.background.base.color.into(),
                border: Border {
                    color: palette.primary.strong.color,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                icon: palette.background.weak.text,
                placeholder: palette.background.strong.text,
                value: palette.background.base.text,
                selection: palette.primary.weak.color,
            },
            Status::Disabled => Style {
                background: palette.background.weak.color.into(),
                border: Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                icon: palette.background.strong.text,
                placeholder: palette.background.strong.text,
                value: palette.background.strong.text,
                selection: palette.background.weak.color,
            },
        };

        if has_error {
            style.border.color = palette.danger.base.color;
        }

        style
    }
}
