// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use super::scheme;
use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Gallery category tab. The active tab is inverted.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = scheme(theme);
        let (background, text_color) = if active {
            (colors.text_primary, colors.surface_primary)
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => {
                    (colors.skeleton, colors.text_primary)
                }
                _ => (colors.surface_primary, colors.text_secondary),
            }
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: if active { shadow::SM } else { shadow::NONE },
            snap: true,
        }
    }
}

/// Round translucent control over the lightbox image (arrows, close).
pub fn lightbox_control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_HOVER,
        _ => opacity::OVERLAY_STRONG,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Numbered service card. Lifts on hover.
pub fn service_card(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);

    button::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: colors.text_primary,
        border: Border {
            color: Color {
                a: 0.1,
                ..colors.text_primary
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: if hovered { shadow::LG } else { shadow::NONE },
        snap: true,
    }
}

/// Gallery tile wrapping a thumbnail.
pub fn tile(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);
    button::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: colors.text_primary,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: match status {
            button::Status::Hovered | button::Status::Pressed => shadow::LG,
            _ => shadow::SM,
        },
        snap: true,
    }
}

/// Underlined text link in the hero ("Call Now", "WhatsApp", "Instagram").
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.text_muted,
        _ => colors.text_primary,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Outlined pill that fills on hover (header WhatsApp action).
pub fn pill(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);
    let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
    button::Style {
        background: hovered.then_some(Background::Color(colors.text_primary)),
        text_color: if hovered {
            colors.surface_primary
        } else {
            colors.text_primary
        },
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colors.text_primary
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Flat dismiss button inside a toast.
pub fn toast_dismiss(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => palette::GRAY_900,
            _ => palette::GRAY_400,
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_tab_is_inverted() {
        let theme = Theme::Light;
        let active = tab(true)(&theme, button::Status::Active);
        let idle = tab(false)(&theme, button::Status::Active);
        assert_eq!(active.text_color, palette::WHITE);
        assert_ne!(active.background, idle.background);
    }

    #[test]
    fn lightbox_control_darkens_on_hover() {
        let normal = lightbox_control(&Theme::Dark, button::Status::Active);
        let hover = lightbox_control(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn pill_fills_on_hover() {
        assert!(pill(&Theme::Light, button::Status::Active).background.is_none());
        assert!(pill(&Theme::Light, button::Status::Hovered).background.is_some());
    }
}
