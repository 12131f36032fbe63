// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::scheme;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Sticky header. Once the page is scrolled it turns white and translucent
/// with a hairline bottom edge; at the top it blends into the hero.
pub fn header(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = scheme(theme);
        let background = if scrolled {
            Color {
                a: opacity::SURFACE,
                ..colors.surface_primary
            }
        } else {
            colors.surface_hero
        };

        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(colors.text_primary),
            border: Border {
                color: Color {
                    a: 0.1,
                    ..colors.text_primary
                },
                width: border::WIDTH_SM,
                radius: radius::NONE.into(),
            },
            shadow: if scrolled { shadow::SM } else { shadow::NONE },
            ..Default::default()
        }
    }
}

/// Hero band.
pub fn hero(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_hero)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Rounded frame around the hero slide.
pub fn hero_frame(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme(theme).skeleton)),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Gallery section background.
pub fn gallery_section(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme(theme).surface_secondary)),
        ..Default::default()
    }
}

/// Grey tile shown while thumbnails load.
pub fn skeleton(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme(theme).skeleton)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Item count badge inside a category tab.
pub fn count_badge(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = scheme(theme);
        let (background, text) = if active {
            (
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::WHITE
                },
                colors.surface_primary,
            )
        } else {
            (colors.skeleton, colors.text_secondary)
        };
        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Full-window lightbox backdrop.
pub fn backdrop(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.overlay_background)),
        text_color: Some(colors.overlay_text),
        ..Default::default()
    }
}

/// Footer strip.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::GRAY_400),
        ..Default::default()
    }
}

/// Toast card with a colored leading edge.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = scheme(theme);
        container::Style {
            background: Some(Background::Color(colors.surface_primary)),
            text_color: Some(colors.text_primary),
            border: Border {
                color: accent,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: shadow::LG,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_header_is_translucent() {
        let style = header(true)(&Theme::Light);
        match style.background {
            Some(Background::Color(c)) => assert!(c.a < 1.0),
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn top_header_matches_hero() {
        let header_bg = header(false)(&Theme::Light).background;
        let hero_bg = hero(&Theme::Light).background;
        assert_eq!(header_bg, hero_bg);
    }
}
