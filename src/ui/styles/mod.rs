// SPDX-License-Identifier: MPL-2.0
//! Widget styles shared by the showroom views.

pub mod button;
pub mod container;

use crate::ui::theming::ColorScheme;
use iced::Theme;

/// Color roles matching the active Iced theme.
pub(crate) fn scheme(theme: &Theme) -> ColorScheme {
    if matches!(theme, Theme::Light) {
        ColorScheme::light()
    } else {
        ColorScheme::dark()
    }
}
