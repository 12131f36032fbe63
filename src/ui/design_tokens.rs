// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, size and spacing value the showroom uses, in one place.

## Organization

- **Palette**: Brand and neutral colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes (tiles, hero, lightbox controls)
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use superglass::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let gutter = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.07, 0.09, 0.15);
    pub const GRAY_700: Color = Color::from_rgb(0.22, 0.25, 0.32);
    pub const GRAY_400: Color = Color::from_rgb(0.61, 0.64, 0.69);
    pub const GRAY_200: Color = Color::from_rgb(0.90, 0.91, 0.92);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.96, 0.96);
    pub const GRAY_50: Color = Color::from_rgb(0.98, 0.98, 0.98);

    /// Warm sand used behind the header and hero (#f3ebe2).
    pub const SAND: Color = Color::from_rgb(0.953, 0.922, 0.886);

    /// Deep navy accent (#2d3c67).
    pub const NAVY: Color = Color::from_rgb(0.176, 0.235, 0.404);
    pub const NAVY_LIGHT: Color = Color::from_rgb(0.44, 0.53, 0.78);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.6;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Lightbox backdrop.
    pub const BACKDROP: f32 = 0.9;

    /// Compact header once the page is scrolled.
    pub const SURFACE: f32 = 0.8;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
    pub const SECTION: f32 = 80.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Gallery tile, matching the 4:3 thumbnail rendition.
    pub const TILE_WIDTH: f32 = 300.0;
    pub const TILE_HEIGHT: f32 = 225.0;

    /// Tiles per grid row.
    pub const GRID_COLUMNS: usize = 4;

    pub const HERO_WIDTH: f32 = 650.0;
    pub const HERO_HEIGHT: f32 = 520.0;

    pub const HEADER_HEIGHT: f32 = 72.0;
    pub const HEADER_HEIGHT_COMPACT: f32 = 56.0;

    /// Round lightbox arrow buttons.
    pub const NAV_BUTTON: f32 = 48.0;
    pub const CLOSE_BUTTON: f32 = 40.0;

    pub const SERVICE_CARD_WIDTH: f32 = 280.0;
    pub const SERVICE_CARD_HEIGHT: f32 = 140.0;

    /// Category tab strip above the gallery grid.
    pub const TAB_BAR_HEIGHT: f32 = 48.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    pub const CONTENT_MAX_WIDTH: f32 = 1400.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline.
    pub const DISPLAY: f32 = 48.0;

    /// Section headings ("Our Services", "Our Gallery").
    pub const TITLE_LG: f32 = 30.0;

    pub const TITLE_MD: f32 = 20.0;

    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Counters, card indices, footer.
    pub const CAPTION: f32 = 12.0;

    /// Arrow glyphs inside lightbox buttons.
    pub const GLYPH: f32 = 28.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 24.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    const SOFT: Color = Color {
        a: 0.15,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SOFT,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const LG: Shadow = Shadow {
        color: SOFT,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 20.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_MEDIUM);

    assert!(sizing::HEADER_HEIGHT > sizing::HEADER_HEIGHT_COMPACT);
    assert!(sizing::GRID_COLUMNS > 0);
    assert!(sizing::NAV_BUTTON > sizing::CLOSE_BUTTON);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn tile_matches_thumbnail_aspect() {
        assert!((sizing::TILE_WIDTH / sizing::TILE_HEIGHT - 600.0 / 450.0).abs() < 1e-3);
    }
}
