// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing, size and radius the gallery draws with.

## Organization

- **Palette**: Base colors (warm neutrals, rose brand scale, gold accent)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use keepsake::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Warm neutrals
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const CREAM_50: Color = Color::from_rgb(1.0, 0.98, 0.96);
    pub const CREAM_100: Color = Color::from_rgb(0.98, 0.94, 0.91);
    pub const CREAM_200: Color = Color::from_rgb(0.94, 0.88, 0.84);
    pub const TAUPE_700: Color = Color::from_rgb(0.33, 0.26, 0.25);
    pub const PLUM_800: Color = Color::from_rgb(0.17, 0.12, 0.14);
    pub const PLUM_900: Color = Color::from_rgb(0.11, 0.08, 0.10);

    // Brand colors (rose scale)
    pub const ROSE_400: Color = Color::from_rgb(0.93, 0.45, 0.56);
    pub const ROSE_500: Color = Color::from_rgb(0.86, 0.30, 0.44);
    pub const ROSE_600: Color = Color::from_rgb(0.74, 0.21, 0.35);

    // Accent for the final card
    pub const GOLD_400: Color = Color::from_rgb(0.96, 0.78, 0.38);
    pub const GOLD_500: Color = Color::from_rgb(0.90, 0.68, 0.24);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// A card before its entrance animation has run.
    pub const HIDDEN_CARD: f32 = 0.35;
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Loading spinner and card icon disc.
    pub const ICON_XL: f32 = 48.0;

    /// Memory card in the grid.
    pub const CARD_WIDTH: f32 = 260.0;
    pub const CARD_HEIGHT: f32 = 220.0;

    /// Video modal content bounds.
    pub const MODAL_WIDTH: f32 = 820.0;
    pub const MODAL_VIDEO_HEIGHT: f32 = 460.0;

    pub const LETTER_WIDTH: f32 = 560.0;

    pub const PROGRESS_HEIGHT: f32 = 10.0;

    /// Cards per grid row.
    pub const GRID_COLUMNS: usize = 3;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page heading
    pub const TITLE_LG: f32 = 30.0;

    /// Modal and card titles
    pub const TITLE_MD: f32 = 20.0;

    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Dates, badges
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Badges and icon discs.
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Resting card.
    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.17, 0.12, 0.14, 0.18),
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 6.0,
    };

    /// Hovered card.
    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.17, 0.12, 0.14, 0.26),
        offset: Vector { x: 0.0, y: 6.0 },
        blur_radius: 14.0,
    };

    /// Modal panel and letter.
    pub const LG: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 32.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::HIDDEN_CARD > 0.0 && opacity::HIDDEN_CARD < opacity::OPAQUE);

    assert!(sizing::GRID_COLUMNS > 0);
    assert!(sizing::LETTER_WIDTH < sizing::MODAL_WIDTH);
    assert!(sizing::ICON_XL < sizing::CARD_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
};
