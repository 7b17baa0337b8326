// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by the toast card and the overlay stack.

- **Palette**: base and category colors
- **Opacity**: standardized opacity levels
- **Spacing**: 8px grid
- **Sizing**: component sizes
- **Typography**: font size scale
- **Border** / **Radius** / **Shadow**

```
use iced_toasts::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let hover = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::GRAY_400
};
let padding = spacing::SM;
# let _ = (hover, padding);
```
"#]

use iced::Color;

pub mod palette {
    use super::Color;

    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Category accents
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;

    /// Card background while a swipe is in progress.
    pub const DRAGGING: f32 = 0.85;
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;

    /// Line height multiplier applied to body text.
    pub const LINE_HEIGHT: f32 = 1.3;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
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
    assert!(opacity::DRAGGING > 0.0 && opacity::DRAGGING < 1.0);

    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(sizing::TOAST_WIDTH > sizing::ICON_SM + 2.0 * spacing::SM);
};
