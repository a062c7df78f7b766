// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the showcase UI.
//!
//! - **Palette**: base colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (amber scale, after the showcase's warm look)
    pub const ACCENT_400: Color = Color::from_rgb(0.95, 0.72, 0.34);
    pub const ACCENT_600: Color = Color::from_rgb(0.71, 0.44, 0.11);
    pub const ACCENT_800: Color = Color::from_rgb(0.47, 0.27, 0.07);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Dimmed backdrop behind the fullscreen overlay.
    pub const OVERLAY_STRONG: f32 = 0.95;
    /// Translucent control chips over imagery.
    pub const CONTROL_CHIP: f32 = 0.2;
    /// Inactive position-indicator dots.
    pub const DOT_INACTIVE: f32 = 0.5;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Diameter of a position-indicator dot.
    pub const DOT: f32 = 10.0;
    /// Width of the active (stretched) indicator dot.
    pub const DOT_ACTIVE_WIDTH: f32 = 26.0;
}
