//! Colors - Showcase Color Constants

use gpui::{rgb, rgba, Rgba};

/// Showcase color constants - All colors are accessed via associated functions
pub struct ShowcaseColors;

impl ShowcaseColors {
    // Brand
    /// Primary blue (header, counter, feature accents)
    pub fn primary() -> Rgba { rgb(0x007aff) }

    // Button presets
    /// Secondary button - Green
    pub fn secondary() -> Rgba { rgb(0x34c759) }
    /// Accent button - Orange
    pub fn accent() -> Rgba { rgb(0xff9500) }
    /// Danger button - Red
    pub fn danger() -> Rgba { rgb(0xff3b30) }

    // Light mode
    pub fn light_background() -> Rgba { rgb(0xffffff) }
    pub fn light_text() -> Rgba { rgb(0x000000) }
    pub fn light_text_secondary() -> Rgba { rgb(0x666666) }
    pub fn light_surface() -> Rgba { rgb(0xf5f5f5) }

    // Dark mode
    pub fn dark_background() -> Rgba { rgb(0x1a1a1a) }
    pub fn dark_text() -> Rgba { rgb(0xffffff) }
    pub fn dark_text_secondary() -> Rgba { rgb(0xcccccc) }
    pub fn dark_surface() -> Rgba { rgb(0x2d2d2d) }

    // Fixed text colors
    /// Text on colored backgrounds (buttons, header title)
    pub fn on_color() -> Rgba { rgb(0xffffff) }
    /// Header subtitle - white at 80%
    pub fn on_color_muted() -> Rgba { rgba(0xffffffcc) }

    // Overlay
    /// Modal backdrop
    pub fn backdrop() -> Rgba { rgba(0x00000088) }
}
