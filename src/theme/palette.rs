//! Palette - Light/Dark Theme Derivation
//!
//! The theme is never stored. Every render derives it from the dark-mode flag.

use gpui::Rgba;

use super::colors::ShowcaseColors;

/// Named colors for one render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Rgba,
    pub text: Rgba,
    pub text_secondary: Rgba,
    pub surface: Rgba,
    pub primary: Rgba,
}

impl Theme {
    /// Derive the palette for the given mode
    pub fn derive(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                background: ShowcaseColors::dark_background(),
                text: ShowcaseColors::dark_text(),
                text_secondary: ShowcaseColors::dark_text_secondary(),
                surface: ShowcaseColors::dark_surface(),
                primary: ShowcaseColors::primary(),
            }
        } else {
            Self {
                background: ShowcaseColors::light_background(),
                text: ShowcaseColors::light_text(),
                text_secondary: ShowcaseColors::light_text_secondary(),
                surface: ShowcaseColors::light_surface(),
                primary: ShowcaseColors::primary(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_is_deterministic() {
        for dark in [false, true] {
            let first = Theme::derive(dark);
            for _ in 0..10 {
                assert_eq!(Theme::derive(dark), first);
            }
        }
    }

    #[test]
    fn light_and_dark_differ_except_primary() {
        let light = Theme::derive(false);
        let dark = Theme::derive(true);
        assert_ne!(light.background, dark.background);
        assert_ne!(light.text, dark.text);
        assert_ne!(light.text_secondary, dark.text_secondary);
        assert_ne!(light.surface, dark.surface);
        assert_eq!(light.primary, dark.primary);
    }

    #[test]
    fn dark_palette_values() {
        let dark = Theme::derive(true);
        assert_eq!(dark.background, gpui::rgb(0x1a1a1a));
        assert_eq!(dark.surface, gpui::rgb(0x2d2d2d));
        assert_eq!(dark.text_secondary, gpui::rgb(0xcccccc));
    }
}
