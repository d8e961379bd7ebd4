//! Home Layout - Derived Presentation
//!
//! Everything here is a pure function of `(dark_mode, viewport width)` and is
//! recomputed on every render.

use gpui::Rgba;

use crate::constants::{
    FEATURE_CARD_WIDTH_SINGLE_COLUMN, FEATURE_CARD_WIDTH_TWO_COLUMN, TWO_COLUMN_MIN_WIDTH,
};
use crate::theme::colors::ShowcaseColors;
use crate::theme::palette::Theme;

/// Arrangement of the feature grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureLayout {
    /// Cards stacked in one column
    SingleColumn,
    /// Cards in a wrapping row, two per line
    TwoColumn,
}

impl FeatureLayout {
    /// Two columns strictly above the breakpoint
    pub fn for_width(viewport_width: f32) -> Self {
        if viewport_width > TWO_COLUMN_MIN_WIDTH {
            Self::TwoColumn
        } else {
            Self::SingleColumn
        }
    }

    /// Card width as a fraction of the grid
    pub fn card_width(self) -> f32 {
        match self {
            Self::SingleColumn => FEATURE_CARD_WIDTH_SINGLE_COLUMN,
            Self::TwoColumn => FEATURE_CARD_WIDTH_TWO_COLUMN,
        }
    }

    pub fn is_row(self) -> bool {
        matches!(self, Self::TwoColumn)
    }
}

/// Feature card presentation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureCardStyle {
    pub background: Rgba,
    pub accent: Rgba,
    pub title_color: Rgba,
    pub description_color: Rgba,
    pub width: f32,
    pub radius: f32,
    pub padding: f32,
    pub margin_bottom: f32,
}

/// All styles the home screen computes for one render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomeStyle {
    pub theme: Theme,
    pub layout: FeatureLayout,
    pub feature_card: FeatureCardStyle,
    /// Big counter number
    pub counter_color: Rgba,
    /// Space below a card title
    pub card_title_gap: f32,
    /// Space below the counter card title, above the big number
    pub counter_title_gap: f32,
}

impl HomeStyle {
    pub fn derive(dark_mode: bool, viewport_width: f32) -> Self {
        let theme = Theme::derive(dark_mode);
        let layout = FeatureLayout::for_width(viewport_width);

        Self {
            theme,
            layout,
            feature_card: FeatureCardStyle {
                background: theme.surface,
                accent: ShowcaseColors::primary(),
                title_color: theme.text,
                description_color: theme.text_secondary,
                width: layout.card_width(),
                radius: 12.0,
                padding: 15.0,
                margin_bottom: 15.0,
            },
            counter_color: ShowcaseColors::primary(),
            card_title_gap: 5.0,
            counter_title_gap: 15.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert_eq!(FeatureLayout::for_width(599.0), FeatureLayout::SingleColumn);
        assert_eq!(FeatureLayout::for_width(600.0), FeatureLayout::SingleColumn);
        assert_eq!(FeatureLayout::for_width(600.5), FeatureLayout::TwoColumn);
        assert_eq!(FeatureLayout::for_width(1024.0), FeatureLayout::TwoColumn);
    }

    #[test]
    fn layout_ignores_theme() {
        for width in [320.0, 600.0, 601.0, 1440.0] {
            let light = HomeStyle::derive(false, width);
            let dark = HomeStyle::derive(true, width);
            assert_eq!(light.layout, dark.layout);
            assert_eq!(light.feature_card.width, dark.feature_card.width);
        }
    }

    #[test]
    fn card_width_per_layout() {
        assert_eq!(HomeStyle::derive(false, 800.0).feature_card.width, 0.48);
        assert_eq!(HomeStyle::derive(false, 400.0).feature_card.width, 1.0);
        assert!(FeatureLayout::TwoColumn.is_row());
        assert!(!FeatureLayout::SingleColumn.is_row());
    }

    #[test]
    fn only_counter_title_gets_wide_gap() {
        let style = HomeStyle::derive(false, 800.0);
        assert_eq!(style.card_title_gap, 5.0);
        assert_eq!(style.counter_title_gap, 15.0);
        assert_eq!(HomeStyle::derive(true, 320.0).card_title_gap, style.card_title_gap);
    }

    #[test]
    fn feature_cards_use_surface() {
        let dark = HomeStyle::derive(true, 800.0);
        assert_eq!(dark.feature_card.background, dark.theme.surface);
        assert_eq!(dark.feature_card.title_color, dark.theme.text);
        assert_eq!(dark.counter_color, ShowcaseColors::primary());
    }
}
