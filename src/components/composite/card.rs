//! Card Component
//!
//! A themed surface that wraps arbitrary content.

use gpui::{div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, Rgba, Styled, Window};

use crate::theme::palette::Theme;

/// Resolved card presentation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub background: Rgba,
    pub radius: f32,
    pub padding: f32,
    pub margin_bottom: f32,
}

impl CardStyle {
    pub fn for_mode(dark_mode: bool) -> Self {
        Self {
            background: Theme::derive(dark_mode).surface,
            radius: 15.0,
            padding: 20.0,
            margin_bottom: 20.0,
        }
    }
}

/// Card container
#[derive(IntoElement)]
pub struct Card {
    dark_mode: bool,
    children: Vec<gpui::AnyElement>,
}

impl Card {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            children: Vec::new(),
        }
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = CardStyle::for_mode(self.dark_mode);

        div()
            .w_full()
            .flex()
            .flex_col()
            .bg(style.background)
            .rounded(px(style.radius))
            .p(px(style.padding))
            .mb(px(style.margin_bottom))
            .shadow_md()
            .children(self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_is_idempotent() {
        assert_eq!(CardStyle::for_mode(true), CardStyle::for_mode(true));
        assert_eq!(CardStyle::for_mode(false), CardStyle::for_mode(false));
    }

    #[test]
    fn surface_follows_mode() {
        assert_eq!(CardStyle::for_mode(false).background, gpui::rgb(0xf5f5f5));
        assert_eq!(CardStyle::for_mode(true).background, gpui::rgb(0x2d2d2d));
        assert_eq!(CardStyle::for_mode(true).radius, CardStyle::for_mode(false).radius);
    }
}
