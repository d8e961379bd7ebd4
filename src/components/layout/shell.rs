//! Shell Component
//!
//! The window-filling container behind the screen.

use gpui::{div, prelude::*, App, IntoElement, ParentElement, RenderOnce, Styled, Window};

use crate::theme::palette::Theme;

/// Application shell wrapper
#[derive(IntoElement)]
pub struct Shell {
    dark_mode: bool,
    children: Vec<gpui::AnyElement>,
}

impl Shell {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl RenderOnce for Shell {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .bg(Theme::derive(self.dark_mode).background)
            .children(self.children)
    }
}
