//! Modal Component
//!
//! Acknowledgment dialog drawn over the whole window.

use gpui::{
    div, prelude::*, px, App, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window,
};

use crate::theme::colors::ShowcaseColors;
use crate::theme::palette::Theme;
use crate::theme::typography::Typography;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    message: SharedString,
    dark_mode: bool,
    actions: Vec<gpui::AnyElement>,
}

impl Modal {
    /// Create a new modal
    pub fn new(title: impl Into<SharedString>, message: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            dark_mode: false,
            actions: Vec::new(),
        }
    }

    /// Use the dark palette
    pub fn dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    /// Add an action element (usually a button) to the footer
    pub fn action(mut self, action: impl IntoElement) -> Self {
        self.actions.push(action.into_any_element());
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let theme = Theme::derive(self.dark_mode);

        // Backdrop
        div()
            .absolute()
            .inset_0()
            .occlude()
            .bg(ShowcaseColors::backdrop())
            .flex()
            .items_center()
            .justify_center()
            .child(
                // Dialog
                div()
                    .bg(theme.background)
                    .rounded_lg()
                    .shadow_lg()
                    .min_w(px(280.0))
                    .max_w(px(420.0))
                    .flex()
                    .flex_col()
                    .gap_3()
                    .px_6()
                    .py_4()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_BASE))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(theme.text)
                            .child(self.title),
                    )
                    .children(self.message.lines().map(|line| {
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(theme.text_secondary)
                            .child(SharedString::from(line.to_string()))
                    }))
                    .child(
                        div()
                            .flex()
                            .justify_end()
                            .gap_2()
                            .children(self.actions),
                    ),
            )
    }
}
