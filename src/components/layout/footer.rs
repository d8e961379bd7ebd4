//! Footer Component

use gpui::{div, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};

use crate::theme::palette::Theme;
use crate::theme::typography::Typography;

/// Footer bar pinned below the scrolling content
#[derive(IntoElement)]
pub struct Footer {
    text: SharedString,
    dark_mode: bool,
}

impl Footer {
    pub fn new(text: impl Into<SharedString>, dark_mode: bool) -> Self {
        Self {
            text: text.into(),
            dark_mode,
        }
    }
}

impl RenderOnce for Footer {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let theme = Theme::derive(self.dark_mode);

        div()
            .w_full()
            .flex()
            .justify_center()
            .p(px(20.0))
            .bg(theme.surface)
            .text_size(px(Typography::TEXT_SM))
            .text_color(theme.text_secondary)
            .text_center()
            .child(self.text)
    }
}
