//! Header Component
//!
//! The banner at the top of the screen with title and subtitle.

use gpui::{
    div, px, App, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled, Window,
};

use crate::constants::{HEADER_TOP_PADDING_DEFAULT, HEADER_TOP_PADDING_IOS};
use crate::domain::platform::Platform;
use crate::theme::colors::ShowcaseColors;
use crate::theme::palette::Theme;
use crate::theme::typography::Typography;

/// Resolved header presentation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStyle {
    pub background: Rgba,
    pub title_color: Rgba,
    pub subtitle_color: Rgba,
    pub padding_top: f32,
    pub padding_x: f32,
    pub padding_bottom: f32,
}

impl HeaderStyle {
    pub fn derive(platform: &Platform, dark_mode: bool) -> Self {
        let padding_top = if platform.is_ios() {
            HEADER_TOP_PADDING_IOS
        } else {
            HEADER_TOP_PADDING_DEFAULT
        };

        Self {
            background: Theme::derive(dark_mode).primary,
            title_color: ShowcaseColors::on_color(),
            subtitle_color: ShowcaseColors::on_color_muted(),
            padding_top,
            padding_x: 20.0,
            padding_bottom: 20.0,
        }
    }
}

/// Header component
#[derive(IntoElement)]
pub struct Header {
    title: SharedString,
    subtitle: SharedString,
    dark_mode: bool,
    platform: Platform,
}

impl Header {
    pub fn new(
        title: impl Into<SharedString>,
        subtitle: impl Into<SharedString>,
        dark_mode: bool,
        platform: Platform,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            dark_mode,
            platform,
        }
    }
}

impl RenderOnce for Header {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = HeaderStyle::derive(&self.platform, self.dark_mode);

        div()
            .w_full()
            .flex()
            .flex_col()
            .items_center()
            .pt(px(style.padding_top))
            .px(px(style.padding_x))
            .pb(px(style.padding_bottom))
            .bg(style.background)
            .child(
                div()
                    .mb(px(5.0))
                    .text_size(px(Typography::TEXT_TITLE))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(style.title_color)
                    .child(self.title),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_BASE))
                    .text_color(style.subtitle_color)
                    .child(self.subtitle),
            )
    }
}
