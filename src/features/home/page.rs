//! Home Page
//!
//! The single showcase screen: counter, platform detection, feature grid and
//! theme control.

use gpui::{
    div, prelude::*, px, relative, ClickEvent, Context, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::components::composite::card::Card;
use crate::components::composite::modal::Modal;
use crate::components::layout::footer::Footer;
use crate::components::layout::header::Header;
use crate::components::layout::shell::Shell;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::domain::feature::{Feature, FEATURES};
use crate::domain::platform::Platform;
use crate::features::home::controller::HomeController;
use crate::features::home::layout::{FeatureCardStyle, HomeStyle};
use crate::state::notice_state::{Notice, NoticeState};
use crate::theme::typography::Typography;

const HEADER_TITLE: &str = "🚀 Showcase App";
const HEADER_SUBTITLE: &str = "Desktop & Mobile Support";
const FOOTER_TEXT: &str = "Built with Rust & GPUI • Works on macOS, Linux & Windows";

/// Home page component
pub struct HomePage {
    controller: HomeController,
    notices: NoticeState,
    platform: Platform,
}

impl HomePage {
    pub fn new(platform: Platform, _cx: &mut Context<Self>) -> Self {
        Self {
            controller: HomeController::new(),
            notices: NoticeState::default(),
            platform,
        }
    }

    fn render_card_title(
        &self,
        title: &'static str,
        gap: f32,
        style: &HomeStyle,
    ) -> impl IntoElement {
        div()
            .mb(px(gap))
            .text_size(px(Typography::TEXT_BASE))
            .font_weight(gpui::FontWeight::BOLD)
            .text_color(style.theme.text)
            .child(title)
    }

    fn render_counter_card(&self, style: &HomeStyle, cx: &Context<Self>) -> impl IntoElement {
        let state = self.controller.state();

        Card::new(state.dark_mode)
            .child(self.render_card_title("Interactive Counter", style.counter_title_gap, style))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .child(
                        div()
                            .mb(px(20.0))
                            .text_size(px(Typography::TEXT_DISPLAY))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(style.counter_color)
                            .text_center()
                            .child(state.counter.to_string()),
                    )
                    .child(
                        div()
                            .w_full()
                            .flex()
                            .flex_row()
                            .justify_around()
                            .mb(px(20.0))
                            .child(Button::primary("increment-btn", "+1").on_click(
                                cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.controller.increment();
                                    cx.notify();
                                }),
                            ))
                            .child(Button::secondary("reset-btn", "Reset").on_click(
                                cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.controller.reset();
                                    cx.notify();
                                }),
                            )),
                    ),
            )
    }

    fn render_platform_card(&self, style: &HomeStyle, cx: &Context<Self>) -> impl IntoElement {
        Card::new(self.controller.state().dark_mode)
            .child(self.render_card_title("Platform Detection", style.card_title_gap, style))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .justify_center()
                    .mt(px(20.0))
                    .gap_2()
                    .child(
                        div()
                            .text_size(px(24.0))
                            .text_color(style.counter_color)
                            .child(self.platform.glyph()),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_BASE))
                            .text_color(style.theme.text_secondary)
                            .child(self.platform.running_label()),
                    ),
            )
            .child(
                Button::accent("platform-info-btn", "Show Platform Info")
                    .margin_top(px(15.0))
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.controller.show_info(&this.platform, &mut this.notices);
                        cx.notify();
                    })),
            )
    }

    fn render_feature(&self, feature: &Feature, card: &FeatureCardStyle) -> impl IntoElement {
        div()
            .w(relative(card.width))
            .flex()
            .flex_col()
            .bg(card.background)
            .rounded(px(card.radius))
            .p(px(card.padding))
            .mb(px(card.margin_bottom))
            .border_l_4()
            .border_color(card.accent)
            .child(
                div()
                    .mb(px(5.0))
                    .text_size(px(Typography::TEXT_BASE))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(card.title_color)
                    .child(feature.title),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(card.description_color)
                    .child(feature.description),
            )
    }

    fn render_features_card(&self, style: &HomeStyle) -> impl IntoElement {
        let two_column = style.layout.is_row();

        Card::new(self.controller.state().dark_mode)
            .child(self.render_card_title(
                "Cross-Platform Features",
                style.card_title_gap,
                style,
            ))
            .child(
                div()
                    .w_full()
                    .mt(px(10.0))
                    .flex()
                    .when(two_column, |el| el.flex_row().flex_wrap().justify_between())
                    .when(!two_column, |el| el.flex_col())
                    .children(
                        FEATURES
                            .iter()
                            .map(|feature| self.render_feature(feature, &style.feature_card)),
                    ),
            )
    }

    fn render_theme_card(&self, style: &HomeStyle, cx: &Context<Self>) -> impl IntoElement {
        let state = self.controller.state();

        Card::new(state.dark_mode)
            .child(self.render_card_title("Theme Control", style.card_title_gap, style))
            .child(
                Button::accent("theme-toggle-btn", state.theme_toggle_label()).on_click(
                    cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.controller.toggle_theme();
                        cx.notify();
                    }),
                ),
            )
    }

    fn render_notice(&self, notice: &Notice, dark_mode: bool, cx: &Context<Self>) -> impl IntoElement {
        let mut modal = Modal::new(notice.title.clone(), notice.message.clone()).dark_mode(dark_mode);

        for (ix, option) in notice.options.iter().enumerate() {
            modal = modal.action(
                Button::primary(("notice-option", ix), SharedString::from(option.label.clone()))
                    .size(ButtonSize::Small)
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.notices.acknowledge();
                        cx.notify();
                    })),
            );
        }

        modal
    }
}

impl Render for HomePage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.controller.state();
        let viewport_width = f32::from(window.viewport_size().width);
        let style = HomeStyle::derive(state.dark_mode, viewport_width);

        let mut shell = Shell::new(state.dark_mode)
            .child(Header::new(
                HEADER_TITLE,
                HEADER_SUBTITLE,
                state.dark_mode,
                self.platform.clone(),
            ))
            .child(
                div()
                    .id("home-content")
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_y_scroll()
                    .p(px(20.0))
                    .child(self.render_counter_card(&style, cx))
                    .child(self.render_platform_card(&style, cx))
                    .child(self.render_features_card(&style))
                    .child(self.render_theme_card(&style, cx)),
            )
            .child(Footer::new(FOOTER_TEXT, state.dark_mode));

        if let Some(notice) = self.notices.current() {
            shell = shell.child(self.render_notice(notice, state.dark_mode, cx));
        }

        shell
    }
}
