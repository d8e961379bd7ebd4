//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, Pixels, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled,
    Window,
};

use crate::constants::DISABLED_OPACITY;
use crate::theme::colors::ShowcaseColors;
use crate::theme::typography::Typography;

/// Click handler type
pub type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (blue)
    #[default]
    Primary,
    /// Secondary button (green)
    Secondary,
    /// Accent button (orange)
    Accent,
    /// Danger button (red)
    Danger,
}

impl ButtonVariant {
    /// Resolve a variant tag. Unknown tags fall back to `Primary`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "accent" => Self::Accent,
            "danger" => Self::Danger,
            _ => Self::default(),
        }
    }

    /// Background color preset
    pub fn background(self) -> Rgba {
        match self {
            Self::Primary => ShowcaseColors::primary(),
            Self::Secondary => ShowcaseColors::secondary(),
            Self::Accent => ShowcaseColors::accent(),
            Self::Danger => ShowcaseColors::danger(),
        }
    }
}

impl From<&str> for ButtonVariant {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
}

impl ButtonSize {
    /// Resolve a size tag. Unknown tags fall back to `Medium`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            _ => Self::default(),
        }
    }

    /// Horizontal and vertical padding
    pub fn padding(self) -> (f32, f32) {
        match self {
            Self::Small => (12.0, 8.0),
            Self::Medium => (20.0, 12.0),
            Self::Large => (24.0, 16.0),
        }
    }
}

impl From<&str> for ButtonSize {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

/// Resolved presentation of a button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonPreset {
    pub background: Rgba,
    pub padding_x: f32,
    pub padding_y: f32,
    pub opacity: f32,
}

impl ButtonPreset {
    pub fn resolve(variant: ButtonVariant, size: ButtonSize, disabled: bool) -> Self {
        let (padding_x, padding_y) = size.padding();
        Self {
            background: variant.background(),
            padding_x,
            padding_y,
            opacity: if disabled { DISABLED_OPACITY } else { 1.0 },
        }
    }
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    margin_top: Option<Pixels>,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            margin_top: None,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: impl Into<ButtonVariant>) -> Self {
        self.variant = variant.into();
        self
    }

    /// Set the button size
    pub fn size(mut self, size: impl Into<ButtonSize>) -> Self {
        self.size = size.into();
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Space above the button
    pub fn margin_top(mut self, margin: Pixels) -> Self {
        self.margin_top = Some(margin);
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a secondary button
    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    /// Create an accent button
    pub fn accent(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Accent)
    }

    /// Create a danger button
    pub fn danger(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Danger)
    }

    pub fn preset(&self) -> ButtonPreset {
        ButtonPreset::resolve(self.variant, self.size, self.disabled)
    }

    /// Gate for the click handler
    fn activation(&mut self) -> Activation<ClickHandler> {
        Activation::new(self.on_click.take(), self.disabled)
    }
}

/// Routes each activation to the handler, unless disabled
pub struct Activation<H> {
    handler: Option<H>,
    disabled: bool,
}

impl<H> Activation<H> {
    pub fn new(handler: Option<H>, disabled: bool) -> Self {
        Self { handler, disabled }
    }

    /// Whether an activation would reach a handler
    pub fn is_armed(&self) -> bool {
        !self.disabled && self.handler.is_some()
    }

    /// Run `invoke` with the handler once. Returns false when suppressed.
    pub fn dispatch(&self, invoke: impl FnOnce(&H)) -> bool {
        match &self.handler {
            Some(handler) if !self.disabled => {
                invoke(handler);
                true
            }
            _ => false,
        }
    }
}

impl RenderOnce for Button {
    fn render(mut self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let preset = self.preset();
        let activation = self.activation();
        let enabled = !self.disabled;

        div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .px(px(preset.padding_x))
            .py(px(preset.padding_y))
            .when_some(self.margin_top, |el, margin| el.mt(margin))
            .bg(preset.background)
            .text_color(ShowcaseColors::on_color())
            .text_size(px(Typography::TEXT_BASE))
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .rounded(px(25.0))
            .opacity(preset.opacity)
            .when(enabled, |el| el.cursor_pointer().hover(|s| s.opacity(0.8)))
            .when(activation.is_armed(), |el| {
                el.on_click(move |event: &ClickEvent, window: &mut Window, cx: &mut App| {
                    activation.dispatch(|handler| handler(event, window, cx));
                })
            })
            .child(self.label)
    }
}
