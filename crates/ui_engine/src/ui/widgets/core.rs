//! Core UI widget primitives
//!
//! Shared types and structures used by all UI widgets.

use super::layout::{ExpandPolicy, Orientation};
use crate::foundation::math::{rgba, Vec4};

/// Declared sizing hints of a widget or nested container
///
/// Precedence when resolving the expand policy on a flow axis:
/// explicit extent, then ratio, then dynamic.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizeHints {
    /// Explicit width in pixels
    pub width: Option<f32>,
    /// Explicit height in pixels
    pub height: Option<f32>,
    /// Fraction of the parent's remaining space
    pub ratio: Option<f32>,
}

impl SizeHints {
    /// Expand policy along a container's flow axis
    pub fn policy(&self, orientation: Orientation) -> ExpandPolicy {
        let explicit = match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        };
        match (explicit, self.ratio) {
            (Some(extent), _) => ExpandPolicy::Fixed(extent),
            (None, Some(ratio)) => ExpandPolicy::Ratio(ratio),
            (None, None) => ExpandPolicy::Dynamic,
        }
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    /// Left-aligned text
    #[default]
    Left,
    /// Center-aligned text
    Center,
    /// Right-aligned text
    Right,
}

impl HorizontalAlign {
    /// X position of a run of `text_width` pixels inside `[x, x + width]`
    pub fn place(self, x: f32, width: f32, text_width: f32) -> f32 {
        match self {
            Self::Left => x,
            Self::Center => x + ((width - text_width) * 0.5).max(0.0),
            Self::Right => x + (width - text_width).max(0.0),
        }
    }
}

/// Properties every widget declares
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetCommon {
    /// Explicit identity key within the panel
    pub key: Option<String>,
    /// Sizing hints
    pub hints: SizeHints,
    /// Disabled widgets draw dimmed and never report interactions
    pub disabled: bool,
}

/// Interaction state used for visual feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Normal resting state
    Normal,
    /// Mouse is hovering over the widget
    Hovered,
    /// Widget is being pressed
    Pressed,
    /// Widget is disabled (non-interactive)
    Disabled,
}

/// Fixed widget colors
pub mod palette {
    use super::{rgba, Vec4};

    /// Panel body background
    pub fn panel_background() -> Vec4 { rgba(0.18, 0.18, 0.2, 0.95) }
    /// Title bar background
    pub fn title_bar() -> Vec4 { rgba(0.25, 0.25, 0.3, 1.0) }
    /// Frame and widget borders
    pub fn border() -> Vec4 { rgba(0.6, 0.6, 0.6, 1.0) }
    /// Border of the focused text field
    pub fn focus_border() -> Vec4 { rgba(0.4, 0.6, 1.0, 1.0) }
    /// Regular text
    pub fn text() -> Vec4 { rgba(1.0, 1.0, 1.0, 1.0) }
    /// Text of disabled widgets
    pub fn text_disabled() -> Vec4 { rgba(0.6, 0.6, 0.6, 1.0) }
    /// Check mark / selected radio fill
    pub fn mark() -> Vec4 { rgba(0.8, 0.8, 0.85, 1.0) }
    /// Text field background
    pub fn field() -> Vec4 { rgba(0.1, 0.1, 0.12, 1.0) }
    /// Text selection highlight
    pub fn selection() -> Vec4 { rgba(0.3, 0.4, 0.7, 0.6) }
    /// Resize grip
    pub fn grip() -> Vec4 { rgba(0.45, 0.45, 0.5, 1.0) }
}

impl ButtonState {
    /// Fill color for this state
    pub fn color(self) -> Vec4 {
        match self {
            Self::Normal => rgba(0.3, 0.3, 0.3, 0.9),
            Self::Hovered => rgba(0.4, 0.4, 0.5, 1.0),
            Self::Pressed => rgba(0.5, 0.5, 0.6, 1.0),
            Self::Disabled => rgba(0.2, 0.2, 0.2, 0.5),
        }
    }
}
