//! UI widgets module
//!
//! Contains the widget declarations a panel's tree is built from (labels,
//! buttons, checkboxes, radios, text fields, spacers) and the layout
//! containers that arrange them. Widgets are transient: a declaration builds
//! them every frame and the compose engine consumes them.

pub mod core;
pub mod layout;
pub mod text;
pub mod button;
pub mod toggle;
pub mod text_field;

// Re-export core types
pub use self::core::{palette, ButtonState, HorizontalAlign, SizeHints, WidgetCommon};
pub use layout::{
    resolve_extents, ExpandPolicy, LayoutChild, LayoutContainer, LayoutReport, LayoutWarning, Orientation,
};

// Re-export widget types
pub use button::UIButton;
pub use text::UIText;
pub use text_field::UITextField;
pub use toggle::{UICheckbox, UIRadio};

use super::compose::ComposeCtx;
use crate::foundation::math::Rect;

/// Empty slot that only takes up space
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UISpacer {
    /// Base widget properties
    pub common: WidgetCommon,
}

/// Atomic widget declared inside a layout container
///
/// ```
/// use ui_engine::ui::widgets::WidgetNode;
///
/// let save = WidgetNode::button("Save").key("save").width(80.0);
/// assert_eq!(save.common().key.as_deref(), Some("save"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetNode {
    /// Static text
    Text(UIText),
    /// Clickable button
    Button(UIButton),
    /// Boolean toggle
    Checkbox(UICheckbox),
    /// One choice of a radio group
    Radio(UIRadio),
    /// Editable single-line text
    TextField(UITextField),
    /// Blank space
    Spacer(UISpacer),
}

impl WidgetNode {
    /// Static text label
    pub fn label(text: impl Into<String>) -> Self {
        Self::Text(UIText::new(text))
    }

    /// Button showing `text`
    pub fn button(text: impl Into<String>) -> Self {
        Self::Button(UIButton::new(text))
    }

    /// Checkbox that starts as `initial` the first time it is declared
    pub fn checkbox(text: impl Into<String>, initial: bool) -> Self {
        Self::Checkbox(UICheckbox::new(text, initial))
    }

    /// Radio choice `value` of `group`
    pub fn radio(group: impl Into<String>, value: u32, text: impl Into<String>) -> Self {
        Self::Radio(UIRadio::new(group, value, text))
    }

    /// Text field that starts with `initial` the first time it is declared
    pub fn text_field(initial: impl Into<String>) -> Self {
        Self::TextField(UITextField::new(initial))
    }

    /// Blank space
    pub fn spacer() -> Self {
        Self::Spacer(UISpacer::default())
    }

    /// Properties shared by every widget
    pub fn common(&self) -> &WidgetCommon {
        match self {
            Self::Text(widget) => &widget.common,
            Self::Button(widget) => &widget.common,
            Self::Checkbox(widget) => &widget.common,
            Self::Radio(widget) => &widget.common,
            Self::TextField(widget) => &widget.common,
            Self::Spacer(widget) => &widget.common,
        }
    }

    fn common_mut(&mut self) -> &mut WidgetCommon {
        match self {
            Self::Text(widget) => &mut widget.common,
            Self::Button(widget) => &mut widget.common,
            Self::Checkbox(widget) => &mut widget.common,
            Self::Radio(widget) => &mut widget.common,
            Self::TextField(widget) => &mut widget.common,
            Self::Spacer(widget) => &mut widget.common,
        }
    }

    /// Sizing hints
    pub fn hints(&self) -> &SizeHints {
        &self.common().hints
    }

    /// Give the widget an explicit identity key within its panel
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.common_mut().key = Some(key.into());
        self
    }

    /// Declare an explicit width
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.common_mut().hints.width = Some(width);
        self
    }

    /// Declare an explicit height
    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.common_mut().hints.height = Some(height);
        self
    }

    /// Declare a ratio of the parent's remaining space
    #[must_use]
    pub fn ratio(mut self, ratio: f32) -> Self {
        self.common_mut().hints.ratio = Some(ratio);
        self
    }

    /// Enable or disable interaction
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.common_mut().disabled = !enabled;
        self
    }

    /// Text alignment (labels and buttons only)
    #[must_use]
    pub fn align(mut self, align: HorizontalAlign) -> Self {
        match &mut self {
            Self::Text(widget) => widget.h_align = align,
            Self::Button(widget) => widget.h_align = align,
            _ => {}
        }
        self
    }

    /// Maximum content length in characters (text fields only)
    #[must_use]
    pub fn max_len(mut self, max_len: usize) -> Self {
        if let Self::TextField(widget) = &mut self {
            widget.max_len = Some(max_len);
        }
        self
    }

    /// Mark a radio choice as the group's default selection
    #[must_use]
    pub fn selected(mut self) -> Self {
        if let Self::Radio(widget) = &mut self {
            widget.initially_selected = true;
        }
        self
    }

    /// Lay out, interact and draw within the resolved rectangle
    pub(crate) fn compose(&self, ctx: &mut ComposeCtx<'_>, rect: Rect) {
        match self {
            Self::Text(widget) => widget.compose(ctx, rect),
            Self::Button(widget) => widget.compose(ctx, rect),
            Self::Checkbox(widget) => widget.compose(ctx, rect),
            Self::Radio(widget) => widget.compose(ctx, rect),
            Self::TextField(widget) => widget.compose(ctx, rect),
            // Consumes its path slot so siblings keep stable identities
            Self::Spacer(_) => {}
        }
    }
}
