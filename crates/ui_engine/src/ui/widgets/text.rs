//! Text widget - labels and text display

use super::core::{HorizontalAlign, WidgetCommon};
use crate::foundation::math::Rect;
use crate::ui::compose::ComposeCtx;

/// UI text label component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UIText {
    /// Base widget properties
    pub common: WidgetCommon,

    /// Text content to display
    pub text: String,

    /// Horizontal alignment within the resolved slot
    pub h_align: HorizontalAlign,
}

impl UIText {
    /// Left-aligned label
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    pub(crate) fn compose(&self, ctx: &mut ComposeCtx<'_>, rect: Rect) {
        // Labels are not interactive but still occupy an identity slot
        ctx.widget_id(self.common.key.as_deref());
        let position = ctx.text_position(rect, &self.text, self.h_align);
        ctx.draw.text(position, &self.text, ComposeCtx::text_color(!self.common.disabled));
    }
}
