//! Button widget - interactive clickable buttons

use super::core::{palette, HorizontalAlign, WidgetCommon};
use crate::events::Interaction;
use crate::foundation::math::Rect;
use crate::ui::compose::ComposeCtx;

/// UI button component
#[derive(Debug, Clone, PartialEq)]
pub struct UIButton {
    /// Base widget properties
    pub common: WidgetCommon,

    /// Button label text
    pub text: String,

    /// Label alignment
    pub h_align: HorizontalAlign,
}

impl UIButton {
    /// Button with a centered label
    pub fn new(text: impl Into<String>) -> Self {
        Self { common: WidgetCommon::default(), text: text.into(), h_align: HorizontalAlign::Center }
    }

    /// Reports [`Interaction::Clicked`] when pressed and released over the button
    pub(crate) fn compose(&self, ctx: &mut ComposeCtx<'_>, rect: Rect) {
        let key = self.common.key.as_deref();
        let id = ctx.widget_id(key);
        let enabled = !self.common.disabled;
        let response = ctx.interact(id, rect, enabled);

        let slot = rect.shrink(ctx.style.item_padding);
        ctx.draw.rect(slot, response.state.color());
        ctx.draw.border(slot, palette::border(), ctx.style.border_width);
        let position = ctx.text_position(slot, &self.text, self.h_align);
        ctx.draw.text(position, &self.text, ComposeCtx::text_color(enabled));

        if response.clicked {
            ctx.emit(Interaction::Clicked { panel: ctx.panel.to_string(), key: key.map(str::to_string), id });
        }
    }
}
