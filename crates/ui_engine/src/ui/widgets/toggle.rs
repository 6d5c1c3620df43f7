//! Toggle widgets - checkboxes and radio groups
//!
//! A checkbox keeps its value under its own identity. Radios of one group
//! share a single [`WidgetState::Choice`] keyed by the group name, so exactly
//! one value of the group is selected at a time.

use super::core::{palette, HorizontalAlign, WidgetCommon};
use crate::events::Interaction;
use crate::foundation::math::Rect;
use crate::ui::compose::ComposeCtx;
use crate::ui::identity::WidgetId;
use crate::ui::state::{StateKind, WidgetState};

/// Mark box on the left of a toggle's slot, and the label area beside it
fn split_mark(ctx: &ComposeCtx<'_>, rect: Rect) -> (Rect, Rect) {
    let slot = rect.shrink(ctx.style.item_padding);
    let side = slot.height.min(ctx.measure.line_height()).min(slot.width);
    let mark = Rect::new(slot.x, slot.y + (slot.height - side) * 0.5, side, side);
    let label_x = mark.right() + ctx.style.item_padding;
    let label = Rect::new(label_x, slot.y, (slot.right() - label_x).max(0.0), slot.height);
    (mark, label)
}

/// UI checkbox component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UICheckbox {
    /// Base widget properties
    pub common: WidgetCommon,

    /// Label drawn right of the box
    pub text: String,

    /// Value used when the state is first created
    pub initial: bool,
}

impl UICheckbox {
    /// Checkbox with a label
    pub fn new(text: impl Into<String>, initial: bool) -> Self {
        Self { common: WidgetCommon::default(), text: text.into(), initial }
    }

    /// Flips its state on click and reports [`Interaction::Toggled`]
    pub(crate) fn compose(&self, ctx: &mut ComposeCtx<'_>, rect: Rect) {
        let key = self.common.key.as_deref();
        let id = ctx.widget_id(key);
        let enabled = !self.common.disabled;
        let response = ctx.interact(id, rect, enabled);

        let initial = self.initial;
        let state = ctx.states.get_or_insert_with(id, ctx.panel_id, ctx.frame, StateKind::Toggle, || {
            WidgetState::Toggle(initial)
        });
        let mut checked = state.as_toggle().unwrap_or(initial);
        if response.clicked {
            checked = !checked;
            *state = WidgetState::Toggle(checked);
        }

        let (mark, label) = split_mark(ctx, rect);
        ctx.draw.rect(mark, response.state.color());
        ctx.draw.border(mark, palette::border(), ctx.style.border_width);
        if checked {
            ctx.draw.rect(mark.shrink((mark.width * 0.25).floor()), palette::mark());
        }
        let position = ctx.text_position(label, &self.text, HorizontalAlign::Left);
        ctx.draw.text(position, &self.text, ComposeCtx::text_color(enabled));

        if response.clicked {
            ctx.emit(Interaction::Toggled { panel: ctx.panel.to_string(), key: key.map(str::to_string), id, checked });
        }
    }
}

/// UI radio button component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UIRadio {
    /// Base widget properties
    pub common: WidgetCommon,

    /// Group whose selection this choice belongs to
    pub group: String,

    /// Value the group takes when this choice is selected
    pub value: u32,

    /// Label drawn right of the mark
    pub text: String,

    /// Select this value while the group has no selection
    pub initially_selected: bool,
}

impl UIRadio {
    /// Radio choice with a label
    pub fn new(group: impl Into<String>, value: u32, text: impl Into<String>) -> Self {
        Self {
            common: WidgetCommon::default(),
            group: group.into(),
            value,
            text: text.into(),
            initially_selected: false,
        }
    }

    /// Selects its value on click and reports [`Interaction::Selected`] on change
    pub(crate) fn compose(&self, ctx: &mut ComposeCtx<'_>, rect: Rect) {
        let id = ctx.widget_id(self.common.key.as_deref());
        let enabled = !self.common.disabled;
        let response = ctx.interact(id, rect, enabled);

        let group_id = WidgetId::group(ctx.panel, &self.group);
        let state = ctx.states.get_or_insert_with(group_id, ctx.panel_id, ctx.frame, StateKind::Choice, || {
            WidgetState::Choice(None)
        });
        let mut selected = state.as_choice().flatten();
        if selected.is_none() && self.initially_selected {
            selected = Some(self.value);
        }
        let changed = response.clicked && selected != Some(self.value);
        if response.clicked {
            selected = Some(self.value);
        }
        *state = WidgetState::Choice(selected);

        let (mark, label) = split_mark(ctx, rect);
        ctx.draw.rect(mark, response.state.color());
        ctx.draw.border(mark, palette::border(), ctx.style.border_width);
        if selected == Some(self.value) {
            ctx.draw.rect(mark.shrink((mark.width * 0.3).floor()), palette::mark());
        }
        let position = ctx.text_position(label, &self.text, HorizontalAlign::Left);
        ctx.draw.text(position, &self.text, ComposeCtx::text_color(enabled));

        if changed {
            ctx.emit(Interaction::Selected { panel: ctx.panel.to_string(), group: self.group.clone(), value: self.value });
        }
    }
}
