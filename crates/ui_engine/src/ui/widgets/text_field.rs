//! Text field widget - single-line editable text
//!
//! Content lives in a persistent [`TextBuffer`] keyed by the field's
//! identity. A press inside the field focuses it, a press anywhere else or
//! Enter releases focus. Only the focused field consumes the frame's typed
//! text and editing keys, applied in arrival order.

use super::core::{palette, WidgetCommon};
use crate::events::Interaction;
use crate::foundation::math::{Rect, Vec2};
use crate::input::{Key, MouseButton, TextEdit};
use crate::ui::compose::ComposeCtx;
use crate::ui::state::{StateKind, WidgetState};
use crate::ui::text_buffer::TextBuffer;

/// UI text field component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UITextField {
    /// Base widget properties
    pub common: WidgetCommon,

    /// Content used when the buffer is first created
    pub initial: String,

    /// Maximum content length in characters
    pub max_len: Option<usize>,
}

/// Outcome of applying one frame of edits
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct EditOutcome {
    changed: bool,
    submitted: bool,
}

fn apply_edits(buffer: &mut TextBuffer, edits: &[TextEdit], max_len: Option<usize>) -> EditOutcome {
    let mut outcome = EditOutcome::default();
    for edit in edits {
        match edit {
            TextEdit::Insert(text) => outcome.changed |= buffer.insert(text, max_len),
            TextEdit::Key(Key::Backspace) => outcome.changed |= buffer.delete_backward(),
            TextEdit::Key(Key::Delete) => outcome.changed |= buffer.delete_forward(),
            TextEdit::Key(Key::Left) => buffer.move_left(),
            TextEdit::Key(Key::Right) => buffer.move_right(),
            TextEdit::Key(Key::Home) => buffer.move_home(),
            TextEdit::Key(Key::End) => buffer.move_end(),
            TextEdit::Key(Key::SelectAll) => buffer.select_all(),
            TextEdit::Key(Key::Enter) => {
                // Focus is released, the rest of the frame's input goes nowhere
                outcome.submitted = true;
                break;
            }
        }
    }
    outcome
}

impl UITextField {
    /// Field starting with `initial`
    pub fn new(initial: impl Into<String>) -> Self {
        Self { initial: initial.into(), ..Self::default() }
    }

    /// Edits the persistent buffer and reports [`Interaction::TextEdited`] and
    /// [`Interaction::TextSubmitted`]
    pub(crate) fn compose(&self, ctx: &mut ComposeCtx<'_>, rect: Rect) {
        let key = self.common.key.as_deref();
        let id = ctx.widget_id(key);
        let enabled = !self.common.disabled;
        let response = ctx.interact(id, rect, enabled);

        if ctx.input.pressed(MouseButton::Left) {
            if response.hovered {
                ctx.interaction.focus = Some(id);
            } else if ctx.interaction.focus == Some(id) {
                ctx.interaction.focus = None;
            }
        }
        if !enabled && ctx.interaction.focus == Some(id) {
            ctx.interaction.focus = None;
        }
        let focused = ctx.interaction.focus == Some(id);

        let (style, measure) = (ctx.style, ctx.measure);
        let (initial, max_len) = (self.initial.as_str(), self.max_len);
        let state = ctx.states.get_or_insert_with(id, ctx.panel_id, ctx.frame, StateKind::Text, || {
            let mut buffer = TextBuffer::new();
            buffer.insert(initial, max_len);
            WidgetState::Text(buffer)
        });
        let WidgetState::Text(buffer) = state else {
            return;
        };

        let outcome = if focused { apply_edits(buffer, ctx.input.edits(), self.max_len) } else { EditOutcome::default() };

        let slot = rect.shrink(style.item_padding);
        ctx.draw.rect(slot, palette::field());
        let border = if focused { palette::focus_border() } else { palette::border() };
        ctx.draw.border(slot, border, style.border_width);

        let inner = slot.shrink(style.item_padding);
        let text = buffer.as_str();
        let line_height = measure.line_height();
        let y = inner.y + ((inner.height - line_height) * 0.5).max(0.0);
        let cursor_x = measure.text_width(text.get(..buffer.cursor()).unwrap_or(text));
        // Scroll the run left so the cursor stays visible
        let origin_x = inner.x - (cursor_x - inner.width + 1.0).max(0.0);

        ctx.draw.clip(inner.intersect(&ctx.clip));
        if focused {
            if let Some(range) = buffer.selection() {
                let start = measure.text_width(text.get(..range.start).unwrap_or_default());
                let end = measure.text_width(text.get(..range.end).unwrap_or(text));
                ctx.draw.rect(Rect::new(origin_x + start, y, end - start, line_height), palette::selection());
            }
        }
        ctx.draw.text(Vec2::new(origin_x, y), text, ComposeCtx::text_color(enabled));
        if focused && !outcome.submitted {
            ctx.draw.rect(Rect::new(origin_x + cursor_x, y, 1.0, line_height), palette::text());
        }
        ctx.draw.clip(ctx.clip);

        let content = (outcome.changed || outcome.submitted).then(|| buffer.get());
        if outcome.submitted {
            ctx.interaction.focus = None;
        }
        if let Some(text) = content {
            let key = key.map(str::to_string);
            if outcome.changed {
                ctx.emit(Interaction::TextEdited { panel: ctx.panel.to_string(), key: key.clone(), id, text: text.clone() });
            }
            if outcome.submitted {
                ctx.emit(Interaction::TextSubmitted { panel: ctx.panel.to_string(), key, id, text });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edits_apply_in_order() {
        let mut buffer = TextBuffer::new();
        let edits = [
            TextEdit::Insert("ab".to_string()),
            TextEdit::Key(Key::Backspace),
            TextEdit::Insert("c".to_string()),
        ];
        let outcome = apply_edits(&mut buffer, &edits, None);
        assert!(outcome.changed);
        assert!(!outcome.submitted);
        assert_eq!(buffer.as_str(), "ac");
    }

    #[test]
    fn test_enter_stops_editing() {
        let mut buffer = TextBuffer::with_text("hi");
        let edits = [TextEdit::Key(Key::Enter), TextEdit::Insert("ignored".to_string())];
        let outcome = apply_edits(&mut buffer, &edits, None);
        assert!(outcome.submitted);
        assert!(!outcome.changed);
        assert_eq!(buffer.as_str(), "hi");
    }

    #[test]
    fn test_max_len_limits_typing() {
        let mut buffer = TextBuffer::new();
        apply_edits(&mut buffer, &[TextEdit::Insert("abcdef".to_string())], Some(4));
        assert_eq!(buffer.as_str(), "abcd");
        let outcome = apply_edits(&mut buffer, &[TextEdit::Insert("x".to_string())], Some(4));
        assert!(!outcome.changed);
    }

    #[test]
    fn test_select_all_then_type_replaces() {
        let mut buffer = TextBuffer::with_text("old");
        apply_edits(&mut buffer, &[TextEdit::Key(Key::SelectAll), TextEdit::Insert("new".to_string())], None);
        assert_eq!(buffer.as_str(), "new");
    }
}
