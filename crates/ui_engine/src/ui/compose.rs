//! Panel composition
//!
//! Composing a panel happens in two steps. [`update_chrome`] applies this
//! frame's input to the panel itself (drag, resize, close and minimize boxes,
//! scroll) while the panel is borrowed mutably. A [`ComposeCtx`] then walks
//! the declared tree depth-first: each container resolves its children's
//! rectangles, widgets derive their identity, hit test against the frame's
//! input, update persistent state and record draw commands.

use std::collections::HashSet;

use super::identity::{IdPath, PanelId, WidgetId};
use super::panel::{Panel, PanelOptions};
use super::rendering::{DrawList, TextMeasure};
use super::state::WidgetStateTable;
use super::widgets::{palette, ButtonState, ExpandPolicy, HorizontalAlign, LayoutChild, LayoutContainer};
use crate::core::config::StyleMetrics;
use crate::events::Interaction;
use crate::foundation::math::{Rect, Vec2, Vec4};
use crate::input::collision::hit_test;
use crate::input::{InputSnapshot, MouseButton};

/// Chrome gesture being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DragKind {
    /// Title bar drag moves the panel
    Move,
    /// Grip drag resizes the panel
    Resize,
}

/// Chrome drag in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PanelDrag {
    pub(crate) panel: PanelId,
    pub(crate) kind: DragKind,
}

/// Pointer capture and keyboard focus carried between frames
#[derive(Debug, Default)]
pub(crate) struct InteractionState {
    /// Widget that received the press of the held button
    pub(crate) active: Option<WidgetId>,
    /// Text field receiving keyboard input
    pub(crate) focus: Option<WidgetId>,
    /// Chrome drag in progress
    pub(crate) drag: Option<PanelDrag>,
}

impl InteractionState {
    /// Drop captures that ended with this frame's input
    pub(crate) fn end_frame(&mut self, input: &InputSnapshot) {
        if !input.is_down(MouseButton::Left) {
            self.active = None;
            self.drag = None;
        }
    }

    /// Forget everything
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Buffers reused by every tree walk
#[derive(Debug, Default)]
pub(crate) struct ComposeScratch {
    policies: Vec<ExpandPolicy>,
    extents: Vec<f32>,
    rects: Vec<Rect>,
    path: IdPath,
    seen: HashSet<WidgetId>,
}

/// Pointer interaction with one rectangle during this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Response {
    /// Pointer is over the rectangle and the panel owns the pointer
    pub(crate) hovered: bool,
    /// Pressed and released over the rectangle
    pub(crate) clicked: bool,
    /// Visual state
    pub(crate) state: ButtonState,
}

impl Response {
    const DISABLED: Self = Self { hovered: false, clicked: false, state: ButtonState::Disabled };
}

/// Press-then-release detection shared by widgets and chrome
///
/// A click needs the press and the release over the same rectangle while it
/// holds the capture; moving off before releasing cancels it.
pub(crate) fn press_release(
    id: WidgetId,
    rect: Rect,
    clip: Rect,
    input: &InputSnapshot,
    interaction: &mut InteractionState,
    reachable: bool,
) -> Response {
    let hovered = reachable && interaction.drag.is_none() && hit_test(&rect, &clip, input.mouse_position());
    if hovered && input.pressed(MouseButton::Left) {
        interaction.active = Some(id);
    }
    let active = interaction.active == Some(id);
    let clicked = active && hovered && input.released(MouseButton::Left);
    let state = if active && hovered && input.is_down(MouseButton::Left) {
        ButtonState::Pressed
    } else if hovered {
        ButtonState::Hovered
    } else {
        ButtonState::Normal
    };
    Response { hovered, clicked, state }
}

/// Apply this frame's input to a panel's chrome
///
/// Returns `false` when the close box was clicked; the panel is then closed
/// and must not be drawn this frame.
pub(crate) fn update_chrome(
    panel: &mut Panel,
    input: &InputSnapshot,
    style: &StyleMetrics,
    interaction: &mut InteractionState,
    pointer_owner: bool,
    events: &mut Vec<Interaction>,
) -> bool {
    if let Some(drag) = interaction.drag.filter(|drag| drag.panel == panel.id) {
        let delta = input.mouse_delta();
        if input.is_down(MouseButton::Left) && delta != Vec2::zeros() {
            match drag.kind {
                DragKind::Move => {
                    panel.origin += delta;
                    events.push(Interaction::PanelMoved {
                        panel: panel.name.clone(),
                        origin: (panel.origin.x, panel.origin.y),
                    });
                }
                DragKind::Resize => {
                    let before = panel.size;
                    panel.set_size(panel.size + delta, style);
                    if panel.size != before {
                        events.push(Interaction::PanelResized {
                            panel: panel.name.clone(),
                            size: (panel.size.x, panel.size.y),
                        });
                    }
                }
            }
        }
    }

    let frame = panel.bounds(style);
    if let Some(rect) = panel.close_box(style) {
        let id = WidgetId::chrome(&panel.name, "close");
        if press_release(id, rect, frame, input, interaction, pointer_owner).clicked {
            log::info!("Panel '{}' closed", panel.name);
            panel.open = false;
            events.push(Interaction::PanelClosed { panel: panel.name.clone() });
            return false;
        }
    }
    if let Some(rect) = panel.minimize_box(style) {
        let id = WidgetId::chrome(&panel.name, "minimize");
        if press_release(id, rect, frame, input, interaction, pointer_owner).clicked {
            panel.minimized = !panel.minimized;
            events.push(Interaction::PanelMinimized { panel: panel.name.clone(), minimized: panel.minimized });
        }
    }

    let mouse = input.mouse_position();
    if pointer_owner && input.pressed(MouseButton::Left) && interaction.active.is_none() {
        let on_grip = panel.resize_grip(style).is_some_and(|grip| grip.contains(mouse));
        let on_title = panel.options.contains(PanelOptions::MOVABLE) && panel.title_bar(style).contains(mouse);
        let kind = if on_grip {
            Some(DragKind::Resize)
        } else if on_title {
            Some(DragKind::Move)
        } else {
            None
        };
        if let Some(kind) = kind {
            log::trace!("Panel '{}' {:?} drag started", panel.name, kind);
            interaction.drag = Some(PanelDrag { panel: panel.id, kind });
        }
    }

    let scroll = input.scroll().y;
    if pointer_owner && scroll != 0.0 && !panel.minimized && panel.options.contains(PanelOptions::SCROLLABLE) {
        panel.scroll_offset = (panel.scroll_offset - scroll * style.scroll_step).max(0.0);
    }
    true
}

/// Everything one panel's tree walk needs
pub(crate) struct ComposeCtx<'a> {
    pub(crate) panel: &'a str,
    pub(crate) panel_id: PanelId,
    pub(crate) frame: u64,
    pub(crate) style: &'a StyleMetrics,
    pub(crate) input: &'a InputSnapshot,
    pub(crate) measure: &'a dyn TextMeasure,
    /// Panel is topmost under the pointer and no chrome drag is running
    pub(crate) pointer_owner: bool,
    /// Visible region of the panel body
    pub(crate) clip: Rect,
    pub(crate) states: &'a mut WidgetStateTable,
    pub(crate) interaction: &'a mut InteractionState,
    pub(crate) draw: &'a mut DrawList,
    pub(crate) interactions: &'a mut Vec<Interaction>,
    pub(crate) scratch: &'a mut ComposeScratch,
    /// Layout inputs clamped while composing this panel
    pub(crate) layout_warnings: usize,
}

impl<'a> ComposeCtx<'a> {
    /// Draw the panel and compose its tree; returns the largest valid scroll offset
    pub(crate) fn compose_panel(&mut self, panel: &Panel, content: &LayoutContainer) -> f32 {
        let style = self.style;
        let bounds = panel.bounds(style);
        self.draw.begin_panel(&panel.name, bounds);
        self.draw.rect(bounds, palette::panel_background());
        if panel.options.contains(PanelOptions::TITLE) {
            self.draw_title_bar(panel);
        }

        let mut max_scroll = 0.0;
        if !panel.minimized {
            let body = panel.body(style);
            let content_height = content.hints.height.map_or(body.height, |height| height.max(body.height));
            if panel.options.contains(PanelOptions::SCROLLABLE) {
                max_scroll = content_height - body.height;
            }
            let offset = panel.scroll_offset.clamp(0.0, max_scroll);
            let root = Rect::new(body.x, body.y - offset, body.width, content_height);

            self.clip = body;
            self.draw.clip(body);
            self.compose_tree(content, root);
            self.draw.clip(bounds);

            if let Some(grip) = panel.resize_grip(style) {
                self.draw.rect(grip, palette::grip());
            }
        }

        if panel.options.contains(PanelOptions::BORDER) {
            self.draw.border(bounds, palette::border(), style.border_width);
        }
        self.draw.end_panel();
        max_scroll
    }

    fn draw_title_bar(&mut self, panel: &Panel) {
        let style = self.style;
        let bar = panel.title_bar(style);
        self.draw.rect(bar, palette::title_bar());
        let position = self.text_position(bar.shrink(style.panel_padding), &panel.title, HorizontalAlign::Left);
        self.draw.text(position, &panel.title, palette::text());

        if let Some(rect) = panel.close_box(style) {
            self.draw_title_box(rect, "x");
        }
        if let Some(rect) = panel.minimize_box(style) {
            self.draw_title_box(rect, if panel.minimized { "+" } else { "_" });
        }
    }

    fn draw_title_box(&mut self, rect: Rect, glyph: &str) {
        let hovered = self.pointer_owner && rect.contains(self.input.mouse_position());
        let state = if hovered { ButtonState::Hovered } else { ButtonState::Normal };
        self.draw.rect(rect, state.color());
        let position = self.text_position(rect, glyph, HorizontalAlign::Center);
        self.draw.text(position, glyph, palette::text());
    }

    /// Compose a root container into `bounds`
    pub(crate) fn compose_tree(&mut self, root: &LayoutContainer, bounds: Rect) {
        self.scratch.path.clear();
        self.scratch.seen.clear();
        self.compose_container(root, bounds);
    }

    fn compose_container(&mut self, container: &LayoutContainer, bounds: Rect) {
        let base = self.scratch.rects.len();
        let report = {
            let scratch = &mut *self.scratch;
            container.resolve_children(bounds, &mut scratch.policies, &mut scratch.extents, &mut scratch.rects)
        };
        self.layout_warnings += report.warnings.len();

        for (index, child) in container.children.iter().enumerate() {
            let rect = self.scratch.rects[base + index];
            self.scratch.path.push(u32::try_from(index).unwrap_or(u32::MAX));
            match child {
                LayoutChild::Widget(widget) => widget.compose(self, rect),
                LayoutChild::Container(nested) => self.compose_container(nested, rect),
            }
            self.scratch.path.pop();
        }
        self.scratch.rects.truncate(base);
    }

    /// Identity of the widget at the current path
    ///
    /// A repeated identity within one frame shares state with the first
    /// occurrence and is reported once per occurrence.
    pub(crate) fn widget_id(&mut self, key: Option<&str>) -> WidgetId {
        let id = match key {
            Some(key) => WidgetId::keyed(self.panel, key),
            None => WidgetId::at_path(self.panel, self.scratch.path.segments()),
        };
        if !self.scratch.seen.insert(id) {
            log::warn!("Duplicate widget identity {:?} (key {:?}) in panel '{}'", id, key, self.panel);
        }
        id
    }

    /// Pointer interaction of a widget rectangle
    pub(crate) fn interact(&mut self, id: WidgetId, rect: Rect, enabled: bool) -> Response {
        if !enabled {
            return Response::DISABLED;
        }
        press_release(id, rect, self.clip, self.input, self.interaction, self.pointer_owner)
    }

    /// Record an interaction for the frame output
    pub(crate) fn emit(&mut self, event: Interaction) {
        log::debug!("Interaction: {:?}", event);
        self.interactions.push(event);
    }

    /// Top-left corner of a single-line run aligned inside `rect`
    pub(crate) fn text_position(&self, rect: Rect, text: &str, align: HorizontalAlign) -> Vec2 {
        let pad = self.style.item_padding;
        let width = self.measure.text_width(text);
        let x = align.place(rect.x + pad, (rect.width - pad * 2.0).max(0.0), width);
        let y = rect.y + ((rect.height - self.measure.line_height()) * 0.5).max(0.0);
        Vec2::new(x, y)
    }

    /// Text color for an enabled or disabled widget
    pub(crate) fn text_color(enabled: bool) -> Vec4 {
        if enabled {
            palette::text()
        } else {
            palette::text_disabled()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, InputRouter};
    use crate::ui::panel::PanelSpec;

    fn snapshot(router: &mut InputRouter, snapshot: &mut InputSnapshot, events: &[InputEvent]) {
        for event in events {
            router.push(event.clone());
        }
        router.drain();
        snapshot.capture(router);
    }

    #[test]
    fn test_click_requires_press_and_release_over_rect() {
        let mut router = InputRouter::new();
        let mut input = InputSnapshot::new();
        let mut interaction = InteractionState::default();
        let rect = Rect::new(0.0, 0.0, 50.0, 20.0);
        let clip = Rect::new(0.0, 0.0, 100.0, 100.0);
        let id = WidgetId(7);

        snapshot(&mut router, &mut input, &[InputEvent::cursor(10.0, 10.0), InputEvent::press(MouseButton::Left)]);
        let pressed = press_release(id, rect, clip, &input, &mut interaction, true);
        assert_eq!(pressed.state, ButtonState::Pressed);
        assert!(!pressed.clicked);

        snapshot(&mut router, &mut input, &[InputEvent::release(MouseButton::Left)]);
        assert!(press_release(id, rect, clip, &input, &mut interaction, true).clicked);
    }

    #[test]
    fn test_release_elsewhere_cancels_click() {
        let mut router = InputRouter::new();
        let mut input = InputSnapshot::new();
        let mut interaction = InteractionState::default();
        let rect = Rect::new(0.0, 0.0, 50.0, 20.0);
        let clip = Rect::new(0.0, 0.0, 100.0, 100.0);

        snapshot(&mut router, &mut input, &[InputEvent::cursor(10.0, 10.0), InputEvent::press(MouseButton::Left)]);
        press_release(WidgetId(1), rect, clip, &input, &mut interaction, true);
        snapshot(&mut router, &mut input, &[InputEvent::cursor(80.0, 80.0), InputEvent::release(MouseButton::Left)]);
        assert!(!press_release(WidgetId(1), rect, clip, &input, &mut interaction, true).clicked);
    }

    #[test]
    fn test_title_drag_moves_panel() {
        let style = StyleMetrics::default();
        let mut router = InputRouter::new();
        let mut input = InputSnapshot::new();
        let mut interaction = InteractionState::default();
        let mut events = Vec::new();
        let mut panel = Panel::from_spec(PanelSpec::new("p").origin(10.0, 10.0).size(200.0, 100.0));

        snapshot(&mut router, &mut input, &[InputEvent::cursor(20.0, 15.0), InputEvent::press(MouseButton::Left)]);
        assert!(update_chrome(&mut panel, &input, &style, &mut interaction, true, &mut events));
        assert_eq!(interaction.drag.map(|drag| drag.kind), Some(DragKind::Move));

        snapshot(&mut router, &mut input, &[InputEvent::cursor(60.0, 55.0)]);
        update_chrome(&mut panel, &input, &style, &mut interaction, false, &mut events);
        assert_eq!(panel.origin(), Vec2::new(50.0, 50.0));
        assert_eq!(events, vec![Interaction::PanelMoved { panel: "p".to_string(), origin: (50.0, 50.0) }]);

        snapshot(&mut router, &mut input, &[InputEvent::release(MouseButton::Left)]);
        interaction.end_frame(&input);
        assert!(interaction.drag.is_none());
    }

    #[test]
    fn test_close_box_closes_panel() {
        let style = StyleMetrics::default();
        let mut router = InputRouter::new();
        let mut input = InputSnapshot::new();
        let mut interaction = InteractionState::default();
        let mut events = Vec::new();
        let options = PanelOptions::default() | PanelOptions::CLOSABLE;
        let mut panel = Panel::from_spec(PanelSpec::new("p").size(200.0, 100.0).options(options));
        let close = panel.close_box(&style).unwrap_or_default();
        let center = (close.x + close.width * 0.5, close.y + close.height * 0.5);

        snapshot(
            &mut router,
            &mut input,
            &[
                InputEvent::cursor(center.0, center.1),
                InputEvent::press(MouseButton::Left),
                InputEvent::release(MouseButton::Left),
            ],
        );
        assert!(!update_chrome(&mut panel, &input, &style, &mut interaction, true, &mut events));
        assert!(!panel.is_open());
        assert!(interaction.drag.is_none());
        assert_eq!(events, vec![Interaction::PanelClosed { panel: "p".to_string() }]);
    }
}
