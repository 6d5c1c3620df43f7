//! Panel chrome scenarios
//!
//! Dragging, resizing, the title bar boxes, scrolling and pointer ownership
//! between overlapping panels.

use super::{click, Harness};
use crate::events::Interaction;
use crate::foundation::math::Vec2;
use crate::input::{InputEvent, MouseButton};
use crate::ui::widgets::{LayoutContainer, WidgetNode};
use crate::ui::{PanelOptions, PanelSpec};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn labelled(name: &str, label: &'static str) -> PanelSpec {
        PanelSpec::new(name).declare(move |_| Ok(LayoutContainer::vertical().child(WidgetNode::label(label))))
    }

    fn button_panel(name: &str) -> PanelSpec {
        PanelSpec::new(name)
            .size(200.0, 100.0)
            .declare(|_| Ok(LayoutContainer::vertical().child(WidgetNode::button("Go").key("go").height(30.0))))
    }

    fn drag_title(harness: &mut Harness) -> Vec<Interaction> {
        harness.frame(&[InputEvent::cursor(20.0, 15.0), InputEvent::press(MouseButton::Left)]).unwrap();
        let moved = harness.frame(&[InputEvent::cursor(60.0, 55.0)]).unwrap();
        harness.frame(&[InputEvent::release(MouseButton::Left)]).unwrap();
        moved.interactions
    }

    #[test]
    fn test_title_drag_moves_panel() {
        let mut harness = Harness::new();
        harness.context.register_panel(labelled("p", "v1").origin(10.0, 10.0)).unwrap();

        let events = drag_title(&mut harness);
        assert_eq!(events, vec![Interaction::PanelMoved { panel: "p".to_string(), origin: (50.0, 50.0) }]);
        assert_eq!(harness.context.panel("p").unwrap().origin(), Vec2::new(50.0, 50.0));

        // Released: further pointer motion leaves the panel alone
        harness.frame(&[InputEvent::cursor(300.0, 300.0)]).unwrap();
        assert_eq!(harness.context.panel("p").unwrap().origin(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_re_registration_keeps_dragged_origin() {
        let mut harness = Harness::new();
        harness.context.register_panel(labelled("p", "v1").origin(10.0, 10.0)).unwrap();
        drag_title(&mut harness);

        harness.context.register_panel(labelled("p", "v2").origin(0.0, 0.0)).unwrap();
        assert_eq!(harness.context.panel("p").unwrap().origin(), Vec2::new(50.0, 50.0));

        harness.backend.reset();
        let output = harness.frame(&[]).unwrap();
        assert_relative_eq!(output.panels()[0].bounds.x, 50.0);
        assert!(harness.backend.texts().contains(&"v2"));
    }

    #[test]
    fn test_fixed_panel_ignores_title_drag() {
        let mut harness = Harness::new();
        harness
            .context
            .register_panel(labelled("p", "x").origin(10.0, 10.0).options(PanelOptions::TITLE | PanelOptions::BORDER))
            .unwrap();
        let events = drag_title(&mut harness);
        assert!(events.is_empty());
        assert_eq!(harness.context.panel("p").unwrap().origin(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_grip_drag_resizes_with_minimum() {
        let mut harness = Harness::new();
        harness
            .context
            .register_panel(labelled("p", "x").size(200.0, 100.0).options(PanelOptions::default() | PanelOptions::RESIZABLE))
            .unwrap();

        harness.frame(&[InputEvent::cursor(194.0, 94.0), InputEvent::press(MouseButton::Left)]).unwrap();
        let output = harness.frame(&[InputEvent::cursor(214.0, 124.0)]).unwrap();
        assert_eq!(output.interactions, vec![Interaction::PanelResized { panel: "p".to_string(), size: (220.0, 130.0) }]);
        assert_eq!(harness.context.panel("p").unwrap().origin(), Vec2::zeros());

        harness.frame(&[InputEvent::cursor(-500.0, -500.0)]).unwrap();
        assert_eq!(harness.context.panel("p").unwrap().size(), Vec2::new(64.0, 48.0));
    }

    #[test]
    fn test_close_box_hides_until_shown() {
        let mut harness = Harness::new();
        harness
            .context
            .register_panel(labelled("p", "x").size(200.0, 100.0).options(PanelOptions::default() | PanelOptions::CLOSABLE))
            .unwrap();
        let close = harness.context.panel("p").unwrap().close_box(&harness.context.config().style).unwrap();
        assert_relative_eq!(close.x, 180.0);

        let output = harness.frame(&click(188.0, 12.0)).unwrap();
        assert_eq!(output.interactions, vec![Interaction::PanelClosed { panel: "p".to_string() }]);
        assert!(output.panels().is_empty());
        assert!(!harness.context.panel("p").unwrap().is_open());

        harness.backend.reset();
        harness.frame(&[]).unwrap();
        assert!(harness.backend.panel_order().is_empty());

        harness.context.show_panel("p").unwrap();
        harness.frame(&[]).unwrap();
        assert_eq!(harness.backend.panel_order(), vec!["p"]);
    }

    #[test]
    fn test_minimize_box_toggles() {
        let mut harness = Harness::new();
        harness
            .context
            .register_panel(labelled("p", "x").size(200.0, 100.0).options(PanelOptions::default() | PanelOptions::MINIMIZABLE))
            .unwrap();

        let output = harness.frame(&click(188.0, 12.0)).unwrap();
        assert_eq!(output.interactions, vec![Interaction::PanelMinimized { panel: "p".to_string(), minimized: true }]);
        assert_relative_eq!(output.panels()[0].bounds.height, 24.0);

        let output = harness.frame(&click(188.0, 12.0)).unwrap();
        assert!(!harness.context.panel("p").unwrap().is_minimized());
        assert_relative_eq!(output.panels()[0].bounds.height, 100.0);
    }

    #[test]
    fn test_only_topmost_panel_receives_click() {
        let mut harness = Harness::new();
        harness.context.register_panel(button_panel("back")).unwrap();
        harness.context.register_panel(button_panel("front")).unwrap();

        let output = harness.frame(&click(50.0, 40.0)).unwrap();
        assert_eq!(output.interactions_in("back").count(), 0);
        assert_eq!(output.interactions_in("front").count(), 1);

        harness.context.hide_panel("front").unwrap();
        let output = harness.frame(&click(50.0, 40.0)).unwrap();
        assert_eq!(output.interactions_in("back").count(), 1);
    }

    #[test]
    fn test_widgets_ignore_pointer_during_drag() {
        let mut harness = Harness::new();
        harness.context.register_panel(button_panel("p")).unwrap();

        // Drag starts on the title bar and is released over the button
        harness.frame(&[InputEvent::cursor(50.0, 10.0), InputEvent::press(MouseButton::Left)]).unwrap();
        let output = harness.frame(&[InputEvent::cursor(50.0, 40.0), InputEvent::release(MouseButton::Left)]).unwrap();
        assert!(output.interactions.iter().all(|event| !matches!(event, Interaction::Clicked { .. })));
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut harness = Harness::new();
        harness
            .context
            .register_panel(
                PanelSpec::new("log")
                    .size(200.0, 100.0)
                    .options(PanelOptions::default() | PanelOptions::SCROLLABLE)
                    .declare(|_| {
                        Ok(LayoutContainer::vertical()
                            .height(300.0)
                            .children((0..10).map(|line| WidgetNode::label(format!("line {}", line)))))
                    }),
            )
            .unwrap();

        harness
            .frame(&[InputEvent::cursor(50.0, 50.0), InputEvent::Scroll { dx: 0.0, dy: -2.0 }])
            .unwrap();
        assert_relative_eq!(harness.context.panel("log").unwrap().scroll_offset(), 40.0);

        harness.frame(&[InputEvent::Scroll { dx: 0.0, dy: -100.0 }]).unwrap();
        // Body is 68 high, content 300
        assert_relative_eq!(harness.context.panel("log").unwrap().scroll_offset(), 232.0);

        harness.frame(&[InputEvent::Scroll { dx: 0.0, dy: 100.0 }]).unwrap();
        assert_relative_eq!(harness.context.panel("log").unwrap().scroll_offset(), 0.0);
    }

    #[test]
    fn test_minimize_keeps_scroll_offset() {
        let mut harness = Harness::new();
        harness
            .context
            .register_panel(
                PanelSpec::new("log")
                    .size(200.0, 100.0)
                    .options(PanelOptions::default() | PanelOptions::SCROLLABLE)
                    .declare(|_| Ok(LayoutContainer::vertical().height(300.0).child(WidgetNode::label("tail")))),
            )
            .unwrap();
        harness
            .frame(&[InputEvent::cursor(50.0, 50.0), InputEvent::Scroll { dx: 0.0, dy: -2.0 }])
            .unwrap();
        assert_relative_eq!(harness.context.panel("log").unwrap().scroll_offset(), 40.0);

        harness.context.set_minimized("log", true).unwrap();
        harness.frame(&[]).unwrap();
        assert_relative_eq!(harness.context.panel("log").unwrap().scroll_offset(), 40.0);

        harness.context.set_minimized("log", false).unwrap();
        harness.frame(&[]).unwrap();
        assert_relative_eq!(harness.context.panel("log").unwrap().scroll_offset(), 40.0);
    }

    #[test]
    fn test_move_and_resize_through_context() {
        let mut harness = Harness::new();
        harness.context.register_panel(labelled("p", "x")).unwrap();
        harness.context.move_panel("p", 5.0, 6.0).unwrap();
        harness.context.resize_panel("p", 10.0, 10.0).unwrap();
        let panel = harness.context.panel("p").unwrap();
        assert_eq!(panel.origin(), Vec2::new(5.0, 6.0));
        assert_eq!(panel.size(), Vec2::new(64.0, 48.0));
        assert!(harness.context.move_panel("missing", 0.0, 0.0).is_err());
    }
}
