//! Per-frame input snapshot
//!
//! Interprets the events replayed by the [`InputRouter`] into the pointer,
//! button and keyboard state every widget observes for one whole frame.

use super::events::{ButtonAction, Key, KeyboardInput, MouseButton};
use super::router::InputRouter;
use crate::foundation::math::Vec2;

#[derive(Debug, Clone, Copy, Default)]
struct ButtonState {
    down: bool,
    pressed_this_frame: bool,
    released_this_frame: bool,
}

impl ButtonState {
    fn apply(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::Press => {
                if !self.down {
                    self.pressed_this_frame = true;
                }
                self.down = true;
            }
            ButtonAction::Release => {
                if self.down {
                    self.released_this_frame = true;
                }
                self.down = false;
            }
        }
    }

    fn reset_frame_flags(&mut self) {
        self.pressed_this_frame = false;
        self.released_this_frame = false;
    }
}

/// Text edit in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    /// Insert committed text at the cursor
    Insert(String),
    /// Apply an editing key
    Key(Key),
}

/// Consistent input state for a single frame
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    mouse: Vec2,
    previous_mouse: Vec2,
    left: ButtonState,
    right: ButtonState,
    middle: ButtonState,
    edits: Vec<TextEdit>,
    scroll: Vec2,
}

impl InputSnapshot {
    /// Create an empty snapshot with the pointer at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin new frame: reset edges, then replay everything the router drained
    pub fn capture(&mut self, router: &mut InputRouter) {
        self.left.reset_frame_flags();
        self.right.reset_frame_flags();
        self.middle.reset_frame_flags();
        self.edits.clear();

        while let Some((button, action)) = router.next_interaction() {
            self.button_mut(button).apply(action);
        }
        while let Some(input) = router.next_keystroke() {
            match input {
                KeyboardInput::Text(text) if text.is_empty() => {}
                KeyboardInput::Text(text) => match self.edits.last_mut() {
                    Some(TextEdit::Insert(pending)) => pending.push_str(&text),
                    _ => self.edits.push(TextEdit::Insert(text)),
                },
                KeyboardInput::Key(key, ButtonAction::Press) => self.edits.push(TextEdit::Key(key)),
                KeyboardInput::Key(_, ButtonAction::Release) => {}
            }
        }

        self.previous_mouse = self.mouse;
        self.mouse = router.cursor_position();
        self.scroll = router.take_scroll();
    }

    fn button(&self, button: MouseButton) -> &ButtonState {
        match button {
            MouseButton::Left => &self.left,
            MouseButton::Right => &self.right,
            MouseButton::Middle => &self.middle,
        }
    }

    fn button_mut(&mut self, button: MouseButton) -> &mut ButtonState {
        match button {
            MouseButton::Left => &mut self.left,
            MouseButton::Right => &mut self.right,
            MouseButton::Middle => &mut self.middle,
        }
    }

    /// Current pointer position
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse
    }

    /// Pointer movement since the previous frame
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse - self.previous_mouse
    }

    /// Button is held at the end of the frame's events
    pub fn is_down(&self, button: MouseButton) -> bool {
        self.button(button).down
    }

    /// Button went down during this frame
    pub fn pressed(&self, button: MouseButton) -> bool {
        self.button(button).pressed_this_frame
    }

    /// Button went up during this frame
    pub fn released(&self, button: MouseButton) -> bool {
        self.button(button).released_this_frame
    }

    /// Typed text and editing key presses of this frame, in arrival order
    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    /// Scroll delta of this frame
    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;

    fn capture(router: &mut InputRouter, snapshot: &mut InputSnapshot) {
        router.drain();
        snapshot.capture(router);
    }

    #[test]
    fn test_press_and_release_in_one_frame() {
        let mut router = InputRouter::new();
        let mut snapshot = InputSnapshot::new();
        router.push(InputEvent::press(MouseButton::Left));
        router.push(InputEvent::release(MouseButton::Left));
        capture(&mut router, &mut snapshot);

        assert!(snapshot.pressed(MouseButton::Left));
        assert!(snapshot.released(MouseButton::Left));
        assert!(!snapshot.is_down(MouseButton::Left));
    }

    #[test]
    fn test_edges_reset_next_frame() {
        let mut router = InputRouter::new();
        let mut snapshot = InputSnapshot::new();
        router.push(InputEvent::press(MouseButton::Left));
        capture(&mut router, &mut snapshot);
        assert!(snapshot.pressed(MouseButton::Left));

        capture(&mut router, &mut snapshot);
        assert!(!snapshot.pressed(MouseButton::Left));
        assert!(snapshot.is_down(MouseButton::Left));
    }

    #[test]
    fn test_mouse_delta() {
        let mut router = InputRouter::new();
        let mut snapshot = InputSnapshot::new();
        router.push(InputEvent::cursor(10.0, 10.0));
        capture(&mut router, &mut snapshot);
        router.push(InputEvent::cursor(25.0, 5.0));
        capture(&mut router, &mut snapshot);
        assert_eq!(snapshot.mouse_delta(), Vec2::new(15.0, -5.0));
    }

    #[test]
    fn test_only_key_presses_are_kept() {
        let mut router = InputRouter::new();
        let mut snapshot = InputSnapshot::new();
        router.push(InputEvent::key(Key::Backspace));
        router.push(InputEvent::Key { key: Key::Backspace, action: ButtonAction::Release });
        router.push(InputEvent::key(Key::Home));
        capture(&mut router, &mut snapshot);
        assert_eq!(snapshot.edits(), &[TextEdit::Key(Key::Backspace), TextEdit::Key(Key::Home)]);
    }

    #[test]
    fn test_text_and_keys_keep_arrival_order() {
        let mut router = InputRouter::new();
        let mut snapshot = InputSnapshot::new();
        router.push(InputEvent::Text("a".to_string()));
        router.push(InputEvent::Text("b".to_string()));
        router.push(InputEvent::key(Key::Backspace));
        router.push(InputEvent::Text("c".to_string()));
        capture(&mut router, &mut snapshot);
        assert_eq!(
            snapshot.edits(),
            &[
                TextEdit::Insert("ab".to_string()),
                TextEdit::Key(Key::Backspace),
                TextEdit::Insert("c".to_string()),
            ]
        );

        capture(&mut router, &mut snapshot);
        assert!(snapshot.edits().is_empty());
    }
}
