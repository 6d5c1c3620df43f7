//! Raw input events consumed by the input router

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Button or key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    /// Went down
    Press,
    /// Went up
    Release,
}

/// Editing keys understood by text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Delete the character before the cursor
    Backspace,
    /// Delete the character after the cursor
    Delete,
    /// Move the cursor one character left
    Left,
    /// Move the cursor one character right
    Right,
    /// Move the cursor to the start
    Home,
    /// Move the cursor to the end
    End,
    /// Commit the edit and release focus
    Enter,
    /// Select the whole content
    SelectAll,
}

/// Keyboard input replayed in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardInput {
    /// Committed text
    Text(String),
    /// Editing key transition
    Key(Key, ButtonAction),
}

/// Discrete interaction event produced by an input source
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button transition
    Button {
        /// Which button
        button: MouseButton,
        /// Press or release
        action: ButtonAction,
    },
    /// Absolute pointer position
    CursorMove {
        /// X in screen pixels
        x: f32,
        /// Y in screen pixels
        y: f32,
    },
    /// Scroll wheel steps
    Scroll {
        /// Horizontal steps
        dx: f32,
        /// Vertical steps (positive scrolls content up)
        dy: f32,
    },
    /// Committed text input (already composed characters)
    Text(String),
    /// Editing key transition
    Key {
        /// Which key
        key: Key,
        /// Press or release
        action: ButtonAction,
    },
}

impl InputEvent {
    /// Shorthand for a button press
    pub const fn press(button: MouseButton) -> Self {
        Self::Button { button, action: ButtonAction::Press }
    }

    /// Shorthand for a button release
    pub const fn release(button: MouseButton) -> Self {
        Self::Button { button, action: ButtonAction::Release }
    }

    /// Shorthand for a pointer move
    pub const fn cursor(x: f32, y: f32) -> Self {
        Self::CursorMove { x, y }
    }

    /// Shorthand for a key press
    pub const fn key(key: Key) -> Self {
        Self::Key { key, action: ButtonAction::Press }
    }
}
