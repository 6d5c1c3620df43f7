//! Interaction events
//!
//! Every interaction the compose engine detects is recorded as an
//! [`Interaction`]. The frame output lists them, and the [`EventSystem`]
//! forwards them to handlers registered per [`InteractionKind`]:
//! - Handler returns bool (true = consumed, stops forwarding)
//! - Registration system (only notify interested handlers)
//! - Queued delivery on [`EventSystem::dispatch`]

use std::collections::HashMap;

use crate::ui::identity::WidgetId;

/// Interaction type identification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    /// Button was clicked
    Clicked,
    /// Checkbox flipped
    Toggled,
    /// Radio selection changed
    Selected,
    /// Text field content changed
    TextEdited,
    /// Enter pressed in a text field
    TextSubmitted,
    /// Panel dragged to a new origin
    PanelMoved,
    /// Panel resized
    PanelResized,
    /// Panel closed through its close box
    PanelClosed,
    /// Panel collapsed or expanded
    PanelMinimized,
}

/// Interaction detected while composing a frame
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// Button was clicked
    Clicked {
        /// Owning panel
        panel: String,
        /// Explicit widget key
        key: Option<String>,
        /// Widget identity
        id: WidgetId,
    },
    /// Checkbox flipped
    Toggled {
        /// Owning panel
        panel: String,
        /// Explicit widget key
        key: Option<String>,
        /// Widget identity
        id: WidgetId,
        /// New value
        checked: bool,
    },
    /// Radio selection changed
    Selected {
        /// Owning panel
        panel: String,
        /// Radio group name
        group: String,
        /// Newly selected value
        value: u32,
    },
    /// Text field content changed
    TextEdited {
        /// Owning panel
        panel: String,
        /// Explicit widget key
        key: Option<String>,
        /// Widget identity
        id: WidgetId,
        /// Content after the edit
        text: String,
    },
    /// Enter pressed in a text field
    TextSubmitted {
        /// Owning panel
        panel: String,
        /// Explicit widget key
        key: Option<String>,
        /// Widget identity
        id: WidgetId,
        /// Submitted content
        text: String,
    },
    /// Panel dragged
    PanelMoved {
        /// Panel name
        panel: String,
        /// New origin
        origin: (f32, f32),
    },
    /// Panel resized
    PanelResized {
        /// Panel name
        panel: String,
        /// New size
        size: (f32, f32),
    },
    /// Panel closed
    PanelClosed {
        /// Panel name
        panel: String,
    },
    /// Panel collapsed or expanded
    PanelMinimized {
        /// Panel name
        panel: String,
        /// Collapsed after the change
        minimized: bool,
    },
}

impl Interaction {
    /// Kind used for handler registration
    pub fn kind(&self) -> InteractionKind {
        match self {
            Self::Clicked { .. } => InteractionKind::Clicked,
            Self::Toggled { .. } => InteractionKind::Toggled,
            Self::Selected { .. } => InteractionKind::Selected,
            Self::TextEdited { .. } => InteractionKind::TextEdited,
            Self::TextSubmitted { .. } => InteractionKind::TextSubmitted,
            Self::PanelMoved { .. } => InteractionKind::PanelMoved,
            Self::PanelResized { .. } => InteractionKind::PanelResized,
            Self::PanelClosed { .. } => InteractionKind::PanelClosed,
            Self::PanelMinimized { .. } => InteractionKind::PanelMinimized,
        }
    }

    /// Name of the panel the interaction happened in
    pub fn panel(&self) -> &str {
        match self {
            Self::Clicked { panel, .. }
            | Self::Toggled { panel, .. }
            | Self::Selected { panel, .. }
            | Self::TextEdited { panel, .. }
            | Self::TextSubmitted { panel, .. }
            | Self::PanelMoved { panel, .. }
            | Self::PanelResized { panel, .. }
            | Self::PanelClosed { panel }
            | Self::PanelMinimized { panel, .. } => panel,
        }
    }

    /// Explicit widget key (radio interactions report their group)
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Clicked { key, .. }
            | Self::Toggled { key, .. }
            | Self::TextEdited { key, .. }
            | Self::TextSubmitted { key, .. } => key.as_deref(),
            Self::Selected { group, .. } => Some(group),
            _ => None,
        }
    }
}

/// Event handler trait
/// Returns true if the interaction was consumed (stops forwarding)
/// Returns false to allow forwarding to other handlers
pub trait EventHandler {
    /// Handle an interaction, return true if consumed
    fn on_event(&mut self, event: &Interaction) -> bool;
}

impl<F> EventHandler for F
where
    F: FnMut(&Interaction) -> bool,
{
    fn on_event(&mut self, event: &Interaction) -> bool {
        self(event)
    }
}

/// Event system with registration and queuing
/// Follows chain of responsibility pattern
pub struct EventSystem {
    queue: Vec<Interaction>,
    handlers: HashMap<InteractionKind, Vec<Box<dyn EventHandler>>>,
}

impl EventSystem {
    /// Create a new empty event system
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for a specific interaction kind
    /// Only handlers registered for this kind will be notified
    pub fn register_handler(&mut self, kind: InteractionKind, handler: Box<dyn EventHandler>) {
        self.handlers.entry(kind).or_default().push(handler);
    }

    /// Queue an interaction for the next dispatch
    pub fn send(&mut self, event: Interaction) {
        self.queue.push(event);
    }

    /// Number of queued interactions
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Dispatch all queued interactions in arrival order
    ///
    /// Returns the number of interactions dispatched.
    pub fn dispatch(&mut self) -> usize {
        let queued = std::mem::take(&mut self.queue);
        for event in &queued {
            self.dispatch_event(event);
        }
        queued.len()
    }

    /// Dispatch single interaction to registered handlers
    /// Stops on first handler that returns true (consumed)
    fn dispatch_event(&mut self, event: &Interaction) {
        if let Some(handlers) = self.handlers.get_mut(&event.kind()) {
            for handler in handlers.iter_mut() {
                if handler.on_event(event) {
                    break;
                }
            }
        }
    }

    /// Clear all queued interactions
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Drop every handler and queued interaction
    pub fn reset(&mut self) {
        self.queue.clear();
        self.handlers.clear();
    }
}

impl Default for EventSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventSystem")
            .field("queued", &self.queue.len())
            .field("handler_kinds", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn clicked(panel: &str) -> Interaction {
        Interaction::Clicked { panel: panel.to_string(), key: Some("ok".to_string()), id: WidgetId(1) }
    }

    fn counter(consume: bool) -> (Rc<RefCell<usize>>, Box<dyn EventHandler>) {
        let count = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&count);
        let handler = move |_: &Interaction| {
            *seen.borrow_mut() += 1;
            consume
        };
        (count, Box::new(handler))
    }

    #[test]
    fn test_dispatch_reaches_registered_kind_only() {
        let mut system = EventSystem::new();
        let (clicks, click_handler) = counter(false);
        let (toggles, toggle_handler) = counter(false);
        system.register_handler(InteractionKind::Clicked, click_handler);
        system.register_handler(InteractionKind::Toggled, toggle_handler);

        system.send(clicked("main"));
        assert_eq!(system.dispatch(), 1);
        assert_eq!(*clicks.borrow(), 1);
        assert_eq!(*toggles.borrow(), 0);
        assert_eq!(system.pending(), 0);
    }

    #[test]
    fn test_event_consumption() {
        let mut system = EventSystem::new();
        let (first, first_handler) = counter(true);
        let (second, second_handler) = counter(false);
        system.register_handler(InteractionKind::Clicked, first_handler);
        system.register_handler(InteractionKind::Clicked, second_handler);

        system.send(clicked("main"));
        system.dispatch();

        assert_eq!(*first.borrow(), 1);
        assert_eq!(*second.borrow(), 0);
    }

    #[test]
    fn test_accessors() {
        let event = Interaction::Selected { panel: "p".to_string(), group: "size".to_string(), value: 2 };
        assert_eq!(event.kind(), InteractionKind::Selected);
        assert_eq!(event.panel(), "p");
        assert_eq!(event.key(), Some("size"));
        assert_eq!(Interaction::PanelClosed { panel: "p".to_string() }.key(), None);
    }
}
