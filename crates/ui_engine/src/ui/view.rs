//! Read-only view handed to panel declarations
//!
//! Declarations build the whole widget tree before any layout happens, so
//! they read persistent state and the previous frame's interactions through
//! this view instead of receiving widget results inline.

use super::identity::WidgetId;
use super::state::WidgetStateTable;
use crate::events::Interaction;

/// What a declaration may observe while building its tree
#[derive(Debug, Clone, Copy)]
pub struct PanelView<'a> {
    panel: &'a str,
    frame: u64,
    states: &'a WidgetStateTable,
    previous: &'a [Interaction],
}

impl<'a> PanelView<'a> {
    pub(crate) fn new(panel: &'a str, frame: u64, states: &'a WidgetStateTable, previous: &'a [Interaction]) -> Self {
        Self { panel, frame, states, previous }
    }

    /// Name of the panel being declared
    pub fn panel(&self) -> &str {
        self.panel
    }

    /// Number of the frame being composed
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Current content of the keyed text field
    pub fn text(&self, key: &str) -> Option<&'a str> {
        let states = self.states;
        states.get(WidgetId::keyed(self.panel, key))?.as_text().map(|buffer| buffer.as_str())
    }

    /// Current value of the keyed checkbox
    pub fn checked(&self, key: &str) -> Option<bool> {
        self.states.get(WidgetId::keyed(self.panel, key))?.as_toggle()
    }

    /// Selected value of a radio group
    pub fn selected(&self, group: &str) -> Option<u32> {
        self.states.get(WidgetId::group(self.panel, group))?.as_choice().flatten()
    }

    /// Keyed button was clicked during the previous frame
    pub fn clicked(&self, key: &str) -> bool {
        self.previous
            .iter()
            .any(|event| matches!(event, Interaction::Clicked { .. }) && self.is_mine(event, key))
    }

    /// Keyed widget or radio group changed value during the previous frame
    pub fn changed(&self, key: &str) -> bool {
        self.previous.iter().any(|event| {
            matches!(
                event,
                Interaction::Toggled { .. } | Interaction::Selected { .. } | Interaction::TextEdited { .. }
            ) && self.is_mine(event, key)
        })
    }

    /// Keyed text field was submitted with Enter during the previous frame
    pub fn submitted(&self, key: &str) -> Option<&'a str> {
        self.previous.iter().find_map(|event| match event {
            Interaction::TextSubmitted { panel, key: Some(k), text, .. } if panel == self.panel && k == key => {
                Some(text.as_str())
            }
            _ => None,
        })
    }

    /// Interactions of this panel from the previous frame
    pub fn interactions(&self) -> impl Iterator<Item = &'a Interaction> + '_ {
        self.previous.iter().filter(move |event| event.panel() == self.panel)
    }

    fn is_mine(&self, event: &Interaction, key: &str) -> bool {
        event.panel() == self.panel && event.key() == Some(key)
    }
}
