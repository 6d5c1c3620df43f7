//! Persistent widget state table
//!
//! Arena of per-identity state that outlives the transient widget tree.
//! Entries live in a slot map; a hash index maps each [`WidgetId`] to its
//! slot. The compose engine touches an entry every frame its widget is
//! declared and stale entries are evicted at frame end.

use std::collections::HashMap;

use super::identity::{PanelId, WidgetId};
use super::text_buffer::TextBuffer;
use crate::foundation::collections::{HandleMap, StateKey};

/// State that must survive across frames
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetState {
    /// Text field content, cursor and selection
    Text(TextBuffer),
    /// Checkbox value
    Toggle(bool),
    /// Selected value of a radio group
    Choice(Option<u32>),
}

/// Discriminant of [`WidgetState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    /// [`WidgetState::Text`]
    Text,
    /// [`WidgetState::Toggle`]
    Toggle,
    /// [`WidgetState::Choice`]
    Choice,
}

impl WidgetState {
    /// Kind of this state
    pub fn kind(&self) -> StateKind {
        match self {
            Self::Text(_) => StateKind::Text,
            Self::Toggle(_) => StateKind::Toggle,
            Self::Choice(_) => StateKind::Choice,
        }
    }

    /// Text buffer, if this is a text state
    pub fn as_text(&self) -> Option<&TextBuffer> {
        match self {
            Self::Text(buffer) => Some(buffer),
            _ => None,
        }
    }

    /// Checkbox value, if this is a toggle state
    pub fn as_toggle(&self) -> Option<bool> {
        match self {
            Self::Toggle(value) => Some(*value),
            _ => None,
        }
    }

    /// Selected value, if this is a choice state
    pub fn as_choice(&self) -> Option<Option<u32>> {
        match self {
            Self::Choice(value) => Some(*value),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct StateEntry {
    id: WidgetId,
    owner: PanelId,
    state: WidgetState,
    last_seen: u64,
}

/// Arena of persistent state keyed by widget identity
#[derive(Debug, Default)]
pub struct WidgetStateTable {
    entries: HandleMap<StateKey, StateEntry>,
    index: HashMap<WidgetId, StateKey>,
    released: u64,
}

impl WidgetStateTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the state of `id`, creating it with `init` on first use
    ///
    /// Marks the entry as declared in `frame`. If an entry of a different
    /// kind already exists under this identity it is replaced.
    pub fn get_or_insert_with<F>(
        &mut self,
        id: WidgetId,
        owner: PanelId,
        frame: u64,
        kind: StateKind,
        init: F,
    ) -> &mut WidgetState
    where
        F: FnOnce() -> WidgetState,
    {
        let existing = self.index.get(&id).copied();
        let Some(key) = existing else {
            let key = self.entries.insert(StateEntry { id, owner, state: init(), last_seen: frame });
            self.index.insert(id, key);
            log::debug!("Created {:?} state for {:?}", kind, id);
            return &mut self.entries[key].state;
        };

        let entry = &mut self.entries[key];
        entry.last_seen = frame;
        entry.owner = owner;
        if entry.state.kind() != kind {
            log::warn!("Widget {:?} changed kind to {:?}, resetting its state", id, kind);
            entry.state = init();
        }
        &mut entry.state
    }

    /// State of `id`, if present
    pub fn get(&self, id: WidgetId) -> Option<&WidgetState> {
        self.index.get(&id).map(|key| &self.entries[*key].state)
    }

    /// Mutable state of `id`, if present
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut WidgetState> {
        let key = *self.index.get(&id)?;
        Some(&mut self.entries[key].state)
    }

    /// Keep every entry owned by `owner` alive for `frame`
    ///
    /// Used for panels that were not composed (closed, minimized, or whose
    /// declaration failed) so their state is not evicted.
    pub fn touch_owner(&mut self, owner: PanelId, frame: u64) {
        for entry in self.entries.values_mut().filter(|entry| entry.owner == owner) {
            entry.last_seen = frame;
        }
    }

    /// Evict entries not declared within the last `grace` frames
    pub fn evict_stale(&mut self, frame: u64, grace: u64) -> usize {
        self.evict_where(|entry| frame.saturating_sub(entry.last_seen) > grace)
    }

    /// Evict every entry owned by `owner`
    pub fn evict_owner(&mut self, owner: PanelId) -> usize {
        self.evict_where(|entry| entry.owner == owner)
    }

    /// Evict one identity explicitly
    pub fn evict(&mut self, id: WidgetId) -> Option<WidgetState> {
        let key = self.index.remove(&id)?;
        let entry = self.entries.remove(key)?;
        self.released += 1;
        Some(entry.state)
    }

    fn evict_where<P>(&mut self, predicate: P) -> usize
    where
        P: Fn(&StateEntry) -> bool,
    {
        let stale: Vec<StateKey> = self
            .entries
            .iter()
            .filter(|(_, entry)| predicate(entry))
            .map(|(key, _)| key)
            .collect();
        for key in &stale {
            if let Some(entry) = self.entries.remove(*key) {
                self.index.remove(&entry.id);
                self.released += 1;
            }
        }
        if !stale.is_empty() {
            log::debug!("Evicted {} widget states", stale.len());
        }
        stale.len()
    }

    /// Release every entry, returning how many were released
    pub fn release_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.index.clear();
        self.released += count as u64;
        count
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Table holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total entries released over the table's lifetime
    pub fn released(&self) -> u64 {
        self.released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_state() -> WidgetState {
        WidgetState::Text(TextBuffer::new())
    }

    #[test]
    fn test_lazy_creation_and_lookup() {
        let mut table = WidgetStateTable::new();
        let id = WidgetId::keyed("p", "name");
        let owner = PanelId::from_name("p");
        if let WidgetState::Text(buffer) = table.get_or_insert_with(id, owner, 1, StateKind::Text, text_state) {
            buffer.set("typed");
        }
        let state = table.get_or_insert_with(id, owner, 2, StateKind::Text, text_state);
        assert_eq!(state.as_text().map(TextBuffer::as_str), Some("typed"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_eviction_after_grace() {
        let mut table = WidgetStateTable::new();
        let id = WidgetId::keyed("p", "name");
        let owner = PanelId::from_name("p");
        table.get_or_insert_with(id, owner, 1, StateKind::Text, text_state);

        assert_eq!(table.evict_stale(2, 1), 0);
        assert_eq!(table.evict_stale(3, 1), 1);
        assert!(table.get(id).is_none());
        assert_eq!(table.released(), 1);
    }

    #[test]
    fn test_touch_owner_keeps_state() {
        let mut table = WidgetStateTable::new();
        let owner = PanelId::from_name("p");
        table.get_or_insert_with(WidgetId::keyed("p", "a"), owner, 1, StateKind::Text, text_state);
        table.touch_owner(owner, 5);
        assert_eq!(table.evict_stale(6, 1), 0);
    }

    #[test]
    fn test_kind_change_resets() {
        let mut table = WidgetStateTable::new();
        let id = WidgetId::keyed("p", "x");
        let owner = PanelId::from_name("p");
        table.get_or_insert_with(id, owner, 1, StateKind::Text, text_state);
        let state = table.get_or_insert_with(id, owner, 2, StateKind::Toggle, || WidgetState::Toggle(true));
        assert_eq!(state.as_toggle(), Some(true));
    }

    #[test]
    fn test_release_all_counts_once() {
        let mut table = WidgetStateTable::new();
        let owner = PanelId::from_name("p");
        table.get_or_insert_with(WidgetId::keyed("p", "a"), owner, 1, StateKind::Text, text_state);
        table.get_or_insert_with(WidgetId::keyed("p", "b"), owner, 1, StateKind::Toggle, || WidgetState::Toggle(false));
        assert_eq!(table.release_all(), 2);
        assert_eq!(table.release_all(), 0);
        assert_eq!(table.released(), 2);
    }
}
