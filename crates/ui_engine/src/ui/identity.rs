//! Widget identity
//!
//! A widget's identity is derived from its panel name and either an explicit
//! key or its structural path from the panel root. The same declaration
//! produces the same identities every frame, which is what lets the context
//! look persistent state up by identity instead of storing it in the tree.

use crate::foundation::collections::StableHasher;

/// Stable key associating a transient widget declaration with persistent state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Identity of an explicitly keyed widget
    pub fn keyed(panel: &str, key: &str) -> Self {
        let mut hasher = StableHasher::new();
        hasher.write_str(panel);
        hasher.write(b"#key");
        hasher.write_str(key);
        Self(hasher.finish())
    }

    /// Identity of a radio group within a panel
    pub fn group(panel: &str, group: &str) -> Self {
        let mut hasher = StableHasher::new();
        hasher.write_str(panel);
        hasher.write(b"#group");
        hasher.write_str(group);
        Self(hasher.finish())
    }

    /// Identity of a panel chrome element (title bar, close box, grip)
    pub fn chrome(panel: &str, part: &str) -> Self {
        let mut hasher = StableHasher::new();
        hasher.write_str(panel);
        hasher.write(b"#chrome");
        hasher.write_str(part);
        Self(hasher.finish())
    }

    /// Identity of an unkeyed widget at a structural path
    pub fn at_path(panel: &str, path: &[u32]) -> Self {
        let mut hasher = StableHasher::new();
        hasher.write_str(panel);
        hasher.write(b"#path");
        for index in path {
            hasher.write_index(*index);
        }
        Self(hasher.finish())
    }
}

/// Identity of the panel that owns a piece of persistent state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(pub u64);

impl PanelId {
    /// Derive the owner identity from a panel name
    pub fn from_name(name: &str) -> Self {
        let mut hasher = StableHasher::new();
        hasher.write_str(name);
        Self(hasher.finish())
    }
}

/// Structural path cursor maintained while walking a declaration tree
#[derive(Debug, Default, Clone)]
pub struct IdPath {
    segments: Vec<u32>,
}

impl IdPath {
    /// Empty path (the panel root)
    pub fn new() -> Self {
        Self::default()
    }

    /// Descend into child `index`
    pub fn push(&mut self, index: u32) {
        self.segments.push(index);
    }

    /// Return to the parent
    pub fn pop(&mut self) {
        self.segments.pop();
    }

    /// Current segments
    pub fn segments(&self) -> &[u32] {
        &self.segments
    }

    /// Reset to the root, keeping the allocation
    pub fn clear(&mut self) {
        self.segments.clear();
    }
}
