//! Specialized collection types

pub use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle into the persistent widget state arena
    pub struct StateKey;
}

/// Handle-based map using slot map for stable references
pub type HandleMap<K, T> = SlotMap<K, T>;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// Incremental FNV-1a hasher
///
/// Deterministic across runs and platforms, unlike `std`'s `RandomState`,
/// so identities derived from it are stable for the whole session.
#[derive(Debug, Clone, Copy)]
pub struct StableHasher(u64);

impl StableHasher {
    /// Create a hasher at the FNV offset basis
    pub const fn new() -> Self {
        Self(FNV_OFFSET_BASIS)
    }

    /// Feed raw bytes
    pub fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.0 ^= u64::from(*byte);
            self.0 = self.0.wrapping_mul(FNV_PRIME);
        }
    }

    /// Feed a string followed by a separator byte so "ab"+"c" != "a"+"bc"
    pub fn write_str(&mut self, value: &str) {
        self.write(value.as_bytes());
        self.write(&[0xff]);
    }

    /// Feed a path segment
    pub fn write_index(&mut self, index: u32) {
        self.write(&index.to_le_bytes());
    }

    /// Current hash value
    pub const fn finish(&self) -> u64 {
        self.0
    }
}

impl Default for StableHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hasher_is_deterministic() {
        let mut a = StableHasher::new();
        a.write_str("settings");
        a.write_index(3);
        let mut b = StableHasher::new();
        b.write_str("settings");
        b.write_index(3);
        assert_eq!(a.finish(), b.finish());
    }

    #[test]
    fn test_separator_distinguishes_splits() {
        let mut a = StableHasher::new();
        a.write_str("ab");
        a.write_str("c");
        let mut b = StableHasher::new();
        b.write_str("a");
        b.write_str("bc");
        assert_ne!(a.finish(), b.finish());
    }
}
