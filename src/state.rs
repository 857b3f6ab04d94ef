// Rawhook Press State
// Set of identities currently held down, with exactly-once edge semantics

use std::collections::HashSet;

use crate::key::RawKey;

/// Tracks which identities are currently down.
///
/// Owned by the hook manager and mutated only from its dispatch path; the
/// manager wraps it in a lock solely so the host thread can take read
/// snapshots.
#[derive(Debug, Default)]
pub struct PressedSet {
    keys: HashSet<RawKey>,
}

impl PressedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a down edge. Returns `true` only when the identity was not
    /// already tracked, so OS key-repeat produces a single notification.
    pub fn mark_down(&mut self, key: RawKey) -> bool {
        self.keys.insert(key)
    }

    /// Record an up edge. Returns whether the identity was tracked; an
    /// untracked release (the terminal half of a press missed while focus
    /// was elsewhere) leaves the set untouched rather than underflowing.
    pub fn mark_up(&mut self, key: RawKey) -> bool {
        self.keys.remove(&key)
    }

    pub fn is_down(&self, key: RawKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn any_down(&self) -> bool {
        !self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Snapshot of the held identities, sorted by raw value.
    pub fn snapshot(&self) -> Vec<RawKey> {
        let mut keys: Vec<RawKey> = self.keys.iter().copied().collect();
        keys.sort();
        keys
    }

    /// Forget everything; used on hook teardown.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_down_reports_new_presses_once() {
        let mut set = PressedSet::new();
        assert!(set.mark_down(RawKey::A));
        assert!(!set.mark_down(RawKey::A));
        assert!(set.is_down(RawKey::A));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_mark_up_without_down_is_a_noop() {
        let mut set = PressedSet::new();
        assert!(!set.mark_up(RawKey::A));
        assert!(set.is_empty());
        assert!(!set.any_down());
    }

    #[test]
    fn test_down_then_up_clears_tracking() {
        let mut set = PressedSet::new();
        set.mark_down(RawKey::SHIFT);
        set.mark_down(RawKey::A);
        assert!(set.mark_up(RawKey::A));
        assert!(!set.is_down(RawKey::A));
        assert!(set.is_down(RawKey::SHIFT));
    }

    #[test]
    fn test_snapshot_is_sorted_and_detached() {
        let mut set = PressedSet::new();
        set.mark_down(RawKey::Z);
        set.mark_down(RawKey::A);
        let snap = set.snapshot();
        assert_eq!(snap, vec![RawKey::A, RawKey::Z]);
        set.clear();
        assert_eq!(snap.len(), 2);
        assert!(set.is_empty());
    }
}
