// SPDX-License-Identifier: MPL-2.0
//! One-shot visibility watcher.
//!
//! Reveal targets, counters and lazy images all follow the same pattern: wait
//! for a subject to become visible, act once, then stop watching it. The
//! watcher tracks which subjects are still pending and guarantees the action
//! runs at most once per subject, whatever the observer reports afterwards.

use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct OnceWatcher<K> {
    pending: HashSet<K>,
    fired: HashSet<K>,
}

impl<K: Eq + Hash + Clone> OnceWatcher<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: HashSet::new(),
            fired: HashSet::new(),
        }
    }

    /// Starts watching `key`.
    ///
    /// Returns `false` if the key is already pending or has already fired;
    /// a released subject can never be watched again.
    pub fn observe(&mut self, key: K) -> bool {
        if self.fired.contains(&key) {
            return false;
        }
        self.pending.insert(key)
    }

    /// Reports a visibility change for `key`.
    ///
    /// Runs `on_fire` and releases the key the first time it is reported as
    /// intersecting. Returns whether `on_fire` ran.
    pub fn notify<F>(&mut self, key: &K, intersecting: bool, on_fire: F) -> bool
    where
        F: FnOnce(&K),
    {
        if !intersecting || !self.pending.remove(key) {
            return false;
        }
        on_fire(key);
        self.fired.insert(key.clone());
        true
    }

    #[must_use]
    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains(key)
    }

    #[must_use]
    pub fn has_fired(&self, key: &K) -> bool {
        self.fired.contains(key)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl<K: Eq + Hash + Clone> Default for OnceWatcher<K> {
    fn default() -> Self {
        Self::new()
    }
}
