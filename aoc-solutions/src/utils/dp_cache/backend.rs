//! Slot storage for the DP cache.

use std::collections::HashMap;
use std::hash::Hash;

/// State of one index in the cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<K> {
    /// Dependencies of this index are being resolved
    Pending,
    Ready(K),
}

/// Where the cache keeps its slots. Indices never stored have no slot.
pub trait Backend<I, K> {
    fn slot(&self, index: &I) -> Option<&Slot<K>>;

    fn store(&mut self, index: I, slot: Slot<K>);

    /// Forget `index`, leaving it as if never stored
    fn clear(&mut self, index: &I);
}

/// Dense `usize` indices; grows to fit the largest index stored.
#[derive(Debug)]
pub struct VecBackend<K> {
    slots: Vec<Option<Slot<K>>>,
}

impl<K> VecBackend<K> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn slot(&self, index: &usize) -> Option<&Slot<K>> {
        self.slots.get(*index)?.as_ref()
    }

    fn store(&mut self, index: usize, slot: Slot<K>) {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index] = Some(slot);
    }

    fn clear(&mut self, index: &usize) {
        if let Some(slot) = self.slots.get_mut(*index) {
            *slot = None;
        }
    }
}

/// Sparse or non-integer indices
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    slots: HashMap<I, Slot<K>>,
}

impl<I, K> HashMapBackend<I, K> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn slot(&self, index: &I) -> Option<&Slot<K>> {
        self.slots.get(index)
    }

    fn store(&mut self, index: I, slot: Slot<K>) {
        self.slots.insert(index, slot);
    }

    fn clear(&mut self, index: &I) {
        self.slots.remove(index);
    }
}
