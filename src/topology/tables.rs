//! Keyed record storage for edges and triangles.
//!
//! A [`RecordTable`] owns its records in a generational arena and indexes
//! them by canonical key. Arena slots freed by [`RecordTable::erase`] are
//! reused by later insertions; stale handles are rejected by the arena's
//! generation check. Iteration follows arena slot order and is therefore
//! deterministic for a given sequence of mutations.

use std::hash::Hash;
use std::ops::{Index, IndexMut};

use hashbrown::HashMap;
use slotmap::{Key, SlotMap};

use crate::topology::keys::{EdgeKey, TriangleKey};
use crate::topology::records::{Edge, EdgeHandle, Triangle, TriangleHandle};

/// Records of type `R`, addressed by handle `H` and looked up by key `K`.
#[derive(Clone, Debug)]
pub struct RecordTable<K, H, R>
where
    K: Copy + Eq + Hash,
    H: Key,
{
    records: SlotMap<H, R>,
    index: HashMap<K, H>,
}

/// Edges keyed by unordered vertex pair.
pub type EdgeTable<D> = RecordTable<EdgeKey, EdgeHandle, Edge<D>>;
/// Triangles keyed by rotation-invariant vertex triple.
pub type TriangleTable<D> = RecordTable<TriangleKey, TriangleHandle, Triangle<D>>;

impl<K, H, R> Default for RecordTable<K, H, R>
where
    K: Copy + Eq + Hash,
    H: Key,
{
    fn default() -> Self {
        Self {
            records: SlotMap::with_key(),
            index: HashMap::new(),
        }
    }
}

impl<K, H, R> RecordTable<K, H, R>
where
    K: Copy + Eq + Hash,
    H: Key,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle of the record stored under `key`.
    #[inline]
    pub fn find(&self, key: &K) -> Option<H> {
        self.index.get(key).copied()
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Take ownership of `record` under `key`.
    ///
    /// The key must not already be present.
    pub fn insert(&mut self, key: K, record: R) -> H {
        debug_assert!(!self.index.contains_key(&key), "duplicate record key");
        let handle = self.records.insert(record);
        self.index.insert(key, handle);
        handle
    }

    /// Remove and return the record stored under `key`.
    pub fn erase(&mut self, key: &K) -> Option<R> {
        let handle = self.index.remove(key)?;
        self.records.remove(handle)
    }

    #[inline]
    pub fn get(&self, handle: H) -> Option<&R> {
        self.records.get(handle)
    }

    #[inline]
    pub fn get_mut(&mut self, handle: H) -> Option<&mut R> {
        self.records.get_mut(handle)
    }

    /// Records in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (H, &R)> + '_ {
        self.records.iter()
    }

    /// Handles in arena order.
    pub fn handles(&self) -> impl Iterator<Item = H> + '_ {
        self.records.keys()
    }

    /// `(key, handle)` pairs of the lookup index, in unspecified order.
    pub fn index_entries(&self) -> impl Iterator<Item = (K, H)> + '_ {
        self.index.iter().map(|(k, h)| (*k, *h))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
        self.index.clear();
    }
}

impl<K, H, R> Index<H> for RecordTable<K, H, R>
where
    K: Copy + Eq + Hash,
    H: Key,
{
    type Output = R;

    fn index(&self, handle: H) -> &R {
        &self.records[handle]
    }
}

impl<K, H, R> IndexMut<H> for RecordTable<K, H, R>
where
    K: Copy + Eq + Hash,
    H: Key,
{
    fn index_mut(&mut self, handle: H) -> &mut R {
        &mut self.records[handle]
    }
}
