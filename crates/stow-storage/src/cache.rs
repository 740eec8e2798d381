//! Memoized zero-length storage per element type.
//!
//! Every builder finalized without appends would otherwise produce its
//! own empty storage. [`EmptySnapshotCache`] hands out one shared,
//! immutable empty instance per [`ElementType`] instead, created lazily
//! on first request.
//!
//! The cache is an ordinary value: create one with
//! [`EmptySnapshotCache::new`] and share it through [`SharedEmptyCache`],
//! or use the lazily created process-wide instance from
//! [`EmptySnapshotCache::global`].

use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use indexmap::IndexMap;
use stow_core::{classify, ElementType};

use crate::factory::allocate;
use crate::storage::SharedStorage;

/// Shared handle to an empty-snapshot cache.
pub type SharedEmptyCache = Arc<EmptySnapshotCache>;

static GLOBAL: OnceLock<SharedEmptyCache> = OnceLock::new();

/// Get-or-create map from element type to its shared empty storage.
///
/// Concurrent first requests for the same type serialise on the write
/// lock, so each cache stores exactly one instance per type. A poisoned
/// lock is recovered: entries are inserted whole, so the map is never
/// observed half-written.
pub struct EmptySnapshotCache {
    entries: RwLock<IndexMap<ElementType, SharedStorage>>,
}

impl EmptySnapshotCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(IndexMap::new()),
        }
    }

    /// The process-wide cache, created on first use.
    pub fn global() -> &'static SharedEmptyCache {
        GLOBAL.get_or_init(|| EmptySnapshotCache::new().into_shared())
    }

    /// Wrap this cache in an `Arc` for sharing.
    pub fn into_shared(self) -> SharedEmptyCache {
        Arc::new(self)
    }

    /// The shared zero-length storage for `element_type`.
    ///
    /// The storage's kind is `classify(element_type)`.
    pub fn get(&self, element_type: &ElementType) -> SharedStorage {
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(storage) = entries.get(element_type) {
                return Arc::clone(storage);
            }
        }

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let storage = entries.entry(*element_type).or_insert_with(|| {
            let kind = classify(element_type);
            tracing::debug!(element_type = element_type.name(), %kind, "populating empty snapshot");
            Arc::new(allocate(kind, 0, None))
        });
        Arc::clone(storage)
    }

    /// Returns `true` if an empty instance for `element_type` exists.
    pub fn contains(&self, element_type: &ElementType) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(element_type)
    }

    /// Number of element types with a cached empty instance.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EmptySnapshotCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EmptySnapshotCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("EmptySnapshotCache")
            .field("types", &entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
