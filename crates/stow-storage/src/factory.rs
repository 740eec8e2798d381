//! Kind-directed storage allocation.
//!
//! [`allocate`] is the single place that turns a [`PrimitiveKind`] into a
//! concrete [`Storage`] variant. [`StorageFactory`] pairs it with an
//! [`EmptySnapshotCache`] so that zero-length results handed to callers
//! are shared instead of allocated.

use std::sync::Arc;

use stow_core::{classify, ElementType, PrimitiveKind};

use crate::cache::{EmptySnapshotCache, SharedEmptyCache};
use crate::storage::{Reference, SharedStorage, Storage};

/// Allocate `capacity` slots of `kind`, optionally copying from `source`.
///
/// Without a source every slot holds the kind's default value (`0`,
/// `0.0`, `'\0'`, `false`, `()` or an unset reference). With a source the
/// first `min(capacity, source.len())` slots are copied in order and the
/// rest are defaulted. Reference slots copy the shared pointer, never the
/// value behind it.
///
/// # Panics
///
/// Panics if `source` is a storage of a different kind.
pub fn allocate(kind: PrimitiveKind, capacity: usize, source: Option<&Storage>) -> Storage {
    if let Some(src) = source {
        assert_eq!(
            src.kind(),
            kind,
            "source storage kind does not match requested kind"
        );
    }

    macro_rules! slots {
        ($variant:ident, $default:expr) => {{
            let mut slots = vec![$default; capacity];
            if let Some(Storage::$variant(src)) = source {
                let n = capacity.min(src.len());
                slots[..n].clone_from_slice(&src[..n]);
            }
            Storage::$variant(slots)
        }};
    }

    match kind {
        PrimitiveKind::Byte => slots!(Byte, 0u8),
        PrimitiveKind::Short => slots!(Short, 0i16),
        PrimitiveKind::Int => slots!(Int, 0i32),
        PrimitiveKind::Long => slots!(Long, 0i64),
        PrimitiveKind::Float => slots!(Float, 0.0f32),
        PrimitiveKind::Double => slots!(Double, 0.0f64),
        PrimitiveKind::Char => slots!(Char, '\0'),
        PrimitiveKind::Boolean => slots!(Boolean, false),
        PrimitiveKind::Unit => slots!(Unit, ()),
        PrimitiveKind::Reference => slots!(Reference, None::<Reference>),
    }
}

/// Allocates builder storage and finalized snapshot storage.
///
/// Cloning a factory is cheap; clones share the same empty-snapshot
/// cache.
#[derive(Clone, Debug)]
pub struct StorageFactory {
    cache: SharedEmptyCache,
}

impl StorageFactory {
    /// Create a factory backed by the given empty-snapshot cache.
    pub fn new(cache: SharedEmptyCache) -> Self {
        Self { cache }
    }

    /// Create a factory backed by the process-wide cache.
    pub fn global() -> Self {
        Self::new(Arc::clone(EmptySnapshotCache::global()))
    }

    /// The cache this factory serves zero-length results from.
    pub fn cache(&self) -> &SharedEmptyCache {
        &self.cache
    }

    /// Allocate mutable storage. See [`allocate`].
    ///
    /// A zero `capacity` returns an owned empty storage, not the cached
    /// instance; use [`allocate_shared`](Self::allocate_shared) for that.
    pub fn allocate(
        &self,
        kind: PrimitiveKind,
        capacity: usize,
        source: Option<&Storage>,
    ) -> Storage {
        allocate(kind, capacity, source)
    }

    /// Allocate immutable storage for a snapshot of `element_type`.
    ///
    /// A zero `capacity` returns the cached empty instance for
    /// `element_type` rather than allocating.
    pub fn allocate_shared(
        &self,
        element_type: &ElementType,
        capacity: usize,
        source: Option<&Storage>,
    ) -> SharedStorage {
        if capacity == 0 {
            return self.cache.get(element_type);
        }
        Arc::new(allocate(classify(element_type), capacity, source))
    }
}

impl Default for StorageFactory {
    fn default() -> Self {
        Self::global()
    }
}
