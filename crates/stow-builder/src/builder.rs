//! The growable builder.
//!
//! [`GrowableBuilder`] accumulates elements one at a time into storage
//! specialised for the element type, then finalizes them into an
//! immutable [`Snapshot`].
//!
//! # States
//!
//! ```text
//!            append / size_hint(n > 0)
//!   Empty ─────────────────────────────▶ Active
//!  (no storage,                         (storage, capacity > 0)
//!   capacity 0) ◀──────────────────────
//!            finalize with size == capacity (storage moves out)
//! ```
//!
//! `clear` and the copying `finalize` keep the builder in its current
//! state; only the zero-copy transfer returns it to `Empty`.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use stow_core::{classify, BuilderConfig, ConfigError, ElementType, PrimitiveKind};
use stow_storage::{Storage, StorageFactory};

use crate::snapshot::Snapshot;
use crate::stats::BuilderStats;

/// Accumulates `T` values and finalizes them into a [`Snapshot<T>`].
///
/// The storage representation is chosen once, at construction, from
/// `classify(ElementType::of::<T>())`: primitive kinds are stored
/// unboxed, every other type as shared references.
///
/// A builder is reusable. After [`clear`](Self::clear) the existing
/// allocation is reused for the next build.
pub struct GrowableBuilder<T> {
    element_type: ElementType,
    kind: PrimitiveKind,
    /// `None` exactly when capacity is 0. Its length is the capacity.
    storage: Option<Storage>,
    size: usize,
    factory: StorageFactory,
    config: BuilderConfig,
    stats: BuilderStats,
    _marker: PhantomData<fn(T)>,
}

impl<T: Any + Send + Sync> GrowableBuilder<T> {
    /// Create an empty builder with the default config and the
    /// process-wide empty-snapshot cache.
    pub fn new() -> Self {
        Self::from_parts(StorageFactory::global(), BuilderConfig::default())
    }

    /// Create an empty builder with the given config.
    ///
    /// # Errors
    ///
    /// Returns the config's validation error, if any.
    pub fn with_config(config: BuilderConfig) -> Result<Self, ConfigError> {
        Self::with_factory(StorageFactory::global(), config)
    }

    /// Create an empty builder that allocates through `factory`.
    ///
    /// # Errors
    ///
    /// Returns the config's validation error, if any.
    pub fn with_factory(
        factory: StorageFactory,
        config: BuilderConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(factory, config))
    }

    fn from_parts(factory: StorageFactory, config: BuilderConfig) -> Self {
        let element_type = ElementType::of::<T>();
        Self {
            element_type,
            kind: classify(&element_type),
            storage: None,
            size: 0,
            factory,
            config,
            stats: BuilderStats::default(),
            _marker: PhantomData,
        }
    }

    /// Number of elements appended since construction, the last
    /// `clear`, or the last zero-copy `finalize`.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if no elements are pending.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.storage.as_ref().map_or(0, Storage::len)
    }

    /// Storage kind this builder specialises on.
    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    /// Descriptor of the element type.
    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Configuration in use.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Cumulative allocation counters.
    pub fn stats(&self) -> &BuilderStats {
        &self.stats
    }

    /// The in-progress storage, if any has been allocated.
    pub fn storage(&self) -> Option<&Storage> {
        self.storage.as_ref()
    }

    /// Grow the storage to exactly `capacity` slots if it is smaller.
    ///
    /// Pending elements are preserved. Never shrinks.
    pub fn size_hint(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            self.reallocate(capacity);
        }
    }

    /// Append `element` after the pending elements.
    ///
    /// Grows the storage by doubling when it is full; the first
    /// allocation uses the configured initial capacity.
    pub fn append(&mut self, element: T) -> &mut Self {
        let index = self.size;
        self.ensure_capacity(index + 1).put(index, element);
        self.size += 1;
        self
    }

    /// Discard the pending elements, keeping the allocation for reuse.
    ///
    /// Cleared reference elements are dropped here rather than when their
    /// slots are next overwritten.
    pub fn clear(&mut self) {
        if let Some(storage) = self.storage.as_mut() {
            storage.release_prefix(self.size);
        }
        self.size = 0;
    }

    /// Produce an immutable snapshot of the pending elements.
    ///
    /// When the storage is exactly full it moves into the snapshot
    /// without copying and the builder drops back to no storage and no
    /// pending elements. Otherwise the pending elements are copied into
    /// an exact-length storage (or the cached empty instance when there
    /// are none) and the builder is left as it was.
    pub fn finalize(&mut self) -> Snapshot<T> {
        if self.size != 0 && self.size == self.capacity() {
            if let Some(storage) = self.storage.take() {
                tracing::trace!(
                    element_type = self.element_type.name(),
                    len = self.size,
                    "transferring storage to snapshot"
                );
                self.size = 0;
                self.stats.transfers += 1;
                return Snapshot::adopt(Arc::new(storage));
            }
        }

        if self.size == 0 {
            self.stats.empty_results += 1;
        } else {
            self.stats.copies += 1;
        }
        let source = self.storage.as_ref();
        let shared = self
            .factory
            .allocate_shared(&self.element_type, self.size, source);
        Snapshot::adopt(shared)
    }

    fn ensure_capacity(&mut self, needed: usize) -> &mut Storage {
        let capacity = self.capacity();
        if needed > capacity {
            let grown = self.config.grown_capacity(capacity, needed);
            self.reallocate(grown);
        }
        self.storage
            .as_mut()
            .expect("storage is allocated once capacity is non-zero")
    }

    fn reallocate(&mut self, capacity: usize) {
        tracing::trace!(
            element_type = self.element_type.name(),
            kind = %self.kind,
            from = self.capacity(),
            to = capacity,
            "reallocating builder storage"
        );
        let grown = self
            .factory
            .allocate(self.kind, capacity, self.storage.as_ref());
        self.storage = Some(grown);
        self.stats.allocations += 1;
    }
}

impl<T: Any + Send + Sync> Default for GrowableBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for GrowableBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableBuilder")
            .field("element_type", &self.element_type)
            .field("kind", &self.kind)
            .field("len", &self.size)
            .field("capacity", &self.storage.as_ref().map_or(0, Storage::len))
            .finish()
    }
}
