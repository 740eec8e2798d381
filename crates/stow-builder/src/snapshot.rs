//! Immutable typed snapshots produced by [`GrowableBuilder::finalize`].
//!
//! [`GrowableBuilder::finalize`]: crate::GrowableBuilder::finalize

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use stow_core::{ElementType, PrimitiveKind, StorageError};
use stow_storage::{SharedStorage, Storage};

/// An immutable, fixed-length sequence of `T` backed by kind-specialised
/// storage.
///
/// Cloning is cheap: clones share the same storage. Every slot holds a
/// `T`; this is checked when adopting foreign storage through
/// [`Snapshot::try_from_shared`] and guaranteed by construction for
/// snapshots produced by a builder.
pub struct Snapshot<T> {
    storage: SharedStorage,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Any + Send + Sync> Snapshot<T> {
    /// Wrap storage the builder filled with `T` values.
    pub(crate) fn adopt(storage: SharedStorage) -> Self {
        debug_assert_eq!(storage.kind(), ElementType::of::<T>().kind());
        Self {
            storage,
            _marker: PhantomData,
        }
    }

    /// Adopt an existing shared storage as a snapshot of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::KindMismatch`] if the storage's kind is not
    /// the classification of `T`, or [`StorageError::ForeignElement`] if a
    /// reference slot is unset or holds something other than a `T`.
    pub fn try_from_shared(storage: SharedStorage) -> Result<Self, StorageError> {
        let expected = ElementType::of::<T>().kind();
        if storage.kind() != expected {
            return Err(StorageError::KindMismatch {
                expected,
                found: storage.kind(),
            });
        }
        if let Some(slots) = storage.as_references() {
            let foreign = slots
                .iter()
                .position(|slot| !slot.as_deref().is_some_and(|v| v.is::<T>()));
            if let Some(index) = foreign {
                return Err(StorageError::ForeignElement { index });
            }
        }
        Ok(Self::adopt(storage))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the snapshot has no elements.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Storage kind of this snapshot.
    pub fn kind(&self) -> PrimitiveKind {
        self.storage.kind()
    }

    /// Descriptor of the element type.
    pub fn element_type(&self) -> ElementType {
        ElementType::of::<T>()
    }

    /// The element at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.get::<T>(index)
    }

    /// The elements as a contiguous slice, for packed kinds only.
    pub fn as_slice(&self) -> Option<&[T]> {
        self.storage.as_packed::<T>()
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            snapshot: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Copy the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// The underlying storage.
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Returns `true` if both snapshots share one storage instance.
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage)
    }

    /// Release the snapshot's shared storage.
    pub fn into_shared(self) -> SharedStorage {
        self.storage
    }
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            _marker: PhantomData,
        }
    }
}

impl<T: Any + Send + Sync + fmt::Debug> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Any + Send + Sync + PartialEq> PartialEq for Snapshot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<'a, T: Any + Send + Sync> IntoIterator for &'a Snapshot<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of a [`Snapshot`].
pub struct Iter<'a, T> {
    snapshot: &'a Snapshot<T>,
    front: usize,
    back: usize,
}

impl<'a, T: Any + Send + Sync> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let item = self.snapshot.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Any + Send + Sync> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.snapshot.get(self.back)
    }
}

impl<T: Any + Send + Sync> ExactSizeIterator for Iter<'_, T> {}
