//! Packed and reference slot storage.
//!
//! A [`Storage`] is a fixed-length run of slots whose concrete
//! representation is selected by [`PrimitiveKind`]. Primitive kinds are
//! stored unboxed in a `Vec` of the native type. Everything else is a
//! `Vec` of nullable shared references.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use stow_core::PrimitiveKind;

/// A shared, type-erased reference stored in a [`Storage::Reference`] slot.
pub type Reference = Arc<dyn Any + Send + Sync>;

/// A storage shared between a snapshot and any of its clones.
pub type SharedStorage = Arc<Storage>;

/// Fixed-length slot storage, one variant per [`PrimitiveKind`].
///
/// The length of the inner `Vec` is the storage capacity. Slots that
/// have not been written hold the kind's default value.
#[derive(Clone)]
pub enum Storage {
    /// Packed `u8` slots.
    Byte(Vec<u8>),
    /// Packed `i16` slots.
    Short(Vec<i16>),
    /// Packed `i32` slots.
    Int(Vec<i32>),
    /// Packed `i64` slots.
    Long(Vec<i64>),
    /// Packed `f32` slots.
    Float(Vec<f32>),
    /// Packed `f64` slots.
    Double(Vec<f64>),
    /// Packed `char` slots.
    Char(Vec<char>),
    /// Packed `bool` slots.
    Boolean(Vec<bool>),
    /// Zero-sized `()` slots.
    Unit(Vec<()>),
    /// Nullable shared references to values of any other type.
    Reference(Vec<Option<Reference>>),
}

impl Storage {
    /// The kind this storage was built for.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Byte(_) => PrimitiveKind::Byte,
            Self::Short(_) => PrimitiveKind::Short,
            Self::Int(_) => PrimitiveKind::Int,
            Self::Long(_) => PrimitiveKind::Long,
            Self::Float(_) => PrimitiveKind::Float,
            Self::Double(_) => PrimitiveKind::Double,
            Self::Char(_) => PrimitiveKind::Char,
            Self::Boolean(_) => PrimitiveKind::Boolean,
            Self::Unit(_) => PrimitiveKind::Unit,
            Self::Reference(_) => PrimitiveKind::Reference,
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        match self {
            Self::Byte(slots) => slots.len(),
            Self::Short(slots) => slots.len(),
            Self::Int(slots) => slots.len(),
            Self::Long(slots) => slots.len(),
            Self::Float(slots) => slots.len(),
            Self::Double(slots) => slots.len(),
            Self::Char(slots) => slots.len(),
            Self::Boolean(slots) => slots.len(),
            Self::Unit(slots) => slots.len(),
            Self::Reference(slots) => slots.len(),
        }
    }

    /// Returns `true` if the storage has no slots.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Memory used by the slots themselves, in bytes.
    ///
    /// Values behind `Reference` slots are not counted.
    pub fn memory_bytes(&self) -> usize {
        self.len() * self.kind().slot_bytes()
    }

    /// Address of the first slot, for allocation identity checks.
    ///
    /// Two storages with the same non-dangling pointer share one
    /// allocation. `Unit` storage and zero-length storage never allocate,
    /// so their pointer carries no identity.
    pub fn data_ptr(&self) -> *const u8 {
        match self {
            Self::Byte(slots) => slots.as_ptr(),
            Self::Short(slots) => slots.as_ptr().cast(),
            Self::Int(slots) => slots.as_ptr().cast(),
            Self::Long(slots) => slots.as_ptr().cast(),
            Self::Float(slots) => slots.as_ptr().cast(),
            Self::Double(slots) => slots.as_ptr().cast(),
            Self::Char(slots) => slots.as_ptr().cast(),
            Self::Boolean(slots) => slots.as_ptr().cast(),
            Self::Unit(slots) => slots.as_ptr().cast(),
            Self::Reference(slots) => slots.as_ptr().cast(),
        }
    }

    /// The packed slots as `&[T]`, if this storage holds `T` unboxed.
    ///
    /// Returns `None` for `Reference` storage and for any `T` that is not
    /// the storage's native slot type.
    pub fn as_packed<T: Any>(&self) -> Option<&[T]> {
        let slots: &dyn Any = match self {
            Self::Byte(slots) => slots,
            Self::Short(slots) => slots,
            Self::Int(slots) => slots,
            Self::Long(slots) => slots,
            Self::Float(slots) => slots,
            Self::Double(slots) => slots,
            Self::Char(slots) => slots,
            Self::Boolean(slots) => slots,
            Self::Unit(slots) => slots,
            Self::Reference(_) => return None,
        };
        slots.downcast_ref::<Vec<T>>().map(Vec::as_slice)
    }

    fn as_packed_mut<T: Any>(&mut self) -> Option<&mut [T]> {
        let slots: &mut dyn Any = match self {
            Self::Byte(slots) => slots,
            Self::Short(slots) => slots,
            Self::Int(slots) => slots,
            Self::Long(slots) => slots,
            Self::Float(slots) => slots,
            Self::Double(slots) => slots,
            Self::Char(slots) => slots,
            Self::Boolean(slots) => slots,
            Self::Unit(slots) => slots,
            Self::Reference(_) => return None,
        };
        slots.downcast_mut::<Vec<T>>().map(Vec::as_mut_slice)
    }

    /// The reference slots, if this is `Reference` storage.
    pub fn as_references(&self) -> Option<&[Option<Reference>]> {
        match self {
            Self::Reference(slots) => Some(slots),
            _ => None,
        }
    }

    /// Read the value at `index` as a `T`.
    ///
    /// Returns `None` if `index` is out of bounds, the slot is an unset
    /// reference, or `T` is not the type stored at that slot.
    pub fn get<T: Any>(&self, index: usize) -> Option<&T> {
        match self {
            Self::Reference(slots) => slots.get(index)?.as_deref()?.downcast_ref::<T>(),
            _ => self.as_packed::<T>()?.get(index),
        }
    }

    /// Write `value` into slot `index`.
    ///
    /// Primitive values are written unboxed. For `Reference` storage the
    /// value is moved behind a fresh [`Reference`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`, or if `T` is a primitive slot
    /// type that does not match a packed storage's kind.
    pub fn put<T: Any + Send + Sync>(&mut self, index: usize, value: T) {
        let kind = self.kind();
        if let Self::Reference(slots) = self {
            slots[index] = Some(Arc::new(value));
            return;
        }
        match self.as_packed_mut::<T>() {
            Some(slots) => slots[index] = value,
            None => panic!(
                "cannot store {} in {kind} storage",
                std::any::type_name::<T>()
            ),
        }
    }

    /// Unset the first `n` reference slots, dropping the values they held.
    ///
    /// Packed slots own nothing and are left as they are. `n` past the end
    /// is clamped to the length.
    pub fn release_prefix(&mut self, n: usize) {
        if let Self::Reference(slots) = self {
            let n = n.min(slots.len());
            slots[..n].fill(None);
        }
    }
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(slots) => f.debug_tuple("Byte").field(slots).finish(),
            Self::Short(slots) => f.debug_tuple("Short").field(slots).finish(),
            Self::Int(slots) => f.debug_tuple("Int").field(slots).finish(),
            Self::Long(slots) => f.debug_tuple("Long").field(slots).finish(),
            Self::Float(slots) => f.debug_tuple("Float").field(slots).finish(),
            Self::Double(slots) => f.debug_tuple("Double").field(slots).finish(),
            Self::Char(slots) => f.debug_tuple("Char").field(slots).finish(),
            Self::Boolean(slots) => f.debug_tuple("Boolean").field(slots).finish(),
            Self::Unit(slots) => f.debug_tuple("Unit").field(&slots.len()).finish(),
            // Referenced values are type-erased; show only which slots are set.
            Self::Reference(slots) => {
                let set: Vec<bool> = slots.iter().map(Option::is_some).collect();
                f.debug_tuple("Reference").field(&set).finish()
            }
        }
    }
}
