//! Runtime element type descriptors and the kind classifier.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::kind::PrimitiveKind;

/// Opaque descriptor of the type of elements a builder accumulates.
///
/// Two descriptors are equal exactly when they describe the same Rust
/// type. The type name is carried for diagnostics only and does not take
/// part in equality or hashing.
#[derive(Clone, Copy)]
pub struct ElementType {
    id: TypeId,
    name: &'static str,
}

impl ElementType {
    /// Descriptor for `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The underlying `TypeId`.
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// The Rust type name, as reported by [`std::any::type_name`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Shorthand for [`classify`]`(self)`.
    pub fn kind(&self) -> PrimitiveKind {
        classify(self)
    }
}

impl PartialEq for ElementType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ElementType {}

impl Hash for ElementType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementType({})", self.name)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Classify an element type into its storage kind.
///
/// Total over all descriptors: the nine primitive slot types map to
/// their packed kind and every other type, including the remaining
/// integer widths, is [`PrimitiveKind::Reference`].
pub fn classify(element_type: &ElementType) -> PrimitiveKind {
    let id = element_type.type_id();
    if id == TypeId::of::<u8>() {
        PrimitiveKind::Byte
    } else if id == TypeId::of::<i16>() {
        PrimitiveKind::Short
    } else if id == TypeId::of::<i32>() {
        PrimitiveKind::Int
    } else if id == TypeId::of::<i64>() {
        PrimitiveKind::Long
    } else if id == TypeId::of::<f32>() {
        PrimitiveKind::Float
    } else if id == TypeId::of::<f64>() {
        PrimitiveKind::Double
    } else if id == TypeId::of::<char>() {
        PrimitiveKind::Char
    } else if id == TypeId::of::<bool>() {
        PrimitiveKind::Boolean
    } else if id == TypeId::of::<()>() {
        PrimitiveKind::Unit
    } else {
        PrimitiveKind::Reference
    }
}
