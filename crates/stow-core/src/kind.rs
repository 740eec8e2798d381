//! The closed set of storage kinds a builder can specialise on.

use std::fmt;

/// Classification of an element type for storage selection.
///
/// Every primitive kind maps to a densely packed, unboxed slot type.
/// Everything else is [`PrimitiveKind::Reference`], stored as a sequence
/// of shared references.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    /// `u8` slots.
    Byte,
    /// `i16` slots.
    Short,
    /// `i32` slots.
    Int,
    /// `i64` slots.
    Long,
    /// `f32` slots.
    Float,
    /// `f64` slots.
    Double,
    /// `char` slots.
    Char,
    /// `bool` slots.
    Boolean,
    /// `()` slots. Zero bytes per slot.
    Unit,
    /// Any other type, stored as shared references.
    Reference,
}

impl PrimitiveKind {
    /// Every kind, primitive kinds first, `Reference` last.
    pub const ALL: [PrimitiveKind; 10] = [
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Char,
        Self::Boolean,
        Self::Unit,
        Self::Reference,
    ];

    /// Returns `true` for every kind with an unboxed slot representation.
    pub fn is_packed(self) -> bool {
        !matches!(self, Self::Reference)
    }

    /// Bytes occupied by one slot of this kind's storage.
    ///
    /// For `Reference` this is the size of one nullable shared pointer,
    /// not of the referenced value.
    pub fn slot_bytes(self) -> usize {
        match self {
            Self::Byte => std::mem::size_of::<u8>(),
            Self::Short => std::mem::size_of::<i16>(),
            Self::Int => std::mem::size_of::<i32>(),
            Self::Long => std::mem::size_of::<i64>(),
            Self::Float => std::mem::size_of::<f32>(),
            Self::Double => std::mem::size_of::<f64>(),
            Self::Char => std::mem::size_of::<char>(),
            Self::Boolean => std::mem::size_of::<bool>(),
            Self::Unit => 0,
            Self::Reference => {
                std::mem::size_of::<Option<std::sync::Arc<dyn std::any::Any + Send + Sync>>>()
            }
        }
    }

    /// Lower-case name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Char => "char",
            Self::Boolean => "boolean",
            Self::Unit => "unit",
            Self::Reference => "reference",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
