//! Error types for the Stow workspace.
//!
//! Normal builder use has no recoverable failures. These cover the two
//! places a caller can hand in something invalid: a builder
//! configuration and a storage adopted into a typed snapshot.

use std::error::Error;
use std::fmt;

use crate::kind::PrimitiveKind;

/// Errors from validating a [`BuilderConfig`](crate::BuilderConfig).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `initial_capacity` is zero, so doubling could never make room.
    InitialCapacityZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitialCapacityZero => write!(f, "initial capacity must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

/// Errors from adopting an existing storage as a typed snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// The storage's kind does not match the element type's classification.
    KindMismatch {
        /// Kind the element type classifies as.
        expected: PrimitiveKind,
        /// Kind of the storage that was offered.
        found: PrimitiveKind,
    },
    /// A reference slot is unset or holds a value of another type.
    ForeignElement {
        /// Index of the first offending slot.
        index: usize,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KindMismatch { expected, found } => {
                write!(f, "storage kind mismatch: expected {expected}, found {found}")
            }
            Self::ForeignElement { index } => {
                write!(f, "slot {index} does not hold an element of the expected type")
            }
        }
    }
}

impl Error for StorageError {}
