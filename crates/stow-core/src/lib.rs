//! Core types for the Stow buffer builder.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the runtime element type descriptor ([`ElementType`]), the closed set
//! of storage kinds ([`PrimitiveKind`]) together with the classifier
//! that maps one to the other, builder configuration, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod element;
pub mod error;
pub mod kind;

pub use config::BuilderConfig;
pub use element::{classify, ElementType};
pub use error::{ConfigError, StorageError};
pub use kind::PrimitiveKind;
