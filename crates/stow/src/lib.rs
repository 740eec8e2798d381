//! Stow: growable builders that finalize into packed immutable snapshots.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Stow sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use stow::prelude::*;
//!
//! // Primitive element types are stored unboxed.
//! let mut ints = GrowableBuilder::<i64>::new();
//! ints.size_hint(3);
//! ints.append(10).append(20).append(30);
//! let snapshot = ints.finalize();
//! assert_eq!(snapshot.kind(), PrimitiveKind::Long);
//! assert_eq!(snapshot.as_slice(), Some(&[10, 20, 30][..]));
//!
//! // The hint was exact, so the builder handed its storage over and
//! // starts from scratch on the next append.
//! assert_eq!(ints.capacity(), 0);
//!
//! // Anything else is stored as shared references.
//! let mut names = GrowableBuilder::<String>::new();
//! names.append("ada".to_string());
//! let names = names.finalize();
//! assert_eq!(names.kind(), PrimitiveKind::Reference);
//! assert_eq!(names.get(0).map(String::as_str), Some("ada"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stow-core` | `ElementType`, `PrimitiveKind`, `classify`, config, errors |
//! | [`storage`] | `stow-storage` | `Storage`, `StorageFactory`, `EmptySnapshotCache` |
//! | [`builder`] | `stow-builder` | `GrowableBuilder`, `Snapshot`, `BuilderStats` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element type descriptors, kinds, configuration, and errors (`stow-core`).
pub use stow_core as types;

/// Kind-specialised storage, allocation, and the empty-snapshot cache
/// (`stow-storage`).
pub use stow_storage as storage;

/// Builders and the snapshots they produce (`stow-builder`).
pub use stow_builder as builder;

/// Common imports for typical Stow usage.
///
/// ```rust
/// use stow::prelude::*;
/// ```
pub mod prelude {
    // Builder and results
    pub use stow_builder::{BuilderStats, GrowableBuilder, Snapshot};

    // Core types
    pub use stow_core::{classify, BuilderConfig, ElementType, PrimitiveKind};

    // Errors
    pub use stow_core::{ConfigError, StorageError};

    // Storage
    pub use stow_storage::{EmptySnapshotCache, SharedEmptyCache, Storage, StorageFactory};
}
