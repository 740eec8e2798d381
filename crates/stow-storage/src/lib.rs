//! Kind-specialised slot storage for Stow.
//!
//! # Architecture
//!
//! ```text
//! StorageFactory
//! ├── allocate(kind, capacity, source) → Storage (one variant per kind)
//! └── SharedEmptyCache → EmptySnapshotCache (ElementType → Arc<Storage>)
//! ```
//!
//! Primitive kinds are stored unboxed (`Vec<i32>`, `Vec<f64>`, ...). The
//! `Reference` kind stores `Vec<Option<Arc<dyn Any + Send + Sync>>>`.
//! Zero-length storage handed to callers comes from the cache so that
//! empty results of the same element type share one instance.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod factory;
pub mod storage;

pub use cache::{EmptySnapshotCache, SharedEmptyCache};
pub use factory::{allocate, StorageFactory};
pub use storage::{Reference, SharedStorage, Storage};
