//! Growable builders that finalize into kind-specialised snapshots.
//!
//! A [`GrowableBuilder<T>`] accumulates `T` values one at a time. The
//! backing storage is chosen from `T` when the builder is created:
//! `u8`, `i16`, `i32`, `i64`, `f32`, `f64`, `char`, `bool` and `()` are
//! stored unboxed, anything else as shared references. [`finalize`]
//! hands the accumulated values over as an immutable [`Snapshot<T>`].
//!
//! ```
//! use stow_builder::GrowableBuilder;
//! use stow_core::PrimitiveKind;
//!
//! let mut builder = GrowableBuilder::<i32>::new();
//! builder.append(1).append(2).append(3);
//! let snapshot = builder.finalize();
//! assert_eq!(snapshot.as_slice(), Some(&[1, 2, 3][..]));
//! assert_eq!(snapshot.kind(), PrimitiveKind::Int);
//! ```
//!
//! [`finalize`]: GrowableBuilder::finalize

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod snapshot;
pub mod stats;

pub use builder::GrowableBuilder;
pub use snapshot::{Iter, Snapshot};
pub use stats::BuilderStats;
