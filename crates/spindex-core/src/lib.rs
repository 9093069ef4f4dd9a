//! Core value types for the spindex workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! values every indexing engine agrees on: extents, placement variants,
//! boundary flags, coordinate aliases, and the shared [`IndexError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod extent;
pub mod variant;

pub use coord::{Cell, Node2, Node3};
pub use error::IndexError;
pub use extent::{Extent2, Extent3};
pub use variant::{Boundary, Variant};
