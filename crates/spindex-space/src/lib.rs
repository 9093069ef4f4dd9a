//! Bijective spatial indexing for spindex.
//!
//! This crate defines the [`NodeIndex`] trait, the shared contract that maps
//! a dense index range `[0, total)` onto continuous node positions and back,
//! along with its three engines:
//!
//! - [`PlanarIndex`]: 2D grid of whole, centre or corner nodes
//! - [`VolumeIndex`]: the same placements on a 3D lattice
//! - [`SphericalIndex`]: latitude rings on the unit sphere, addressed by [`Angle`]
//!
//! [`DomainIndex`] selects one of them from a closed [`Domain`] tag and
//! exposes a uniform 3D view for callers that switch domains at runtime.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod angle;
pub mod domain;
pub mod index;
pub mod planar;
pub mod spherical;
pub mod volume;

pub(crate) mod lattice;

#[cfg(test)]
pub(crate) mod compliance;

pub use angle::Angle;
pub use domain::{Domain, DomainIndex};
pub use index::{NodeIndex, Nodes};
pub use planar::PlanarIndex;
pub use spherical::SphericalIndex;
pub use spindex_core::{Boundary, Cell, Extent2, Extent3, IndexError, Node2, Node3, Variant};
pub use volume::VolumeIndex;
