//! Spindex: bijective spatial indexing over 2D grids, 3D lattices and the
//! unit sphere.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! spindex sub-crates. For most users, adding `spindex` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use spindex::prelude::*;
//!
//! // A 5x5 grid of cell centres, centred on the origin.
//! let grid = PlanarIndex::new(Extent2::new(5, 5), Variant::Center).unwrap();
//! assert_eq!(grid.total(), 25);
//! assert_eq!(grid.to_node(0).unwrap(), [-2.0, -2.0]);
//! assert_eq!(grid.to_index(&[0.0, 0.0]).unwrap(), 12);
//! assert_eq!(
//!     grid.boundary(&[-2.0, 0.0]).unwrap(),
//!     [Boundary::Min, Boundary::Interior]
//! );
//!
//! // The same queries on the sphere, chosen at runtime.
//! let config = SweepConfig {
//!     domain: Domain::Polar,
//!     ..SweepConfig::default()
//! };
//! let sphere = config.validate().unwrap();
//! let extremes = cross_check(&sphere).unwrap();
//! assert_eq!(extremes.total, sphere.total());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `spindex-core` | Extents, variants, boundary flags, errors |
//! | [`space`] | `spindex-space` | The three engines and the domain dispatcher |
//! | [`sweep`] | `spindex-sweep` | TOML config and parallel sweeps |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Value types and errors (`spindex-core`).
///
/// Contains [`types::Extent2`], [`types::Extent3`], [`types::Variant`],
/// [`types::Boundary`] and [`types::IndexError`].
pub use spindex_core as types;

/// Index engines (`spindex-space`).
///
/// Provides the [`space::NodeIndex`] trait and its engines:
/// [`space::PlanarIndex`], [`space::VolumeIndex`] and
/// [`space::SphericalIndex`], plus [`space::DomainIndex`] for runtime
/// selection.
pub use spindex_space as space;

/// Configuration and parallel sweeps (`spindex-sweep`).
///
/// Load a [`sweep::SweepConfig`] from TOML, then evaluate or verify every
/// node with [`sweep::par_nodes`] and [`sweep::cross_check`].
pub use spindex_sweep as sweep;

/// Common imports for typical spindex usage.
///
/// ```rust
/// use spindex::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use spindex_core::{Boundary, Extent2, Extent3, IndexError, Node2, Node3, Variant};

    // Engines
    pub use spindex_space::{
        Angle, Domain, DomainIndex, NodeIndex, PlanarIndex, SphericalIndex, VolumeIndex,
    };

    // Sweeps
    pub use spindex_sweep::{cross_check, par_nodes, ConfigError, SweepConfig, SweepError};
}
