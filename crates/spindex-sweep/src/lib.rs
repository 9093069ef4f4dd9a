//! Consumers of the spindex engines.
//!
//! - [`config`]: user-facing settings ([`SweepConfig`]) loaded from TOML and
//!   validated into a [`DomainIndex`](spindex_space::DomainIndex)
//! - [`sweep`]: parallel evaluation of every node, and the diagnostic
//!   cross-check that re-derives each index and folds an [`Extremes`] summary
//!
//! The engines themselves are pure and lock-free; the only coordination
//! here is rayon's collection of per-index results.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod sweep;

pub use config::SweepConfig;
pub use error::{ConfigError, SweepError};
pub use sweep::{cross_check, par_boundaries, par_nodes, scaled_node, Extremes};
