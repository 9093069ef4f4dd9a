//! Error types for configuration loading and sweeps.

use spindex_core::{IndexError, Node3};
use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors detected while loading or validating a [`SweepConfig`](crate::SweepConfig).
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The configuration text is not valid TOML for this schema.
    Parse(toml::de::Error),
    /// Sphere radius is NaN, infinite, zero, or negative.
    InvalidRadius {
        /// The invalid value.
        value: f64,
    },
    /// The engine rejected the domain, extent, or layer count.
    Index(IndexError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config '{}': {source}", path.display())
            }
            Self::Parse(e) => write!(f, "invalid config: {e}"),
            Self::InvalidRadius { value } => {
                write!(f, "radius must be finite and positive, got {value}")
            }
            Self::Index(e) => write!(f, "config rejected by index engine: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            Self::Index(e) => Some(e),
            Self::InvalidRadius { .. } => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<IndexError> for ConfigError {
    fn from(e: IndexError) -> Self {
        Self::Index(e)
    }
}

/// Errors from sweeping every index of a domain.
#[derive(Clone, Debug, PartialEq)]
pub enum SweepError {
    /// `index(node(i))` or `node(index(node(i)))` disagreed with the start.
    Mismatch {
        /// The index the check started from.
        index: usize,
        /// `node(index)`.
        node: Node3,
        /// `index(node)`.
        matched_index: usize,
        /// `node(matched_index)`.
        matched_node: Node3,
    },
    /// The engine failed while evaluating `index`.
    Index {
        /// The index being evaluated.
        index: usize,
        /// The underlying engine error.
        source: IndexError,
    },
}

impl SweepError {
    /// The index whose evaluation failed.
    pub fn index(&self) -> usize {
        match self {
            Self::Mismatch { index, .. } | Self::Index { index, .. } => *index,
        }
    }
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch {
                index,
                node,
                matched_index,
                matched_node,
            } => write!(
                f,
                "round trip mismatch: {index} -> {node:?} but {matched_index} -> {matched_node:?}"
            ),
            Self::Index { index, source } => write!(f, "index {index}: {source}"),
        }
    }
}

impl Error for SweepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Index { source, .. } => Some(source),
            Self::Mismatch { .. } => None,
        }
    }
}
