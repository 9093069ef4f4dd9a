//! Error types shared by every indexing engine.

use std::error::Error;
use std::fmt;

/// Errors arising from engine construction or index/node queries.
///
/// All of them are caller logic errors: the engines never retry and never
/// correct their input.
#[derive(Clone, Debug, PartialEq)]
pub enum IndexError {
    /// An extent component is zero, the layer count is below 2, or the
    /// resulting node count does not fit in `usize`.
    InvalidConfiguration {
        /// What went wrong.
        reason: String,
    },
    /// An index lies outside `[0, total)`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Node count of the domain.
        total: usize,
    },
    /// A variant or domain tag outside the closed set.
    UnsupportedDomain {
        /// The unrecognised tag.
        tag: String,
    },
    /// A node lies outside the bounding region of its domain or is not finite.
    NodeOutOfBounds {
        /// The offending node components.
        node: Vec<f64>,
        /// Human-readable description of the valid region.
        bounds: String,
    },
    /// A zero-length or non-finite vector has no direction.
    DegenerateDirection {
        /// The offending vector.
        vector: [f64; 3],
    },
}

impl IndexError {
    /// Shorthand for [`IndexError::InvalidConfiguration`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Check `index < total`, returning [`IndexError::IndexOutOfRange`] otherwise.
    pub fn check_range(index: usize, total: usize) -> Result<usize, Self> {
        if index < total {
            Ok(index)
        } else {
            Err(Self::IndexOutOfRange { index, total })
        }
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { reason } => {
                write!(f, "invalid configuration: {reason}")
            }
            Self::IndexOutOfRange { index, total } => {
                write!(f, "index {index} out of range [0, {total})")
            }
            Self::UnsupportedDomain { tag } => write!(f, "unsupported domain '{tag}'"),
            Self::NodeOutOfBounds { node, bounds } => {
                write!(f, "node {node:?} out of bounds: {bounds}")
            }
            Self::DegenerateDirection { vector } => {
                write!(f, "vector {vector:?} has no direction")
            }
        }
    }
}

impl Error for IndexError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_range_accepts_last_index() {
        assert_eq!(IndexError::check_range(24, 25), Ok(24));
    }

    #[test]
    fn check_range_rejects_total() {
        assert_eq!(
            IndexError::check_range(25, 25),
            Err(IndexError::IndexOutOfRange {
                index: 25,
                total: 25
            })
        );
    }

    #[test]
    fn display_mentions_bounds() {
        let err = IndexError::IndexOutOfRange { index: 7, total: 4 };
        assert_eq!(err.to_string(), "index 7 out of range [0, 4)");
    }
}
