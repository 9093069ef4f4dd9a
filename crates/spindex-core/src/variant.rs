//! Node placement variants and per-axis boundary flags.

use crate::error::IndexError;
use std::fmt;
use std::str::FromStr;

/// Where nodes sit inside each cell of a box domain.
///
/// # Examples
///
/// ```
/// use spindex_core::Variant;
///
/// // Corner nodes sit on cell edges, so an axis of 5 cells has 6 of them.
/// assert_eq!(Variant::Corner.span(5), 6);
/// assert_eq!(Variant::Center.span(5), 5);
/// assert_eq!("whole".parse::<Variant>().unwrap(), Variant::Whole);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Unit-spaced integer lattice points starting at the origin.
    Whole,
    /// Cell centres of a region centred on the origin.
    Center,
    /// Cell corners of a region centred on the origin.
    Corner,
}

impl Variant {
    /// All variants, in declaration order.
    pub const ALL: [Variant; 3] = [Variant::Whole, Variant::Center, Variant::Corner];

    /// Number of node positions along an axis of `len` cells.
    pub const fn span(self, len: u32) -> u64 {
        match self {
            Self::Whole | Self::Center => len as u64,
            Self::Corner => len as u64 + 1,
        }
    }

    /// Lowercase name used by `Display` and `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Whole => "whole",
            Self::Center => "center",
            Self::Corner => "corner",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "whole" | "wholes" => Ok(Self::Whole),
            "center" | "centers" | "centre" | "centres" => Ok(Self::Center),
            "corner" | "corners" => Ok(Self::Corner),
            _ => Err(IndexError::UnsupportedDomain { tag: s.to_owned() }),
        }
    }
}

impl TryFrom<u8> for Variant {
    type Error = IndexError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(tag as usize)
            .copied()
            .ok_or_else(|| IndexError::UnsupportedDomain {
                tag: tag.to_string(),
            })
    }
}

/// Position of a node along one axis of its domain.
///
/// Converts to the `-1 / 0 / +1` convention with [`Boundary::as_i8`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Boundary {
    /// On the minimal edge.
    Min = -1,
    /// Strictly inside.
    #[default]
    Interior = 0,
    /// On the maximal edge.
    Max = 1,
}

impl Boundary {
    /// Classify integer coordinate `coord` on an axis whose last position is `last`.
    ///
    /// When `last == 0` the single position is both edges; `Min` wins.
    pub const fn classify(coord: u32, last: u32) -> Self {
        if coord == 0 {
            Self::Min
        } else if coord >= last {
            Self::Max
        } else {
            Self::Interior
        }
    }

    /// The flag as `-1`, `0` or `1`.
    pub const fn as_i8(self) -> i8 {
        self as i8
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}
