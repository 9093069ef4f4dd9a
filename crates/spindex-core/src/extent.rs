//! Integer extents of the box domains.

use std::fmt;

/// Size of a rectangular 2D domain, in cells per axis.
///
/// Plain value; engines reject components below 1 when they are built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent2 {
    /// Cells along x.
    pub x: u32,
    /// Cells along y.
    pub y: u32,
}

impl Extent2 {
    /// Create an extent of `x * y` cells.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Components as `[x, y]`.
    pub const fn to_array(self) -> [u32; 2] {
        [self.x, self.y]
    }
}

impl From<[u32; 2]> for Extent2 {
    fn from([x, y]: [u32; 2]) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Extent2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

/// Size of a box-shaped 3D domain, in cells per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent3 {
    /// Cells along x.
    pub x: u32,
    /// Cells along y.
    pub y: u32,
    /// Cells along z.
    pub z: u32,
}

impl Extent3 {
    /// Create an extent of `x * y * z` cells.
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Same size on every axis.
    pub const fn cube(side: u32) -> Self {
        Self::new(side, side, side)
    }

    /// Components as `[x, y, z]`.
    pub const fn to_array(self) -> [u32; 3] {
        [self.x, self.y, self.z]
    }

    /// The `(x, y)` face of this extent.
    pub const fn xy(self) -> Extent2 {
        Extent2::new(self.x, self.y)
    }
}

impl From<[u32; 3]> for Extent3 {
    fn from([x, y, z]: [u32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Extent3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}
