//! Closed domain tags and a uniform dispatcher over the three engines.

use crate::index::NodeIndex;
use crate::planar::PlanarIndex;
use crate::spherical::SphericalIndex;
use crate::volume::VolumeIndex;
use smallvec::{smallvec, SmallVec};
use spindex_core::{Boundary, Cell, Extent3, IndexError, Node3, Variant};
use std::fmt;
use std::str::FromStr;

/// Every node space a caller can select at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    /// 2D grid, whole placement.
    Whole2D,
    /// 2D grid, centre placement.
    Center2D,
    /// 2D grid, corner placement.
    Corner2D,
    /// 3D lattice, whole placement.
    Whole3D,
    /// 3D lattice, centre placement.
    Center3D,
    /// 3D lattice, corner placement.
    Corner3D,
    /// Latitude rings on the unit sphere.
    Polar,
}

impl Domain {
    /// All domains, in declaration order.
    pub const ALL: [Domain; 7] = [
        Domain::Whole2D,
        Domain::Center2D,
        Domain::Corner2D,
        Domain::Whole3D,
        Domain::Center3D,
        Domain::Corner3D,
        Domain::Polar,
    ];

    /// Name used by `Display` and `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Whole2D => "Whole2D",
            Self::Center2D => "Center2D",
            Self::Corner2D => "Corner2D",
            Self::Whole3D => "Whole3D",
            Self::Center3D => "Center3D",
            Self::Corner3D => "Corner3D",
            Self::Polar => "Polar",
        }
    }

    /// Placement of a box domain; `None` for [`Domain::Polar`].
    pub const fn variant(self) -> Option<Variant> {
        match self {
            Self::Whole2D | Self::Whole3D => Some(Variant::Whole),
            Self::Center2D | Self::Center3D => Some(Variant::Center),
            Self::Corner2D | Self::Corner3D => Some(Variant::Corner),
            Self::Polar => None,
        }
    }

    /// Whether nodes have three components (3D lattice or sphere).
    pub const fn is_3d(self) -> bool {
        !matches!(self, Self::Whole2D | Self::Center2D | Self::Corner2D)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Domain {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| IndexError::UnsupportedDomain { tag: s.to_owned() })
    }
}

/// One of the three engines, selected by a [`Domain`] tag.
///
/// Every query takes and returns 3D nodes: 2D nodes are lifted with
/// `z = 0` and the `z` component of a query node is ignored for them.
///
/// # Examples
///
/// ```
/// use spindex_space::{Domain, DomainIndex, Extent3};
///
/// let extent = Extent3::cube(5);
/// let grid = DomainIndex::new(Domain::Corner2D, extent, 15).unwrap();
/// assert_eq!(grid.total(), 36);
/// assert_eq!(grid.node(0).unwrap(), [-2.5, -2.5, 0.0]);
///
/// let sphere = DomainIndex::new(Domain::Polar, extent, 15).unwrap();
/// let node = sphere.node(42).unwrap();
/// assert_eq!(sphere.index(&node).unwrap(), 42);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomainIndex {
    /// A 2D grid.
    Planar(PlanarIndex),
    /// A 3D lattice.
    Volume(VolumeIndex),
    /// The unit sphere.
    Spherical(SphericalIndex),
}

impl DomainIndex {
    /// Build the engine for `domain`.
    ///
    /// 2D domains read `extent.x` and `extent.y`, 3D domains all three
    /// components, and [`Domain::Polar`] only `layers`. Components a domain
    /// does not read are not validated.
    pub fn new(domain: Domain, extent: Extent3, layers: u32) -> Result<Self, IndexError> {
        match (domain.variant(), domain.is_3d()) {
            (Some(variant), false) => Ok(Self::Planar(PlanarIndex::new(extent.xy(), variant)?)),
            (Some(variant), true) => Ok(Self::Volume(VolumeIndex::new(extent, variant)?)),
            (None, _) => Ok(Self::Spherical(SphericalIndex::new(layers)?)),
        }
    }

    /// The tag this engine was built from.
    pub fn domain(&self) -> Domain {
        match self {
            Self::Planar(p) => match p.variant() {
                Variant::Whole => Domain::Whole2D,
                Variant::Center => Domain::Center2D,
                Variant::Corner => Domain::Corner2D,
            },
            Self::Volume(v) => match v.variant() {
                Variant::Whole => Domain::Whole3D,
                Variant::Center => Domain::Center3D,
                Variant::Corner => Domain::Corner3D,
            },
            Self::Spherical(_) => Domain::Polar,
        }
    }

    /// Number of meaningful node components.
    pub fn ndim(&self) -> usize {
        match self {
            Self::Planar(p) => p.ndim(),
            Self::Volume(v) => v.ndim(),
            Self::Spherical(s) => s.ndim(),
        }
    }

    /// Number of nodes.
    pub fn total(&self) -> usize {
        match self {
            Self::Planar(p) => p.total(),
            Self::Volume(v) => v.total(),
            Self::Spherical(s) => s.total(),
        }
    }

    /// The node at `index`, as a 3D point.
    pub fn node(&self, index: usize) -> Result<Node3, IndexError> {
        match self {
            Self::Planar(p) => {
                let [x, y] = p.to_node(index)?;
                Ok([x, y, 0.0])
            }
            Self::Volume(v) => v.to_node(index),
            Self::Spherical(s) => s.to_node(index),
        }
    }

    /// The index of `node`.
    pub fn index(&self, node: &Node3) -> Result<usize, IndexError> {
        match self {
            Self::Planar(p) => p.to_index(&[node[0], node[1]]),
            Self::Volume(v) => v.to_index(node),
            Self::Spherical(s) => s.to_index(node),
        }
    }

    /// Boundary flags of `node`: two for 2D grids, three otherwise
    /// (all interior on the sphere).
    pub fn boundary(&self, node: &Node3) -> Result<SmallVec<[Boundary; 3]>, IndexError> {
        match self {
            Self::Planar(p) => Ok(SmallVec::from_slice(&p.boundary(&[node[0], node[1]])?)),
            Self::Volume(v) => Ok(SmallVec::from_slice(&v.boundary(node)?)),
            Self::Spherical(s) => Ok(SmallVec::from_slice(&s.boundary(node)?)),
        }
    }

    /// Integer cell of the node at `index`; `[ring, slot]` on the sphere.
    pub fn cell(&self, index: usize) -> Result<Cell, IndexError> {
        match self {
            Self::Planar(p) => {
                let [x, y] = p.cell(index)?;
                Ok(smallvec![x as i32, y as i32])
            }
            Self::Volume(v) => {
                let [x, y, z] = v.cell(index)?;
                Ok(smallvec![x as i32, y as i32, z as i32])
            }
            Self::Spherical(s) => s.cell(index),
        }
    }
}

impl From<PlanarIndex> for DomainIndex {
    fn from(p: PlanarIndex) -> Self {
        Self::Planar(p)
    }
}

impl From<VolumeIndex> for DomainIndex {
    fn from(v: VolumeIndex) -> Self {
        Self::Volume(v)
    }
}

impl From<SphericalIndex> for DomainIndex {
    fn from(s: SphericalIndex) -> Self {
        Self::Spherical(s)
    }
}
