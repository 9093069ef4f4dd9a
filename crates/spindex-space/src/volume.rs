//! 3D lattice engine.
//!
//! # Linearization
//!
//! Cells are ordered x-fastest, then y, then z:
//! `index = x + sx * y + sx * sy * z`, with `s = extent` for Whole/Center
//! and `s = extent + 1` for Corner. Both directions of the mapping go
//! through the same two helpers, so the order cannot drift between
//! [`to_node`](NodeIndex::to_node) and [`to_index`](NodeIndex::to_index).

use crate::index::NodeIndex;
use crate::lattice;
use spindex_core::{Boundary, Extent3, IndexError, Node3, Variant};

/// Index/node mapping over a box-shaped 3D lattice.
///
/// The three-axis generalization of [`PlanarIndex`](crate::PlanarIndex):
/// the same Whole/Center/Corner placements, applied per axis.
///
/// # Examples
///
/// ```
/// use spindex_space::{Extent3, NodeIndex, Variant, VolumeIndex};
///
/// let lattice = VolumeIndex::new(Extent3::new(4, 3, 2), Variant::Whole).unwrap();
/// assert_eq!(lattice.total(), 24);
/// assert_eq!(lattice.to_node(13).unwrap(), [1.0, 0.0, 1.0]);
///
/// let corners = VolumeIndex::new(Extent3::new(4, 3, 2), Variant::Corner).unwrap();
/// assert_eq!(corners.total(), 5 * 4 * 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VolumeIndex {
    extent: Extent3,
    variant: Variant,
    spans: [usize; 3],
    total: usize,
}

impl VolumeIndex {
    /// Create a lattice engine for `extent` with the given node placement.
    ///
    /// Returns `Err(IndexError::InvalidConfiguration)` if any extent
    /// component is 0 or the node count does not fit in `usize`.
    pub fn new(extent: Extent3, variant: Variant) -> Result<Self, IndexError> {
        let (spans, total) = lattice::checked_spans(extent.to_array(), variant)?;
        Ok(Self {
            extent,
            variant,
            spans,
            total,
        })
    }

    /// Lattice extent, in cells.
    pub fn extent(&self) -> Extent3 {
        self.extent
    }

    /// Node placement.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Integer cell `[x, y, z]` of the node at `index`.
    pub fn cell(&self, index: usize) -> Result<[u32; 3], IndexError> {
        let index = IndexError::check_range(index, self.total)?;
        Ok(lattice::decompose(index, &self.spans))
    }

    /// Integer cell `[x, y, z]` owning `node`.
    pub fn cell_of(&self, node: &Node3) -> Result<[u32; 3], IndexError> {
        lattice::node_to_cell(node, self.extent.to_array(), self.variant)
    }
}

impl NodeIndex for VolumeIndex {
    type Node = Node3;
    type Flags = [Boundary; 3];

    fn ndim(&self) -> usize {
        3
    }

    fn total(&self) -> usize {
        self.total
    }

    fn to_node(&self, index: usize) -> Result<Node3, IndexError> {
        let cell = self.cell(index)?;
        Ok(lattice::cell_to_node(
            cell,
            self.extent.to_array(),
            self.variant,
        ))
    }

    fn to_index(&self, node: &Node3) -> Result<usize, IndexError> {
        let cell = self.cell_of(node)?;
        Ok(lattice::compose(cell, &self.spans))
    }

    fn boundary(&self, node: &Node3) -> Result<[Boundary; 3], IndexError> {
        let cell = self.cell_of(node)?;
        Ok(lattice::cell_boundary(cell, &self.spans))
    }
}
