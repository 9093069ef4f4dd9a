//! 2D grid engine.

use crate::index::NodeIndex;
use crate::lattice;
use spindex_core::{Boundary, Extent2, IndexError, Node2, Variant};

/// Index/node mapping over a rectangular 2D grid.
///
/// Integer cell `(x, y)` has index `y * sx + x`, where `sx` is the number
/// of node columns (`extent.x`, or `extent.x + 1` for [`Variant::Corner`]).
/// Node placement per variant:
///
/// - **Whole**: `(x, y)` for `x < extent.x`, `y < extent.y`.
/// - **Center**: `(x - extent.x / 2 + 0.5, y - extent.y / 2 + 0.5)`, the
///   cell centres of a region centred on the origin.
/// - **Corner**: `(x - extent.x / 2, y - extent.y / 2)` for `x <= extent.x`,
///   `y <= extent.y`, the cell corners of the same region.
///
/// # Examples
///
/// ```
/// use spindex_space::{Extent2, NodeIndex, PlanarIndex, Variant};
///
/// let grid = PlanarIndex::new(Extent2::new(5, 5), Variant::Center).unwrap();
/// assert_eq!(grid.total(), 25);
/// assert_eq!(grid.to_node(0).unwrap(), [-2.0, -2.0]);
/// assert_eq!(grid.to_index(&[-2.0, -2.0]).unwrap(), 0);
///
/// // Corner placement has one more node per axis.
/// let corners = PlanarIndex::new(Extent2::new(5, 5), Variant::Corner).unwrap();
/// assert_eq!(corners.total(), 36);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanarIndex {
    extent: Extent2,
    variant: Variant,
    spans: [usize; 2],
    total: usize,
}

impl PlanarIndex {
    /// Create a grid engine for `extent` with the given node placement.
    ///
    /// Returns `Err(IndexError::InvalidConfiguration)` if either extent
    /// component is 0 or the node count does not fit in `usize`.
    pub fn new(extent: Extent2, variant: Variant) -> Result<Self, IndexError> {
        let (spans, total) = lattice::checked_spans(extent.to_array(), variant)?;
        Ok(Self {
            extent,
            variant,
            spans,
            total,
        })
    }

    /// Grid extent, in cells.
    pub fn extent(&self) -> Extent2 {
        self.extent
    }

    /// Node placement.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Integer cell `[x, y]` of the node at `index`.
    pub fn cell(&self, index: usize) -> Result<[u32; 2], IndexError> {
        let index = IndexError::check_range(index, self.total)?;
        Ok(lattice::decompose(index, &self.spans))
    }

    /// Integer cell `[x, y]` owning `node`.
    pub fn cell_of(&self, node: &Node2) -> Result<[u32; 2], IndexError> {
        lattice::node_to_cell(node, self.extent.to_array(), self.variant)
    }

    /// The Center node nearest to `point`.
    ///
    /// `point` is in cell units (cell `(x, y)` sits at `(x, y)`). It is
    /// rounded to the nearest cell and clamped into the grid, so any finite
    /// point has an answer. The result is placed as a [`Variant::Center`]
    /// node whatever this engine's own variant is.
    pub fn nearest(&self, point: &Node2) -> Result<Node2, IndexError> {
        let cell = lattice::nearest_cell(point, self.extent.to_array())?;
        Ok(lattice::cell_to_node(
            cell,
            self.extent.to_array(),
            Variant::Center,
        ))
    }

    /// Index of [`nearest`](Self::nearest) in the Center variant of this extent.
    pub fn nearest_index(&self, point: &Node2) -> Result<usize, IndexError> {
        let cell = lattice::nearest_cell(point, self.extent.to_array())?;
        let spans = [self.extent.x as usize, self.extent.y as usize];
        Ok(lattice::compose(cell, &spans))
    }
}

impl NodeIndex for PlanarIndex {
    type Node = Node2;
    type Flags = [Boundary; 2];

    fn ndim(&self) -> usize {
        2
    }

    fn total(&self) -> usize {
        self.total
    }

    fn to_node(&self, index: usize) -> Result<Node2, IndexError> {
        let cell = self.cell(index)?;
        Ok(lattice::cell_to_node(
            cell,
            self.extent.to_array(),
            self.variant,
        ))
    }

    fn to_index(&self, node: &Node2) -> Result<usize, IndexError> {
        let cell = self.cell_of(node)?;
        Ok(lattice::compose(cell, &self.spans))
    }

    fn boundary(&self, node: &Node2) -> Result<[Boundary; 2], IndexError> {
        let cell = self.cell_of(node)?;
        Ok(lattice::cell_boundary(cell, &self.spans))
    }
}
