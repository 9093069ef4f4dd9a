//! Coordinate type aliases shared by every engine.

use smallvec::SmallVec;

/// Integer lattice coordinate of a node.
///
/// Uses `SmallVec<[i32; 4]>` so 2D cells, 3D cells and spherical
/// `(ring, slot)` pairs all stay on the stack.
pub type Cell = SmallVec<[i32; 4]>;

/// A continuous 2D node position.
pub type Node2 = [f64; 2];

/// A continuous 3D node position (lattice point or unit-sphere direction).
pub type Node3 = [f64; 3];
