//! NodeIndex trait compliance test helpers.
//!
//! These functions verify that an engine satisfies the invariants of the
//! trait contract. Reused across all engine test modules (PlanarIndex,
//! VolumeIndex, SphericalIndex).

use crate::index::NodeIndex;
use indexmap::IndexSet;
use spindex_core::IndexError;

/// Bit pattern of a node with `-0.0` folded into `0.0`.
fn node_key(node: &[f64]) -> Vec<u64> {
    node.iter().map(|c| (c + 0.0).to_bits()).collect()
}

/// Assert `to_index(to_node(i)) == i` for every index.
pub fn assert_round_trip<I: NodeIndex>(index: &I) {
    for i in 0..index.total() {
        let node = index.to_node(i).expect("in-range index must have a node");
        let back = index.to_index(&node);
        assert_eq!(back, Ok(i), "round trip failed: {i} -> {node:?} -> {back:?}");
    }
}

/// Assert `to_node(to_index(n)) == n` for every node the engine produces.
pub fn assert_inverse_round_trip<I: NodeIndex>(index: &I) {
    for node in index.nodes() {
        let i = index.to_index(&node).expect("produced node must have an index");
        let back = index.to_node(i).expect("recovered index must be in range");
        assert_eq!(back, node, "inverse round trip failed: {node:?} -> {i} -> {back:?}");
    }
}

/// Assert the engine yields exactly `total` distinct nodes of `ndim` components.
pub fn assert_nodes_distinct<I: NodeIndex>(index: &I) {
    let mut seen = IndexSet::new();
    let mut count = 0;
    for node in index.nodes() {
        assert_eq!(node.as_ref().len(), index.ndim(), "node {node:?} has wrong arity");
        assert!(
            node.as_ref().iter().all(|c| c.is_finite()),
            "node {node:?} is not finite"
        );
        seen.insert(node_key(node.as_ref()));
        count += 1;
    }
    assert_eq!(count, index.total(), "nodes() length != total");
    assert_eq!(seen.len(), index.total(), "nodes() has duplicates");
}

/// Assert that `total` and beyond are rejected.
pub fn assert_out_of_range_rejected<I: NodeIndex>(index: &I) {
    let total = index.total();
    for i in [total, total + 1, usize::MAX] {
        assert!(
            matches!(index.to_node(i), Err(IndexError::IndexOutOfRange { .. })),
            "to_node({i}) should fail for total {total}"
        );
    }
}

/// Assert every produced node has a boundary classification.
pub fn assert_boundary_defined<I: NodeIndex>(index: &I) {
    for node in index.nodes() {
        assert!(
            index.boundary(&node).is_ok(),
            "boundary({node:?}) failed"
        );
    }
}

/// Run all 5 compliance checks on an engine.
pub fn run_full_compliance<I: NodeIndex>(index: &I) {
    assert_round_trip(index);
    assert_inverse_round_trip(index);
    assert_nodes_distinct(index);
    assert_out_of_range_rejected(index);
    assert_boundary_defined(index);
}
