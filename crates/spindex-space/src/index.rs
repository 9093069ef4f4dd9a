//! The core `NodeIndex` trait.

use spindex_core::IndexError;
use std::fmt;
use std::iter::FusedIterator;

/// Bijective mapping between `[0, total)` and a set of continuous nodes.
///
/// Every engine (PlanarIndex, VolumeIndex, SphericalIndex) implements it.
/// Implementations are immutable values: each call is a pure function of
/// `self` and its arguments, so one instance can be shared freely across
/// threads and queried in any order.
///
/// # Round-trip law
///
/// For every `i in 0..total()`, `to_index(&to_node(i)?)? == i`, and for
/// every node `n` produced by `to_node`, `to_node(to_index(&n)?)? == n`.
pub trait NodeIndex: Send + Sync {
    /// Continuous node position.
    type Node: Copy + fmt::Debug + PartialEq + AsRef<[f64]>;

    /// Per-axis boundary classification of a node.
    type Flags: Copy + fmt::Debug + PartialEq;

    /// Number of components in a node.
    fn ndim(&self) -> usize;

    /// Number of nodes in the domain.
    fn total(&self) -> usize;

    /// The node at `index`.
    ///
    /// Fails with [`IndexError::IndexOutOfRange`] unless `index < total()`.
    fn to_node(&self, index: usize) -> Result<Self::Node, IndexError>;

    /// The index of the node at (or owning) `node`.
    ///
    /// Fails with [`IndexError::NodeOutOfBounds`] when `node` is outside the
    /// domain or not finite.
    fn to_index(&self, node: &Self::Node) -> Result<usize, IndexError>;

    /// Classify `node` against the minimal and maximal edge of each axis.
    fn boundary(&self, node: &Self::Node) -> Result<Self::Flags, IndexError>;

    /// Iterate every node in index order.
    fn nodes(&self) -> Nodes<'_, Self>
    where
        Self: Sized,
    {
        Nodes {
            index: self,
            next: 0,
            total: self.total(),
        }
    }
}

/// Iterator over all nodes of a [`NodeIndex`], in index order.
///
/// Created by [`NodeIndex::nodes`].
#[derive(Debug)]
pub struct Nodes<'a, I> {
    index: &'a I,
    next: usize,
    total: usize,
}

impl<I: NodeIndex> Iterator for Nodes<'_, I> {
    type Item = I::Node;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        // `next < total`, so a conforming engine always has a node here.
        let node = self.index.to_node(self.next);
        debug_assert!(
            node.is_ok(),
            "in-range index {} rejected: {node:?}",
            self.next
        );
        match node {
            Ok(node) => {
                self.next += 1;
                Some(node)
            }
            Err(_) => {
                self.next = self.total;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.next;
        (left, Some(left))
    }
}

impl<I: NodeIndex> ExactSizeIterator for Nodes<'_, I> {}

impl<I: NodeIndex> FusedIterator for Nodes<'_, I> {}
