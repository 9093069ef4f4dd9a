//! Parallel sweeps over every index of a domain.
//!
//! Each sweep splits `0..total` across the rayon pool. Indexed parallel
//! iterators keep results in index order, so the output of
//! [`par_nodes`] matches a sequential walk element for element.

use crate::error::SweepError;
use rayon::prelude::*;
use smallvec::SmallVec;
use spindex_core::{Boundary, IndexError, Node3};
use spindex_space::DomainIndex;
use tracing::Span;

/// The node at `i`, scaled by `radius` for the sphere.
///
/// Box domains are returned unscaled; their nodes are already in cell units.
pub fn scaled_node(index: &DomainIndex, i: usize, radius: f64) -> Result<Node3, IndexError> {
    let node = index.node(i)?;
    Ok(match index {
        DomainIndex::Spherical(_) => node.map(|c| c * radius),
        DomainIndex::Planar(_) | DomainIndex::Volume(_) => node,
    })
}

/// Every node of the domain, in index order.
pub fn par_nodes(index: &DomainIndex, radius: f64) -> Result<Vec<Node3>, SweepError> {
    let span = tracing::info_span!("par_nodes", domain = %index.domain(), total = index.total());
    let _enter = span.enter();
    (0..index.total())
        .into_par_iter()
        .map(|i| {
            scaled_node(index, i, radius).map_err(|source| SweepError::Index { index: i, source })
        })
        .collect()
}

/// Boundary flags of every node of the domain, in index order.
pub fn par_boundaries(index: &DomainIndex) -> Result<Vec<SmallVec<[Boundary; 3]>>, SweepError> {
    let span = tracing::info_span!(
        "par_boundaries",
        domain = %index.domain(),
        total = index.total()
    );
    let _enter = span.enter();
    (0..index.total())
        .into_par_iter()
        .map(|i| {
            index
                .node(i)
                .and_then(|node| index.boundary(&node))
                .map_err(|source| SweepError::Index { index: i, source })
        })
        .collect()
}

/// Bounding box and index range of the nodes a sweep visited.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extremes {
    /// Componentwise minimum node.
    pub min_node: Node3,
    /// Componentwise maximum node.
    pub max_node: Node3,
    /// Smallest and largest index visited; `None` before any visit.
    pub index_range: Option<(usize, usize)>,
    /// Number of nodes visited.
    pub total: usize,
}

impl Default for Extremes {
    fn default() -> Self {
        Self {
            min_node: [f64::INFINITY; 3],
            max_node: [f64::NEG_INFINITY; 3],
            index_range: None,
            total: 0,
        }
    }
}

impl Extremes {
    /// Grow to cover `node` at `index`.
    pub fn include(&mut self, index: usize, node: &Node3) {
        for axis in 0..3 {
            self.min_node[axis] = self.min_node[axis].min(node[axis]);
            self.max_node[axis] = self.max_node[axis].max(node[axis]);
        }
        self.index_range = Some(match self.index_range {
            Some((lo, hi)) => (lo.min(index), hi.max(index)),
            None => (index, index),
        });
        self.total += 1;
    }

    /// Union of two partial results.
    pub fn merge(mut self, other: Self) -> Self {
        for axis in 0..3 {
            self.min_node[axis] = self.min_node[axis].min(other.min_node[axis]);
            self.max_node[axis] = self.max_node[axis].max(other.max_node[axis]);
        }
        self.index_range = match (self.index_range, other.index_range) {
            (Some((a, b)), Some((c, d))) => Some((a.min(c), b.max(d))),
            (range, None) | (None, range) => range,
        };
        self.total += other.total;
        self
    }

    /// Midpoint of the bounding box. Not finite while empty.
    pub fn center(&self) -> Node3 {
        std::array::from_fn(|axis| (self.min_node[axis] + self.max_node[axis]) * 0.5)
    }

    /// Edge lengths of the bounding box. Not finite while empty.
    pub fn size(&self) -> Node3 {
        std::array::from_fn(|axis| self.max_node[axis] - self.min_node[axis])
    }
}

/// Partial result of a check: extremes so far and the failure with the
/// lowest index, if any.
#[derive(Default)]
struct Check {
    extremes: Extremes,
    failure: Option<SweepError>,
}

impl Check {
    fn visit(mut self, i: usize, outcome: Result<Node3, SweepError>) -> Self {
        match outcome {
            Ok(node) => self.extremes.include(i, &node),
            Err(e) => self.record(e),
        }
        self
    }

    fn record(&mut self, e: SweepError) {
        match &self.failure {
            Some(prev) if prev.index() <= e.index() => {}
            _ => self.failure = Some(e),
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.extremes = self.extremes.merge(other.extremes);
        if let Some(e) = other.failure {
            self.record(e);
        }
        self
    }
}

/// Round trip of index `i` through `node_of` and `index_of`.
fn check_one<N, X>(i: usize, node_of: &N, index_of: &X) -> Result<Node3, SweepError>
where
    N: Fn(usize) -> Result<Node3, IndexError>,
    X: Fn(&Node3) -> Result<usize, IndexError>,
{
    let wrap = |source| SweepError::Index { index: i, source };
    let node = node_of(i).map_err(wrap)?;
    let matched_index = index_of(&node).map_err(wrap)?;
    let matched_node = node_of(matched_index).map_err(wrap)?;
    if matched_index != i || matched_node != node {
        tracing::warn!(
            index = i,
            matched_index,
            ?node,
            ?matched_node,
            "round trip mismatch"
        );
        return Err(SweepError::Mismatch {
            index: i,
            node,
            matched_index,
            matched_node,
        });
    }
    Ok(node)
}

/// Check every index in `0..total` in parallel, inside `span` on every
/// worker thread.
fn check_all<N, X>(
    span: &Span,
    total: usize,
    node_of: N,
    index_of: X,
) -> Result<Extremes, SweepError>
where
    N: Fn(usize) -> Result<Node3, IndexError> + Sync,
    X: Fn(&Node3) -> Result<usize, IndexError> + Sync,
{
    let check = (0..total)
        .into_par_iter()
        .fold(Check::default, |acc, i| {
            let _enter = span.enter();
            acc.visit(i, check_one(i, &node_of, &index_of))
        })
        .reduce(Check::default, Check::merge);
    match check.failure {
        Some(e) => Err(e),
        None => Ok(check.extremes),
    }
}

/// Verify `index(node(i)) == i` and `node(index(node(i))) == node(i)` for
/// every index, in parallel.
///
/// Returns the extremes of the unscaled nodes, or the failure with the
/// lowest index. The reported failure does not depend on thread count.
pub fn cross_check(index: &DomainIndex) -> Result<Extremes, SweepError> {
    let span = tracing::info_span!("cross_check", domain = %index.domain(), total = index.total());
    let extremes = check_all(
        &span,
        index.total(),
        |i| index.node(i),
        |node| index.index(node),
    )?;
    let _enter = span.enter();
    tracing::info!(
        total = extremes.total,
        min = ?extremes.min_node,
        max = ?extremes.max_node,
        "cross check passed"
    );
    Ok(extremes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use spindex_core::Extent3;
    use spindex_space::Domain;
    use std::sync::Mutex;

    fn build(domain: Domain) -> DomainIndex {
        DomainIndex::new(domain, Extent3::cube(5), 15).unwrap()
    }

    #[test]
    fn par_nodes_matches_sequential_order() {
        for domain in Domain::ALL {
            let index = build(domain);
            let nodes = par_nodes(&index, 1.0).unwrap();
            assert_eq!(nodes.len(), index.total());
            for (i, node) in nodes.iter().enumerate() {
                assert_eq!(*node, index.node(i).unwrap(), "{domain} index {i}");
            }
        }
    }

    #[test]
    fn radius_scales_only_the_sphere() {
        let sphere = build(Domain::Polar);
        let unit = sphere.node(3).unwrap();
        let scaled = scaled_node(&sphere, 3, 5.0).unwrap();
        for axis in 0..3 {
            assert!((scaled[axis] - unit[axis] * 5.0).abs() < 1e-12);
        }
        let grid = build(Domain::Corner3D);
        assert_eq!(scaled_node(&grid, 3, 5.0).unwrap(), grid.node(3).unwrap());
    }

    #[test]
    fn scaled_node_rejects_out_of_range() {
        let grid = build(Domain::Whole2D);
        assert!(matches!(
            scaled_node(&grid, 25, 1.0),
            Err(IndexError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn par_boundaries_match_engine() {
        let index = build(Domain::Whole2D);
        let flags = par_boundaries(&index).unwrap();
        assert_eq!(flags[0].as_slice(), &[Boundary::Min, Boundary::Min]);
        assert_eq!(flags[12].as_slice(), &[Boundary::Interior; 2]);
        assert_eq!(flags[24].as_slice(), &[Boundary::Max, Boundary::Max]);
    }

    #[test]
    fn cross_check_passes_every_domain() {
        for domain in Domain::ALL {
            let index = build(domain);
            let extremes = cross_check(&index).unwrap();
            assert_eq!(extremes.total, index.total());
            assert_eq!(extremes.index_range, Some((0, index.total() - 1)));
        }
    }

    #[test]
    fn cross_check_extremes_of_corner_grid() {
        let index = build(Domain::Corner3D);
        let extremes = cross_check(&index).unwrap();
        assert_eq!(extremes.min_node, [-2.5; 3]);
        assert_eq!(extremes.max_node, [2.5; 3]);
        assert_eq!(extremes.center(), [0.0; 3]);
        assert_eq!(extremes.size(), [5.0; 3]);
    }

    #[test]
    fn sphere_extremes_stay_on_unit_ball() {
        let extremes = cross_check(&build(Domain::Polar)).unwrap();
        for axis in 0..3 {
            assert!(extremes.min_node[axis] >= -1.0);
            assert!(extremes.max_node[axis] <= 1.0);
        }
    }

    #[test]
    fn merge_keeps_union() {
        let mut a = Extremes::default();
        a.include(4, &[1.0, 0.0, 0.0]);
        let mut b = Extremes::default();
        b.include(1, &[-1.0, 2.0, 0.0]);
        let m = a.merge(b);
        assert_eq!(m.min_node, [-1.0, 0.0, 0.0]);
        assert_eq!(m.max_node, [1.0, 2.0, 0.0]);
        assert_eq!(m.index_range, Some((1, 4)));
        assert_eq!(m.total, 2);
        assert_eq!(Extremes::default().merge(m), m);
    }

    #[test]
    fn lowest_failure_wins() {
        let mut check = Check::default();
        let fail = |index| SweepError::Index {
            index,
            source: IndexError::IndexOutOfRange { index, total: 0 },
        };
        check.record(fail(9));
        check.record(fail(3));
        check.record(fail(7));
        assert_eq!(check.failure.map(|e| e.index()), Some(3));
    }

    /// Nodes `[i, 0, 0]` for `i < total`.
    fn line_node(total: usize) -> impl Fn(usize) -> Result<Node3, IndexError> + Sync {
        move |i| {
            IndexError::check_range(i, total)?;
            Ok([i as f64, 0.0, 0.0])
        }
    }

    #[test]
    fn asymmetric_mapping_reports_lowest_mismatch() {
        // Odd x >= 5 folds onto its even neighbour.
        let index_of = |node: &Node3| {
            let x = node[0] as usize;
            Ok(if x >= 5 && x % 2 == 1 { x - 1 } else { x })
        };
        for _ in 0..8 {
            let err = check_all(&Span::none(), 512, line_node(512), index_of).unwrap_err();
            assert_eq!(
                err,
                SweepError::Mismatch {
                    index: 5,
                    node: [5.0, 0.0, 0.0],
                    matched_index: 4,
                    matched_node: [4.0, 0.0, 0.0],
                }
            );
        }
    }

    #[test]
    fn engine_error_below_first_mismatch_wins() {
        let index_of = |node: &Node3| {
            let x = node[0] as usize;
            match x {
                10 => Err(IndexError::NodeOutOfBounds {
                    node: node.to_vec(),
                    bounds: "x != 10".into(),
                }),
                300 => Ok(0),
                _ => Ok(x),
            }
        };
        let err = check_all(&Span::none(), 400, line_node(400), index_of).unwrap_err();
        assert_eq!(err.index(), 10);
        assert!(matches!(
            err,
            SweepError::Index {
                source: IndexError::NodeOutOfBounds { .. },
                ..
            }
        ));
    }

    #[test]
    fn index_past_total_is_wrapped() {
        let err = check_all(&Span::none(), 8, line_node(8), |_| Ok(8)).unwrap_err();
        assert_eq!(err.index(), 0);
        assert!(matches!(
            err,
            SweepError::Index {
                source: IndexError::IndexOutOfRange { index: 8, total: 8 },
                ..
            }
        ));
    }

    #[test]
    fn workers_run_inside_the_check_span() {
        tracing::subscriber::set_global_default(tracing_subscriber::registry()).unwrap();
        let span = tracing::info_span!("sweep_span_under_test");
        let seen = Mutex::new(Vec::new());
        let node_of = |i: usize| {
            let name = Span::current().metadata().map(|m| m.name());
            seen.lock().unwrap().push(name);
            Ok([i as f64, 0.0, 0.0])
        };
        check_all(&span, 256, node_of, |node| Ok(node[0] as usize)).unwrap();
        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.len(), 512);
        assert!(seen.iter().all(|n| *n == Some("sweep_span_under_test")));
    }

    fn extremes_of(points: &[(usize, Node3)]) -> Extremes {
        let mut e = Extremes::default();
        for (i, node) in points {
            e.include(*i, node);
        }
        e
    }

    fn points() -> impl Strategy<Value = Vec<(usize, Node3)>> {
        prop::collection::vec(
            (0usize..10_000, prop::array::uniform3(-100.0f64..100.0)),
            0..20,
        )
    }

    proptest! {
        #[test]
        fn merge_is_associative_and_matches_sequential(
            a in points(),
            b in points(),
            c in points(),
        ) {
            let (ea, eb, ec) = (extremes_of(&a), extremes_of(&b), extremes_of(&c));
            let left = ea.merge(eb).merge(ec);
            prop_assert_eq!(left, ea.merge(eb.merge(ec)));
            prop_assert_eq!(left, ec.merge(eb).merge(ea));
            let all: Vec<_> = a.iter().chain(&b).chain(&c).copied().collect();
            prop_assert_eq!(left, extremes_of(&all));
        }
    }
}
