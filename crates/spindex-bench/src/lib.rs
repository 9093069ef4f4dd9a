//! Benchmark profiles for the spindex engines.
//!
//! - [`reference_profile`]: one engine per domain at the default sizes
//! - [`stress_profile`]: one engine per domain at large sizes
//! - [`probe_points`]: deterministic query points for inverse lookups

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use spindex_core::{Extent3, Node3};
use spindex_space::{Domain, DomainIndex};

/// One engine per [`Domain`] over a 5x5x5 box and a 15-layer sphere.
pub fn reference_profile() -> Vec<DomainIndex> {
    profile(Extent3::cube(5), 15)
}

/// One engine per [`Domain`] over a 100x100x100 box (1M nodes in 3D) and a
/// 180-layer sphere (about 41K nodes).
pub fn stress_profile() -> Vec<DomainIndex> {
    profile(Extent3::cube(100), 180)
}

fn profile(extent: Extent3, layers: u32) -> Vec<DomainIndex> {
    Domain::ALL
        .into_iter()
        .filter_map(|d| DomainIndex::new(d, extent, layers).ok())
        .collect()
}

/// `count` deterministic points inside `[-half, half]^3`.
///
/// Fixed LCG multipliers keep runs comparable without an RNG.
pub fn probe_points(count: usize, half: f64) -> Vec<Node3> {
    const MULS: [u64; 3] = [6364136223846793007, 1442695040888963407, 2862933555777941757];
    (0..count as u64)
        .map(|i| {
            MULS.map(|m| {
                let unit = (i.wrapping_mul(m) >> 11) as f64 / (1u64 << 53) as f64;
                (unit * 2.0 - 1.0) * half
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_cover_every_domain() {
        assert_eq!(reference_profile().len(), Domain::ALL.len());
        let stress = stress_profile();
        assert_eq!(stress.len(), Domain::ALL.len());
        assert!(stress.iter().all(|d| d.total() >= 10_000));
    }

    #[test]
    fn probe_points_are_bounded_and_repeatable() {
        let a = probe_points(1000, 2.5);
        assert_eq!(a, probe_points(1000, 2.5));
        assert!(a.iter().flatten().all(|c| c.abs() <= 2.5));
    }
}
