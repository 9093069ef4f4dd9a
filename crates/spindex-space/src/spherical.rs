//! Unit-sphere engine: latitude rings split into azimuthal slots.
//!
//! # Discretization
//!
//! With `L` layers, ring `j` covers polar angles `[j*pi/L, (j+1)*pi/L)` and
//! has its nodes at the mid-latitude `(j + 0.5) * pi/L`. A ring is split
//! into
//!
//! ```text
//! slots(j) = max(1, round(2*pi * sin(mid(j)) / (pi/L)))
//! ```
//!
//! slots, which keeps the arc between neighbouring nodes close to the ring
//! spacing `pi/L` on every ring. Slot `k` sits at azimuth `k * 2pi/slots(j)`.
//! Indices count rings from the top (+Y) down, slots in azimuth order.

use crate::angle::Angle;
use crate::index::NodeIndex;
use smallvec::smallvec;
use spindex_core::{Boundary, Cell, IndexError, Node3};
use std::f64::consts::{PI, TAU};

/// Index/node mapping over latitude rings of the unit sphere.
///
/// Nodes are unit vectors; scaling to a sphere of another radius is left
/// to the caller. The sphere has no edges, so [`boundary`](NodeIndex::boundary)
/// always reports interior.
///
/// # Examples
///
/// ```
/// use spindex_space::{NodeIndex, SphericalIndex};
///
/// let sphere = SphericalIndex::new(15).unwrap();
/// let top = sphere.to_node(0).unwrap();
/// assert_eq!(sphere.ring_of(0).unwrap(), (0, 0));
/// assert_eq!(sphere.to_index(&top).unwrap(), 0);
/// assert_eq!(sphere.ring_of(sphere.total() - 1).unwrap().0, 14);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SphericalIndex {
    layers: u32,
    total: usize,
}

impl SphericalIndex {
    /// Fewest accepted layers.
    pub const MIN_LAYERS: u32 = 2;

    /// Most accepted layers. Construction and ring lookups are O(layers).
    pub const MAX_LAYERS: u32 = 1 << 16;

    /// Create a sphere engine with `layers` latitude rings.
    ///
    /// Returns `Err(IndexError::InvalidConfiguration)` unless
    /// `MIN_LAYERS <= layers <= MAX_LAYERS`.
    pub fn new(layers: u32) -> Result<Self, IndexError> {
        if layers < Self::MIN_LAYERS {
            return Err(IndexError::invalid(format!(
                "layers must be at least {}, got {layers}",
                Self::MIN_LAYERS
            )));
        }
        if layers > Self::MAX_LAYERS {
            return Err(IndexError::invalid(format!(
                "layers = {layers} exceeds maximum {}",
                Self::MAX_LAYERS
            )));
        }
        let mut total: usize = 0;
        for ring in 0..layers {
            total = total
                .checked_add(slot_count(layers, ring))
                .ok_or_else(|| {
                    IndexError::invalid(format!(
                        "{layers} layers exceed the addressable index range"
                    ))
                })?;
        }
        Ok(Self { layers, total })
    }

    /// Number of latitude rings.
    pub fn layers(&self) -> u32 {
        self.layers
    }

    /// Polar width of one ring.
    pub fn band(&self) -> f64 {
        PI / f64::from(self.layers)
    }

    /// Node count of `ring`.
    pub fn slots(&self, ring: u32) -> Result<usize, IndexError> {
        self.check_ring(ring)?;
        Ok(slot_count(self.layers, ring))
    }

    /// Polar angle shared by every node of `ring`.
    pub fn ring_latitude(&self, ring: u32) -> Result<f64, IndexError> {
        self.check_ring(ring)?;
        Ok(mid_latitude(self.layers, ring))
    }

    /// `(ring, slot)` of the node at `index`.
    pub fn ring_of(&self, index: usize) -> Result<(u32, usize), IndexError> {
        let mut offset = IndexError::check_range(index, self.total)?;
        for ring in 0..self.layers {
            let slots = slot_count(self.layers, ring);
            if offset < slots {
                return Ok((ring, offset));
            }
            offset -= slots;
        }
        // check_range guarantees the walk ends inside the last ring.
        Err(IndexError::IndexOutOfRange {
            index,
            total: self.total,
        })
    }

    /// `[ring, slot]` of the node at `index` as an integer cell.
    pub fn cell(&self, index: usize) -> Result<Cell, IndexError> {
        let (ring, slot) = self.ring_of(index)?;
        Ok(smallvec![ring as i32, slot as i32])
    }

    /// Direction of the node at `index`.
    pub fn angle_of(&self, index: usize) -> Result<Angle, IndexError> {
        let (ring, slot) = self.ring_of(index)?;
        let slots = slot_count(self.layers, ring);
        let azimuth = if slots == 1 {
            0.0
        } else {
            slot as f64 * TAU / slots as f64
        };
        Ok(Angle::from_normalized(
            mid_latitude(self.layers, ring),
            azimuth,
        ))
    }

    /// Index of the node nearest to `angle` within its ring.
    pub fn index_of_angle(&self, angle: &Angle) -> usize {
        let band = self.band();
        let ring = ((angle.polar() / band).floor() as u32).min(self.layers - 1);
        let slots = slot_count(self.layers, ring);
        let slot = (angle.azimuth() / (TAU / slots as f64)).round() as usize % slots;
        let prefix: usize = (0..ring).map(|r| slot_count(self.layers, r)).sum();
        prefix + slot
    }

    fn check_ring(&self, ring: u32) -> Result<(), IndexError> {
        if ring < self.layers {
            Ok(())
        } else {
            Err(IndexError::IndexOutOfRange {
                index: ring as usize,
                total: self.layers as usize,
            })
        }
    }
}

fn mid_latitude(layers: u32, ring: u32) -> f64 {
    (f64::from(ring) + 0.5) * PI / f64::from(layers)
}

fn slot_count(layers: u32, ring: u32) -> usize {
    let band = PI / f64::from(layers);
    let slots = (TAU * mid_latitude(layers, ring).sin() / band).round();
    (slots as usize).max(1)
}

impl NodeIndex for SphericalIndex {
    type Node = Node3;
    type Flags = [Boundary; 3];

    fn ndim(&self) -> usize {
        3
    }

    fn total(&self) -> usize {
        self.total
    }

    fn to_node(&self, index: usize) -> Result<Node3, IndexError> {
        Ok(self.angle_of(index)?.cartesian())
    }

    fn to_index(&self, node: &Node3) -> Result<usize, IndexError> {
        let angle = Angle::from_cartesian(*node)?;
        Ok(self.index_of_angle(&angle))
    }

    fn boundary(&self, node: &Node3) -> Result<[Boundary; 3], IndexError> {
        Angle::from_cartesian(*node)?;
        Ok([Boundary::Interior; 3])
    }
}
