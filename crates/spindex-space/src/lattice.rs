//! Shared helpers for the box-shaped engines (PlanarIndex, VolumeIndex).
//!
//! Both engines linearize their integer cells in row-major order with x
//! varying fastest: `index = x + sx * y + sx * sy * z`, where `s` is the
//! per-axis span (`extent` for Whole/Center, `extent + 1` for Corner).
//! [`compose`] and [`decompose`] are the only two places that order is
//! written down.

use spindex_core::{Boundary, IndexError, Variant};

/// Largest accepted extent component. Corner coordinates reach `extent`,
/// and integer cells are exported as `i32`.
pub(crate) const MAX_DIM: u32 = i32::MAX as u32 - 1;

const AXIS_NAMES: [&str; 3] = ["x", "y", "z"];

/// Validate `axes` and return the per-axis spans and the node count.
pub(crate) fn checked_spans<const N: usize>(
    axes: [u32; N],
    variant: Variant,
) -> Result<([usize; N], usize), IndexError> {
    let mut spans = [0usize; N];
    let mut total: usize = 1;
    for (axis, &len) in axes.iter().enumerate() {
        let name = AXIS_NAMES[axis];
        if len == 0 {
            return Err(IndexError::invalid(format!(
                "extent component {name} must be at least 1, got 0"
            )));
        }
        if len > MAX_DIM {
            return Err(IndexError::invalid(format!(
                "extent component {name} = {len} exceeds maximum {MAX_DIM}"
            )));
        }
        let span = usize::try_from(variant.span(len)).map_err(|_| too_many(&axes, variant))?;
        spans[axis] = span;
        total = total
            .checked_mul(span)
            .ok_or_else(|| too_many(&axes, variant))?;
    }
    Ok((spans, total))
}

fn too_many(axes: &[u32], variant: Variant) -> IndexError {
    IndexError::invalid(format!(
        "{variant} nodes of extent {axes:?} exceed the addressable index range"
    ))
}

/// Row-major linearization of an integer cell.
pub(crate) fn compose<const N: usize>(cell: [u32; N], spans: &[usize; N]) -> usize {
    let mut index = 0usize;
    let mut stride = 1usize;
    for axis in 0..N {
        index += cell[axis] as usize * stride;
        stride *= spans[axis];
    }
    index
}

/// Inverse of [`compose`] for `index < product(spans)`.
pub(crate) fn decompose<const N: usize>(mut index: usize, spans: &[usize; N]) -> [u32; N] {
    let mut cell = [0u32; N];
    for axis in 0..N {
        cell[axis] = (index % spans[axis]) as u32;
        index /= spans[axis];
    }
    cell
}

/// Offset between an integer coordinate and its node component.
fn axis_offset(len: u32, variant: Variant) -> f64 {
    match variant {
        Variant::Whole => 0.0,
        Variant::Center => 0.5 - f64::from(len) / 2.0,
        Variant::Corner => -f64::from(len) / 2.0,
    }
}

/// Node position of each integer coordinate of `cell`.
pub(crate) fn cell_to_node<const N: usize>(
    cell: [u32; N],
    axes: [u32; N],
    variant: Variant,
) -> [f64; N] {
    let mut node = [0.0; N];
    for axis in 0..N {
        node[axis] = f64::from(cell[axis]) + axis_offset(axes[axis], variant);
    }
    node
}

/// Integer coordinate owning `value` on one axis, if inside the domain.
///
/// Whole and Center nodes own the unit cell `[node, node + 1)` and
/// `[node - 0.5, node + 0.5)` respectively; Corner nodes own the points
/// closer to them than to any other corner.
fn axis_coord(value: f64, len: u32, variant: Variant) -> Option<u32> {
    if !value.is_finite() {
        return None;
    }
    let local = match variant {
        Variant::Whole => value.floor(),
        Variant::Center => (value + f64::from(len) / 2.0).floor(),
        Variant::Corner => (value + f64::from(len) / 2.0).round(),
    };
    if local < 0.0 || local >= variant.span(len) as f64 {
        return None;
    }
    Some(local as u32)
}

/// Integer cell owning `node`, or [`IndexError::NodeOutOfBounds`].
pub(crate) fn node_to_cell<const N: usize>(
    node: &[f64; N],
    axes: [u32; N],
    variant: Variant,
) -> Result<[u32; N], IndexError> {
    let mut cell = [0u32; N];
    for axis in 0..N {
        cell[axis] = axis_coord(node[axis], axes[axis], variant).ok_or_else(|| {
            IndexError::NodeOutOfBounds {
                node: node.to_vec(),
                bounds: bounds_description(&axes, variant),
            }
        })?;
    }
    Ok(cell)
}

fn bounds_description(axes: &[u32], variant: Variant) -> String {
    axes.iter()
        .enumerate()
        .map(|(axis, &len)| {
            let lo = axis_offset(len, variant);
            let hi = lo + (variant.span(len) - 1) as f64;
            format!("{} in [{lo}, {hi}]", AXIS_NAMES[axis])
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Boundary flags of an integer cell.
pub(crate) fn cell_boundary<const N: usize>(cell: [u32; N], spans: &[usize; N]) -> [Boundary; N] {
    let mut flags = [Boundary::Interior; N];
    for axis in 0..N {
        flags[axis] = Boundary::classify(cell[axis], (spans[axis] - 1) as u32);
    }
    flags
}

/// Round `point` to the nearest cell and clamp it into `[0, extent - 1]`.
pub(crate) fn nearest_cell<const N: usize>(
    point: &[f64; N],
    axes: [u32; N],
) -> Result<[u32; N], IndexError> {
    let mut cell = [0u32; N];
    for axis in 0..N {
        let value = point[axis];
        if value.is_nan() {
            return Err(IndexError::NodeOutOfBounds {
                node: point.to_vec(),
                bounds: "finite coordinates".into(),
            });
        }
        let last = f64::from(axes[axis] - 1);
        cell[axis] = value.round().clamp(0.0, last) as u32;
    }
    Ok(cell)
}
