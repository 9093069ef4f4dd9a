//! Directions on the unit sphere.

use spindex_core::{IndexError, Node3};
use std::f64::consts::{PI, TAU};

/// A direction given as polar and azimuthal angle, in radians.
///
/// The polar angle is measured from the +Y axis and lies in `[0, pi]`; the
/// azimuth is measured in the XZ plane from +X towards +Z and lies in
/// `[0, 2pi)`. Constructors normalize into those ranges.
///
/// # Examples
///
/// ```
/// use spindex_space::Angle;
/// use std::f64::consts::FRAC_PI_2;
///
/// let east = Angle::new(FRAC_PI_2, 0.0).unwrap();
/// let [x, y, z] = east.cartesian();
/// assert!((x - 1.0).abs() < 1e-12 && y.abs() < 1e-12 && z.abs() < 1e-12);
///
/// let back = Angle::from_cartesian([x, y, z]).unwrap();
/// assert!((back.polar() - FRAC_PI_2).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle {
    polar: f64,
    azimuth: f64,
}

impl Angle {
    /// Build a normalized angle.
    ///
    /// A polar angle outside `[0, pi]` is reflected through the pole (and
    /// the azimuth turned by half a revolution) so the direction is kept.
    /// Returns `Err(IndexError::NodeOutOfBounds)` for non-finite input.
    pub fn new(polar: f64, azimuth: f64) -> Result<Self, IndexError> {
        if !polar.is_finite() || !azimuth.is_finite() {
            return Err(IndexError::NodeOutOfBounds {
                node: vec![polar, azimuth],
                bounds: "finite polar and azimuth angles".into(),
            });
        }
        let mut polar = polar.rem_euclid(TAU);
        let mut azimuth = azimuth;
        if polar > PI {
            polar = TAU - polar;
            azimuth += PI;
        }
        Ok(Self::from_normalized(polar, wrap_azimuth(azimuth)))
    }

    /// Angles already known to be in range.
    pub(crate) fn from_normalized(polar: f64, azimuth: f64) -> Self {
        Self { polar, azimuth }
    }

    /// Direction of a non-zero vector. The vector need not be unit length.
    ///
    /// Returns `Err(IndexError::DegenerateDirection)` for the zero vector or
    /// non-finite components. At the poles the azimuth is 0.
    pub fn from_cartesian(vector: Node3) -> Result<Self, IndexError> {
        let [x, y, z] = vector;
        let len = (x * x + y * y + z * z).sqrt();
        if !len.is_finite() || len == 0.0 {
            return Err(IndexError::DegenerateDirection { vector });
        }
        let polar = (y / len).clamp(-1.0, 1.0).acos();
        let azimuth = wrap_azimuth(z.atan2(x));
        Ok(Self::from_normalized(polar, azimuth))
    }

    /// Polar angle from +Y, in `[0, pi]`.
    pub fn polar(&self) -> f64 {
        self.polar
    }

    /// Azimuth in the XZ plane, in `[0, 2pi)`.
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Unit vector pointing along this direction.
    pub fn cartesian(&self) -> Node3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        [sin_p * cos_a, cos_p, sin_p * sin_a]
    }
}

/// Wrap into `[0, 2pi)`. `rem_euclid` can round up to exactly `2pi` for
/// tiny negative inputs.
fn wrap_azimuth(azimuth: f64) -> f64 {
    let wrapped = azimuth.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-12;

    fn close(a: Node3, b: Node3) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < EPS)
    }

    #[test]
    fn poles_point_along_y() {
        let north = Angle::new(0.0, 1.0).unwrap();
        assert!(close(north.cartesian(), [0.0, 1.0, 0.0]));
        let south = Angle::new(PI, 0.0).unwrap();
        assert!(close(south.cartesian(), [0.0, -1.0, 0.0]));
    }

    #[test]
    fn azimuth_turns_from_x_towards_z() {
        let a = Angle::new(FRAC_PI_2, FRAC_PI_2).unwrap();
        assert!(close(a.cartesian(), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn negative_azimuth_wraps() {
        let a = Angle::new(1.0, -FRAC_PI_2).unwrap();
        assert!((a.azimuth() - 3.0 * FRAC_PI_2).abs() < EPS);
        assert_eq!(Angle::new(1.0, -1e-300).unwrap().azimuth(), 0.0);
    }

    #[test]
    fn polar_past_pole_reflects() {
        let a = Angle::new(PI + 0.25, 0.0).unwrap();
        assert!((a.polar() - (PI - 0.25)).abs() < EPS);
        assert!((a.azimuth() - PI).abs() < EPS);
        let b = Angle::new(-0.25, 0.0).unwrap();
        assert!((b.polar() - 0.25).abs() < EPS);
        assert!((b.azimuth() - PI).abs() < EPS);
    }

    #[test]
    fn from_cartesian_rejects_zero_and_nan() {
        assert!(matches!(
            Angle::from_cartesian([0.0, 0.0, 0.0]),
            Err(IndexError::DegenerateDirection { .. })
        ));
        assert!(matches!(
            Angle::from_cartesian([f64::NAN, 1.0, 0.0]),
            Err(IndexError::DegenerateDirection { .. })
        ));
    }

    #[test]
    fn new_rejects_non_finite() {
        assert!(matches!(
            Angle::new(f64::INFINITY, 0.0),
            Err(IndexError::NodeOutOfBounds { .. })
        ));
    }

    #[test]
    fn from_cartesian_ignores_length() {
        let a = Angle::from_cartesian([0.0, 5.0, 0.0]).unwrap();
        assert_eq!(a.polar(), 0.0);
        assert_eq!(a.azimuth(), 0.0);
    }

    proptest! {
        #[test]
        fn cartesian_is_unit_length(polar in 0.0f64..PI, azimuth in 0.0f64..TAU) {
            let [x, y, z] = Angle::new(polar, azimuth).unwrap().cartesian();
            prop_assert!(((x * x + y * y + z * z).sqrt() - 1.0).abs() < EPS);
        }

        #[test]
        fn cartesian_round_trips(polar in 0.01f64..(PI - 0.01), azimuth in 0.0f64..TAU) {
            let a = Angle::new(polar, azimuth).unwrap();
            let b = Angle::from_cartesian(a.cartesian()).unwrap();
            prop_assert!((a.polar() - b.polar()).abs() < 1e-9);
            let d = (a.azimuth() - b.azimuth()).abs();
            prop_assert!(d < 1e-9 || (TAU - d) < 1e-9);
        }
    }
}
