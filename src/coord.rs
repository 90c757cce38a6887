//! This module contains a struct, [`Coord`](struct.Coord.html), that models a 3D coordinate space
//! and supports limited math in 3 dimensions with scalars and other coordinates. Used to unify math
//! with colors that is the same, just with different projections into 3D space: blending in CIELAB
//! and blending in linear RGB are the same interpolation, and so are distances.

use num::{Num, NumCast};
use std::ops::{Add, Mul, Sub};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to scale
/// it. This has no added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space. Supports many common arithmetic operations on points.
/// `Coord` has three axes, denoted `x`, `y`, and `z`. These are not any different in any method of
/// `Coord`, so the distinction between them is completely conventional. In Tincture, any color that
/// converts to and from a `Coord` will match its components with these axes in the order of the
/// letters in its name: for example, `CIELABColor` maps to a coordinate such that `l` is on the
/// x-axis, `a` is on the y-axis, and `b` is on the z-axis.
///
/// # Examples
/// ```
/// # use tincture::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// let sum = point_1 + point_2;  // the point (8, 10, 10)
/// let diff = point_1 - point_2;  // the point (-6, 6, 4)
/// // scalar multiplication only works with the scalar on the right
/// let prod = point_1 * 2u8; // the point (2, 16, 14)
/// assert_eq!(prod, Coord{x: 2., y: 16., z: 14.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// This is a perfect analogue to numbers: for any Coords c1, c2, and c3 with the same type, c1 + c2 =
/// c3 implies c3 - c2 = c1 and c3 - c1 = c2, down to floating point error if that exists.
impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// Scalar multiplication: (a, b, c) * s = (sa, sb, sc). Not commutative, but it'll do.
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        // every Scalar we accept fits in an f64, possibly with rounding
        let r: f64 = num::cast(rhs).unwrap_or(std::f64::NAN);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl Coord {
    /// Linear interpolation between two points: `t = 0` gives `self`, `t = 1` gives `other`, and
    /// anything in between lies on the segment joining them. Values of `t` outside [0, 1]
    /// extrapolate along the same line.
    /// # Example
    /// ```
    /// # use tincture::coord::Coord;
    /// let point1 = Coord{x: 0.2, y: 0., z: 1.};
    /// let point2 = Coord{x: 1., y: 0.8, z: 1.};
    /// let mid = point1.lerp(&point2, 0.25);
    /// assert!((mid.x - 0.4).abs() <= 1e-10);
    /// assert!((mid.y - 0.2).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn lerp(&self, other: &Coord, t: f64) -> Coord {
        *self + (*other - *self) * t
    }

    /// The Euclidean difference between two 3D points, defined as the square root of the sum of
    /// squares of differences in each axis.
    ///
    /// How well this tracks how different two colors look depends entirely on the projection: in
    /// CIELAB it is the CIE76 color difference, while in HSV two blacks with different hues come
    /// out far apart despite being the same color. The [`distance`] module picks the projections
    /// for which it means something.
    ///
    /// [`distance`]: ../distance/index.html
    /// # Example
    /// ```
    /// # use tincture::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let c1 = Coord {
            x: 0.3,
            y: -0.7,
            z: 12.,
        };
        let c2 = Coord {
            x: 1.,
            y: 0.5,
            z: -3.,
        };
        assert_eq!(c1.lerp(&c2, 0.), c1);
        let end = c1.lerp(&c2, 1.);
        assert!(end.euclidean_distance(&c2) <= 1e-12);
    }

    #[test]
    fn test_integer_scaling() {
        let c = Coord {
            x: 0.5,
            y: 1.5,
            z: -2.,
        };
        assert_eq!(
            c * 4i32,
            Coord {
                x: 2.,
                y: 6.,
                z: -8.
            }
        );
    }
}
