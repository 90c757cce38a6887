//! This module describes the Bound trait, which allows for a description of what colors a color
//! space supports. For example, the sRGB gamut only supports RGB values ranging from 0-1, which is
//! about 35% of the total visible range of human vision.

use crate::color::{Color, RGBColor};
use crate::colors::{HSLColor, HSVColor};
use crate::coord::Coord;

/// Describes a color space in which the total space of representable colors has explicit bounds on
/// each component. For example, an sRGB color can't have negative values for any of its components,
/// whereas the CIELAB space can feasibly describe even those colors that cannot be viewed by
/// humans. Clamping is done component by component: it is not gamut mapping, and a clamped color
/// can look noticeably different from the original.
/// # Example
/// ```
/// # use tincture::prelude::*;
/// # use tincture::colors::HSVColor;
/// let wild = HSVColor{h: 400., s: 1.3, v: -0.2};
/// let tame = wild.clamped_to_bounds();
/// assert_eq!((tame.h, tame.s, tame.v), (360., 1., 0.));
/// ```
pub trait Bound: Color + Into<Coord> + From<Coord> + Copy {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component of the color space, in the order that they appear in the Coord representation. If
    /// some parts of the bounds don't exist, using infinity or negative infinity works.
    fn bounds() -> [(f64, f64); 3];
    /// Given a Coord, returns a Coord such that each component has been clamped to the correct
    /// bounds.
    fn clamp_coord(point: Coord) -> Coord {
        let ranges = Self::bounds();
        let mut point_vals = [0.; 3];
        for i in 0..3 {
            let component = [point.x, point.y, point.z][i];
            let (min, max) = ranges[i];
            point_vals[i] = if component < min {
                min
            } else if component > max {
                max
            } else {
                component
            };
        }
        Coord {
            x: point_vals[0],
            y: point_vals[1],
            z: point_vals[2],
        }
    }
    /// Returns `true` if every component of the point lies within the bounds, endpoints included.
    fn in_bounds(point: Coord) -> bool {
        let ranges = Self::bounds();
        [point.x, point.y, point.z]
            .iter()
            .zip(ranges.iter())
            .all(|(&component, &(min, max))| min <= component && component <= max)
    }
    /// Returns a copy of this color with every component clamped into bounds. If the color is
    /// already in bounds, it is returned unchanged.
    fn clamped_to_bounds(&self) -> Self {
        Self::from(Self::clamp_coord((*self).into()))
    }
}

// implement Bound for the base colors here, to avoid cluttering their modules more than they
// already are
impl Bound for RGBColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }
}

impl Bound for HSVColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 360.), (0., 1.), (0., 1.)]
    }
}

impl Bound for HSLColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 360.), (0., 1.), (0., 1.)]
    }
}

#[cfg(test)]
mod tests {
    use super::Bound;
    use crate::color::RGBColor;
    use crate::colors::hslcolor::HSLColor;
    use crate::colors::hsvcolor::HSVColor;

    #[test]
    fn test_zero_one_bounds() {
        let color1 = RGBColor {
            r: 0.1,
            g: -0.2,
            b: 1.2,
        };
        assert!(!RGBColor::in_bounds(color1.into()));
        assert!(color1.clamped_to_bounds().almost_equal_rgb(&RGBColor {
            r: 0.1,
            g: 0.,
            b: 1.
        }));
    }

    #[test]
    fn test_hue_bounds() {
        let color1 = HSLColor {
            h: -24.0,
            s: -0.2,
            l: 1.1,
        };
        let color2 = HSVColor {
            h: 375.0,
            s: 0.2,
            v: 0.5,
        };
        let color3 = HSVColor {
            h: 255.0,
            s: 0.6,
            v: 0.7,
        };
        assert_eq!(color3.clamped_to_bounds(), color3);
        assert_eq!(
            color2.clamped_to_bounds(),
            HSVColor {
                h: 360.,
                s: 0.2,
                v: 0.5,
            }
        );
        assert_eq!(
            color1.clamped_to_bounds(),
            HSLColor {
                h: 0.,
                s: 0.,
                l: 1.
            }
        );
    }
}
