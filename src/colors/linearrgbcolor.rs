//! This module implements linear RGB: sRGB with the gamma curve taken off, so that each component
//! is proportional to the amount of light the display emits. Adding two linear colors together is
//! the physically meaningful way to combine light, which makes this the right space for averaging,
//! dithering, and anything else that is really about light intensity rather than appearance.

use crate::color::{Color, RGBColor};
use crate::coord::Coord;
use crate::gamma::{delinearize, linearize};
use crate::illuminants::Illuminant;
use crate::mix::{lerp, Mix};

/// A color in linear-light RGB with the sRGB primaries. Components lie in [0, 1] for colors inside
/// the sRGB gamut.
/// # Example
/// ```
/// # use tincture::prelude::*;
/// # use tincture::colors::LinearRGBColor;
/// // a mid-gray in sRGB emits about a fifth of the light of white
/// let gray = RGBColor{r: 0.5, g: 0.5, b: 0.5};
/// let linear: LinearRGBColor = gray.convert();
/// assert!((linear.r - 0.214).abs() < 1e-3);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRGBColor {
    /// The red component, proportional to the light emitted by the red primary.
    pub r: f64,
    /// The green component, proportional to the light emitted by the green primary.
    pub g: f64,
    /// The blue component, proportional to the light emitted by the blue primary.
    pub b: f64,
}

impl Color for LinearRGBColor {
    /// Removes the sRGB gamma curve. Linear RGB has no reference white of its own beyond D65, so the
    /// illuminant is ignored.
    fn from_rgb_white_ref(rgb: RGBColor, _illuminant: Illuminant) -> LinearRGBColor {
        LinearRGBColor {
            r: linearize(rgb.r),
            g: linearize(rgb.g),
            b: linearize(rgb.b),
        }
    }
    /// Reapplies the sRGB gamma curve.
    fn to_rgb_white_ref(&self, _illuminant: Illuminant) -> RGBColor {
        RGBColor {
            r: delinearize(self.r),
            g: delinearize(self.g),
            b: delinearize(self.b),
        }
    }
}

impl Mix for LinearRGBColor {
    fn mix(self, other: LinearRGBColor, t: f64) -> LinearRGBColor {
        lerp(self, other, t)
    }
}

impl From<Coord> for LinearRGBColor {
    fn from(c: Coord) -> LinearRGBColor {
        LinearRGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl From<LinearRGBColor> for Coord {
    fn from(c: LinearRGBColor) -> Coord {
        Coord {
            x: c.r,
            y: c.g,
            z: c.b,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::color::tests::sample_colors;

    #[test]
    fn test_linear_rgb_round_trip() {
        for c in sample_colors() {
            let linear: LinearRGBColor = c.convert();
            let back = linear.to_rgb();
            assert!(back.distance_rgb(&c) <= 1e-10);
        }
    }

    #[test]
    fn test_linear_endpoints_fixed() {
        let white = RGBColor {
            r: 1.,
            g: 1.,
            b: 1.,
        };
        let black = RGBColor {
            r: 0.,
            g: 0.,
            b: 0.,
        };
        let linear_white: LinearRGBColor = white.convert();
        let linear_black: LinearRGBColor = black.convert();
        assert_eq!(
            linear_white,
            LinearRGBColor {
                r: 1.,
                g: 1.,
                b: 1.
            }
        );
        assert_eq!(
            linear_black,
            LinearRGBColor {
                r: 0.,
                g: 0.,
                b: 0.
            }
        );
    }

    #[test]
    fn test_fast_matches_exact() {
        for c in sample_colors() {
            let exact: LinearRGBColor = c.convert();
            let fast = c.fast_linear_rgb();
            let error = (exact.r - fast.r).abs() + (exact.g - fast.g).abs() + (exact.b - fast.b).abs();
            assert!(error <= 6.0 / 255.0);
        }
    }
}
