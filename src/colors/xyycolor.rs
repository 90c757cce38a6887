//! This module implements CIE xyY, which splits XYZ into chromaticity (x and y, where a color sits on
//! the familiar horseshoe-shaped chromaticity diagram) and luminance (Y, passed through unchanged
//! from XYZ). Two lights with the same xy differ only in brightness.

use crate::color::{Color, RGBColor};
use crate::colors::XYZColor;
use crate::consts::XYY_EPSILON;
use crate::coord::Coord;
use crate::illuminants::Illuminant;

/// A color in CIE xyY.
///
/// Chromaticity is undefined for black, since it would divide by zero. Following Bruce Lindbloom's
/// recommendation, black is given the chromaticity of the reference white instead: this is the only
/// thing the illuminant is used for in this space.
/// # Example
/// ```
/// # use tincture::prelude::*;
/// # use tincture::colors::XYYColor;
/// let black = RGBColor{r: 0., g: 0., b: 0.};
/// let xyy: XYYColor = black.convert();
/// assert!((xyy.x - 0.3127).abs() < 1e-4);
/// assert!((xyy.y - 0.3290).abs() < 1e-4);
/// assert_eq!(xyy.luminance, 0.);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYYColor {
    /// The x chromaticity coordinate, X / (X + Y + Z).
    pub x: f64,
    /// The y chromaticity coordinate, Y / (X + Y + Z).
    pub y: f64,
    /// The luminance, identical to XYZ's Y.
    pub luminance: f64,
}

impl XYYColor {
    /// Gets the chromaticity and luminance of an XYZ color. If X + Y + Z is zero (black), the
    /// chromaticity of the given white is used.
    pub fn from_xyz(xyz: XYZColor, illuminant: Illuminant) -> XYYColor {
        let sum = xyz.x + xyz.y + xyz.z;
        let (x, y) = if sum.abs() < XYY_EPSILON {
            illuminant.chromaticity()
        } else {
            (xyz.x / sum, xyz.y / sum)
        };
        XYYColor {
            x,
            y,
            luminance: xyz.y,
        }
    }

    /// Rebuilds XYZ. A y chromaticity of zero can't be divided by, so it produces X = Z = 0.
    pub fn to_xyz(&self) -> XYZColor {
        if self.y.abs() < XYY_EPSILON {
            XYZColor {
                x: 0.0,
                y: self.luminance,
                z: 0.0,
            }
        } else {
            let scale = self.luminance / self.y;
            XYZColor {
                x: scale * self.x,
                y: self.luminance,
                z: scale * (1.0 - self.x - self.y),
            }
        }
    }
}

impl Color for XYYColor {
    fn from_rgb_white_ref(rgb: RGBColor, illuminant: Illuminant) -> XYYColor {
        XYYColor::from_xyz(XYZColor::from_rgb(rgb), illuminant)
    }
    fn to_rgb_white_ref(&self, _illuminant: Illuminant) -> RGBColor {
        self.to_xyz().to_rgb()
    }
}

impl From<Coord> for XYYColor {
    fn from(c: Coord) -> XYYColor {
        XYYColor {
            x: c.x,
            y: c.y,
            luminance: c.z,
        }
    }
}

impl From<XYYColor> for Coord {
    fn from(c: XYYColor) -> Coord {
        Coord {
            x: c.x,
            y: c.y,
            z: c.luminance,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::color::tests::sample_colors;
    use float_cmp::approx_eq;

    #[test]
    fn test_xyy_round_trip() {
        for &illuminant in &[Illuminant::D65, Illuminant::D50] {
            for c in sample_colors() {
                let xyy = XYYColor::from_rgb_white_ref(c, illuminant);
                let back = xyy.to_rgb_white_ref(illuminant);
                assert!(back.distance_rgb(&c) <= 1e-4);
            }
        }
    }

    #[test]
    fn test_red_chromaticity() {
        let red = RGBColor {
            r: 1.,
            g: 0.,
            b: 0.,
        };
        let xyy: XYYColor = red.convert();
        assert!(approx_eq!(f64, xyy.x, 0.64, epsilon = 1e-6));
        assert!(approx_eq!(f64, xyy.y, 0.33, epsilon = 1e-6));
        assert!(approx_eq!(f64, xyy.luminance, 0.212639, epsilon = 1e-6));
    }

    #[test]
    fn test_black_uses_white_chromaticity() {
        let black = XYZColor {
            x: 0.,
            y: 0.,
            z: 0.,
        };
        let d50 = XYYColor::from_xyz(black, Illuminant::D50);
        let (x, y) = Illuminant::D50.chromaticity();
        assert_eq!((d50.x, d50.y, d50.luminance), (x, y, 0.));
        assert!(!d50.x.is_nan());
    }

    #[test]
    fn test_zero_y_chromaticity() {
        let degenerate = XYYColor {
            x: 0.3,
            y: 0.,
            luminance: 0.5,
        };
        assert_eq!(
            degenerate.to_xyz(),
            XYZColor {
                x: 0.,
                y: 0.5,
                z: 0.
            }
        );
    }
}
