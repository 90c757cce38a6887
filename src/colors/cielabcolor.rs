//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). The CIELAB color space is used as a
//! device-independent color space that has an L value for lightness and two opponent color axes for
//! chromaticity (loosely, hue). Formally, the three values that define a CIELAB color are called
//! L\*, a\*, and b\* to distinguish them from [generic
//! Lab](https://en.wikipedia.org/wiki/Lab_color_space), but for convenience they are just `l`, `a`,
//! and `b` in this module.
//!
//! Tincture keeps every CIELAB value divided by 100 compared to the usual convention, so that
//! lightness runs from 0 to 1 like every other component in the library. The color difference
//! formulas in [`distance`](../../distance/index.html) scale back up internally where their
//! constants expect the usual range.

use crate::color::{Color, RGBColor};
use crate::colors::XYZColor;
use crate::coord::Coord;
use crate::illuminants::Illuminant;
use crate::mix::{lerp, Mix};

/// The CIE companding function: a cube root, with a linear segment near black so that the slope
/// stays finite at zero.
fn lab_f(t: f64) -> f64 {
    let delta: f64 = 6.0 / 29.0;
    if t > delta * delta * delta {
        t.cbrt()
    } else {
        t / (3.0 * delta * delta) + 4.0 / 29.0
    }
}

/// The inverse of `lab_f`.
fn lab_f_inv(t: f64) -> f64 {
    let delta: f64 = 6.0 / 29.0;
    if t > delta {
        t * t * t
    } else {
        3.0 * delta * delta * (t - 4.0 / 29.0)
    }
}

/// A color in the CIELAB color space.
/// # Example
/// ```
/// # use tincture::prelude::*;
/// # use tincture::colors::CIELABColor;
/// let red = RGBColor{r: 1., g: 0., b: 0.};
/// let lab: CIELABColor = red.convert();
/// assert!((lab.l - 0.5324).abs() < 1e-4);
/// assert!((lab.a - 0.8009).abs() < 1e-4);
/// assert!((lab.b - 0.6720).abs() < 1e-4);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELABColor {
    /// The lightness of a given color. 0 is black, whereas 1 is the lightness of the reference
    /// white.
    pub l: f64,
    /// The first opponent color axis: negative is green, positive is magenta. Most visible colors
    /// lie within about [-1.28, 1.27], but imaginary colors can go well outside that.
    pub a: f64,
    /// The second opponent color axis: negative is blue, positive is yellow. Like `a`, visible
    /// colors mostly lie within about [-1.28, 1.27].
    pub b: f64,
}

impl CIELABColor {
    /// Converts a given CIE XYZ color to CIELAB, normalizing against the given reference white.
    pub fn from_xyz(xyz: XYZColor, illuminant: Illuminant) -> CIELABColor {
        // https://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions
        let white = illuminant.white_point();
        let fy = lab_f(xyz.y / white[1]);
        // the companded channels allow for human nonlinearity of color vision, so the rest is
        // linear: note how a and b are opponent color axes
        CIELABColor {
            l: 1.16 * fy - 0.16,
            a: 5.0 * (lab_f(xyz.x / white[0]) - fy),
            b: 2.0 * (fy - lab_f(xyz.z / white[2])),
        }
    }

    /// Returns the XYZ color that corresponds to this CIELAB color under the given reference white.
    pub fn to_xyz(&self, illuminant: Illuminant) -> XYZColor {
        let white = illuminant.white_point();
        let l = (self.l + 0.16) / 1.16;
        XYZColor {
            x: white[0] * lab_f_inv(l + self.a / 5.0),
            y: white[1] * lab_f_inv(l),
            z: white[2] * lab_f_inv(l - self.b / 2.0),
        }
    }
}

impl Color for CIELABColor {
    fn from_rgb_white_ref(rgb: RGBColor, illuminant: Illuminant) -> CIELABColor {
        CIELABColor::from_xyz(XYZColor::from_rgb(rgb), illuminant)
    }
    /// Many combinations of `l`, `a`, and `b` have no sRGB equivalent: the result can be invalid.
    fn to_rgb_white_ref(&self, illuminant: Illuminant) -> RGBColor {
        self.to_xyz(illuminant).to_rgb()
    }
}

impl Mix for CIELABColor {
    fn mix(self, other: CIELABColor, t: f64) -> CIELABColor {
        lerp(self, other, t)
    }
}

impl From<Coord> for CIELABColor {
    fn from(c: Coord) -> CIELABColor {
        CIELABColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl From<CIELABColor> for Coord {
    fn from(c: CIELABColor) -> Coord {
        Coord {
            x: c.l,
            y: c.a,
            z: c.b,
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
    fn test_cielab_rgb_round_trip() {
        for &illuminant in &[Illuminant::D65, Illuminant::D50] {
            for c in sample_colors() {
                let lab = CIELABColor::from_rgb_white_ref(c, illuminant);
                let back = lab.to_rgb_white_ref(illuminant);
                assert!(back.distance_rgb(&c) <= 1e-4);
            }
        }
    }

    #[test]
    fn test_red_d50() {
        let red = RGBColor {
            r: 1.,
            g: 0.,
            b: 0.,
        };
        let lab = CIELABColor::from_rgb_white_ref(red, Illuminant::D50);
        assert!(approx_eq!(f64, lab.l, 0.53237, epsilon = 1e-4));
        assert!(approx_eq!(f64, lab.a, 0.78280, epsilon = 1e-4));
        assert!(approx_eq!(f64, lab.b, 0.62149, epsilon = 1e-4));
    }

    #[test]
    fn test_reference_white_is_neutral() {
        let white = XYZColor {
            x: 0.96422,
            y: 1.,
            z: 0.82521,
        };
        let lab = CIELABColor::from_xyz(white, Illuminant::D50);
        assert!(approx_eq!(f64, lab.l, 1., epsilon = 1e-12));
        assert!(approx_eq!(f64, lab.a, 0., epsilon = 1e-12));
        assert!(approx_eq!(f64, lab.b, 0., epsilon = 1e-12));
    }

    #[test]
    fn test_black_is_origin() {
        let black = RGBColor {
            r: 0.,
            g: 0.,
            b: 0.,
        };
        let lab: CIELABColor = black.convert();
        assert!(lab.l.abs() <= 1e-12);
        assert!(lab.a.abs() <= 1e-12);
        assert!(lab.b.abs() <= 1e-12);
    }

    #[test]
    fn test_out_of_gamut_lab_is_invalid() {
        let lab = CIELABColor {
            l: 0.5,
            a: 1.5,
            b: -1.5,
        };
        let rgb = lab.to_rgb();
        assert!(!rgb.is_valid());
        assert!(rgb.clamped().is_valid());
    }

    #[test]
    fn test_cielab_mix() {
        let lab1 = CIELABColor {
            l: 0.45,
            a: 0.67,
            b: 0.49,
        };
        let lab2 = CIELABColor {
            l: 0.53,
            a: 0.59,
            b: 0.03,
        };
        let mixed = lab1.mix(lab2, 0.5);
        assert!(approx_eq!(f64, mixed.l, 0.49, epsilon = 1e-12));
        assert!(approx_eq!(f64, mixed.a, 0.63, epsilon = 1e-12));
        assert!(approx_eq!(f64, mixed.b, 0.26, epsilon = 1e-12));
    }
}
