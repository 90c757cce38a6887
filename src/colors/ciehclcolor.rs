//! This file implements the CIEHCL color space, a cylindrical transformation of CIELAB that uses
//! chroma and hue instead of two opponent color axes. It is everything people want HSV to be: hue
//! that behaves like hue, lightness that behaves like lightness. Be careful not to confuse this
//! color with CIELCHuv, which uses CIELUV internally.

use crate::color::{Color, RGBColor};
use crate::colors::CIELABColor;
use crate::consts::{CHROMA_EPSILON, HUE_EPSILON};
use crate::coord::Coord;
use crate::illuminants::Illuminant;
use crate::mix::{interpolate_hue, normalize_hue, share_hue, Mix};

/// Polar coordinates of an opponent-axis pair, as (chroma, hue in degrees). When both axes are
/// within floating-point noise of zero, atan2 would turn that noise into an arbitrary hue, so the
/// hue is pinned to 0 instead. This is stricter than pinning when either axis is small: a tiny `a`
/// with a large `b` still has a real hue, and pinning it would break HCL round trips.
pub(crate) fn to_polar(a: f64, b: f64) -> (f64, f64) {
    let h = if a.abs() <= HUE_EPSILON && (b - a).abs() <= HUE_EPSILON {
        0.0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    (a.hypot(b), h)
}

/// The inverse of `to_polar`: any hue works, in degrees.
pub(crate) fn from_polar(c: f64, h: f64) -> (f64, f64) {
    let (sin, cos) = h.to_radians().sin_cos();
    (c * cos, c * sin)
}

/// A cylindrical form of CIELAB, analogous to the relationship between HSV and RGB.
/// # Example
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::colors::CIEHCLColor;
/// // hue-shift red towards yellow, keeping the same lightness and chroma
/// let red = RGBColor{r: 0.7, g: 0.1, b: 0.1};
/// let red_hcl: CIEHCLColor = red.convert();
/// let mut orange = red_hcl;
/// orange.h += 30.;
/// let orange_rgb = orange.to_rgb();
/// assert!(orange_rgb.g > red.g);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIEHCLColor {
    /// The hue component, in degrees. Essentially the angle in cylindrical coordinates, it ranges
    /// from 0 degrees to 360: 90 degrees corresponds to yellow, 180 to green, 270 to blue, and 360
    /// to red. Any value is accepted on the way back to CIELAB.
    pub h: f64,
    /// The chroma component: the distance from the neutral gray of the same lightness. This is the
    /// radius in cylindrical coordinates. It ranges from 0 to about 1.3 for sRGB colors, although
    /// for most lightness values the actual range is much smaller.
    pub c: f64,
    /// The lightness component, identical to CIELAB's. Ranges between 0 and 1.
    pub l: f64,
}

impl CIEHCLColor {
    /// Re-expresses a CIELAB color in polar form.
    pub fn from_lab(lab: CIELABColor) -> CIEHCLColor {
        let (c, h) = to_polar(lab.a, lab.b);
        CIEHCLColor { h, c, l: lab.l }
    }

    /// Goes back to the opponent axes: a = c cos h, b = c sin h.
    pub fn to_lab(&self) -> CIELABColor {
        let (a, b) = from_polar(self.c, self.h);
        CIELABColor { l: self.l, a, b }
    }
}

impl Color for CIEHCLColor {
    /// Converts from sRGB by way of CIELAB under the given reference white.
    fn from_rgb_white_ref(rgb: RGBColor, illuminant: Illuminant) -> CIEHCLColor {
        CIEHCLColor::from_lab(CIELABColor::from_rgb_white_ref(rgb, illuminant))
    }
    /// Converts back by way of CIELAB. Many hue, chroma and lightness combinations are outside
    /// sRGB.
    fn to_rgb_white_ref(&self, illuminant: Illuminant) -> RGBColor {
        self.to_lab().to_rgb_white_ref(illuminant)
    }
}

impl Mix for CIEHCLColor {
    /// Interpolates hue along the shorter way around the circle. A (nearly) gray endpoint has no
    /// meaningful hue, so it borrows the other endpoint's.
    fn mix(self, other: CIEHCLColor, t: f64) -> CIEHCLColor {
        let (h1, h2) = share_hue(
            (self.h, self.c <= CHROMA_EPSILON),
            (other.h, other.c <= CHROMA_EPSILON),
        );
        CIEHCLColor {
            h: interpolate_hue(h1, h2, t),
            c: self.c + t * (other.c - self.c),
            l: self.l + t * (other.l - self.l),
        }
    }
}

impl From<Coord> for CIEHCLColor {
    fn from(c: Coord) -> CIEHCLColor {
        CIEHCLColor {
            h: c.x,
            c: c.y,
            l: c.z,
        }
    }
}

impl From<CIEHCLColor> for Coord {
    fn from(c: CIEHCLColor) -> Coord {
        Coord {
            x: c.h,
            y: c.c,
            z: c.l,
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
    fn test_hcl_rgb_round_trip() {
        // near-neutral colors have their hue pinned to 0, which moves them by up to about 1.5e-4
        for &illuminant in &[Illuminant::D65, Illuminant::D50] {
            for c in sample_colors() {
                let hcl = CIEHCLColor::from_rgb_white_ref(c, illuminant);
                let back = hcl.to_rgb_white_ref(illuminant);
                assert!(back.distance_rgb(&c) <= 1e-3);
            }
        }
    }

    #[test]
    fn test_red_hcl() {
        let red = RGBColor {
            r: 1.,
            g: 0.,
            b: 0.,
        };
        let hcl: CIEHCLColor = red.convert();
        assert!(approx_eq!(f64, hcl.h, 39.999, epsilon = 1e-3));
        assert!(approx_eq!(f64, hcl.c, 1.04546, epsilon = 1e-4));
        assert!(approx_eq!(f64, hcl.l, 0.53237, epsilon = 1e-4));
    }

    #[test]
    fn test_hue_range() {
        for c in sample_colors() {
            let hcl: CIEHCLColor = c.convert();
            assert!(hcl.h >= 0. && hcl.h < 360.);
            assert!(hcl.c >= 0.);
        }
    }

    #[test]
    fn test_tiny_opponents_have_zero_hue() {
        let (c, h) = to_polar(3e-5, -4e-5);
        assert_eq!(h, 0.);
        assert!(approx_eq!(f64, c, 5e-5, epsilon = 1e-12));
        // a near zero with a large b is still a well-defined hue
        let (_, h) = to_polar(5e-5, 0.5);
        assert!(approx_eq!(f64, h, 90., epsilon = 0.01));
    }

    #[test]
    fn test_any_hue_accepted() {
        let hcl = CIEHCLColor {
            h: 30.,
            c: 0.4,
            l: 0.6,
        };
        let wrapped = CIEHCLColor {
            h: 30. - 720.,
            ..hcl
        };
        let lab1 = hcl.to_lab();
        let lab2 = wrapped.to_lab();
        assert!(approx_eq!(f64, lab1.a, lab2.a, epsilon = 1e-12));
        assert!(approx_eq!(f64, lab1.b, lab2.b, epsilon = 1e-12));
    }
}
