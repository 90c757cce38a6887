//! This module implements the CIELUV color specification, which was adopted concurrently with
//! CIELAB. CIELUV is very similar to CIELAB, but its chromaticity axes come from a projective
//! transform of XYZ (the CIE 1976 UCS diagram) rather than from companded channel differences,
//! which makes it a natural fit for additive light: mixtures of two lights fall on a straight line
//! in u′v′.
//!
//! As with CIELAB, Tincture divides every CIELUV value by 100 compared to the usual convention.

use crate::color::{Color, RGBColor};
use crate::colors::XYZColor;
use crate::coord::Coord;
use crate::illuminants::Illuminant;
use crate::mix::{lerp, Mix};

/// The u′ and v′ chromaticity coordinates of the CIE 1976 UCS diagram. These are undefined when
/// the denominator vanishes, which only happens for black: both are 0 then.
fn uv_prime(x: f64, y: f64, z: f64) -> (f64, f64) {
    let denom = x + 15.0 * y + 3.0 * z;
    if denom == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * x / denom, 9.0 * y / denom)
    }
}

/// A similar color system to CIELAB, adopted at the same time and with similar goals. It attempts
/// to be an easy-to-convert color space from XYZ that approaches perceptual uniformity. U and V
/// represent chromaticity and roughly equate to CIELAB's A and B, but they're scaled differently
/// and act slightly differently.
/// # Example
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::colors::{CIELUVColor, XYZColor};
/// // the reference white itself is perfectly neutral
/// let white = XYZColor{x: 0.96422, y: 1., z: 0.82521};
/// let luv = CIELUVColor::from_xyz(white, Illuminant::D50);
/// assert!((luv.l - 1.).abs() < 1e-12);
/// assert!(luv.u.abs() < 1e-12);
/// assert!(luv.v.abs() < 1e-12);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELUVColor {
    /// The lightness component of LUV. Ranges from 0 to 1, and is identical to CIELAB's.
    pub l: f64,
    /// The component of LUV that roughly equates to how red the color is vs. how green it is.
    /// Ranges over about [-1, 1] for most colors, with saturated reds reaching nearly 1.8.
    pub u: f64,
    /// The component of LUV that roughly equates to how yellow vs. blue the color is. Ranges over
    /// about [-1.4, 1.1] for sRGB colors.
    pub v: f64,
}

impl CIELUVColor {
    /// Given an XYZ color, gets a new CIELUV color relative to the given reference white.
    pub fn from_xyz(xyz: XYZColor, illuminant: Illuminant) -> CIELUVColor {
        // https://en.wikipedia.org/wiki/CIELUV
        let white = illuminant.white_point();
        let y_scaled = xyz.y / white[1];
        let delta: f64 = 6.0 / 29.0; // like CIELAB
        let l = if y_scaled <= delta.powi(3) {
            y_scaled * (29.0f64 / 3.0).powi(3) / 100.0
        } else {
            1.16 * y_scaled.cbrt() - 0.16
        };

        let (u_prime, v_prime) = uv_prime(xyz.x, xyz.y, xyz.z);
        let (u_prime_n, v_prime_n) = uv_prime(white[0], white[1], white[2]);
        CIELUVColor {
            l,
            u: 13.0 * l * (u_prime - u_prime_n),
            v: 13.0 * l * (v_prime - v_prime_n),
        }
    }

    /// Returns the XYZ color that matches this one under the given reference white. Zero lightness
    /// is black no matter what u and v say.
    pub fn to_xyz(&self, illuminant: Illuminant) -> XYZColor {
        if self.l == 0.0 {
            // u and v would be divided by zero below
            return XYZColor {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            };
        }
        let white = illuminant.white_point();
        let y = if self.l <= 0.08 {
            white[1] * self.l * 100.0 * (3.0f64 / 29.0).powi(3)
        } else {
            white[1] * ((self.l + 0.16) / 1.16).powi(3)
        };
        let (u_prime_n, v_prime_n) = uv_prime(white[0], white[1], white[2]);
        let u_prime = self.u / (13.0 * self.l) + u_prime_n;
        let v_prime = self.v / (13.0 * self.l) + v_prime_n;

        XYZColor {
            x: y * 9.0 * u_prime / (4.0 * v_prime),
            y,
            z: y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime),
        }
    }
}

impl Color for CIELUVColor {
    fn from_rgb_white_ref(rgb: RGBColor, illuminant: Illuminant) -> CIELUVColor {
        CIELUVColor::from_xyz(XYZColor::from_rgb(rgb), illuminant)
    }
    /// Many combinations of `l`, `u`, and `v` have no sRGB equivalent: the result can be invalid.
    fn to_rgb_white_ref(&self, illuminant: Illuminant) -> RGBColor {
        self.to_xyz(illuminant).to_rgb()
    }
}

impl Mix for CIELUVColor {
    fn mix(self, other: CIELUVColor, t: f64) -> CIELUVColor {
        lerp(self, other, t)
    }
}

impl From<Coord> for CIELUVColor {
    fn from(c: Coord) -> CIELUVColor {
        CIELUVColor {
            l: c.x,
            u: c.y,
            v: c.z,
        }
    }
}

impl From<CIELUVColor> for Coord {
    fn from(c: CIELUVColor) -> Coord {
        Coord {
            x: c.l,
            y: c.u,
            z: c.v,
        }
    }
}
