//! This module implements the CIE 1931 XYZ color space, the device-independent foundation that the
//! CIE spaces (xyY, CIELAB, CIELUV) are all defined in terms of. Y is luminance; X and Z are
//! chosen so that every visible color has nonnegative coordinates.

use crate::color::{Color, RGBColor};
use crate::colors::LinearRGBColor;
use crate::consts::{LINEAR_RGB_TO_XYZ, XYZ_TO_LINEAR_RGB};
use crate::coord::Coord;
use crate::illuminants::Illuminant;
use crate::mix::{lerp, Mix};

/// A point in the CIE 1931 XYZ color space, scaled so that the sRGB white has Y = 1.
/// # Example
/// ```
/// # use tincture::prelude::*;
/// # use tincture::colors::XYZColor;
/// let white = RGBColor{r: 1., g: 1., b: 1.};
/// let xyz: XYZColor = white.convert();
/// assert!((xyz.y - 1.).abs() < 1e-10);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis, a mix of the three cone responses chosen to be nonnegative.
    pub x: f64,
    /// The Y axis: luminance, the perceived brightness of the light.
    pub y: f64,
    /// The Z axis, roughly the response of the short-wavelength (blue) cones.
    pub z: f64,
}

impl XYZColor {
    /// Converts linear sRGB to XYZ by the fixed sRGB matrix.
    pub fn from_linear_rgb(rgb: LinearRGBColor) -> XYZColor {
        // &* needed because lazy_static uses a different type which implements Deref
        let xyz = &*LINEAR_RGB_TO_XYZ * vector![rgb.r, rgb.g, rgb.b];
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }

    /// Converts XYZ to linear sRGB by the inverse sRGB matrix. Colors outside the sRGB gamut come
    /// out with components below 0 or above 1.
    pub fn to_linear_rgb(&self) -> LinearRGBColor {
        let rgb = &*XYZ_TO_LINEAR_RGB * vector![self.x, self.y, self.z];
        LinearRGBColor {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
        }
    }
}

impl Color for XYZColor {
    /// Converts through linear RGB. XYZ itself needs no reference white, so the illuminant is
    /// ignored.
    fn from_rgb_white_ref(rgb: RGBColor, illuminant: Illuminant) -> XYZColor {
        XYZColor::from_linear_rgb(LinearRGBColor::from_rgb_white_ref(rgb, illuminant))
    }
    fn to_rgb_white_ref(&self, illuminant: Illuminant) -> RGBColor {
        self.to_linear_rgb().to_rgb_white_ref(illuminant)
    }
}

impl Mix for XYZColor {
    fn mix(self, other: XYZColor, t: f64) -> XYZColor {
        lerp(self, other, t)
    }
}

impl From<Coord> for XYZColor {
    fn from(c: Coord) -> XYZColor {
        XYZColor {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl From<XYZColor> for Coord {
    fn from(c: XYZColor) -> Coord {
        Coord {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}
