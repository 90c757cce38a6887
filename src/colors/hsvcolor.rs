//! This module implements the HSV color space, a cousin of the HSL color space. The definition of
//! value differs from lightness: it goes from black to full saturation instead of black to
//! white. This makes value an extraordinarily poor analog of luminance (dark purple is the same
//! value as white, despite reflecting one-tenth the light), but does make the hue and saturation a
//! bit more meaningful than HSL. The same caveat applies: this is a poor choice for getting actual
//! color appearance parameters and is outclassed by CIEHCL for that purpose, but it is nonetheless
//! important as the closest to such a space one can get using only basic transformations of RGB.

use crate::color::{Color, RGBColor};
use crate::coord::Coord;
use crate::illuminants::Illuminant;
use crate::mix::{interpolate_hue, normalize_hue, share_hue, Mix};

/// The largest and smallest of the three sRGB components.
pub(crate) fn rgb_extremes(rgb: RGBColor) -> (f64, f64) {
    (rgb.r.max(rgb.g).max(rgb.b), rgb.r.min(rgb.g).min(rgb.b))
}

/// The hue shared by HSV and HSL: the position of the color around the hexagon you get by looking
/// down the gray diagonal of the RGB cube, stretched to degrees. Gray has no hue and gets 0.
pub(crate) fn hexagonal_hue(rgb: RGBColor, max: f64, min: f64) -> f64 {
    let chroma = max - min;
    if chroma == 0.0 {
        return 0.0;
    }
    // which sector we're in depends on the largest component; the other two move us along it
    let sector = if max == rgb.r {
        ((rgb.g - rgb.b) / chroma) % 6.0
    } else if max == rgb.g {
        (rgb.b - rgb.r) / chroma + 2.0
    } else {
        (rgb.r - rgb.g) / chroma + 4.0
    };
    normalize_hue(sector * 60.0)
}

/// An HSV color, defining parameters for hue, saturation, and value from the RGB space. This is sHSV
/// to be exact, but the derivation from the sRGB space is assumed as it matches the vast majority of
/// colors called RGB.
/// # Example
/// As with HSL, changing a red to a yellow results in a lightness increase as well.
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::colors::HSVColor;
/// let red = HSVColor{h: 0., s: 0.5, v: 0.8};
/// let yellow = HSVColor{h: 50., s: 0.5, v: 0.8};
/// assert_eq!(red.to_rgb().to_hex(), "#cc6666");
/// assert_eq!(yellow.to_rgb().to_hex(), "#ccbb66");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, described as an angle that ranges between 0 and 360 in degrees. Values outside this
    /// range are wrapped back into it on conversion.
    pub h: f64,
    /// The saturation, defined as the radius of the HSV cylinder and the distance between the color
    /// and the equivalent-value grayscale. Ranges between 0 and 1.
    pub s: f64,
    /// The value, defined as the largest RGB primary value of a color. This corresponds to something
    /// close to color intensity, not really luminance: dark purple and white are the same value, for
    /// example.
    pub v: f64,
}

impl Color for HSVColor {
    /// Converts to HSV directly from sRGB. The illuminant plays no part.
    fn from_rgb_white_ref(rgb: RGBColor, _illuminant: Illuminant) -> HSVColor {
        let (max, min) = rgb_extremes(rgb);
        // value is just the largest component, and saturation is chroma relative to it
        let s = if max == 0.0 { 0.0 } else { (max - min) / max };
        HSVColor {
            h: hexagonal_hue(rgb, max, min),
            s,
            v: max,
        }
    }
    /// Converts back to sRGB. Any hue is accepted.
    fn to_rgb_white_ref(&self, _illuminant: Illuminant) -> RGBColor {
        let chroma = self.v * self.s;
        let h_prime = normalize_hue(self.h) / 60.0;
        // the second-largest component, where chroma is the largest because the smallest is 0
        let x = chroma * (1.0 - (h_prime % 2.0 - 1.0).abs());
        let (r1, g1, b1) = if h_prime < 1.0 {
            (chroma, x, 0.0)
        } else if h_prime < 2.0 {
            (x, chroma, 0.0)
        } else if h_prime < 3.0 {
            (0.0, chroma, x)
        } else if h_prime < 4.0 {
            (0.0, x, chroma)
        } else if h_prime < 5.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };
        // now lift every component to the right value
        let offset = self.v - chroma;
        RGBColor {
            r: r1 + offset,
            g: g1 + offset,
            b: b1 + offset,
        }
    }
}

impl Mix for HSVColor {
    /// Hue goes the short way around. A fully desaturated endpoint takes the other one's hue, so
    /// that fading from gray into a color doesn't sweep through the rainbow.
    fn mix(self, other: HSVColor, t: f64) -> HSVColor {
        let (h1, h2) = share_hue((self.h, self.s == 0.0), (other.h, other.s == 0.0));
        HSVColor {
            h: interpolate_hue(h1, h2, t),
            s: self.s + t * (other.s - self.s),
            v: self.v + t * (other.v - self.v),
        }
    }
}

impl From<Coord> for HSVColor {
    fn from(c: Coord) -> HSVColor {
        HSVColor {
            h: c.x,
            s: c.y,
            v: c.z,
        }
    }
}

impl From<HSVColor> for Coord {
    fn from(c: HSVColor) -> Coord {
        Coord {
            x: c.h,
            y: c.s,
            z: c.v,
        }
    }
}
