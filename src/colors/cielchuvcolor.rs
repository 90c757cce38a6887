//! This module implements the CIELCHuv color space, a cylindrical transformation of the
//! CIELUV space, akin to the relationship between CIELAB and CIEHCL. Sometimes called LuvLCh.

use super::ciehclcolor::{from_polar, to_polar};
use crate::color::{Color, RGBColor};
use crate::colors::CIELUVColor;
use crate::consts::CHROMA_EPSILON;
use crate::coord::Coord;
use crate::illuminants::Illuminant;
use crate::mix::{interpolate_hue, share_hue, Mix};

/// The polar version of CIELUV, analogous to the relationship between CIEHCL and CIELAB.
/// # Example
///
/// ```
/// # use tincture::prelude::*;
/// # use tincture::colors::CIELCHuvColor;
/// let red = RGBColor{r: 1., g: 0., b: 0.};
/// let lch: CIELCHuvColor = red.convert();
/// assert!((lch.h - 12.174).abs() < 1e-3);
/// assert!(lch.to_rgb().almost_equal_rgb(&red));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELCHuvColor {
    /// The lightness component. Exactly the same as CIELAB, CIELUV, and CIEHCL. Varies between 0 and
    /// 1.
    pub l: f64,
    /// The chroma component: essentially, how colorful the color is compared to white. (This is
    /// contrasted with saturation, which is how colorful a color is when compared to an equivalently
    /// bright grayscale color: a dark, deep red may have high saturation and low chroma.) This varies
    /// between 0 and about 1.8 for sRGB colors, and is the radius in cylindrical coordinates.
    pub c: f64,
    /// The hue component, in degrees from the positive u axis. It ranges from 0 to 360, and any
    /// value outside that range is interpreted as its value if one added or subtracted multiples of
    /// 360 to bring it inside.
    pub h: f64,
}

impl CIELCHuvColor {
    /// Re-expresses a CIELUV color in polar form.
    pub fn from_luv(luv: CIELUVColor) -> CIELCHuvColor {
        let (c, h) = to_polar(luv.u, luv.v);
        CIELCHuvColor { l: luv.l, c, h }
    }

    /// Goes back to the u and v axes.
    pub fn to_luv(&self) -> CIELUVColor {
        let (u, v) = from_polar(self.c, self.h);
        CIELUVColor { l: self.l, u, v }
    }
}

impl Color for CIELCHuvColor {
    fn from_rgb_white_ref(rgb: RGBColor, illuminant: Illuminant) -> CIELCHuvColor {
        CIELCHuvColor::from_luv(CIELUVColor::from_rgb_white_ref(rgb, illuminant))
    }
    fn to_rgb_white_ref(&self, illuminant: Illuminant) -> RGBColor {
        self.to_luv().to_rgb_white_ref(illuminant)
    }
}

impl Mix for CIELCHuvColor {
    fn mix(self, other: CIELCHuvColor, t: f64) -> CIELCHuvColor {
        let (h1, h2) = share_hue(
            (self.h, self.c <= CHROMA_EPSILON),
            (other.h, other.c <= CHROMA_EPSILON),
        );
        CIELCHuvColor {
            l: self.l + t * (other.l - self.l),
            c: self.c + t * (other.c - self.c),
            h: interpolate_hue(h1, h2, t),
        }
    }
}

impl From<Coord> for CIELCHuvColor {
    fn from(c: Coord) -> CIELCHuvColor {
        CIELCHuvColor {
            l: c.x,
            c: c.y,
            h: c.z,
        }
    }
}

impl From<CIELCHuvColor> for Coord {
    fn from(c: CIELCHuvColor) -> Coord {
        Coord {
            x: c.l,
            y: c.c,
            z: c.h,
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
    fn test_cielchuv_rgb_round_trip() {
        for &illuminant in &[Illuminant::D65, Illuminant::D50] {
            for c in sample_colors() {
                let lch = CIELCHuvColor::from_rgb_white_ref(c, illuminant);
                let back = lch.to_rgb_white_ref(illuminant);
                assert!(back.distance_rgb(&c) <= 1e-3);
            }
        }
    }

    #[test]
    fn test_chroma_is_uv_radius() {
        let luv = CIELUVColor {
            l: 0.5,
            u: 0.3,
            v: -0.4,
        };
        let lch = CIELCHuvColor::from_luv(luv);
        assert!(approx_eq!(f64, lch.c, 0.5, epsilon = 1e-12));
        assert!(approx_eq!(f64, lch.h, 306.8699, epsilon = 1e-4));
        let back = lch.to_luv();
        assert!(approx_eq!(f64, back.u, 0.3, epsilon = 1e-12));
        assert!(approx_eq!(f64, back.v, -0.4, epsilon = 1e-12));
    }

    #[test]
    fn test_gray_mixes_toward_colored_hue() {
        let gray = CIELCHuvColor {
            l: 0.5,
            c: 0.,
            h: 0.,
        };
        let blue = CIELCHuvColor {
            l: 0.5,
            c: 1.,
            h: 260.,
        };
        let mixed = gray.mix(blue, 0.5);
        assert!(approx_eq!(f64, mixed.h, 260., epsilon = 1e-10));
        assert!(approx_eq!(f64, mixed.c, 0.5, epsilon = 1e-12));
    }
}
