//! Describes colors that can be interpolated with other colors in their own 3D space. Mixing, in
//! this context, is walking a fraction `t` of the way from one color's projection to another's:
//! `t = 0` gives back the first color and `t = 1` the second.
//!
//! Note that there is one very crucial thing to remember about mixing: it differs depending on the
//! color space being used. Blending red and green in sRGB gives a muddy olive, in linear RGB a
//! brighter yellow, and in CIEHCL a clean orange. For this reason, `a.mix(b, t)` is only allowed if
//! `a` and `b` share a type, and [`RGBColor`] has one `blend_*` method per space to make the choice
//! explicit.
//!
//! Especially note that color mixing as one thinks of with paints or other subtractive mixtures will
//! almost definitely not agree with any of these, because computer monitors use additive mixing
//! while pigments use subtractive mixing. Yellow mixed with blue in most spaces here is gray, not
//! green.
//!
//! [`RGBColor`]: ../color/struct.RGBColor.html

use crate::color::{Color, RGBColor};
use crate::colors::{
    CIEHCLColor, CIELABColor, CIELCHuvColor, CIELUVColor, HSLColor, HSVColor, LinearRGBColor,
};
use crate::coord::Coord;

/// A color space with its own notion of a straight path between two colors.
pub trait Mix: Color + Copy {
    /// Returns the color a fraction `t` of the way from `self` to `other`. `t` is normally in
    /// [0, 1], but nothing stops extrapolation.
    fn mix(self, other: Self, t: f64) -> Self;
}

/// Wraps an angle in degrees into [0, 360).
pub fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // tiny negative inputs round up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Interpolates between two angles in degrees along the shorter arc, returning a result in
/// [0, 360). When the two are exactly opposite, the path goes through increasing angles.
/// # Example
/// ```
/// # use tincture::mix::interpolate_hue;
/// assert_eq!(interpolate_hue(350., 10., 0.5), 0.);
/// assert_eq!(interpolate_hue(10., 350., 0.25), 5.);
/// ```
pub fn interpolate_hue(a0: f64, a1: f64, t: f64) -> f64 {
    let delta = ((a1 - a0) % 360.0 + 540.0) % 360.0 - 180.0;
    normalize_hue(a0 + t * delta)
}

/// Component-wise linear interpolation through `Coord`, for spaces where that's all mixing is.
pub(crate) fn lerp<T: From<Coord> + Into<Coord>>(a: T, b: T, t: f64) -> T {
    let c1: Coord = a.into();
    T::from(c1.lerp(&b.into(), t))
}

/// Takes a pair of (hue, achromatic) endpoints. If exactly one is achromatic its hue means nothing,
/// so it takes the other's.
pub(crate) fn share_hue(first: (f64, bool), second: (f64, bool)) -> (f64, f64) {
    match (first, second) {
        ((_, true), (h2, false)) => (h2, h2),
        ((h1, false), (_, true)) => (h1, h1),
        ((h1, _), (h2, _)) => (h1, h2),
    }
}

impl Mix for RGBColor {
    fn mix(self, other: RGBColor, t: f64) -> RGBColor {
        lerp(self, other, t)
    }
}

impl RGBColor {
    /// Blends with another color in any space that supports mixing, converting both there and the
    /// result back with the D65 white. Nothing is clamped: the result can be out of gamut, and for
    /// the cylindrical spaces often is.
    /// # Example
    /// ```
    /// # use tincture::prelude::*;
    /// # use tincture::colors::CIELABColor;
    /// let red = RGBColor{r: 1., g: 0., b: 0.};
    /// let blue = RGBColor{r: 0., g: 0., b: 1.};
    /// let purple = red.blend_in::<CIELABColor>(&blue, 0.5);
    /// assert!(purple.almost_equal_rgb(&red.blend_lab(&blue, 0.5)));
    /// assert!(red.blend_in::<CIELABColor>(&blue, 0.).almost_equal_rgb(&red));
    /// ```
    pub fn blend_in<T: Mix>(&self, other: &RGBColor, t: f64) -> RGBColor {
        let c1: T = self.convert();
        let c2: T = other.convert();
        c1.mix(c2, t).to_rgb()
    }

    /// Blends per channel in sRGB. Fast and usually muddy in the middle.
    pub fn blend_rgb(&self, other: &RGBColor, t: f64) -> RGBColor {
        self.mix(*other, t)
    }

    /// Blends in linear RGB: the physically right way to mix light, and brighter in the middle
    /// than `blend_rgb`.
    pub fn blend_linear_rgb(&self, other: &RGBColor, t: f64) -> RGBColor {
        self.blend_in::<LinearRGBColor>(other, t)
    }

    /// Blends in CIELAB, which gives perceptually even steps in lightness.
    pub fn blend_lab(&self, other: &RGBColor, t: f64) -> RGBColor {
        self.blend_in::<CIELABColor>(other, t)
    }

    /// Blends in CIELUV.
    pub fn blend_luv(&self, other: &RGBColor, t: f64) -> RGBColor {
        self.blend_in::<CIELUVColor>(other, t)
    }

    /// Blends in CIEHCL, taking the shorter way around the hue circle. This gives the most vivid
    /// intermediate colors of any blend here, often so vivid they fall outside sRGB, so the result
    /// is clamped.
    /// # Example
    /// ```
    /// # use tincture::prelude::*;
    /// let red = RGBColor{r: 1., g: 0., b: 0.};
    /// let cyan = RGBColor{r: 0., g: 1., b: 1.};
    /// assert!(red.blend_hcl(&cyan, 0.5).is_valid());
    /// ```
    pub fn blend_hcl(&self, other: &RGBColor, t: f64) -> RGBColor {
        self.blend_in::<CIEHCLColor>(other, t).clamped()
    }

    /// Blends in CIELCHuv, the polar form of CIELUV.
    pub fn blend_luv_lch(&self, other: &RGBColor, t: f64) -> RGBColor {
        self.blend_in::<CIELCHuvColor>(other, t)
    }

    /// Blends in HSV. Hue takes the short way around; value and saturation are interpolated
    /// linearly, which isn't perceptually even at all.
    pub fn blend_hsv(&self, other: &RGBColor, t: f64) -> RGBColor {
        self.blend_in::<HSVColor>(other, t)
    }

    /// Blends in HSL, with the same hue handling as `blend_hsv`.
    pub fn blend_hsl(&self, other: &RGBColor, t: f64) -> RGBColor {
        self.blend_in::<HSLColor>(other, t)
    }
}
