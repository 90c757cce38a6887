//! This file implements what I refer to as HSL but which would precisely be called sHSL: a simple
//! transformation of sRGB that creates a cylindrical space. HSL has the same problems with
//! perceptual uniformity and general unsuitability for exact psychophysically-accurate
//! representation as color as sRGB does, but it does have the advantage of being easy to display on
//! a monitor and having some conception of common color attributes. HSL and HSV are very similar
//! but have an important difference: *value* in HSV runs from black to fully saturated colors,
//! whereas *lightness* in HSL runs from black to fully saturated in the middle to white at the
//! end. This makes the saturation component of HSL extremely inaccurate, because light colors can
//! have a very high saturation even if they are extremely close to white.
//!
//! The hue is hexagonal, exactly as in [`HSVColor`](../hsvcolor/struct.HSVColor.html), and gray
//! gets a hue of 0 degrees even though any hue would do.

use super::hsvcolor::{hexagonal_hue, rgb_extremes};
use crate::color::{Color, RGBColor};
use crate::coord::Coord;
use crate::illuminants::Illuminant;
use crate::mix::{interpolate_hue, normalize_hue, share_hue, Mix};

/// One channel of the HSL inverse. `t` is the channel's own hue as a fraction of a turn, wrapped
/// into [0, 1); `t1` and `t2` are the brightest and darkest the channel can get at this lightness.
fn hsl_channel(t: f64, t1: f64, t2: f64) -> f64 {
    if 6.0 * t < 1.0 {
        t2 + (t1 - t2) * 6.0 * t
    } else if 2.0 * t < 1.0 {
        t1
    } else if 3.0 * t < 2.0 {
        t2 + (t1 - t2) * (2.0 / 3.0 - t) * 6.0
    } else {
        t2
    }
}

/// A color in the HSL color space, a direct transformation of the sRGB space. sHSL is used to
/// distinguish this space from a similar transformation of a different RGB space, which can cause
/// some confusion as other implementations of HSL (such as on the web) omit this distinction.
/// # Example
/// ```
/// # use tincture::prelude::*;
/// # use tincture::colors::HSLColor;
/// // with no saturation, hue doesn't matter
/// let gray = HSLColor{h: 123., s: 0., l: 0.5};
/// assert_eq!(gray.to_rgb(), RGBColor{r: 0.5, g: 0.5, b: 0.5});
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component. Ranges from 0 to 360, as the angle in a cylindrical space. Exactly the same
    /// as the hue component of HSV.
    pub h: f64,
    /// The saturation component. Ranges between 0 and 1. Note that this is much less accurate to
    /// human perception than the chroma or saturation found in other, higher-fidelity color spaces.
    pub s: f64,
    /// The lightness component. Ranges from 0 to 1. Defined in HSL as the average of the largest and
    /// smallest color components in RGB, which sacrifices accuracy for convenience.
    pub l: f64,
}

impl Color for HSLColor {
    fn from_rgb_white_ref(rgb: RGBColor, _illuminant: Illuminant) -> HSLColor {
        let (max, min) = rgb_extremes(rgb);
        let l = (max + min) / 2.0;
        let s = if max == min {
            0.0
        } else if l < 0.5 {
            (max - min) / (max + min)
        } else {
            (max - min) / (2.0 - max - min)
        };
        HSLColor {
            h: hexagonal_hue(rgb, max, min),
            s,
            l,
        }
    }

    fn to_rgb_white_ref(&self, _illuminant: Illuminant) -> RGBColor {
        if self.s == 0.0 {
            return RGBColor {
                r: self.l,
                g: self.l,
                b: self.l,
            };
        }
        let t1 = if self.l < 0.5 {
            self.l * (1.0 + self.s)
        } else {
            self.l + self.s - self.l * self.s
        };
        let t2 = 2.0 * self.l - t1;
        let h = normalize_hue(self.h) / 360.0;
        // red leads by a third of a turn and blue lags by one
        let wrap = |t: f64| {
            if t < 0.0 {
                t + 1.0
            } else if t >= 1.0 {
                t - 1.0
            } else {
                t
            }
        };
        RGBColor {
            r: hsl_channel(wrap(h + 1.0 / 3.0), t1, t2),
            g: hsl_channel(h, t1, t2),
            b: hsl_channel(wrap(h - 1.0 / 3.0), t1, t2),
        }
    }
}

impl Mix for HSLColor {
    fn mix(self, other: HSLColor, t: f64) -> HSLColor {
        let (h1, h2) = share_hue((self.h, self.s == 0.0), (other.h, other.s == 0.0));
        HSLColor {
            h: interpolate_hue(h1, h2, t),
            s: self.s + t * (other.s - self.s),
            l: self.l + t * (other.l - self.l),
        }
    }
}

impl From<Coord> for HSLColor {
    fn from(c: Coord) -> HSLColor {
        HSLColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl From<HSLColor> for Coord {
    fn from(c: HSLColor) -> Coord {
        Coord {
            x: c.h,
            y: c.s,
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
    fn test_hsl_rgb_conversion() {
        let red_rgb = RGBColor {
            r: 1.,
            g: 0.,
            b: 0.,
        };
        let red_hsl: HSLColor = red_rgb.convert();
        assert!(red_hsl.h.abs() <= 0.0001);
        assert!((red_hsl.s - 1.0).abs() <= 0.0001);
        assert!((red_hsl.l - 0.5).abs() <= 0.0001);
        let lavender_hsl = HSLColor {
            h: 245.0,
            s: 0.7,
            l: 0.9,
        };
        let lavender_rgb: RGBColor = lavender_hsl.convert();
        assert_eq!(lavender_rgb.to_string(), "#d7d4f7");
    }

    #[test]
    fn test_hsl_round_trip() {
        for c in sample_colors() {
            let hsl: HSLColor = c.convert();
            assert!(hsl.h >= 0. && hsl.h < 360.);
            assert!(hsl.s >= 0. && hsl.s <= 1. + 1e-12);
            assert!(hsl.to_rgb().distance_rgb(&c) <= 1e-10);
        }
    }

    #[test]
    fn test_gray_ignores_hue() {
        for &h in &[0., 90., 359.9, -45., 1000.] {
            let gray = HSLColor { h, s: 0., l: 0.5 };
            assert_eq!(
                gray.to_rgb(),
                RGBColor {
                    r: 0.5,
                    g: 0.5,
                    b: 0.5
                }
            );
        }
    }

    #[test]
    fn test_hsl_wrapped_hue() {
        let hsl = HSLColor {
            h: 10.,
            s: 0.6,
            l: 0.4,
        };
        let wrapped = HSLColor { h: -350., ..hsl };
        assert!(wrapped.to_rgb().distance_rgb(&hsl.to_rgb()) <= 1e-10);
    }

    #[test]
    fn test_hsl_mix_endpoints() {
        let c1 = HSLColor {
            h: 350.,
            s: 0.5,
            l: 0.5,
        };
        let c2 = HSLColor {
            h: 10.,
            s: 0.7,
            l: 0.3,
        };
        let mid = c1.mix(c2, 0.5);
        assert!(approx_eq!(f64, mid.h, 0., epsilon = 1e-10));
        assert!(approx_eq!(f64, mid.s, 0.6, epsilon = 1e-12));
        assert!(approx_eq!(f64, mid.l, 0.4, epsilon = 1e-12));
    }
}
