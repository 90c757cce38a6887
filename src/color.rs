//! This file defines the [`Color`] trait, the [`RGBColor`] value that every other color space
//! converts through, and the handful of operations that work directly on sRGB without going
//! anywhere else: validity, clamping, cheap distances, the 8-bit and hex encodings, and the
//! tolerance used to decide when two colors are the same for display purposes.
//!
//! [`Color`]: trait.Color.html
//! [`RGBColor`]: struct.RGBColor.html

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::bound::Bound;
use crate::colors::LinearRGBColor;
use crate::coord::Coord;
use crate::gamma::{delinearize_fast, linearize_fast};
use crate::illuminants::Illuminant;

/// The tolerance used when comparing colors with
/// [`almost_equal_rgb`](struct.RGBColor.html#method.almost_equal_rgb): one 8-bit step.
pub const DELTA: f64 = 1.0 / 255.0;

/// A trait that includes any color representation that can be converted to and from sRGB. Several
/// spaces (CIELAB, CIELUV, xyY and the cylindrical forms of the first two) are defined relative to
/// a reference white, so both directions take an [`Illuminant`]; spaces that don't care simply
/// ignore it. The plain `from_rgb` and `to_rgb` use D65, the white of sRGB itself.
///
/// Conversions are exact inverses of each other up to floating-point error as long as the same
/// illuminant is used both ways, but nothing guarantees that an arbitrary point in another space
/// lands inside the sRGB gamut: check [`RGBColor::is_valid`] if that matters.
///
/// [`Illuminant`]: ../illuminants/enum.Illuminant.html
/// [`RGBColor::is_valid`]: struct.RGBColor.html#method.is_valid
/// # Example
/// ```
/// # use tincture::prelude::*;
/// # use tincture::colors::{CIELABColor, HSVColor};
/// let orange = RGBColor{r: 1., g: 0.5, b: 0.};
/// let hsv: HSVColor = orange.convert();
/// assert!((hsv.h - 30.).abs() <= 1e-10);
/// // Lab relative to a print white instead of the screen's
/// let lab = CIELABColor::from_rgb_white_ref(orange, Illuminant::D50);
/// let back = lab.to_rgb_white_ref(Illuminant::D50);
/// assert!(back.almost_equal_rgb(&orange));
/// ```
pub trait Color: Sized {
    /// Converts from sRGB, measuring against the given reference white where the space needs one.
    fn from_rgb_white_ref(rgb: RGBColor, illuminant: Illuminant) -> Self;
    /// Converts back to sRGB, measuring against the given reference white where the space needs
    /// one. The result may fall outside the sRGB gamut.
    fn to_rgb_white_ref(&self, illuminant: Illuminant) -> RGBColor;

    /// Converts from sRGB using the D65 reference white.
    fn from_rgb(rgb: RGBColor) -> Self {
        Self::from_rgb_white_ref(rgb, Illuminant::D65)
    }
    /// Converts to sRGB using the D65 reference white.
    fn to_rgb(&self) -> RGBColor {
        self.to_rgb_white_ref(Illuminant::D65)
    }
    /// Converts between any two color spaces, going through sRGB and using D65 on both sides.
    fn convert<T: Color>(&self) -> T {
        T::from_rgb(self.to_rgb())
    }
    /// Like `convert`, but with the given reference white on both sides.
    fn convert_white_ref<T: Color>(&self, illuminant: Illuminant) -> T {
        T::from_rgb_white_ref(self.to_rgb_white_ref(illuminant), illuminant)
    }
}

/// A color in the standard RGB space used by almost every monitor, image format and web page. The
/// components are gamma-encoded exactly like 8-bit pixel values, but stored as real numbers, so
/// that in-gamut colors have every component between 0 and 1.
///
/// Components may stray outside that range after converting from a space with a larger gamut,
/// like CIELAB. Such colors are perfectly usable for further math, but can't be displayed: see
/// [`is_valid`](#method.is_valid) and [`clamped`](#method.clamped).
/// # Example
/// ```
/// # use tincture::prelude::*;
/// let teal: RGBColor = "#008080".parse().unwrap();
/// assert_eq!(teal.rgb255(), (0, 128, 128));
/// assert_eq!(teal.to_string(), "#008080");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red component. Ranges between 0 and 1 for colors inside the sRGB gamut.
    pub r: f64,
    /// The green component. Ranges between 0 and 1 for colors inside the sRGB gamut.
    pub g: f64,
    /// The blue component. Ranges between 0 and 1 for colors inside the sRGB gamut.
    pub b: f64,
}

impl Color for RGBColor {
    fn from_rgb_white_ref(rgb: RGBColor, _illuminant: Illuminant) -> RGBColor {
        rgb
    }
    fn to_rgb_white_ref(&self, _illuminant: Illuminant) -> RGBColor {
        *self
    }
}

impl RGBColor {
    /// Returns `true` if every component lies in [0, 1], meaning the color can be shown on an sRGB
    /// display as is.
    pub fn is_valid(&self) -> bool {
        let point: Coord = (*self).into();
        RGBColor::in_bounds(point)
    }

    /// Clamps each component into [0, 1]. A color that is already valid comes back unchanged.
    /// # Example
    /// ```
    /// # use tincture::prelude::*;
    /// let hot = RGBColor{r: 1.2, g: 0.5, b: -0.1};
    /// assert!(!hot.is_valid());
    /// assert_eq!(hot.clamped(), RGBColor{r: 1., g: 0.5, b: 0.});
    /// ```
    pub fn clamped(&self) -> RGBColor {
        RGBColor::from(RGBColor::clamp_coord((*self).into()))
    }

    /// The Euclidean distance between the two colors' sRGB components. Cheap, but a poor measure of
    /// how different colors look: prefer [`distance_lab`] or [`distance_ciede2000`].
    ///
    /// [`distance_lab`]: #method.distance_lab
    /// [`distance_ciede2000`]: #method.distance_ciede2000
    pub fn distance_rgb(&self, other: &RGBColor) -> f64 {
        let c1: Coord = (*self).into();
        c1.euclidean_distance(&(*other).into())
    }

    /// The color distance developed by Thiadmer Riemersma: a weighted Euclidean distance in sRGB,
    /// where red and blue differences count for more or less depending on how red the two colors are
    /// on average. It never leaves sRGB, so it costs about as much as `distance_rgb`, while tracking
    /// perceptual difference far better. See <https://www.compuphase.com/cmetric.htm>.
    pub fn distance_riemersma(&self, other: &RGBColor) -> f64 {
        let r_mean = (self.r + other.r) / 2.0;
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        ((2.0 + r_mean) * dr * dr + 4.0 * dg * dg + (2.0 + (1.0 - r_mean)) * db * db).sqrt()
    }

    /// Returns `true` if the two colors are within [`DELTA`](constant.DELTA.html) of each other on
    /// average: in practice, if they would come out as (nearly) the same 8-bit pixel.
    pub fn almost_equal_rgb(&self, other: &RGBColor) -> bool {
        (self.r - other.r).abs() + (self.g - other.g).abs() + (self.b - other.b).abs() < 3.0 * DELTA
    }

    /// Converts to linear RGB with the exact sRGB transfer function. Same as
    /// `convert::<LinearRGBColor>()`.
    pub fn linear_rgb(&self) -> LinearRGBColor {
        LinearRGBColor::from_rgb(*self)
    }

    /// The inverse of [`linear_rgb`](#method.linear_rgb).
    pub fn from_linear_rgb(linear: LinearRGBColor) -> RGBColor {
        linear.to_rgb()
    }

    /// Converts to linear RGB using polynomial approximations of the transfer function instead of
    /// powers. Much faster than `convert::<LinearRGBColor>()` and nearly as accurate, **but only for
    /// valid colors**: outside [0, 1] the approximation falls apart.
    pub fn fast_linear_rgb(&self) -> LinearRGBColor {
        LinearRGBColor {
            r: linearize_fast(self.r),
            g: linearize_fast(self.g),
            b: linearize_fast(self.b),
        }
    }

    /// The inverse of [`fast_linear_rgb`](#method.fast_linear_rgb), with the same caveat: the linear
    /// components must lie in [0, 1].
    pub fn from_fast_linear_rgb(linear: LinearRGBColor) -> RGBColor {
        RGBColor {
            r: delinearize_fast(linear.r),
            g: delinearize_fast(linear.g),
            b: delinearize_fast(linear.b),
        }
    }

    /// Quantizes to 8-bit channels, rounding to nearest. Components outside [0, 1] saturate at 0 or
    /// 255.
    pub fn rgb255(&self) -> (u8, u8, u8) {
        let quantize = |c: f64| (c * 255.0 + 0.5) as u8;
        (quantize(self.r), quantize(self.g), quantize(self.b))
    }

    /// Gets the HTML-style hex code for this color, like `#ff0080`, after 8-bit quantization.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.rgb255();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Parses an HTML-style hex code. Both the six-digit `#ff1034` form and the three-digit `#f0c`
    /// shorthand are accepted, in either case. In the shorthand each digit is scaled by 1/15, so
    /// `#f0c` is exactly `#ff00cc`.
    /// # Errors
    /// Returns `RGBParseError::InvalidHexSyntax` for anything else, including a missing `#`.
    /// # Example
    /// ```
    /// # use tincture::prelude::*;
    /// let magenta = RGBColor::from_hex_code("#f0c").unwrap();
    /// assert_eq!(magenta.rgb255(), (255, 0, 204));
    /// assert!(RGBColor::from_hex_code("ff00cc").is_err());
    /// ```
    pub fn from_hex_code(hex: &str) -> Result<RGBColor, RGBParseError> {
        lazy_static! {
            static ref HEX_CODE: Regex =
                Regex::new(r"^#(?:([[:xdigit:]]{3})|([[:xdigit:]]{6}))$").unwrap();
        }
        let caps = HEX_CODE
            .captures(hex)
            .ok_or(RGBParseError::InvalidHexSyntax)?;
        // one digit per channel scales by 1/15, two by 1/255
        let (digits, width, scale) = match (caps.get(1), caps.get(2)) {
            (Some(short), _) => (short.as_str(), 1, 15.0),
            (_, Some(long)) => (long.as_str(), 2, 255.0),
            _ => return Err(RGBParseError::InvalidHexSyntax),
        };
        let mut channels = [0.; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            let value = u8::from_str_radix(&digits[i * width..(i + 1) * width], 16)
                .map_err(|_| RGBParseError::InvalidHexSyntax)?;
            *channel = f64::from(value) / scale;
        }
        Ok(RGBColor {
            r: channels[0],
            g: channels[1],
            b: channels[2],
        })
    }
}

/// An error in parsing a hex code into an [`RGBColor`](struct.RGBColor.html).
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum RGBParseError {
    /// The string wasn't a `#` followed by exactly three or six hexadecimal digits.
    InvalidHexSyntax,
}

impl fmt::Display for RGBParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RGBParseError::InvalidHexSyntax => {
                write!(f, "invalid hex code: expected #rgb or #rrggbb")
            }
        }
    }
}

impl Error for RGBParseError {}

impl FromStr for RGBColor {
    type Err = RGBParseError;

    fn from_str(s: &str) -> Result<RGBColor, RGBParseError> {
        RGBColor::from_hex_code(s)
    }
}

/// Displays the color as its lowercase hex code.
impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        let (r, g, b) = rgb;
        RGBColor {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl From<RGBColor> for Coord {
    fn from(c: RGBColor) -> Coord {
        Coord {
            x: c.r,
            y: c.g,
            z: c.b,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    #[allow(unused_imports)]
    use super::*;

    /// An even grid over the sRGB cube, with a few extra points near black where the transfer
    /// function and the CIE companding switch branches.
    pub(crate) fn sample_colors() -> Vec<RGBColor> {
        let steps: Vec<f64> = (0..=8)
            .map(|i| f64::from(i) / 8.)
            .chain(vec![0.01, 0.03, 0.97])
            .collect();
        let mut colors = Vec::new();
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    colors.push(RGBColor { r, g, b });
                }
            }
        }
        colors
    }

    #[test]
    fn test_validity_and_clamping() {
        let inside = RGBColor {
            r: 0.,
            g: 0.5,
            b: 1.,
        };
        assert!(inside.is_valid());
        assert_eq!(inside.clamped(), inside);
        let outside = RGBColor {
            r: -0.25,
            g: 0.5,
            b: 1.75,
        };
        assert!(!outside.is_valid());
        let clamped = outside.clamped();
        assert!(clamped.is_valid());
        assert_eq!(
            clamped,
            RGBColor {
                r: 0.,
                g: 0.5,
                b: 1.
            }
        );
    }

    #[test]
    fn test_rgb_distances_symmetric() {
        let colors = sample_colors();
        for (c1, c2) in colors.iter().zip(colors.iter().rev()) {
            assert_eq!(c1.distance_rgb(c2), c2.distance_rgb(c1));
            assert!((c1.distance_riemersma(c2) - c2.distance_riemersma(c1)).abs() <= 1e-12);
            assert_eq!(c1.distance_rgb(c1), 0.);
            assert_eq!(c1.distance_riemersma(c1), 0.);
        }
    }

    #[test]
    fn test_riemersma_weights() {
        let red = RGBColor {
            r: 1.,
            g: 0.,
            b: 0.,
        };
        let black = RGBColor {
            r: 0.,
            g: 0.,
            b: 0.,
        };
        // mean red of 0.5: sqrt(2.5)
        assert!((red.distance_riemersma(&black) - 2.5f64.sqrt()).abs() <= 1e-12);
        let green = RGBColor {
            r: 0.,
            g: 1.,
            b: 0.,
        };
        assert!((green.distance_riemersma(&black) - 2.).abs() <= 1e-12);
    }

    #[test]
    fn test_almost_equal() {
        for c in sample_colors() {
            assert!(c.almost_equal_rgb(&c));
        }
        let c1 = RGBColor {
            r: 0.5,
            g: 0.5,
            b: 0.5,
        };
        let c2 = RGBColor {
            r: 0.5 + 1.5 / 255.,
            g: 0.5 - 1.5 / 255.,
            b: 0.5 + 1.5 / 255.,
        };
        assert!(!c1.almost_equal_rgb(&c2));
        let c3 = RGBColor {
            r: 0.5 + 0.5 / 255.,
            g: 0.5,
            b: 0.5 - 0.5 / 255.,
        };
        assert!(c1.almost_equal_rgb(&c3));
    }

    #[test]
    fn test_hex_round_trip() {
        let red = RGBColor {
            r: 1.,
            g: 0.,
            b: 0.,
        };
        assert_eq!(red.to_hex(), "#ff0000");
        assert_eq!("#ff0000".parse::<RGBColor>(), Ok(red));
        let pink: RGBColor = "#FF0080".parse().unwrap();
        assert_eq!(pink.to_string(), "#ff0080");
        assert_eq!(pink.rgb255(), (255, 0, 128));
    }

    #[test]
    fn test_hex_parse_errors() {
        for bad in &["", "#", "#ff00", "#ff00zz", "ff0000", "#ff0000ff", " #ff0000"] {
            assert_eq!(
                RGBColor::from_hex_code(bad),
                Err(RGBParseError::InvalidHexSyntax)
            );
        }
    }

    #[test]
    fn test_rgb255_rounding() {
        // quantization rounds half up, saturating outside the gamut
        let c = RGBColor {
            r: 0.5,
            g: -0.2,
            b: 1.3,
        };
        assert_eq!(c.rgb255(), (128, 0, 255));
        assert_eq!(RGBColor::from((0, 128, 255)).rgb255(), (0, 128, 255));
    }

    #[test]
    fn test_fast_linear_rgb_round_trip() {
        // errors compound near black, where delinearizing is steepest, so stay away from it
        for c in sample_colors() {
            if c.r < 0.1 || c.g < 0.1 || c.b < 0.1 {
                continue;
            }
            let back = RGBColor::from_fast_linear_rgb(c.fast_linear_rgb());
            assert!(back.almost_equal_rgb(&c));
        }
    }

    #[test]
    fn test_rgb_json() {
        let color = RGBColor {
            r: 0.1,
            g: 0.7,
            b: 1.0 / 3.0,
        };
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(serde_json::from_str::<RGBColor>(&json).unwrap(), color);
        let parsed: RGBColor = serde_json::from_str(r#"{"r": 1.0, "g": 0.5, "b": 0.0}"#).unwrap();
        assert_eq!(parsed.to_string(), "#ff8000");
    }
}
