//! This module provides the reference whites that CIELAB, CIELUV, xyY and their cylindrical forms
//! are computed against. A reference white is the XYZ tristimulus value of whatever the viewer
//! considers "white": the monitor's white point, or a standard daylight. These are normalized so
//! that the Y (luminance) value is 1, matching the scale of [`XYZColor`].
//!
//! Nothing here performs chromatic adaptation. Converting into CIELAB relative to D50 and back out
//! relative to D50 is lossless; mixing whites between the two directions is simply a different
//! conversion, not an adapted one.
//!
//! [`XYZColor`]: ../colors/xyzcolor/struct.XYZColor.html

/// The CIE standard illuminant D65 (noon daylight), the white point of sRGB. This is the default
/// reference white everywhere in Tincture.
pub const D65: [f64; 3] = [0.95047, 1.00000, 1.08883];

/// The CIE standard illuminant D50 (horizon light), the usual white for print work and ICC
/// profiles.
pub const D50: [f64; 3] = [0.96422, 1.00000, 0.82521];

/// A listing of the supported reference whites. The most common ones for computers are D50 and D65,
/// differing kinds of daylight; anything else can be given directly as an XYZ triple.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum Illuminant {
    /// Horizon light, see [`D50`](constant.D50.html).
    D50,
    /// Noon daylight, see [`D65`](constant.D65.html).
    D65,
    /// Represents a white of any given color, as an array [X, Y, Z] in CIE 1931 space. It is used
    /// exactly as given, so it should be normalized to Y = 1 like the named whites.
    Custom([f64; 3]),
}

impl Illuminant {
    /// Gets the XYZ coordinates of the white point value of the illuminant.
    /// # Example
    /// ```
    /// # use tincture::illuminants::{Illuminant, D50};
    /// assert_eq!(Illuminant::D50.white_point(), D50);
    /// assert_eq!(Illuminant::Custom([0.9, 1., 1.1]).white_point(), [0.9, 1., 1.1]);
    /// ```
    pub fn white_point(&self) -> [f64; 3] {
        match *self {
            Illuminant::D50 => D50,
            Illuminant::D65 => D65,
            Illuminant::Custom(xyz) => xyz,
        }
    }

    /// The xy chromaticity of the white point: where it sits on the CIE 1931 chromaticity diagram.
    pub fn chromaticity(&self) -> (f64, f64) {
        let [x, y, z] = self.white_point();
        let sum = x + y + z;
        (x / sum, y / sum)
    }
}

impl Default for Illuminant {
    fn default() -> Illuminant {
        Illuminant::D65
    }
}

impl From<[f64; 3]> for Illuminant {
    fn from(xyz: [f64; 3]) -> Illuminant {
        Illuminant::Custom(xyz)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn test_d65_chromaticity() {
        let (x, y) = Illuminant::D65.chromaticity();
        assert!(approx_eq!(f64, x, 0.3127, epsilon = 1e-4));
        assert!(approx_eq!(f64, y, 0.3290, epsilon = 1e-4));
    }

    #[test]
    fn test_custom_white_passes_through() {
        let white: Illuminant = [0.5, 1.0, 0.25].into();
        assert_eq!(white, Illuminant::Custom([0.5, 1.0, 0.25]));
        assert_eq!(white.white_point(), [0.5, 1.0, 0.25]);
        assert_eq!(Illuminant::default().white_point(), D65);
    }

    #[test]
    fn test_illuminant_json() {
        for white in &[
            Illuminant::D50,
            Illuminant::D65,
            Illuminant::Custom([0.9642, 1.0, 0.8251]),
        ] {
            let json = serde_json::to_string(white).unwrap();
            let back: Illuminant = serde_json::from_str(&json).unwrap();
            assert_eq!(&back, white);
        }
        assert_eq!(
            serde_json::from_str::<Illuminant>("{\"Custom\":[0.5,1.0,0.25]}").unwrap(),
            Illuminant::Custom([0.5, 1.0, 0.25])
        );
    }
}
