//! Color difference metrics. These answer "how different do these two colors look?", which plain
//! Euclidean distance in sRGB answers badly: humans tell apart two greens much more easily than
//! two equally-far-apart blues, for example.
//!
//! The metrics, roughly from cheapest and crudest to most expensive and most accurate, are
//! `distance_rgb` and `distance_riemersma` (on [`RGBColor`] itself), `distance_linear_rgb`,
//! `distance_lab` (also known as CIE76), `distance_luv`, `distance_cie94` and `distance_ciede2000`.
//! The last is the current industry standard, and the one to use unless there's a reason not to.
//!
//! All of the CIELAB-based metrics work with this library's CIELAB scale, where lightness is
//! between 0 and 1, and so give results 100 times smaller than most references quote. A CIEDE2000
//! distance of about 0.01 is a just-noticeable difference.
//!
//! [`RGBColor`]: ../color/struct.RGBColor.html

use crate::color::{Color, RGBColor};
use crate::colors::{CIELABColor, CIELUVColor, LinearRGBColor};
use crate::coord::Coord;

/// The formulas below are written for the usual CIELAB scale.
const LAB_SCALE: f64 = 100.0;

/// The application-dependent parameters of the CIE94 formula. `kl`, `kc` and `kh` divide the
/// lightness, chroma and hue differences; `k1` and `k2` control how fast chroma and hue tolerance
/// grow with the chroma of the first color. The defaults are those for graphic arts.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIE94Weights {
    /// Lightness weight.
    pub kl: f64,
    /// Chroma weight.
    pub kc: f64,
    /// Hue weight.
    pub kh: f64,
    /// Chroma scaling factor.
    pub k1: f64,
    /// Hue scaling factor.
    pub k2: f64,
}

impl CIE94Weights {
    /// The parameters for textiles: lightness differences count half as much.
    pub fn textiles() -> CIE94Weights {
        CIE94Weights {
            kl: 2.0,
            kc: 1.0,
            kh: 1.0,
            k1: 0.048,
            k2: 0.014,
        }
    }
}

impl Default for CIE94Weights {
    fn default() -> CIE94Weights {
        CIE94Weights {
            kl: 1.0,
            kc: 1.0,
            kh: 1.0,
            k1: 0.045,
            k2: 0.015,
        }
    }
}

fn scaled(lab: &CIELABColor) -> (f64, f64, f64) {
    (lab.l * LAB_SCALE, lab.a * LAB_SCALE, lab.b * LAB_SCALE)
}

/// The CIE94 difference between two CIELAB colors. `lab1` is the reference: its chroma sets the
/// tolerances, so swapping the arguments can change the result.
pub fn cie94(lab1: &CIELABColor, lab2: &CIELABColor, weights: CIE94Weights) -> f64 {
    let (l1, a1, b1) = scaled(lab1);
    let (l2, a2, b2) = scaled(lab2);

    let delta_l = l1 - l2;
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let delta_c = c1 - c2;
    // the squared hue difference is whatever's left of the a, b distance after chroma; rounding can
    // push it just under zero
    let delta_h2 = ((a1 - a2).powi(2) + (b1 - b2).powi(2) - delta_c.powi(2)).max(0.0);

    let sl = 1.0;
    let sc = 1.0 + weights.k1 * c1;
    let sh = 1.0 + weights.k2 * c1;

    let v_l = (delta_l / (weights.kl * sl)).powi(2);
    let v_c = (delta_c / (weights.kc * sc)).powi(2);
    let v_h = delta_h2 / (weights.kh * sh).powi(2);
    (v_l + v_c + v_h).sqrt() / LAB_SCALE
}

/// The hue angle used by CIEDE2000, in degrees in [0, 360). A color with no chroma gets 0.
fn ciede2000_hue(b: f64, a_prime: f64) -> f64 {
    if b.abs() < std::f64::EPSILON && a_prime.abs() < std::f64::EPSILON {
        0.0
    } else {
        let h = b.atan2(a_prime).to_degrees();
        if h < 0.0 {
            h + 360.0
        } else {
            h
        }
    }
}

/// The CIEDE2000 difference between two CIELAB colors, with the lightness, chroma and hue weights
/// given explicitly. This follows Sharma, Wu and Dalal's implementation notes, and is symmetric.
pub fn ciede2000(lab1: &CIELABColor, lab2: &CIELABColor, kl: f64, kc: f64, kh: f64) -> f64 {
    let (l1, a1, b1) = scaled(lab1);
    let (l2, a2, b2) = scaled(lab2);
    let pow25_7 = 25.0f64.powi(7);

    // stretch the a axis for low-chroma colors, where CIELAB hue differences are too small
    let c_mean = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
    let g = 0.5 * (1.0 - (c_mean.powi(7) / (c_mean.powi(7) + pow25_7)).sqrt());
    let ap1 = (1.0 + g) * a1;
    let ap2 = (1.0 + g) * a2;
    let cp1 = ap1.hypot(b1);
    let cp2 = ap2.hypot(b2);
    let hp1 = ciede2000_hue(b1, ap1);
    let hp2 = ciede2000_hue(b2, ap2);

    let delta_lp = l2 - l1;
    let delta_cp = cp2 - cp1;
    let cp_product = cp1 * cp2;
    let dhp = if cp_product == 0.0 {
        0.0
    } else if hp2 - hp1 > 180.0 {
        hp2 - hp1 - 360.0
    } else if hp2 - hp1 < -180.0 {
        hp2 - hp1 + 360.0
    } else {
        hp2 - hp1
    };
    let delta_hp = 2.0 * cp_product.sqrt() * (dhp / 2.0).to_radians().sin();

    let lp_mean = (l1 + l2) / 2.0;
    let cp_mean = (cp1 + cp2) / 2.0;
    let hp_mean = if cp_product == 0.0 {
        hp1 + hp2
    } else if (hp1 - hp2).abs() <= 180.0 {
        (hp1 + hp2) / 2.0
    } else if hp1 + hp2 < 360.0 {
        (hp1 + hp2) / 2.0 + 180.0
    } else {
        (hp1 + hp2) / 2.0 - 180.0
    };

    let t = 1.0 - 0.17 * (hp_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hp_mean).to_radians().cos()
        + 0.32 * (3.0 * hp_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hp_mean - 63.0).to_radians().cos();
    let delta_theta = 30.0 * (-((hp_mean - 275.0) / 25.0).powi(2)).exp();
    let rc = 2.0 * (cp_mean.powi(7) / (cp_mean.powi(7) + pow25_7)).sqrt();
    let sl = 1.0 + (0.015 * (lp_mean - 50.0).powi(2)) / (20.0 + (lp_mean - 50.0).powi(2)).sqrt();
    let sc = 1.0 + 0.045 * cp_mean;
    let sh = 1.0 + 0.015 * cp_mean * t;
    let rt = -(2.0 * delta_theta).to_radians().sin() * rc;

    let l_term = delta_lp / (kl * sl);
    let c_term = delta_cp / (kc * sc);
    let h_term = delta_hp / (kh * sh);
    (l_term.powi(2) + c_term.powi(2) + h_term.powi(2) + rt * c_term * h_term).sqrt() / LAB_SCALE
}

impl RGBColor {
    /// Euclidean distance in linear RGB: how different the two colors are as amounts of light.
    pub fn distance_linear_rgb(&self, other: &RGBColor) -> f64 {
        let c1: Coord = LinearRGBColor::from_rgb(*self).into();
        c1.euclidean_distance(&LinearRGBColor::from_rgb(*other).into())
    }

    /// Euclidean distance in CIELAB under D65, the CIE76 color difference. Good enough for many
    /// purposes, although it overstates differences between saturated colors.
    /// # Example
    /// ```
    /// # use tincture::prelude::*;
    /// let red = RGBColor{r: 1., g: 0., b: 0.};
    /// let green = RGBColor{r: 0., g: 1., b: 0.};
    /// assert!((red.distance_lab(&green) - 1.7056).abs() < 1e-4);
    /// ```
    pub fn distance_lab(&self, other: &RGBColor) -> f64 {
        let c1: Coord = CIELABColor::from_rgb(*self).into();
        c1.euclidean_distance(&CIELABColor::from_rgb(*other).into())
    }

    /// Another name for [`distance_lab`](#method.distance_lab).
    pub fn distance_cie76(&self, other: &RGBColor) -> f64 {
        self.distance_lab(other)
    }

    /// Euclidean distance in CIELUV under D65.
    pub fn distance_luv(&self, other: &RGBColor) -> f64 {
        let c1: Coord = CIELUVColor::from_rgb(*self).into();
        c1.euclidean_distance(&CIELUVColor::from_rgb(*other).into())
    }

    /// The CIE94 color difference with the graphic arts defaults. `self` is the reference color, so
    /// `a.distance_cie94(&b)` and `b.distance_cie94(&a)` differ slightly.
    pub fn distance_cie94(&self, other: &RGBColor) -> f64 {
        self.distance_cie94_weighted(other, CIE94Weights::default())
    }

    /// The CIE94 color difference with custom weights.
    pub fn distance_cie94_weighted(&self, other: &RGBColor, weights: CIE94Weights) -> f64 {
        cie94(
            &CIELABColor::from_rgb(*self),
            &CIELABColor::from_rgb(*other),
            weights,
        )
    }

    /// The CIEDE2000 color difference, the most accurate metric this library offers. Symmetric, and
    /// 0 exactly when the colors are the same.
    /// # Example
    /// ```
    /// # use tincture::prelude::*;
    /// let navy = RGBColor::from((0, 0, 128));
    /// let almost_navy = RGBColor::from((0, 0, 129));
    /// // one 8-bit step is well under a just-noticeable difference
    /// assert!(navy.distance_ciede2000(&almost_navy) < 0.01);
    /// ```
    pub fn distance_ciede2000(&self, other: &RGBColor) -> f64 {
        self.distance_ciede2000_klch(other, 1.0, 1.0, 1.0)
    }

    /// CIEDE2000 with explicit lightness, chroma and hue weights. Raising a weight makes
    /// differences in that attribute count for less.
    pub fn distance_ciede2000_klch(&self, other: &RGBColor, kl: f64, kc: f64, kh: f64) -> f64 {
        ciede2000(
            &CIELABColor::from_rgb(*self),
            &CIELABColor::from_rgb(*other),
            kl,
            kc,
            kh,
        )
    }
}
