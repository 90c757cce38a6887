//! The sRGB transfer function: the gamma curve that maps stored, perceptually-spaced sRGB values to
//! linear light intensity and back. Everything physical (XYZ, and through it CIELAB and CIELUV)
//! happens in linear light, so every conversion out of [`RGBColor`] starts here.
//!
//! There are two versions of each direction. The exact ones follow the piecewise definition in IEC
//! 61966-2-1: a short linear segment near black and a power law elsewhere. The fast ones replace
//! each with fitted polynomials, avoiding `powf` entirely. They are only fitted on [0, 1], where
//! they stay within about 0.006 of the exact curve; outside that range they diverge quickly.
//!
//! [`RGBColor`]: ../color/struct.RGBColor.html

/// The largest error of [`linearize_fast`] and [`delinearize_fast`] against the exact curves, for
/// inputs in [0, 1].
///
/// [`linearize_fast`]: fn.linearize_fast.html
/// [`delinearize_fast`]: fn.delinearize_fast.html
pub const FAST_TOLERANCE: f64 = 0.006;

/// Converts a gamma-encoded sRGB component to linear light.
/// # Example
/// ```
/// # use tincture::gamma::linearize;
/// assert!((linearize(0.5) - 0.21404).abs() < 1e-5);
/// assert_eq!(linearize(1.), 1.);
/// ```
pub fn linearize(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts a linear light component back to gamma-encoded sRGB. The exact inverse of
/// [`linearize`](fn.linearize.html).
pub fn delinearize(v: f64) -> f64 {
    if v <= 0.0031308 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

/// A polynomial approximation of [`linearize`](fn.linearize.html), fitted over [0, 1].
pub fn linearize_fast(v: f64) -> f64 {
    let v1 = v - 0.5;
    let v2 = v1 * v1;
    let v3 = v2 * v1;
    let v4 = v2 * v2;
    -0.248750514614486 + 0.925583310193438 * v + 1.16740237321695 * v2 + 0.280457026598666 * v3
        - 0.0757991963780179 * v4
}

/// A polynomial approximation of [`delinearize`](fn.delinearize.html), fitted over [0, 1]. The
/// fractional root bends much harder near 0 than anywhere else, so one polynomial can't cover it:
/// the range is split in three, each with its own fit.
pub fn delinearize_fast(v: f64) -> f64 {
    let (center, coefs) = if v > 0.2 {
        (
            0.6,
            [
                0.442430344268235,
                0.592178981271708,
                -0.287864782562636,
                0.253214392068985,
                -0.272557158129811,
                0.325554383321718,
            ],
        )
    } else if v > 0.03 {
        (
            0.115,
            [
                0.194915592891669,
                1.55227076330229,
                -3.93691860257828,
                18.0679839248761,
                -101.468750302746,
                632.341487393927,
            ],
        )
    } else {
        // you can clearly see from the constants that the low end is highly nonlinear
        (
            0.015,
            [
                0.0519565234928877,
                5.09316778537561,
                -99.0338180489702,
                3484.52322764895,
                -150028.083412663,
                7168008.42971613,
            ],
        )
    };
    let v1 = v - center;
    let v2 = v1 * v1;
    let v3 = v2 * v1;
    let v4 = v2 * v2;
    let v5 = v3 * v2;
    coefs[0] + coefs[1] * v + coefs[2] * v2 + coefs[3] * v3 + coefs[4] * v4 + coefs[5] * v5
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::approx_eq;

    fn samples() -> impl Iterator<Item = f64> {
        (0..=1000).map(|i| f64::from(i) / 1000.)
    }

    #[test]
    fn test_delinearize_inverts_linearize() {
        for v in samples() {
            assert!(approx_eq!(f64, delinearize(linearize(v)), v, epsilon = 1e-12));
            assert!(approx_eq!(f64, linearize(delinearize(v)), v, epsilon = 1e-12));
        }
    }

    #[test]
    fn test_piecewise_segments_meet() {
        // both branches agree at the breakpoints, so there's no visible seam
        let lin_below = 0.04045 / 12.92;
        let lin_above = ((0.04045f64 + 0.055) / 1.055).powf(2.4);
        assert!((lin_below - lin_above).abs() <= 1e-6);
        let delin_below = 12.92 * 0.0031308;
        let delin_above = 1.055 * 0.0031308f64.powf(1.0 / 2.4) - 0.055;
        assert!((delin_below - delin_above).abs() <= 1e-6);
    }

    #[test]
    fn test_fast_linearize_close_to_exact() {
        for v in samples() {
            assert!((linearize_fast(v) - linearize(v)).abs() < FAST_TOLERANCE);
        }
    }

    #[test]
    fn test_fast_delinearize_close_to_exact() {
        for v in samples() {
            assert!((delinearize_fast(v) - delinearize(v)).abs() < FAST_TOLERANCE);
        }
    }
}
