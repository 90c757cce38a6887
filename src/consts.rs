//! This file provides constants that are used for matrix multiplication and color space conversion,
//! along with the empirically-chosen thresholds that keep hue computations stable near the neutral
//! axis. The two sRGB matrices are kept at full double precision so that converting to XYZ and back
//! doesn't let errors slowly creep in even when doing things that should not change the result at
//! all.

use rulinalg::matrix::Matrix;

lazy_static! {
    /// Linear sRGB to CIE XYZ, using the sRGB primaries and the D65 white.
    pub(crate) static ref LINEAR_RGB_TO_XYZ: Matrix<f64> = Matrix::new(
        3,
        3,
        vec![
            0.41239079926595948,
            0.35758433938387796,
            0.18048078840183429,
            0.21263900587151036,
            0.71516867876775593,
            0.072192315360733715,
            0.019330818715591851,
            0.11919477979462599,
            0.95053215224966058,
        ],
    );
    /// CIE XYZ to linear sRGB: the inverse of the above, to working precision.
    pub(crate) static ref XYZ_TO_LINEAR_RGB: Matrix<f64> = Matrix::new(
        3,
        3,
        vec![
            3.2409699419045214,
            -1.5373831775700935,
            -0.49861076029300328,
            -0.96924363628087983,
            1.8759675015077207,
            0.041555057407175613,
            0.055630079696993609,
            -0.20397695888897657,
            1.0569715142428786,
        ],
    );
}

/// Below this, an X + Y + Z sum or a y chromaticity counts as zero in xyY conversion.
pub(crate) const XYY_EPSILON: f64 = 1e-14;

/// Opponent coordinates (a, b or u, v) this close to zero and to each other give a hue of 0.
pub(crate) const HUE_EPSILON: f64 = 1e-4;

/// At or below this chroma, an HCL or LuvLCh color's hue is noise when blending.
pub(crate) const CHROMA_EPSILON: f64 = 0.00015;

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use rulinalg::matrix::BaseMatrix;

    #[test]
    fn test_matrices_are_inverses() {
        // &* needed because lazy_static wraps the matrices in a type that derefs to them
        let product = &*XYZ_TO_LINEAR_RGB * &*LINEAR_RGB_TO_XYZ;
        let identity: Matrix<f64> = Matrix::identity(3);
        for (got, expected) in product.iter().zip(identity.iter()) {
            assert!((got - expected).abs() <= 1e-12);
        }
    }

    #[test]
    fn test_white_maps_to_d65() {
        // linear white is the sum of the matrix rows: D65 up to the precision of the matrix
        let white = &*LINEAR_RGB_TO_XYZ * vector![1., 1., 1.];
        assert!((white[0] - 0.95047).abs() <= 1e-4);
        assert!((white[1] - 1.).abs() <= 1e-10);
        assert!((white[2] - 1.08883).abs() <= 1e-3);
    }
}
