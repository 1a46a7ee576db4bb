//! Constants used for CIELAB conversion. The matrices are kept as `rulinalg` matrices and built once,
//! so that conversions are plain matrix-vector products and the forward and inverse matrices can be
//! checked against each other.

use rulinalg::matrix::Matrix;

/// The gamma applied to each RGB channel before the linear transform to XYZ.
pub const LAB_GAMMA: f64 = 2.2;

/// The D65 reference white, as X, Y and Z normalized so that Y is 1.
pub const LAB_WHITE_POINT: [f64; 3] = [0.95047, 1.00000, 1.08883];

/// The CIE threshold between the linear and cube-root parts of the L\*a\*b\* transfer function.
pub const CIE_E: f64 = 216.0 / 24389.0;

/// The slope of the linear part of the L\*a\*b\* transfer function.
pub const CIE_K: f64 = 24389.0 / 27.0;

lazy_static! {
    /// sRGB to XYZ using the D65 illuminant. Coefficients from Bruce Lindbloom
    /// (http://www.brucelindbloom.com).
    pub static ref SRGB_TO_XYZ: Matrix<f64> = matrix![0.4124564, 0.3575761, 0.1804375;
                                                      0.2126729, 0.7151522, 0.0721750;
                                                      0.0193339, 0.1191920, 0.9503041];

    /// XYZ to sRGB using the D65 illuminant: the exact inverse of `SRGB_TO_XYZ`, carried to full
    /// f64 precision. The rounded 7-digit matrix that is usually published leaves a residual of
    /// about 1e-7, which the inverse gamma blows up to almost 1e-3 for channels near 0.
    pub static ref XYZ_TO_SRGB: Matrix<f64> = matrix![ 3.2404548360214083, -1.5371388501025751, -0.4985315468684809;
                                                      -0.9692663898756537,  1.8760109288424913,  0.041556082346673524;
                                                       0.05564341960421366, -0.20402585426769815, 1.0572251624579287];
}

/// The precision used when checking conversions that should be exact up to floating-point error.
#[cfg(test)]
pub const TEST_PRECISION: f64 = 1e-6;
