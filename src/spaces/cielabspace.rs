//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). CIELAB has an L value for
//! lightness and two opponent color axes for chromaticity, and is built so that equal distances
//! look roughly equally different. Formally the three values are called L\*, a\* and b\*.
//!
//! The RGB side here is a simple gamma-2.2 RGB with sRGB primaries, and the white point is D65.
//! Going from RGB to CIELAB never clamps. Coming back, the linear RGB values are clamped to [0, 1]
//! before the gamma curve is undone, so colors outside of the RGB gamut land on its surface instead
//! of producing NaN from the power of a negative number.

use rulinalg::vector::Vector;

use crate::bound::Bound;
use crate::color::ColorSpace;
use crate::consts::{CIE_E, CIE_K, LAB_GAMMA, LAB_WHITE_POINT, SRGB_TO_XYZ, XYZ_TO_SRGB};
use crate::coord::Coord;
use crate::error::ColorSpaceError;
use crate::spaces::RGBSpace;

/// The CIELAB color space with a D65 white point. Triples are L\* (0 for black to 100 for white),
/// then a\* and b\*, which by convention lie roughly between -128 and 128.
///
/// # Example
/// ```
/// # use chsv::prelude::*;
/// let white = LABSpace.from_rgb(Coord::new(1., 1., 1.));
/// assert!((white.x - 100.).abs() <= 1e-3);
/// assert!(white.y.abs() <= 1e-3);
/// assert!(white.z.abs() <= 1e-3);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct LABSpace;

// The CIE transfer function: a cube root, with a linear piece near 0 so the slope stays finite.
fn lab_f(t: f64) -> f64 {
    if t > CIE_E {
        t.cbrt()
    } else {
        (CIE_K * t + 16.) / 116.
    }
}

// Inverse of `lab_f` for the a* and b* axes.
fn lab_f_inv(f: f64) -> f64 {
    let cubed = f * f * f;
    if cubed > CIE_E {
        cubed
    } else {
        (116. * f - 16.) / CIE_K
    }
}

impl ColorSpace for LABSpace {
    fn name(&self) -> &'static str {
        "CIELAB"
    }

    fn from_rgb(&self, rgb: Coord) -> Coord {
        let linear = Vector::new(vec![
            rgb.x.powf(LAB_GAMMA),
            rgb.y.powf(LAB_GAMMA),
            rgb.z.powf(LAB_GAMMA),
        ]);
        let xyz = &*SRGB_TO_XYZ * linear;

        let fx = lab_f(xyz[0] / LAB_WHITE_POINT[0]);
        let fy = lab_f(xyz[1] / LAB_WHITE_POINT[1]);
        let fz = lab_f(xyz[2] / LAB_WHITE_POINT[2]);

        // the nonlinearity is done, so these are just linear combinations
        // note how a and b are opponent color axes
        Coord {
            x: 116. * fy - 16.,
            y: 500. * (fx - fy),
            z: 200. * (fy - fz),
        }
    }

    fn to_rgb(&self, color: Coord) -> Result<Coord, ColorSpaceError> {
        let (l, a, b) = (color.x, color.y, color.z);
        let fy = (l + 16.) / 116.;
        let fx = a / 500. + fy;
        let fz = fy - b / 200.;

        let xr = lab_f_inv(fx);
        // y is recovered from L directly, which avoids the round trip through fy
        let yr = if l > CIE_K * CIE_E {
            fy * fy * fy
        } else {
            l / CIE_K
        };
        let zr = lab_f_inv(fz);

        let xyz = Vector::new(vec![
            xr * LAB_WHITE_POINT[0],
            yr * LAB_WHITE_POINT[1],
            zr * LAB_WHITE_POINT[2],
        ]);
        let linear = &*XYZ_TO_SRGB * xyz;
        let clamped = RGBSpace::clamp(Coord::new(linear[0], linear[1], linear[2]));
        Ok(clamped.map(|c| c.powf(1. / LAB_GAMMA)))
    }
}

impl Bound for LABSpace {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 100.), (-128., 128.), (-128., 128.)]
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_white_point() {
        let white = LABSpace.from_rgb(Coord::new(1., 1., 1.));
        assert!(white.max_abs_difference(&Coord::new(100., 0., 0.)) <= 1e-3);
    }

    #[test]
    fn test_black() {
        let black = LABSpace.from_rgb(Coord::new(0., 0., 0.));
        assert!(black.max_abs_difference(&Coord::new(0., 0., 0.)) <= 1e-9);
        let back = LABSpace.to_rgb(black).unwrap();
        assert!(back.max_abs_difference(&Coord::new(0., 0., 0.)) <= 1e-9);
    }

    #[test]
    fn test_opponent_axes() {
        // red sits on the positive a* side, blue on the negative b* side
        let red = LABSpace.from_rgb(Coord::new(1., 0., 0.));
        assert!(red.y > 50.);
        let blue = LABSpace.from_rgb(Coord::new(0., 0., 1.));
        assert!(blue.z < -50.);
        let gray = LABSpace.from_rgb(Coord::new(0.5, 0.5, 0.5));
        assert!(gray.y.abs() <= 1e-3 && gray.z.abs() <= 1e-3);
        assert!(gray.x > 0. && gray.x < 100.);
    }

    #[test]
    fn test_round_trip() {
        let mut rng = ChaCha8Rng::seed_from_u64(2200);
        for _ in 0..2000 {
            let rgb = Coord::new(
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
            );
            let back = LABSpace.to_rgb(LABSpace.from_rgb(rgb)).unwrap();
            assert!(
                back.max_abs_difference(&rgb) <= 1e-4,
                "{:?} came back as {:?}",
                rgb,
                back
            );
        }
    }

    #[test]
    fn test_round_trip_near_black_channels() {
        // a channel at or near 0 next to a bright one is where matrix error shows up most
        let steps = [0., 0.001, 0.005, 0.25, 0.5, 1.];
        let mut worst = 0f64;
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let rgb = Coord::new(r, g, b);
                    let back = LABSpace.to_rgb(LABSpace.from_rgb(rgb)).unwrap();
                    worst = worst.max(back.max_abs_difference(&rgb));
                }
            }
        }
        assert!(worst <= 1e-4, "worst drift {}", worst);

        let corners = [
            [1., 0., 0.],
            [0., 1., 0.],
            [0., 0., 1.],
            [1., 1., 0.],
            [0., 1., 1.],
            [1., 0., 1.],
            [0., 0., 0.],
            [1., 1., 1.],
            [0.001, 0., 1.],
        ];
        for &c in &corners {
            let rgb = Coord::from(c);
            let back = LABSpace.to_rgb(LABSpace.from_rgb(rgb)).unwrap();
            assert!(back.max_abs_difference(&rgb) <= 1e-4, "{:?} came back as {:?}", rgb, back);
        }
    }

    #[test]
    fn test_dark_colors_use_linear_branch() {
        // small enough that every channel ends up below the transfer threshold
        let dark = Coord::new(0.05, 0.04, 0.06);
        let lab = LABSpace.from_rgb(dark);
        assert!(lab.x < CIE_K * CIE_E);
        let back = LABSpace.to_rgb(lab).unwrap();
        assert!(back.max_abs_difference(&dark) <= 1e-4);
    }

    #[test]
    fn test_out_of_gamut_is_clamped() {
        let rgb = LABSpace.to_rgb(Coord::new(50., 120., -120.)).unwrap();
        assert!(rgb.is_finite());
        assert!(RGBSpace::in_bounds(rgb));
        // at least one channel had to be pinned to the edge
        assert!([rgb.x, rgb.y, rgb.z].iter().any(|&c| c == 0. || c == 1.));
    }
}
