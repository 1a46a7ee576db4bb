//! CHSV: HSV with its hue and saturation laid out as a point in the plane instead of an angle and a
//! radius, after the hue has been bent by a calibration curve.
//!
//! Plain HSV hues aren't spread evenly to the eye: the greens take up far more of the circle than
//! the oranges, for instance. CHSV runs each hue through a fitted [`PiecewisePolynomial`] first, so
//! that equal angles look more equally different, and then stores the result as Cartesian
//! coordinates scaled by saturation. Grays all land on the origin, and nearby colors are nearby
//! points, with no seam at 0/360 degrees.
//!
//! The remap isn't inverted, so CHSV is a one-way space: [`ColorSpace::to_rgb`] always fails.

use std::sync::Arc;

use crate::bound::Bound;
use crate::color::ColorSpace;
use crate::coord::Coord;
use crate::error::ColorSpaceError;
use crate::polynomial::PiecewisePolynomial;
use crate::spaces::HSVSpace;

/// The CHSV color space. Triples are `(s cos θ, -s sin θ, v)`, where `s` and `v` are HSV saturation
/// and value and `θ` is the remapped hue.
///
/// The calibration table is shared, not copied: cloning a `CHSVSpace` or building several from the
/// same `Arc` reuses one table, and since the table never changes the space can be used from any
/// number of threads at once.
///
/// # Example
/// With the identity remap, CHSV is just HSV in Cartesian form.
///
/// ```
/// # use chsv::prelude::*;
/// let chsv = CHSVSpace::new(PiecewisePolynomial::identity());
/// // pure green: hue 120, full saturation and value
/// let green = chsv.from_rgb(Coord::new(0., 1., 0.));
/// assert!((green.x - (-0.5)).abs() <= 1e-9);
/// assert!((green.y - (-(3f64.sqrt()) / 2.)).abs() <= 1e-9);
/// assert!((green.z - 1.).abs() <= 1e-9);
/// assert!(chsv.to_rgb(green).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CHSVSpace {
    remap: Arc<PiecewisePolynomial>,
}

impl CHSVSpace {
    /// Creates the space from a hue calibration table. The table maps a hue, as a fraction of a full
    /// turn, to the remapped hue as a fraction of a full turn.
    pub fn new<P: Into<Arc<PiecewisePolynomial>>>(remap: P) -> CHSVSpace {
        CHSVSpace {
            remap: remap.into(),
        }
    }

    /// The shared calibration table.
    pub fn remap(&self) -> &Arc<PiecewisePolynomial> {
        &self.remap
    }

    /// Remaps an HSV hue, in degrees, to the angle CHSV uses, also in degrees. The table is
    /// evaluated on the hue as a fraction of a full turn.
    pub fn remapped_hue(&self, hue: f64) -> f64 {
        360. * self.remap.eval_at(hue / 360.)
    }
}

impl ColorSpace for CHSVSpace {
    fn name(&self) -> &'static str {
        "CHSV"
    }

    fn from_rgb(&self, rgb: Coord) -> Coord {
        let hsv = HSVSpace.from_rgb(rgb);
        let (saturation, value) = (hsv.y, hsv.z);
        let angle = self.remapped_hue(hsv.x).to_radians();
        Coord {
            x: saturation * angle.cos(),
            y: -saturation * angle.sin(),
            z: value,
        }
    }

    fn to_rgb(&self, _color: Coord) -> Result<Coord, ColorSpaceError> {
        Err(ColorSpaceError::UnsupportedOperation {
            space: self.name(),
            operation: "to_rgb",
        })
    }
}

impl Bound for CHSVSpace {
    fn bounds() -> [(f64, f64); 3] {
        [(-1., 1.), (-1., 1.), (0., 1.)]
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::calibration;
    use crate::consts::TEST_PRECISION;
    use float_cmp::approx_eq;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;
    use std::thread;

    // Pushes hues toward the start of the circle on [0, 0.5) and spreads them out again on [0.5, 1].
    fn bent_table() -> PiecewisePolynomial {
        calibration::from_reader("2\n0,0.5,1\n1,0.5,0\n-1,1.5,0.5\n".as_bytes()).unwrap()
    }

    #[test]
    fn test_to_rgb_unsupported() {
        let chsv = CHSVSpace::new(bent_table());
        for &c in &[[0., 0., 0.], [0.5, -0.5, 1.], [7., 7., 7.]] {
            let err = chsv.to_rgb(Coord::from(c)).unwrap_err();
            assert_eq!(
                err,
                ColorSpaceError::UnsupportedOperation {
                    space: "CHSV",
                    operation: "to_rgb",
                }
            );
            assert_eq!(err.to_string(), "to_rgb is not supported for the CHSV color space");
        }
    }

    #[test]
    fn test_identity_remap_matches_hsv() {
        let chsv = CHSVSpace::new(PiecewisePolynomial::identity());
        let rgb = Coord::new(0.9, 0.3, 0.6);
        let hsv = HSVSpace.from_rgb(rgb);
        let point = chsv.from_rgb(rgb);
        let angle = hsv.x.to_radians();
        assert!(approx_eq!(f64, point.x, hsv.y * angle.cos(), epsilon = 1e-12));
        assert!(approx_eq!(f64, point.y, -hsv.y * angle.sin(), epsilon = 1e-12));
        assert_eq!(point.z, hsv.z);
    }

    #[test]
    fn test_remap_rotates() {
        let chsv = CHSVSpace::new(bent_table());
        // hue 90 degrees is a quarter turn: the first segment gives 0.25^2 + 0.5 * 0.25 = 0.1875
        assert!(approx_eq!(f64, chsv.remapped_hue(90.), 67.5, epsilon = 1e-9));
        // hue 0 is exactly on the first breakpoint
        assert!(approx_eq!(f64, chsv.remapped_hue(0.), 0., epsilon = 1e-12));
        // the second segment starts at its breakpoint: 0.5 turns stays at 0.5 turns
        assert!(approx_eq!(f64, chsv.remapped_hue(180.), 180., epsilon = 1e-9));

        // pure red has hue 0 and stays on the positive x axis
        let red = chsv.from_rgb(Coord::new(1., 0., 0.));
        assert!(red.max_abs_difference(&Coord::new(1., 0., 1.)) <= TEST_PRECISION);
    }

    #[test]
    fn test_magnitude_is_saturation() {
        let chsv = CHSVSpace::new(bent_table());
        let mut rng = ChaCha8Rng::seed_from_u64(360);
        for _ in 0..1000 {
            let rgb = Coord::new(rng.gen(), rng.gen(), rng.gen());
            let hsv = HSVSpace.from_rgb(rgb);
            let point = chsv.from_rgb(rgb);
            let magnitude = point.x * point.x + point.y * point.y;
            assert!((magnitude - hsv.y * hsv.y).abs() <= 1e-12);
            assert_eq!(point.z, hsv.z);
            assert!(CHSVSpace::in_bounds(point));
        }
    }

    #[test]
    fn test_grays_at_origin() {
        let chsv = CHSVSpace::new(bent_table());
        for &v in &[0., 0.3, 1.] {
            let point = chsv.from_rgb(Coord::new(v, v, v));
            assert_eq!((point.x, point.y), (0., 0.));
            assert_eq!(point.z, v);
        }
    }

    #[test]
    fn test_shared_table_across_threads() {
        let table = Arc::new(bent_table());
        let chsv = CHSVSpace::new(Arc::clone(&table));
        let expected = chsv.from_rgb(Coord::new(0.2, 0.7, 0.4));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let chsv = chsv.clone();
                thread::spawn(move || chsv.from_rgb(Coord::new(0.2, 0.7, 0.4)))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
        assert!(Arc::ptr_eq(chsv.remap(), &table));
    }
}
