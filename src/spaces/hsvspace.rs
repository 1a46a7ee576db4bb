//! This module implements the HSV color space, a cylindrical rearrangement of RGB. Value is the
//! largest RGB component, which makes it a very poor analog of luminance (dark purple is the same
//! value as white), but it does make hue and saturation fairly intuitive. It's also the base that
//! CHSV is built on.

use crate::bound::Bound;
use crate::color::ColorSpace;
use crate::coord::Coord;
use crate::error::ColorSpaceError;

/// The HSV color space. Triples are hue, as an angle in degrees between 0 and 360, then saturation
/// and value, both between 0 and 1.
///
/// # Example
/// ```
/// # use chsv::prelude::*;
/// let yellow = HSVSpace.from_rgb(Coord::new(1., 1., 0.));
/// assert!((yellow.x - 60.).abs() <= 1e-10);
/// assert!((yellow.y - 1.).abs() <= 1e-10);
/// assert!((yellow.z - 1.).abs() <= 1e-10);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct HSVSpace;

impl ColorSpace for HSVSpace {
    fn name(&self) -> &'static str {
        "HSV"
    }

    /// Gray, black and white have no meaningful hue and get 0; black also gets a saturation of 0.
    fn from_rgb(&self, rgb: Coord) -> Coord {
        let r = 255. * rgb.x;
        let g = 255. * rgb.y;
        let b = 255. * rgb.z;
        let max_c = r.max(g.max(b));
        let min_c = r.min(g.min(b));
        let chroma = max_c - min_c;

        // position around the hexagon, in sixths of a turn
        let hue_prime = if chroma == 0.0 {
            0.0
        } else if max_c == r {
            ((g - b) / chroma) % 6.0
        } else if max_c == g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };

        let mut hue = 60.0 * hue_prime;
        if hue < 0.0 {
            hue += 360.0;
        }
        let saturation = if max_c == 0.0 {
            0.0
        } else {
            1.0 - min_c / max_c
        };
        let value = max_c / 255.;

        Coord {
            x: hue,
            y: saturation,
            z: value,
        }
    }

    /// Hues outside of [0, 360) wrap around. Saturation and value aren't clamped, so out-of-range
    /// input gives out-of-range RGB.
    fn to_rgb(&self, color: Coord) -> Result<Coord, ColorSpaceError> {
        let (hue, saturation, value) = (color.x, color.y, color.z);

        let sector = (hue / 60.).floor();
        let f = hue / 60. - sector;
        let v = value;
        let p = value * (1. - saturation);
        let q = value * (1. - f * saturation);
        let t = value * (1. - (1. - f) * saturation);

        let (r, g, b) = match sector.rem_euclid(6.) as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Ok(Coord { x: r, y: g, z: b })
    }
}

impl Bound for HSVSpace {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 360.), (0., 1.), (0., 1.)]
    }
}
