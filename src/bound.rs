//! This module describes the Bound trait, which records the range each component of a color space
//! normally takes. The only gamut handling in this crate is clamping to those ranges: CIELAB uses
//! it to keep RGB channels between 0 and 1 before undoing the gamma curve, and callers can use it
//! to tidy up triples that drifted slightly out of range.

use crate::color::ColorSpace;
use crate::coord::Coord;

/// Describes a color space whose components have conventional bounds. Conversions themselves never
/// check these: HSV will happily accept a hue of 400 and treat it like 40.
/// # Example
/// ```
/// # use chsv::prelude::*;
/// let out_of_bounds = Coord::new(0.1, -0.2, 1.2);
/// assert!(!RGBSpace::in_bounds(out_of_bounds));
/// assert_eq!(RGBSpace::clamp(out_of_bounds), Coord::new(0.1, 0., 1.));
/// ```
pub trait Bound: ColorSpace {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] with the bounds of each component,
    /// in the order they appear in the triple. Unbounded sides can use infinity.
    fn bounds() -> [(f64, f64); 3];

    /// Clamps each component of the triple to its bounds. NaN components stay NaN.
    fn clamp(point: Coord) -> Coord {
        let ranges = Self::bounds();
        let clamp_one = |component: f64, (min, max): (f64, f64)| {
            if component < min {
                min
            } else if component > max {
                max
            } else {
                component
            }
        };
        Coord {
            x: clamp_one(point.x, ranges[0]),
            y: clamp_one(point.y, ranges[1]),
            z: clamp_one(point.z, ranges[2]),
        }
    }

    /// Returns `true` if every component is within its bounds, inclusive.
    fn in_bounds(point: Coord) -> bool {
        let ranges = Self::bounds();
        [point.x, point.y, point.z]
            .iter()
            .zip(ranges.iter())
            .all(|(&c, &(min, max))| c >= min && c <= max)
    }
}
