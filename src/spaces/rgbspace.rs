//! RGB, the space every other space is defined in terms of. Components are red, green and blue,
//! each between 0 and 1. Converting to or from RGB is the identity, which is what lets any two
//! spaces be chained through it.

use crate::bound::Bound;
use crate::color::ColorSpace;
use crate::coord::Coord;
use crate::error::ColorSpaceError;

/// The RGB color space. Both conversions return their input unchanged.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct RGBSpace;

impl ColorSpace for RGBSpace {
    fn name(&self) -> &'static str {
        "RGB"
    }
    fn from_rgb(&self, rgb: Coord) -> Coord {
        rgb
    }
    fn to_rgb(&self, color: Coord) -> Result<Coord, ColorSpaceError> {
        Ok(color)
    }
}

impl Bound for RGBSpace {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }
}
