//! This module defines the [`ColorSpace`] trait that every color space in the crate implements, and
//! the [`convert`] function that chains any two spaces together through RGB.
//!
//! Every space knows how to get from RGB to itself and, usually, back again. That's all a space
//! needs: converting HSV to CIELAB, for example, is just going from HSV to RGB and from RGB to
//! CIELAB. Color triples aren't tagged with their space, so it's the caller's job to pass each
//! triple to the right space.

use crate::coord::Coord;
use crate::error::ColorSpaceError;

/// A color space that can be reached from RGB and, unless noted, converted back.
///
/// # Example
/// ```
/// # use chsv::prelude::*;
/// let hsv = HSVSpace.from_rgb(Coord::new(1., 0., 0.));
/// assert!(hsv.x.abs() <= 1e-10);
/// let back = HSVSpace.to_rgb(hsv).unwrap();
/// assert!(back.max_abs_difference(&Coord::new(1., 0., 0.)) <= 1e-10);
/// ```
pub trait ColorSpace {
    /// A short, human-readable name for the space, used in error messages.
    fn name(&self) -> &'static str;

    /// Converts a triple of RGB components, each between 0 and 1, into this space. This never fails:
    /// components outside of the usual range aren't checked and simply give unusual output.
    fn from_rgb(&self, rgb: Coord) -> Coord;

    /// Converts a triple in this space back to RGB. Spaces that can't be inverted return
    /// [`ColorSpaceError::UnsupportedOperation`].
    fn to_rgb(&self, color: Coord) -> Result<Coord, ColorSpaceError>;

    /// Converts a triple in this space to another space, going through RGB.
    fn convert_to<T: ColorSpace + ?Sized>(
        &self,
        target: &T,
        color: Coord,
    ) -> Result<Coord, ColorSpaceError>
    where
        Self: Sized,
    {
        convert(self, target, color)
    }
}

impl<'a, T: ColorSpace + ?Sized> ColorSpace for &'a T {
    fn name(&self) -> &'static str {
        (**self).name()
    }
    fn from_rgb(&self, rgb: Coord) -> Coord {
        (**self).from_rgb(rgb)
    }
    fn to_rgb(&self, color: Coord) -> Result<Coord, ColorSpaceError> {
        (**self).to_rgb(color)
    }
}

impl<T: ColorSpace + ?Sized> ColorSpace for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }
    fn from_rgb(&self, rgb: Coord) -> Coord {
        (**self).from_rgb(rgb)
    }
    fn to_rgb(&self, color: Coord) -> Result<Coord, ColorSpaceError> {
        (**self).to_rgb(color)
    }
}

/// Converts `color` from `source` to `target` by way of RGB. Any error from leaving the source
/// space is passed straight back.
///
/// # Example
/// ```
/// # use chsv::prelude::*;
/// let white_hsv = Coord::new(0., 0., 1.);
/// let white_lab = convert(&HSVSpace, &LABSpace, white_hsv).unwrap();
/// assert!((white_lab.x - 100.).abs() <= 1e-3);
/// ```
pub fn convert<S, T>(source: &S, target: &T, color: Coord) -> Result<Coord, ColorSpaceError>
where
    S: ColorSpace + ?Sized,
    T: ColorSpace + ?Sized,
{
    let rgb = source.to_rgb(color)?;
    Ok(target.from_rgb(rgb))
}
