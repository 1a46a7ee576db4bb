//! This module contains [`Coord`], the untagged triple of numbers that every color space in this
//! crate reads and writes. A `Coord` carries no information about which space it belongs to: an
//! RGB color, an HSV color and a CHSV color are all just three numbers, and it's up to the caller to
//! remember which is which. Some limited math in 3 dimensions is supported, mostly for comparing
//! the results of conversions.

use std::ops::{Add, Div, Index, Mul, Sub};

use num::{Num, NumCast};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to scale
/// it.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A color triple. The meaning of each axis depends on the space: for RGB it's red, green and blue
/// between 0 and 1, for HSV it's hue in degrees, saturation and value, for CIELAB it's L\*, a\* and
/// b\*, and for CHSV it's the two Cartesian hue coordinates followed by value.
///
/// `Coord` is `Copy`, so every conversion hands back a fresh value: changing the output of a
/// conversion never touches its input.
///
/// # Example
/// ```
/// # use chsv::coord::Coord;
/// let red = Coord::from([1., 0., 0.]);
/// let half = red * 0.5;
/// assert_eq!(half, Coord{x: 0.5, y: 0., z: 0.});
/// assert_eq!(half[0], 0.5);
/// let arr: [f64; 3] = half.into();
/// assert_eq!(arr, [0.5, 0., 0.]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first component.
    pub x: f64,
    /// The second component.
    pub y: f64,
    /// The third component.
    pub z: f64,
}

impl Coord {
    /// Creates a new triple from its three components.
    pub fn new(x: f64, y: f64, z: f64) -> Coord {
        Coord { x, y, z }
    }

    /// Applies `f` to each component.
    pub fn map<F: Fn(f64) -> f64>(self, f: F) -> Coord {
        Coord {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// Returns `true` if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// The Euclidean distance between two triples. This is only meaningful when both belong to the
    /// same space, and even then it isn't a measure of how different two colors look: HSV hues of 0
    /// and 360 are the same color but are 360 apart.
    /// # Example
    /// ```
    /// # use chsv::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// assert!((point1.euclidean_distance(&point2) - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }

    /// The largest absolute difference between matching components. Round-trip tolerances are
    /// stated per component, so this is what conversions are checked against.
    pub fn max_abs_difference(&self, other: &Coord) -> f64 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.z - other.z).abs())
    }
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// Scalars that can't be represented as f64 scale to NaN rather than panicking.
fn scalar_to_f64<U: Scalar>(s: U) -> f64 {
    num::cast(s).unwrap_or(std::f64::NAN)
}

impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r = scalar_to_f64(rhs);
        self.map(|c| c * r)
    }
}

/// Division by zero follows floating-point rules and yields infinities or NaN.
impl<U: Scalar> Div<U> for Coord {
    type Output = Coord;
    fn div(self, rhs: U) -> Coord {
        let r = scalar_to_f64(rhs);
        self.map(|c| c / r)
    }
}

impl Index<usize> for Coord {
    type Output = f64;
    /// Panics if `i` is not 0, 1 or 2, like indexing a `[f64; 3]`.
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index {} out of range for a color triple", i),
        }
    }
}

impl From<[f64; 3]> for Coord {
    fn from(c: [f64; 3]) -> Coord {
        Coord {
            x: c[0],
            y: c[1],
            z: c[2],
        }
    }
}

impl From<(f64, f64, f64)> for Coord {
    fn from(c: (f64, f64, f64)) -> Coord {
        Coord {
            x: c.0,
            y: c.1,
            z: c.2,
        }
    }
}

impl From<Coord> for [f64; 3] {
    fn from(c: Coord) -> [f64; 3] {
        [c.x, c.y, c.z]
    }
}

impl From<Coord> for (f64, f64, f64) {
    fn from(c: Coord) -> (f64, f64, f64) {
        (c.x, c.y, c.z)
    }
}
