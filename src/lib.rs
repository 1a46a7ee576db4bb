//! chsv converts colors between RGB, HSV, CIELAB and CHSV. CHSV is a Cartesian form of HSV: hue
//! and saturation become a point in the plane, after the hue has been bent by a calibration curve
//! fitted to how evenly people perceive hues.
//!
//! Every space implements the [`ColorSpace`](color::ColorSpace) trait, which converts from RGB and,
//! where possible, back. RGB is the pivot: to get from one space to another, go through RGB with
//! [`convert`](color::convert). Triples are plain [`Coord`](coord::Coord)s that don't remember which
//! space they're in.
//!
//! The hue calibration is a [`PiecewisePolynomial`](polynomial::PiecewisePolynomial), loaded once
//! (see [`calibration`]) and shared by reference with the CHSV space.
//!
//! ```
//! # use chsv::prelude::*;
//! let table: PiecewisePolynomial = "1\n0,1\n1,0\n".parse().unwrap();
//! let chsv = CHSVSpace::new(table);
//! let orange = Coord::new(1., 0.5, 0.);
//! let point = chsv.from_rgb(orange);
//! let saturation = HSVSpace.from_rgb(orange).y;
//! assert!((point.x.hypot(point.y) - saturation).abs() <= 1e-12);
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]
// the space names follow the color science spelling: RGB, HSV, CHSV
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
extern crate rulinalg;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;

pub mod bound;
pub mod calibration;
pub mod color;
mod consts;
pub mod coord;
pub mod error;
pub mod polynomial;
pub mod prelude;
pub mod spaces;
