//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports: the [`ColorSpace`] and [`Bound`] traits, [`convert`], every color space,
//! [`Coord`], [`PiecewisePolynomial`] and the error types.

pub use crate::bound::Bound;
pub use crate::calibration::CalibrationError;
pub use crate::color::{convert, ColorSpace};
pub use crate::coord::Coord;
pub use crate::error::ColorSpaceError;
pub use crate::polynomial::PiecewisePolynomial;
pub use crate::spaces::{CHSVSpace, HSVSpace, LABSpace, RGBSpace};
