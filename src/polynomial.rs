//! This module implements [`PiecewisePolynomial`], a function on the real line made up of one
//! polynomial per interval between consecutive breakpoints. It's what CHSV uses to bend hue angles
//! to match fitted calibration data, but nothing about it is specific to color.
//!
//! Each segment `i` covers `[breaks[i], breaks[i + 1])` and has its own row of `order + 1`
//! coefficients, highest degree first, in the local variable `x - breaks[i]`. This is the same
//! layout MATLAB's `mkpp` and SciPy's `PPoly` use, so fitted splines from either can be loaded
//! directly.

use std::convert::TryFrom;

use crate::calibration::{CalibrationData, CalibrationError};

/// A piecewise polynomial with strictly ascending breakpoints and one coefficient row per segment.
/// Construction validates the shape of the data, and afterwards the value is immutable, so a single
/// table can be shared between threads (usually through an `Arc`) and read without locking.
///
/// # Example
/// A two-segment linear function: the identity on [0, 1) and `2(x - 1) + 1` on [1, 2].
///
/// ```
/// # use chsv::polynomial::PiecewisePolynomial;
/// let poly = PiecewisePolynomial::new(1, vec![0., 1., 2.], vec![vec![1., 0.], vec![2., 1.]]).unwrap();
/// assert_eq!(poly.eval_at(0.5), 0.5);
/// assert_eq!(poly.eval_at(1.5), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CalibrationData", into = "CalibrationData")]
pub struct PiecewisePolynomial {
    order: usize,
    breaks: Vec<f64>,
    coefficients: Vec<Vec<f64>>,
}

impl PiecewisePolynomial {
    /// Builds a piecewise polynomial of the given order. `breaks` must hold at least two finite,
    /// strictly ascending values; `coefficients` must have one row per segment (one fewer than the
    /// breakpoints), each with `order + 1` finite values ordered from the highest degree down.
    pub fn new(
        order: usize,
        breaks: Vec<f64>,
        coefficients: Vec<Vec<f64>>,
    ) -> Result<PiecewisePolynomial, CalibrationError> {
        if breaks.len() < 2 {
            return Err(CalibrationError::TooFewBreaks(breaks.len()));
        }
        if let Some(index) = breaks.iter().position(|b| !b.is_finite()) {
            return Err(CalibrationError::NonFiniteBreak { index });
        }
        if let Some(index) = breaks.windows(2).position(|w| w[0] >= w[1]) {
            return Err(CalibrationError::UnsortedBreaks { index: index + 1 });
        }
        let segments = breaks.len() - 1;
        if coefficients.len() != segments {
            return Err(CalibrationError::RowCountMismatch {
                expected: segments,
                found: coefficients.len(),
            });
        }
        for (row, coefs) in coefficients.iter().enumerate() {
            if coefs.len() != order + 1 {
                return Err(CalibrationError::RowLengthMismatch {
                    row,
                    expected: order + 1,
                    found: coefs.len(),
                });
            }
            if coefs.iter().any(|c| !c.is_finite()) {
                return Err(CalibrationError::NonFiniteCoefficient { row });
            }
        }
        Ok(PiecewisePolynomial {
            order,
            breaks,
            coefficients,
        })
    }

    /// The identity function on [0, 1], extended linearly everywhere else. Using this as the CHSV
    /// hue remap leaves hues untouched.
    pub fn identity() -> PiecewisePolynomial {
        PiecewisePolynomial {
            order: 1,
            breaks: vec![0., 1.],
            coefficients: vec![vec![1., 0.]],
        }
    }

    /// The polynomial degree shared by every segment.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The breakpoints, in ascending order.
    pub fn breaks(&self) -> &[f64] {
        &self.breaks
    }

    /// The coefficient rows, one per segment, highest degree first.
    pub fn coefficients(&self) -> &[Vec<f64>] {
        &self.coefficients
    }

    /// The number of segments, which is one fewer than the number of breakpoints.
    pub fn segment_count(&self) -> usize {
        self.coefficients.len()
    }

    /// The first and last breakpoints. Inputs outside of this range are extrapolated.
    pub fn domain(&self) -> (f64, f64) {
        (self.breaks[0], self.breaks[self.breaks.len() - 1])
    }

    /// Finds the segment used to evaluate `x`: the last one whose starting breakpoint is at most `x`.
    /// An `x` that lands exactly on a breakpoint belongs to the segment starting there. Inputs below
    /// the first breakpoint use the first segment, and inputs at or past the last breakpoint use the
    /// last segment. NaN sorts past every breakpoint and so also lands in the last segment.
    ///
    /// ```
    /// # use chsv::polynomial::PiecewisePolynomial;
    /// let poly = PiecewisePolynomial::new(0, vec![0., 1., 2., 3.], vec![vec![1.], vec![2.], vec![3.]]).unwrap();
    /// assert_eq!(poly.segment_index(1.), 1);
    /// assert_eq!(poly.segment_index(-5.), 0);
    /// assert_eq!(poly.segment_index(3.), 2);
    /// ```
    pub fn segment_index(&self, x: f64) -> usize {
        // number of breakpoints <= x, by binary search over the sorted breaks
        let upper = self.breaks.partition_point(|&b| !(b > x));
        upper.saturating_sub(1).min(self.segment_count() - 1)
    }

    /// Evaluates the polynomial at `x` using Horner's rule on the segment picked by
    /// [`segment_index`](Self::segment_index).
    pub fn eval_at(&self, x: f64) -> f64 {
        let idx = self.segment_index(x);
        let delta = x - self.breaks[idx];
        self.coefficients[idx]
            .iter()
            .fold(0.0, |acc, &c| acc * delta + c)
    }
}

impl TryFrom<CalibrationData> for PiecewisePolynomial {
    type Error = CalibrationError;

    fn try_from(data: CalibrationData) -> Result<PiecewisePolynomial, CalibrationError> {
        PiecewisePolynomial::new(data.order, data.breaks, data.coefficients)
    }
}

impl From<PiecewisePolynomial> for CalibrationData {
    fn from(poly: PiecewisePolynomial) -> CalibrationData {
        CalibrationData {
            order: poly.order,
            breaks: poly.breaks,
            coefficients: poly.coefficients,
        }
    }
}
