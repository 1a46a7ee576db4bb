//! Loading calibration tables for [`PiecewisePolynomial`]. The conversions themselves never read
//! files: a table is loaded once, checked, and then handed to whatever needs it.
//!
//! The text format is a small CSV-like file:
//!
//! ```text
//! 3
//! 0,0.25,0.5,0.75,1
//! 0.1,-0.2,1.05,0
//! ...
//! ```
//!
//! The first line is the polynomial order, a non-negative integer (an integral float such as `3.0`
//! is accepted too). The second holds the breakpoints, comma-separated and strictly ascending. Each following line is one segment's coefficients, highest degree first:
//! there must be one line per segment and `order + 1` numbers per line. Blank lines and whitespace
//! around fields are ignored.
//!
//! The same table can also come from any serde format through [`CalibrationData`].

use std::convert::TryFrom;
use std::fs::File;
use std::io;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use crate::polynomial::PiecewisePolynomial;

/// Everything that can go wrong reading or validating a calibration table.
#[derive(Error, Debug)]
pub enum CalibrationError {
    /// The file couldn't be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The underlying CSV reader failed, for example on invalid UTF-8.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// There was no data at all, so not even the polynomial order.
    #[error("calibration data is empty: missing the polynomial order")]
    MissingOrder,
    /// The first line wasn't a single non-negative integer or integral float.
    #[error("invalid polynomial order {value:?} on line {line}")]
    InvalidOrder {
        /// The line the order was read from.
        line: u64,
        /// The offending text.
        value: String,
    },
    /// The order was given but the breakpoints line is missing.
    #[error("calibration data has no breakpoints line")]
    MissingBreaks,
    /// A breakpoint or coefficient wasn't a number.
    #[error("invalid number {value:?} on line {line}, field {field}")]
    InvalidNumber {
        /// The line the field is on.
        line: u64,
        /// The zero-based position of the field in its line.
        field: usize,
        /// The offending text.
        value: String,
    },
    /// A polynomial needs at least two breakpoints to have a segment.
    #[error("at least 2 breakpoints are needed, found {0}")]
    TooFewBreaks(usize),
    /// A breakpoint was infinite or NaN.
    #[error("breakpoint {index} is not finite")]
    NonFiniteBreak {
        /// The position of the breakpoint.
        index: usize,
    },
    /// A breakpoint was less than or equal to the one before it.
    #[error("breakpoint {index} is not greater than the one before it")]
    UnsortedBreaks {
        /// The position of the first out-of-order breakpoint.
        index: usize,
    },
    /// The number of coefficient rows doesn't match the number of segments.
    #[error("expected {expected} coefficient rows (one per segment), found {found}")]
    RowCountMismatch {
        /// One fewer than the number of breakpoints.
        expected: usize,
        /// The rows actually given.
        found: usize,
    },
    /// A coefficient row doesn't have `order + 1` entries.
    #[error("coefficient row {row} should have {expected} values, found {found}")]
    RowLengthMismatch {
        /// The zero-based segment the row belongs to.
        row: usize,
        /// The order plus one.
        expected: usize,
        /// The values actually given.
        found: usize,
    },
    /// A coefficient was infinite or NaN.
    #[error("coefficient row {row} has a value that is not finite")]
    NonFiniteCoefficient {
        /// The zero-based segment the row belongs to.
        row: usize,
    },
}

/// The raw contents of a calibration table, before any validation. This is the serde-facing form of
/// [`PiecewisePolynomial`]: deserializing a polynomial goes through this struct and then through
/// [`PiecewisePolynomial::new`], so malformed tables are rejected at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationData {
    /// The polynomial degree of every segment.
    pub order: usize,
    /// The breakpoints, which should be strictly ascending.
    pub breaks: Vec<f64>,
    /// One row per segment, `order + 1` coefficients each, highest degree first.
    pub coefficients: Vec<Vec<f64>>,
}

// The line a record started on, or 0 if the reader didn't track it.
fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.is_empty())
}

// The order may be written as an integer or as an integral float like `3.0`.
fn parse_order(value: &str) -> Option<usize> {
    value.parse::<usize>().ok().or_else(|| {
        let order = value.parse::<f64>().ok()?;
        if order.is_finite() && order >= 0. && order.fract() == 0. && order <= u32::MAX as f64 {
            Some(order as usize)
        } else {
            None
        }
    })
}

fn parse_numbers(record: &StringRecord) -> Result<Vec<f64>, CalibrationError> {
    record
        .iter()
        .enumerate()
        .map(|(field, value)| {
            value.parse::<f64>().map_err(|_| CalibrationError::InvalidNumber {
                line: line_of(record),
                field,
                value: value.to_string(),
            })
        })
        .collect()
}

impl CalibrationData {
    /// Reads the text format described in the [module documentation](self) without checking that
    /// the pieces fit together. Use [`from_reader`] to get a checked [`PiecewisePolynomial`].
    pub fn from_reader<R: io::Read>(rdr: R) -> Result<CalibrationData, CalibrationError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(rdr);

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            if !is_blank(&record) {
                records.push(record);
            }
        }
        let mut records = records.into_iter();

        let order_record = records.next().ok_or(CalibrationError::MissingOrder)?;
        let order = match (order_record.len(), order_record.get(0)) {
            (1, Some(value)) => parse_order(value),
            _ => None,
        }
        .ok_or_else(|| CalibrationError::InvalidOrder {
            line: line_of(&order_record),
            value: order_record.iter().collect::<Vec<_>>().join(","),
        })?;

        let breaks_record = records.next().ok_or(CalibrationError::MissingBreaks)?;
        let breaks = parse_numbers(&breaks_record)?;

        let coefficients = records
            .map(|record| parse_numbers(&record))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CalibrationData {
            order,
            breaks,
            coefficients,
        })
    }
}

/// Reads and validates a calibration table in the text format.
///
/// # Example
/// ```
/// # use chsv::calibration;
/// let text = "1\n0,1,2\n1,0\n2,1\n";
/// let poly = calibration::from_reader(text.as_bytes()).unwrap();
/// assert_eq!(poly.eval_at(1.5), 2.0);
/// ```
pub fn from_reader<R: io::Read>(rdr: R) -> Result<PiecewisePolynomial, CalibrationError> {
    PiecewisePolynomial::try_from(CalibrationData::from_reader(rdr)?)
}

/// Opens the file at `path` and reads a calibration table from it.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<PiecewisePolynomial, CalibrationError> {
    let file = File::open(path)?;
    from_reader(io::BufReader::new(file))
}

impl FromStr for PiecewisePolynomial {
    type Err = CalibrationError;

    fn from_str(s: &str) -> Result<PiecewisePolynomial, CalibrationError> {
        from_reader(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    use std::io::Write;

    #[test]
    fn test_parse_table() {
        let text = "2\n0, 0.5, 1\n1, 0, 0\n-1, 0.5, 0.25\n";
        let poly: PiecewisePolynomial = text.parse().unwrap();
        assert_eq!(poly.order(), 2);
        assert_eq!(poly.breaks(), &[0., 0.5, 1.]);
        assert_eq!(poly.coefficients()[1], vec![-1., 0.5, 0.25]);
        // x = 0.25: first segment, 0.25^2
        assert!((poly.eval_at(0.25) - 0.0625).abs() <= 1e-12);
        // x = 0.75: second segment, -(0.25)^2 + 0.5 * 0.25 + 0.25
        assert!((poly.eval_at(0.75) - 0.3125).abs() <= 1e-12);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let text = "\n1\n\n0,1\n1,0\n\n";
        let data = CalibrationData::from_reader(text.as_bytes()).unwrap();
        assert_eq!(
            data,
            CalibrationData {
                order: 1,
                breaks: vec![0., 1.],
                coefficients: vec![vec![1., 0.]],
            }
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "1\r\n0,1\r\n1,0\r\n";
        let poly: PiecewisePolynomial = text.parse().unwrap();
        assert_eq!(poly, PiecewisePolynomial::identity());
    }

    #[test]
    fn test_missing_pieces() {
        assert!(matches!(
            "".parse::<PiecewisePolynomial>(),
            Err(CalibrationError::MissingOrder)
        ));
        assert!(matches!(
            "3\n".parse::<PiecewisePolynomial>(),
            Err(CalibrationError::MissingBreaks)
        ));
        assert!(matches!(
            "1\n0,1,2\n1,0\n".parse::<PiecewisePolynomial>(),
            Err(CalibrationError::RowCountMismatch {
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            "1\n0,1\n1,0,3\n".parse::<PiecewisePolynomial>(),
            Err(CalibrationError::RowLengthMismatch {
                row: 0,
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn test_bad_numbers() {
        match "cubic\n0,1\n1,0\n".parse::<PiecewisePolynomial>() {
            Err(CalibrationError::InvalidOrder { line, value }) => {
                assert_eq!(line, 1);
                assert_eq!(value, "cubic");
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert!(matches!(
            "1,2\n0,1\n1,0\n".parse::<PiecewisePolynomial>(),
            Err(CalibrationError::InvalidOrder { .. })
        ));
        match "1\n0,1\n1,zero\n".parse::<PiecewisePolynomial>() {
            Err(CalibrationError::InvalidNumber { line, field, value }) => {
                assert_eq!(line, 3);
                assert_eq!(field, 1);
                assert_eq!(value, "zero");
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert!(matches!(
            "1\n1,0\n1,0\n".parse::<PiecewisePolynomial>(),
            Err(CalibrationError::UnsortedBreaks { index: 1 })
        ));
    }

    #[test]
    fn test_integral_float_order() {
        for text in &["1.0\n0,1\n1,0\n", " 1 \n0,1\n1,0\n", "1.\n0,1\n1,0\n"] {
            let poly: PiecewisePolynomial = text.parse().unwrap();
            assert_eq!(poly, PiecewisePolynomial::identity());
        }
        for text in &["1.5\n0,1\n1,0\n", "-1\n0,1\n1,0\n", "inf\n0,1\n1,0\n"] {
            assert!(matches!(
                text.parse::<PiecewisePolynomial>(),
                Err(CalibrationError::InvalidOrder { .. })
            ));
        }
    }

    #[test]
    fn test_error_messages() {
        let err = "1\n0,1,2\n1,0\n".parse::<PiecewisePolynomial>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected 2 coefficient rows (one per segment), found 1"
        );
    }

    #[test]
    fn test_from_path() {
        let path = std::env::temp_dir().join(format!("chsv-calibration-{}.txt", std::process::id()));
        {
            let mut file = File::create(&path).unwrap();
            write!(file, "1\n0,1,2\n1,0\n2,1\n").unwrap();
        }
        let poly = from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(poly.segment_count(), 2);
        assert!((poly.eval_at(1.5) - 2.).abs() <= 1e-12);

        assert!(matches!(
            from_path(std::env::temp_dir().join("chsv-no-such-table.txt")),
            Err(CalibrationError::Io(_))
        ));
    }
}
