//! Errors raised by color space conversions. Errors in calibration data live with the loader, in
//! [`calibration`](crate::calibration).

use thiserror::Error;

/// An error from converting a triple between color spaces. Conversions never validate their numeric
/// input, so the only failure is a space that doesn't support the requested direction.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColorSpaceError {
    /// The space doesn't implement this conversion. CHSV, for instance, can be computed from RGB but
    /// not inverted back to it.
    #[error("{operation} is not supported for the {space} color space")]
    UnsupportedOperation {
        /// The name of the color space.
        space: &'static str,
        /// The conversion that was requested, e.g. `to_rgb`.
        operation: &'static str,
    },
}
