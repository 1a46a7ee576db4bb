//! This module contains the color spaces the crate converts between, one per submodule. Each
//! implements [`ColorSpace`], and for convenience each type is imported into this module's namespace
//! directly.
//!
//! [`ColorSpace`]: ../color/trait.ColorSpace.html
pub mod chsvspace;
pub mod cielabspace;
pub mod hsvspace;
pub mod rgbspace;

// for convenience, use this namespace for the space types
pub use self::chsvspace::CHSVSpace;
pub use self::cielabspace::LABSpace;
pub use self::hsvspace::HSVSpace;
pub use self::rgbspace::RGBSpace;
