//! This module contains the color spaces the converter moves between. Each one implements
//! [`ColorSpace`], with OKLab as the common hub. For convenience, each main type is imported into
//! this module's namespace directly.
//!
//! [`ColorSpace`]: ../convert/trait.ColorSpace.html
pub mod hslcolor;
pub mod oklab;
pub mod rgbcolor;

// for convenience, use this namespace for the color objects
pub use self::hslcolor::HSLColor;
pub use self::oklab::OklabColor;
pub use self::rgbcolor::{HexParseError, RGBColor};
