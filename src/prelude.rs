//! This module brings the most common okpalette functionality under a single namespace, to prevent
//! excessive imports: the color model, the [`ColorSpace`] trait, the palette and its configuration,
//! the hex converter, the stylesheet parser, and the output generator. The individual color spaces
//! in [`colors`] are not included.
//!
//! [`ColorSpace`]: ../convert/trait.ColorSpace.html
//! [`colors`]: ../colors/index.html

pub use crate::color::{ColorData, ColorId, ColorRecord, ColorUpdate, Oklch, ThemeColor};
pub use crate::config::{ConfigError, PaletteConfig, RandomRanges};
pub use crate::convert::{color_formats, from_hex, to_hex, to_hsl_string, to_rgb_string, ColorFormat, ColorSpace};
pub use crate::output::{generate, generate_with, CssVariable, OutputFormat, OutputOptions};
pub use crate::palette::{ImportError, Palette};
pub use crate::stylesheet::parse_stylesheet;
