//! okpalette is a library for building color palettes in the OKLCH color space and moving them in
//! and out of stylesheets. OKLCH describes a color by perceptual lightness, chroma, and hue, which
//! makes it pleasant to design with: two colors with the same lightness actually look equally light.
//! Browsers understand `oklch()` directly, but design tools and older pipelines still want hex codes
//! and `rgb()`, so okpalette does the conversions as well.
//!
//! The pieces, from the bottom up:
//!
//! - [`color`]: the OKLCH color model, named colors, and palette records
//! - [`colors`] and [`convert`]: OKLab, sRGB, and HSL, and conversion between them and OKLCH
//! - [`stylesheet`]: reading `--color-*: oklch(...)` declarations out of arbitrary CSS text
//! - [`output`]: writing colors out as CSS variables, a legacy JS config module, or an `@theme` block
//! - [`palette`]: the ordered, editable collection that ties it all together
//! - [`config`]: palette settings, loadable from JSON
//!
//! ```
//! # use okpalette::prelude::*;
//! let mut palette = Palette::default();
//! palette
//!     .import_stylesheet("@theme { --color-brand: oklch(62.8% 0.258 29); }")
//!     .unwrap();
//! assert_eq!(palette.len(), 1);
//! let id = palette.colors()[0].id();
//! let formats = palette.formats(id).unwrap();
//! assert_eq!(formats[1].label, "HEX");
//! assert!(formats[1].value.starts_with("#ff00"));
//! assert_eq!(
//!     palette.generate(OutputFormat::CssVariables),
//!     ":root {\n  --brand: oklch(62.8% 0.258 29);\n}"
//! );
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate tracing;
#[macro_use]
extern crate float_cmp;

pub mod color;
pub mod colors;
pub mod config;
pub mod convert;
pub mod coord;
mod cssnumeric;
pub mod output;
pub mod palette;
pub mod prelude;
pub mod stylesheet;
