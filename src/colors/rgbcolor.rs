//! This file implements gamma-encoded sRGB, the space hex codes and `rgb()` strings live in, along
//! with reading and writing those text forms. Components are kept as floats from 0 to 1 and are only
//! clamped and quantized to bytes when text is produced, so an out-of-gamut OKLCH color can still be
//! carried through this type without losing information.

use std::fmt;

use thiserror::Error;

use crate::coord::Coord;
use crate::colors::oklab::OklabColor;
use crate::convert::ColorSpace;
use crate::cssnumeric::format_number;

/// An error in reading a hex color code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum HexParseError {
    /// The code did not start with `#`.
    #[error("hex color must start with '#'")]
    MissingHash,
    /// The code had a number of digits other than 3, 4, 6, or 8.
    #[error("hex color must have 3, 4, 6, or 8 digits")]
    InvalidLength,
    /// A character after the `#` was not a hex digit.
    #[error("invalid hex digit in color")]
    InvalidDigit,
}

/// A color in the sRGB space. Each component is nominally between 0 and 1; values outside that
/// range describe colors a screen can't show and are clamped when written out.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RGBColor {
    /// The red component.
    pub r: f64,
    /// The green component.
    pub g: f64,
    /// The blue component.
    pub b: f64,
}

// The sRGB transfer curve, extended symmetrically to negative values.
fn encode(linear: f64) -> f64 {
    let abs = linear.abs();
    if abs <= 0.0031308 {
        linear * 12.92
    } else {
        linear.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    }
}

fn decode(encoded: f64) -> f64 {
    let abs = encoded.abs();
    if abs <= 0.04045 {
        encoded / 12.92
    } else {
        encoded.signum() * ((abs + 0.055) / 1.055).powf(2.4)
    }
}

/// Clamps a 0-1 component into range and scales it to a byte.
pub(crate) fn to_byte(component: f64) -> u8 {
    (num::clamp(component, 0.0, 1.0) * 255.0).round() as u8
}

impl RGBColor {
    /// Builds a color from 8-bit channels.
    pub fn from_bytes(r: u8, g: u8, b: u8) -> RGBColor {
        RGBColor {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// The color with every component clamped into [0, 1].
    pub fn clamped(&self) -> RGBColor {
        RGBColor {
            r: num::clamp(self.r, 0.0, 1.0),
            g: num::clamp(self.g, 0.0, 1.0),
            b: num::clamp(self.b, 0.0, 1.0),
        }
    }

    /// The 8-bit channels, after clamping.
    pub fn to_bytes(&self) -> (u8, u8, u8) {
        (to_byte(self.r), to_byte(self.g), to_byte(self.b))
    }

    /// Writes the color as a lower-case `#rrggbb` code. Any alpha is not included, matching what an
    /// HTML color input accepts.
    /// # Example
    /// ```
    /// # use okpalette::colors::RGBColor;
    /// let orange = RGBColor{r: 1., g: 0.5, b: -0.2};
    /// assert_eq!(orange.to_hex_string(), "#ff8000");
    /// ```
    pub fn to_hex_string(&self) -> String {
        let (r, g, b) = self.to_bytes();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Writes the color in `rgb(r, g, b)` notation, or `rgba(r, g, b, a)` when the alpha given is
    /// below 1.
    pub fn to_rgb_string(&self, alpha: Option<f64>) -> String {
        let (r, g, b) = self.to_bytes();
        match alpha {
            Some(a) if a < 1.0 => format!(
                "rgba({}, {}, {}, {})",
                r,
                g,
                b,
                format_number(num::clamp(a, 0.0, 1.0))
            ),
            _ => format!("rgb({}, {}, {})", r, g, b),
        }
    }

    /// Reads a hex color code: `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa`, in either case, with
    /// surrounding whitespace ignored. Returns the color and its alpha from 0 to 1, where the alpha
    /// is `None` if the code didn't carry one.
    /// # Example
    /// ```
    /// # use okpalette::colors::RGBColor;
    /// let (color, alpha) = RGBColor::from_hex_code("#FF8000").unwrap();
    /// assert_eq!(color.to_hex_string(), "#ff8000");
    /// assert_eq!(alpha, None);
    /// let (_, alpha) = RGBColor::from_hex_code("#f80c").unwrap();
    /// assert_eq!(alpha, Some(0.8));
    /// ```
    pub fn from_hex_code(hex: &str) -> Result<(RGBColor, Option<f64>), HexParseError> {
        let hex = hex.trim();
        if !hex.starts_with('#') {
            return Err(HexParseError::MissingHash);
        }
        let digits = &hex[1..];
        let nibbles = digits
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or(HexParseError::InvalidDigit)?;
        // short forms repeat each digit: "f80" is "ff8800"
        let bytes: Vec<u8> = match nibbles.len() {
            3 | 4 => nibbles.iter().map(|n| n * 17).collect(),
            6 | 8 => nibbles.chunks(2).map(|p| p[0] * 16 + p[1]).collect(),
            _ => return Err(HexParseError::InvalidLength),
        };
        let color = RGBColor::from_bytes(bytes[0], bytes[1], bytes[2]);
        let alpha = bytes.get(3).map(|&a| f64::from(a) / 255.0);
        Ok((color, alpha))
    }
}

impl ColorSpace for RGBColor {
    fn from_oklab(lab: OklabColor) -> RGBColor {
        let rgb = lab.to_linear_rgb().map(encode);
        RGBColor {
            r: rgb.x,
            g: rgb.y,
            b: rgb.z,
        }
    }
    fn to_oklab(&self) -> OklabColor {
        let linear = Coord {
            x: self.r,
            y: self.g,
            z: self.b,
        }
        .map(decode);
        OklabColor::from_linear_rgb(linear)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::color::Oklch;

    #[test]
    fn test_hex_parsing() {
        let (c, a) = RGBColor::from_hex_code("#3B82F6").unwrap();
        assert_eq!(c.to_bytes(), (0x3b, 0x82, 0xf6));
        assert_eq!(a, None);
        let (c, a) = RGBColor::from_hex_code("  #abc  ").unwrap();
        assert_eq!(c.to_bytes(), (0xaa, 0xbb, 0xcc));
        assert_eq!(a, None);
        let (_, a) = RGBColor::from_hex_code("#00000080").unwrap();
        assert_eq!(a, Some(128. / 255.));
    }

    #[test]
    fn test_hex_errors() {
        assert_eq!(RGBColor::from_hex_code("ff0000"), Err(HexParseError::MissingHash));
        assert_eq!(RGBColor::from_hex_code(""), Err(HexParseError::MissingHash));
        assert_eq!(RGBColor::from_hex_code("#"), Err(HexParseError::InvalidLength));
        assert_eq!(RGBColor::from_hex_code("#ff00"), Ok((RGBColor::from_bytes(255, 255, 0), Some(0.))));
        assert_eq!(RGBColor::from_hex_code("#ff000"), Err(HexParseError::InvalidLength));
        assert_eq!(RGBColor::from_hex_code("#gg0000"), Err(HexParseError::InvalidDigit));
        assert_eq!(RGBColor::from_hex_code("#ff 000"), Err(HexParseError::InvalidDigit));
        assert_eq!(RGBColor::from_hex_code("#ff00é0"), Err(HexParseError::InvalidDigit));
    }

    #[test]
    fn test_text_output() {
        let c = RGBColor::from_bytes(59, 130, 246);
        assert_eq!(c.to_hex_string(), "#3b82f6");
        assert_eq!(c.to_string(), "#3b82f6");
        assert_eq!(c.to_rgb_string(None), "rgb(59, 130, 246)");
        assert_eq!(c.to_rgb_string(Some(1.)), "rgb(59, 130, 246)");
        assert_eq!(c.to_rgb_string(Some(0.5)), "rgba(59, 130, 246, 0.5)");
    }

    #[test]
    fn test_clamping() {
        let wild = RGBColor { r: 1.3, g: -0.1, b: 0.5 };
        assert_eq!(wild.clamped(), RGBColor { r: 1., g: 0., b: 0.5 });
        assert_eq!(wild.to_hex_string(), "#ff0080");
    }

    #[test]
    fn test_oklch_reference_colors() {
        let white: RGBColor = Oklch::new(100., 0., 0., None).convert();
        assert_eq!(white.to_hex_string(), "#ffffff");
        let black: RGBColor = Oklch::new(0., 0., 0., None).convert();
        assert_eq!(black.to_hex_string(), "#000000");
        let gray: RGBColor = Oklch::new(50., 0., 0., None).convert();
        assert_eq!(gray.to_hex_string(), "#636363");
    }

    #[test]
    fn test_byte_round_trip() {
        for &(r, g, b) in &[(255, 0, 0), (12, 200, 99), (1, 2, 3), (128, 128, 128)] {
            let rgb = RGBColor::from_bytes(r, g, b);
            let back: RGBColor = rgb.to_oklab().convert();
            assert_eq!(back.to_bytes(), (r, g, b));
        }
    }
}
