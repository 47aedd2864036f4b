//! This module is the color space converter: it turns an OKLCH color into the device-oriented text
//! forms a user might want to copy (hex, `rgb()`, `hsl()`), and turns a hex code from a color
//! picker back into OKLCH components.
//!
//! Every conversion goes through OKLab, via the [`ColorSpace`] trait, rather than hopping directly
//! between device spaces. A color edited through a picker and re-derived therefore only picks up
//! the error of 8-bit quantization once.
//!
//! Malformed input never panics or produces a stand-in color. [`from_hex`] returns `None` for
//! anything it can't read, and callers are expected to leave their state alone in that case.

use crate::color::{normalize_alpha, Oklch};
use crate::colors::{HSLColor, HexParseError, OklabColor, RGBColor};
use crate::cssnumeric::round_to;

/// Number of decimal places kept for an alpha read from a hex code. A byte of alpha has a
/// resolution of 1/255, so three decimals loses nothing visible.
const HEX_ALPHA_DECIMALS: i32 = 3;

/// A color representation that can be converted to and from OKLab. Implementing the two required
/// methods gives conversion to and from every other space in the crate for free.
///
/// # Example
/// ```
/// # use okpalette::prelude::*;
/// # use okpalette::colors::RGBColor;
/// let white = Oklch::new(100., 0., 0., None);
/// let rgb: RGBColor = white.convert();
/// assert_eq!(rgb.to_hex_string(), "#ffffff");
/// ```
pub trait ColorSpace: Sized {
    /// Builds this color from an OKLab point.
    fn from_oklab(lab: OklabColor) -> Self;
    /// Projects this color into OKLab.
    fn to_oklab(&self) -> OklabColor;
    /// Converts to any other color space by way of OKLab.
    fn convert<T: ColorSpace>(&self) -> T {
        T::from_oklab(self.to_oklab())
    }
}

/// A labelled text rendering of a color, as offered in a copy menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorFormat {
    /// The name of the notation, such as `"HEX"`.
    pub label: &'static str,
    /// The color written in that notation.
    pub value: String,
}

// The 8-bit sRGB color every device format is derived from, so hex, rgb(), and hsl() always agree
// with each other.
fn quantized_rgb(color: &Oklch) -> RGBColor {
    let (r, g, b) = color.convert::<RGBColor>().to_bytes();
    RGBColor::from_bytes(r, g, b)
}

/// Writes the color as a `#rrggbb` hex code, clamping anything outside the sRGB gamut. The alpha is
/// not included.
pub fn to_hex(color: &Oklch) -> String {
    quantized_rgb(color).to_hex_string()
}

/// Writes the color as `rgb(r, g, b)`, or `rgba(r, g, b, a)` if it is translucent.
pub fn to_rgb_string(color: &Oklch) -> String {
    quantized_rgb(color).to_rgb_string(normalize_alpha(color.alpha))
}

/// Writes the color as `hsl(h, s%, l%)`, or `hsla(h, s%, l%, a)` if it is translucent.
pub fn to_hsl_string(color: &Oklch) -> String {
    HSLColor::from_rgb(quantized_rgb(color)).to_hsl_string(normalize_alpha(color.alpha))
}

/// Every text form of a color, in the order OKLCH, HEX, RGB, HSL.
pub fn color_formats(color: &Oklch) -> Vec<ColorFormat> {
    vec![
        ColorFormat {
            label: "OKLCH",
            value: color.to_string(),
        },
        ColorFormat {
            label: "HEX",
            value: to_hex(color),
        },
        ColorFormat {
            label: "RGB",
            value: to_rgb_string(color),
        },
        ColorFormat {
            label: "HSL",
            value: to_hsl_string(color),
        },
    ]
}

/// Reads a hex code into OKLCH components, rounded the same way parsed stylesheet colors are:
/// lightness to one decimal, chroma to three, hue to a whole degree. A gray gets hue 0, and an
/// alpha byte of `ff` gives no alpha at all.
///
/// # Errors
/// Returns a [`HexParseError`] describing why the code could not be read.
pub fn parse_hex(hex: &str) -> Result<Oklch, HexParseError> {
    let (rgb, alpha) = RGBColor::from_hex_code(hex)?;
    let mut color = rgb.convert::<Oklch>().rounded();
    // rounding can carry a hue just under 360 up to 360 itself
    if color.chroma == 0.0 || color.hue >= 360.0 {
        color.hue = 0.0;
    }
    color.alpha = normalize_alpha(alpha.map(|a| round_to(a, HEX_ALPHA_DECIMALS)));
    Ok(color)
}

/// Reads a hex code into OKLCH components, or returns `None` if it isn't a well-formed hex code.
/// See [`parse_hex`] for the details.
///
/// # Example
/// ```
/// # use okpalette::convert::from_hex;
/// let red = from_hex("#ff0000").unwrap();
/// assert_eq!(red.to_string(), "oklch(62.8% 0.258 29)");
/// assert!(from_hex("not a color").is_none());
/// ```
pub fn from_hex(hex: &str) -> Option<Oklch> {
    match parse_hex(hex) {
        Ok(color) if color.is_finite() => Some(color),
        Ok(_) => None,
        Err(e) => {
            debug!("rejected hex color {:?}: {}", hex, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reference_hex_colors() {
        assert_eq!(from_hex("#ff0000"), Some(Oklch::new(62.8, 0.258, 29., None)));
        assert_eq!(from_hex("#ffffff"), Some(Oklch::new(100., 0., 0., None)));
        assert_eq!(from_hex("#000000"), Some(Oklch::new(0., 0., 0., None)));
        assert_eq!(from_hex("#808080").map(|c| c.hue), Some(0.));
    }

    #[test]
    fn test_hex_hue_stays_below_360() {
        let dark_red = from_hex("#0c0003").unwrap();
        assert_eq!(dark_red.hue, 0.);
        for code in &["#0c0003", "#ff0004", "#400010", "#a00028"] {
            let hue = from_hex(code).unwrap().hue;
            assert!(hue >= 0. && hue < 360., "{} gave hue {}", code, hue);
        }
    }

    #[test]
    fn test_hex_alpha() {
        assert_eq!(from_hex("#ff000080").and_then(|c| c.alpha), Some(0.502));
        assert_eq!(from_hex("#ff0000ff").map(|c| c.alpha), Some(None));
        assert_eq!(from_hex("#f00f").map(|c| c.alpha), Some(None));
    }

    #[test]
    fn test_bad_hex() {
        assert_eq!(from_hex(""), None);
        assert_eq!(from_hex("red"), None);
        assert_eq!(from_hex("#12345"), None);
        assert_eq!(parse_hex("123456"), Err(HexParseError::MissingHash));
        assert_eq!(parse_hex("#xyzxyz"), Err(HexParseError::InvalidDigit));
    }

    #[test]
    fn test_device_strings() {
        let white = Oklch::new(100., 0., 0., None);
        assert_eq!(to_hex(&white), "#ffffff");
        assert_eq!(to_rgb_string(&white), "rgb(255, 255, 255)");
        assert_eq!(to_hsl_string(&white), "hsl(0, 0%, 100%)");
        let faded = Oklch::new(100., 0., 0., Some(0.5));
        assert_eq!(to_hex(&faded), "#ffffff");
        assert_eq!(to_rgb_string(&faded), "rgba(255, 255, 255, 0.5)");
        assert_eq!(to_hsl_string(&faded), "hsla(0, 0%, 100%, 0.5)");
        let gray = Oklch::new(50., 0., 0., None);
        assert_eq!(to_rgb_string(&gray), "rgb(99, 99, 99)");
    }

    #[test]
    fn test_out_of_gamut_is_clamped() {
        // far more chroma than sRGB can show
        let loud = Oklch::new(60., 0.5, 140., None);
        let hex = to_hex(&loud);
        assert_eq!(hex.len(), 7);
        assert!(from_hex(&hex).is_some());
    }

    #[test]
    fn test_opaque_alpha_never_comes_back() {
        let explicit = Oklch {
            lightness: 55.,
            chroma: 0.224,
            hue: 264.,
            alpha: Some(1.),
        };
        let back = from_hex(&to_hex(&explicit)).unwrap();
        assert_eq!(back.alpha, None);
        assert_eq!(to_rgb_string(&explicit), to_rgb_string(&Oklch { alpha: None, ..explicit }));
    }

    #[test]
    fn test_picker_round_trip() {
        for &(l, c, h) in &[(55., 0.18, 264.), (96.1, 0.014, 264.), (73.9, 0.155, 53.), (40., 0.1, 150.)] {
            let start = Oklch::new(l, c, h, None);
            let back = from_hex(&to_hex(&start)).unwrap();
            assert!((back.lightness - l).abs() <= 0.5, "{} vs {}", back, start);
            assert!((back.chroma - c).abs() <= 0.006, "{} vs {}", back, start);
            // hue is poorly defined near gray, so only check it for saturated colors
            if c > 0.05 {
                assert!((back.hue - h).abs() <= 2., "{} vs {}", back, start);
            }
        }
    }

    #[test]
    fn test_color_formats() {
        let formats = color_formats(&Oklch::new(100., 0., 0., None));
        let labels: Vec<&str> = formats.iter().map(|f| f.label).collect();
        assert_eq!(labels, vec!["OKLCH", "HEX", "RGB", "HSL"]);
        assert_eq!(formats[0].value, "oklch(100% 0 0)");
        assert_eq!(formats[1].value, "#ffffff");
    }
}
