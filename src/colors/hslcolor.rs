//! This file implements HSL, a simple cylindrical transformation of sRGB. HSL is what a lot of
//! stylesheets and design tools still speak, so the converter offers it as a display format, but
//! it has none of the perceptual uniformity of OKLCH: two colors with the same HSL lightness can
//! look wildly different in brightness, and saturation is measured relative to whatever the most
//! saturated sRGB color at that lightness happens to be.
//!
//! This implementation is hexagonal: colors are placed on the hexagon you get by tilting the RGB
//! cube on its corner, and that hexagon is stretched into a circle. Gray converts to a hue of 0
//! degrees, although any hue would describe it equally well.

use crate::colors::oklab::OklabColor;
use crate::colors::rgbcolor::RGBColor;
use crate::convert::ColorSpace;
use crate::coord::Coord;
use crate::cssnumeric::{format_number, round_to};

/// A color in the HSL color space, a direct transformation of sRGB.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HSLColor {
    /// The hue component, in degrees from 0 to 360.
    pub h: f64,
    /// The saturation component, from 0 to 1.
    pub s: f64,
    /// The lightness component, from 0 to 1: the average of the largest and smallest RGB component.
    pub l: f64,
}

impl HSLColor {
    /// Projects an sRGB color onto the HSL double hexcone. The color should already be in gamut:
    /// saturation is meaningless for components outside [0, 1].
    pub fn from_rgb(rgb: RGBColor) -> HSLColor {
        let (max_c, min_c) = Coord {
            x: rgb.r,
            y: rgb.g,
            z: rgb.b,
        }
        .max_min();
        // the hexagonal equivalent of radius
        let chroma = max_c - min_c;

        let hue = if chroma == 0.0 {
            0.0
        } else if max_c == rgb.r {
            // the red sector straddles 0 degrees, so wrap negatives around
            (((rgb.g - rgb.b) / chroma) * 60.0).rem_euclid(360.0)
        } else if max_c == rgb.g {
            ((rgb.b - rgb.r) / chroma) * 60.0 + 120.0
        } else {
            ((rgb.r - rgb.g) / chroma) * 60.0 + 240.0
        };

        let lightness = (max_c + min_c) / 2.0;
        let saturation = if lightness >= 1.0 || lightness <= 0.0 {
            0.0
        } else {
            chroma / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        HSLColor {
            h: hue,
            s: saturation,
            l: lightness,
        }
    }

    /// Converts back to sRGB.
    pub fn to_rgb(&self) -> RGBColor {
        let chroma = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let h = self.h.rem_euclid(360.0);
        // the second-largest component, where the largest is the chroma and the smallest is 0
        let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let (r1, g1, b1) = if h <= 60.0 {
            (chroma, x, 0.0)
        } else if h <= 120.0 {
            (x, chroma, 0.0)
        } else if h <= 180.0 {
            (0.0, chroma, x)
        } else if h <= 240.0 {
            (0.0, x, chroma)
        } else if h <= 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };
        let offset = self.l - chroma / 2.0;
        RGBColor {
            r: r1 + offset,
            g: g1 + offset,
            b: b1 + offset,
        }
    }

    /// Writes the color as `hsl(h, s%, l%)`, or `hsla(h, s%, l%, a)` when the alpha given is below
    /// 1. Every component is rounded to two decimals.
    /// # Example
    /// ```
    /// # use okpalette::colors::{HSLColor, RGBColor};
    /// let hsl = HSLColor::from_rgb(RGBColor::from_bytes(255, 0, 0));
    /// assert_eq!(hsl.to_hsl_string(None), "hsl(0, 100%, 50%)");
    /// ```
    pub fn to_hsl_string(&self, alpha: Option<f64>) -> String {
        let h = format_number(round_to(self.h, 2));
        let s = format_number(round_to(self.s * 100.0, 2));
        let l = format_number(round_to(self.l * 100.0, 2));
        match alpha {
            Some(a) if a < 1.0 => format!(
                "hsla({}, {}%, {}%, {})",
                h,
                s,
                l,
                format_number(num::clamp(a, 0.0, 1.0))
            ),
            _ => format!("hsl({}, {}%, {}%)", h, s, l),
        }
    }
}

impl ColorSpace for HSLColor {
    /// Goes through sRGB, clamping into gamut first so that saturation stays within [0, 1].
    fn from_oklab(lab: OklabColor) -> HSLColor {
        HSLColor::from_rgb(RGBColor::from_oklab(lab).clamped())
    }
    fn to_oklab(&self) -> OklabColor {
        self.to_rgb().to_oklab()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 0.0001
    }

    #[test]
    fn test_hsl_rgb_conversion() {
        let red = HSLColor::from_rgb(RGBColor { r: 1., g: 0., b: 0. });
        assert!(close(red.h, 0.));
        assert!(close(red.s, 1.));
        assert!(close(red.l, 0.5));
        let indigo = HSLColor {
            h: 245.0,
            s: 0.5,
            l: 0.5,
        };
        assert_eq!(indigo.to_rgb().to_hex_string(), "#4a40bf");
    }

    #[test]
    fn test_red_sector_wraps() {
        // magenta-leaning red: blue above green puts the raw angle below zero
        let rose = HSLColor::from_rgb(RGBColor { r: 1., g: 0., b: 0.5 });
        assert!(close(rose.h, 330.));
        assert_eq!(rose.to_rgb().to_hex_string(), "#ff0080");
    }

    #[test]
    fn test_gray_has_zero_hue() {
        let gray = HSLColor::from_rgb(RGBColor::from_bytes(128, 128, 128));
        assert_eq!(gray.h, 0.);
        assert_eq!(gray.s, 0.);
        let white = HSLColor::from_rgb(RGBColor::from_bytes(255, 255, 255));
        assert_eq!(white.s, 0.);
        assert_eq!(white.to_hsl_string(None), "hsl(0, 0%, 100%)");
    }

    #[test]
    fn test_hsl_strings() {
        let blue = HSLColor::from_rgb(RGBColor::from_bytes(59, 130, 246));
        assert_eq!(blue.to_hsl_string(None), "hsl(217.22, 91.22%, 59.8%)");
        assert_eq!(blue.to_hsl_string(Some(1.)), "hsl(217.22, 91.22%, 59.8%)");
        assert_eq!(blue.to_hsl_string(Some(0.25)), "hsla(217.22, 91.22%, 59.8%, 0.25)");
    }

    #[test]
    fn test_through_oklab() {
        let start = HSLColor {
            h: 120.,
            s: 0.4,
            l: 0.3,
        };
        let back: HSLColor = start.to_oklab().convert();
        assert!(close(back.h, start.h));
        assert!(close(back.s, start.s));
        assert!(close(back.l, start.l));
    }
}
