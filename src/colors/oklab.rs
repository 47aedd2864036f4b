//! A module that implements the [OKLab color space](https://bottosson.github.io/posts/oklab/), the
//! Cartesian form of OKLCH and the hub every conversion in this crate passes through. OKLab is
//! built so that equal distances look like equal differences, which is what lets a color survive
//! being edited through an sRGB color picker and re-derived without drifting.
//!
//! The forward transform goes from linear-light sRGB to a cone response (LMS), through a cube
//! root, and then to the opponent axes `l`, `a`, and `b`. Both matrix pairs are the published
//! inverses of each other.

use crate::coord::{Coord, Matrix3};
use crate::color::Oklch;
use crate::convert::ColorSpace;

// linear sRGB -> LMS
const RGB_TO_LMS: Matrix3 = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

// cube-rooted LMS -> OKLab
const LMS_TO_LAB: Matrix3 = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

// OKLab -> cube-rooted LMS
const LAB_TO_LMS: Matrix3 = [
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

// LMS -> linear sRGB
const LMS_TO_RGB: Matrix3 = [
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
];

/// Below this chroma a color is treated as gray and given a hue of 0, since its angle is just noise
/// left over from the matrices.
pub(crate) const ACHROMATIC_CHROMA: f64 = 1e-6;

/// A color in OKLab. `l` runs from 0 to 1 here (not 0 to 100 as OKLCH lightness does in the rest of
/// the crate), and `a` and `b` are signed opponent axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OklabColor {
    /// Perceptual lightness, 0 to 1.
    pub l: f64,
    /// The green-red opponent axis.
    pub a: f64,
    /// The blue-yellow opponent axis.
    pub b: f64,
}

impl OklabColor {
    /// Converts linear-light sRGB components to OKLab.
    pub fn from_linear_rgb(rgb: Coord) -> OklabColor {
        let lms = rgb.transform(&RGB_TO_LMS).map(f64::cbrt);
        OklabColor::from(lms.transform(&LMS_TO_LAB))
    }

    /// Converts back to linear-light sRGB components. Out-of-gamut colors give components outside
    /// [0, 1]; nothing is clamped here.
    pub fn to_linear_rgb(&self) -> Coord {
        let lms = Coord::from(*self)
            .transform(&LAB_TO_LMS)
            .map(|v| v * v * v);
        lms.transform(&LMS_TO_RGB)
    }

    /// The chroma, or distance from the neutral axis.
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }
}

impl ColorSpace for OklabColor {
    fn from_oklab(lab: OklabColor) -> OklabColor {
        lab
    }
    fn to_oklab(&self) -> OklabColor {
        *self
    }
}

// OKLCH is just OKLab in polar form, with lightness scaled up to a percentage.
impl ColorSpace for Oklch {
    /// The alpha of the result is always `None`: OKLab carries no opacity.
    fn from_oklab(lab: OklabColor) -> Oklch {
        let c = lab.chroma();
        let h = if approx_eq!(f64, c, 0.0, epsilon = ACHROMATIC_CHROMA) {
            0.0
        } else {
            // atan2 lands in (-180, 180]; shift into [0, 360)
            lab.b.atan2(lab.a).to_degrees().rem_euclid(360.0)
        };
        Oklch::new(lab.l * 100.0, c, h, None)
    }
    fn to_oklab(&self) -> OklabColor {
        let (sin, cos) = self.hue.to_radians().sin_cos();
        OklabColor {
            l: self.lightness / 100.0,
            a: self.chroma * cos,
            b: self.chroma * sin,
        }
    }
}

impl From<Coord> for OklabColor {
    fn from(c: Coord) -> OklabColor {
        OklabColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl From<OklabColor> for Coord {
    fn from(lab: OklabColor) -> Coord {
        Coord {
            x: lab.l,
            y: lab.a,
            z: lab.b,
        }
    }
}
