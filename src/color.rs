//! This file defines the color model the rest of the crate is built around: the OKLCH components of
//! a color ([`Oklch`]), a named color that has not been given an identity yet ([`ColorData`]), and
//! the record a [`Palette`] actually stores ([`ColorRecord`]).
//!
//! Every text form of a color is derived from [`Oklch`]. Its `Display` implementation produces the
//! canonical functional notation `oklch(L% C H)` or `oklch(L% C H / A)`, which is used for previews,
//! copy payloads, every generated stylesheet, and as the input to conversion.
//!
//! [`Palette`]: ../palette/struct.Palette.html

use std::fmt;

use rand::Rng;
use uuid::Uuid;

use crate::config::RandomRanges;
use crate::cssnumeric::{format_number, round_components};

/// The components of a color in the OKLCH space.
///
/// An `alpha` of `None` means fully opaque. `Some(1.0)` means the same thing, and is normalized away
/// by [`Oklch::new`] and everything that builds colors in this crate.
///
/// # Example
/// ```
/// # use okpalette::prelude::*;
/// let opaque = Oklch::new(55., 0.224, 264., Some(1.));
/// assert_eq!(opaque.alpha, None);
/// assert_eq!(opaque.to_string(), "oklch(55% 0.224 264)");
/// let translucent = Oklch::new(73.9, 0.155, 53., Some(0.8));
/// assert_eq!(translucent.to_string(), "oklch(73.9% 0.155 53 / 0.8)");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    /// Perceptual lightness as a percentage, from 0 (black) to 100 (white).
    pub lightness: f64,
    /// Distance from the neutral axis. Never negative, and in practice no larger than about 0.5 for
    /// colors a screen can show.
    pub chroma: f64,
    /// Hue angle in degrees. Values outside [0, 360) are kept as given, not wrapped.
    pub hue: f64,
    /// Opacity from 0 to 1, or `None` for fully opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

/// Drops an explicit alpha of exactly 1, which means the same as no alpha at all.
pub(crate) fn normalize_alpha(alpha: Option<f64>) -> Option<f64> {
    match alpha {
        Some(a) if a == 1.0 => None,
        other => other,
    }
}

impl Oklch {
    /// Builds a color from its components, normalizing an alpha of 1 to `None`.
    pub fn new(lightness: f64, chroma: f64, hue: f64, alpha: Option<f64>) -> Oklch {
        Oklch {
            lightness,
            chroma,
            hue,
            alpha: normalize_alpha(alpha),
        }
    }

    /// Returns `true` if every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.lightness.is_finite()
            && self.chroma.is_finite()
            && self.hue.is_finite()
            && self.alpha.map_or(true, f64::is_finite)
    }

    /// Rounds lightness to one decimal, chroma to three, and hue to a whole degree. Alpha is left
    /// alone.
    pub fn rounded(&self) -> Oklch {
        let (lightness, chroma, hue) = round_components(self.lightness, self.chroma, self.hue);
        Oklch::new(lightness, chroma, hue, self.alpha)
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "oklch({}% {} {}",
            format_number(self.lightness),
            format_number(self.chroma),
            format_number(self.hue)
        )?;
        // an alpha of 1 is never printed, even if someone built the struct by hand
        match normalize_alpha(self.alpha) {
            Some(a) => write!(f, " / {})", format_number(a)),
            None => write!(f, ")"),
        }
    }
}

/// The opaque identity of a [`ColorRecord`] within a palette. Only a palette hands these out.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorId(Uuid);

impl ColorId {
    /// Creates a fresh, random identifier.
    pub(crate) fn new_v4() -> ColorId {
        ColorId(Uuid::new_v4())
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named color without an identity: what the stylesheet parser and the random sampler produce,
/// and what a palette accepts when adding or importing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorData {
    /// A human-readable label, also the source of the generated variable name.
    pub name: String,
    /// The color itself.
    #[serde(flatten)]
    pub value: Oklch,
}

impl ColorData {
    /// Pairs a name with a color.
    pub fn new<S: Into<String>>(name: S, value: Oklch) -> ColorData {
        ColorData {
            name: name.into(),
            value,
        }
    }

    /// Samples a color uniformly inside the given ranges and rounds it to display precision. The
    /// name is `color-<n>` for a random `n` below 1000. Pass a seeded generator to make this
    /// deterministic.
    ///
    /// # Example
    /// ```
    /// # extern crate rand;
    /// # extern crate okpalette;
    /// # use rand::SeedableRng;
    /// # use rand::rngs::StdRng;
    /// # use okpalette::prelude::*;
    /// # fn main() {
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let data = ColorData::random(&mut rng, &RandomRanges::default());
    /// assert!(data.value.lightness >= 40. && data.value.lightness <= 80.);
    /// assert!(data.name.starts_with("color-"));
    /// # }
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R, ranges: &RandomRanges) -> ColorData {
        let lightness = sample(rng, ranges.lightness);
        let chroma = sample(rng, ranges.chroma);
        let hue = sample(rng, ranges.hue);
        let suffix: u32 = rng.gen_range(0..1000);
        ColorData {
            name: format!("color-{}", suffix),
            value: Oklch::new(lightness, chroma, hue, None).rounded(),
        }
    }

    /// Attaches an identity, producing the record a palette stores.
    pub(crate) fn into_record(self, id: ColorId) -> ColorRecord {
        ColorRecord {
            id,
            name: self.name,
            value: self.value,
        }
    }
}

// gen_range panics on an empty range, so a degenerate range just returns its bound
fn sample<R: Rng + ?Sized>(rng: &mut R, range: [f64; 2]) -> f64 {
    let [min, max] = range;
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

/// A color held by a palette. The `id` is assigned when the record is created and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    id: ColorId,
    /// A human-readable label, also the source of the generated variable name.
    pub name: String,
    /// The color itself.
    #[serde(flatten)]
    pub value: Oklch,
}

impl ColorRecord {
    /// This record's identity.
    pub fn id(&self) -> ColorId {
        self.id
    }

    /// Copies the name and color out, leaving the identity behind.
    pub fn data(&self) -> ColorData {
        ColorData {
            name: self.name.clone(),
            value: self.value,
        }
    }

    /// Merges a partial update into this record. The identity is untouched.
    pub(crate) fn apply(&mut self, update: &ColorUpdate) {
        if let Some(ref name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(l) = update.lightness {
            self.value.lightness = l;
        }
        if let Some(c) = update.chroma {
            self.value.chroma = c;
        }
        if let Some(h) = update.hue {
            self.value.hue = h;
        }
        if let Some(a) = update.alpha {
            self.value.alpha = normalize_alpha(a);
        }
    }
}

/// A partial replacement of a record's fields. Fields left as `None` keep their current value. For
/// `alpha`, `Some(None)` clears it back to opaque.
///
/// # Example
/// ```
/// # use okpalette::prelude::*;
/// let update = ColorUpdate::default().name("accent").hue(120.).alpha(None);
/// assert_eq!(update.alpha, Some(None));
/// assert_eq!(update.lightness, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorUpdate {
    /// A new name. Surrounding whitespace is trimmed when applied.
    pub name: Option<String>,
    /// A new lightness percentage.
    pub lightness: Option<f64>,
    /// A new chroma.
    pub chroma: Option<f64>,
    /// A new hue in degrees.
    pub hue: Option<f64>,
    /// A new alpha; the inner `None` means opaque.
    pub alpha: Option<Option<f64>>,
}

impl ColorUpdate {
    /// Sets the name.
    pub fn name<S: Into<String>>(mut self, name: S) -> ColorUpdate {
        self.name = Some(name.into());
        self
    }

    /// Sets the lightness.
    pub fn lightness(mut self, lightness: f64) -> ColorUpdate {
        self.lightness = Some(lightness);
        self
    }

    /// Sets the chroma.
    pub fn chroma(mut self, chroma: f64) -> ColorUpdate {
        self.chroma = Some(chroma);
        self
    }

    /// Sets the hue.
    pub fn hue(mut self, hue: f64) -> ColorUpdate {
        self.hue = Some(hue);
        self
    }

    /// Sets the alpha.
    pub fn alpha(mut self, alpha: Option<f64>) -> ColorUpdate {
        self.alpha = Some(alpha);
        self
    }

    /// Returns `true` if every numeric field it sets is a finite number.
    pub fn is_finite(&self) -> bool {
        let finite = |v: Option<f64>| v.map_or(true, f64::is_finite);
        finite(self.lightness)
            && finite(self.chroma)
            && finite(self.hue)
            && finite(self.alpha.and_then(|a| a))
    }

    /// Replaces every color component at once, as a color picker does. The name is kept.
    pub fn components(value: Oklch) -> ColorUpdate {
        ColorUpdate {
            name: None,
            lightness: Some(value.lightness),
            chroma: Some(value.chroma),
            hue: Some(value.hue),
            alpha: Some(value.alpha),
        }
    }
}

/// Anything with a name and an OKLCH value, which is all the output generator needs. Implemented for
/// both [`ColorData`] and [`ColorRecord`], so parsed colors can be rendered without first being
/// added to a palette.
pub trait ThemeColor {
    /// The color's label.
    fn name(&self) -> &str;
    /// The color's components.
    fn value(&self) -> Oklch;
}

impl ThemeColor for ColorData {
    fn name(&self) -> &str {
        &self.name
    }
    fn value(&self) -> Oklch {
        self.value
    }
}

impl ThemeColor for ColorRecord {
    fn name(&self) -> &str {
        &self.name
    }
    fn value(&self) -> Oklch {
        self.value
    }
}
