//! Configuration for a [`Palette`]: how duplicates are named, how variable names are built, the
//! bounds of the random color sampler, and the colors a new palette starts with.
//!
//! A config is always handed to a palette explicitly; nothing here is global. Every field has a
//! default, so a JSON file only needs the keys it wants to change:
//!
//! ```
//! # use okpalette::config::PaletteConfig;
//! let config = PaletteConfig::from_json_str(r#"{ "duplicate_suffix": " (2)" }"#).unwrap();
//! assert_eq!(config.duplicate_suffix, " (2)");
//! assert!(!config.lowercase_slugs);
//! assert_eq!(config.initial_colors.len(), 2);
//! ```
//!
//! [`Palette`]: ../palette/struct.Palette.html

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::color::{ColorData, Oklch};

/// An error in loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config file: {0}")]
    Io(#[from] io::Error),
    /// The configuration was not valid JSON, or had fields of the wrong type.
    #[error("could not parse config: {0}")]
    Json(#[from] serde_json::Error),
    /// A sampling range was inverted, not finite, or out of its component's domain.
    #[error("invalid {field} range [{min}, {max}]")]
    InvalidRange {
        /// Which component the range bounds.
        field: &'static str,
        /// The lower bound given.
        min: f64,
        /// The upper bound given.
        max: f64,
    },
    /// A seed color had a component that was not a finite number.
    #[error("initial color {0:?} has a non-finite component")]
    NonFiniteColor(String),
}

/// Bounds for the random color sampler, each as `[min, max]`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomRanges {
    /// Lightness percentage bounds.
    pub lightness: [f64; 2],
    /// Chroma bounds.
    pub chroma: [f64; 2],
    /// Hue bounds, in degrees.
    pub hue: [f64; 2],
}

impl Default for RandomRanges {
    // mid lightness keeps contrast usable; the chroma band is vivid without clipping much
    fn default() -> RandomRanges {
        RandomRanges {
            lightness: [40.0, 80.0],
            chroma: [0.05, 0.25],
            hue: [0.0, 360.0],
        }
    }
}

impl RandomRanges {
    /// Checks that every range is finite, not inverted, and inside its component's domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("lightness", self.lightness, 0.0, 100.0)?;
        check_range("chroma", self.chroma, 0.0, f64::INFINITY)?;
        check_range("hue", self.hue, f64::NEG_INFINITY, f64::INFINITY)?;
        Ok(())
    }
}

fn check_range(field: &'static str, range: [f64; 2], lo: f64, hi: f64) -> Result<(), ConfigError> {
    let [min, max] = range;
    let ok = min.is_finite() && max.is_finite() && min <= max && min >= lo && max <= hi;
    if ok {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { field, min, max })
    }
}

/// Settings for a [`Palette`](../palette/struct.Palette.html).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Appended to a color's name when it is duplicated.
    pub duplicate_suffix: String,
    /// Whether generated variable names are lower-cased.
    pub lowercase_slugs: bool,
    /// Bounds for randomly generated colors.
    pub random: RandomRanges,
    /// The colors a palette built with [`Palette::new`] starts with.
    ///
    /// [`Palette::new`]: ../palette/struct.Palette.html#method.new
    pub initial_colors: Vec<ColorData>,
}

impl Default for PaletteConfig {
    fn default() -> PaletteConfig {
        PaletteConfig {
            duplicate_suffix: " Copy".to_string(),
            lowercase_slugs: false,
            random: RandomRanges::default(),
            initial_colors: vec![
                ColorData::new("primary", Oklch::new(55.0, 0.224, 264.0, None)),
                ColorData::new("secondary", Oklch::new(96.1, 0.014, 264.0, None)),
            ],
        }
    }
}

impl PaletteConfig {
    /// Reads a configuration from JSON and validates it. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<PaletteConfig, ConfigError> {
        let config: PaletteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration from a JSON file and validates it.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<PaletteConfig, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        debug!("loading palette config from {}", path.as_ref().display());
        PaletteConfig::from_json_str(&text)
    }

    /// Checks the sampler ranges and that every seed color is finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.random.validate()?;
        if let Some(bad) = self.initial_colors.iter().find(|c| !c.value.is_finite()) {
            return Err(ConfigError::NonFiniteColor(bad.name.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = PaletteConfig::default();
        assert_eq!(config.duplicate_suffix, " Copy");
        assert_eq!(config.initial_colors[0].name, "primary");
        assert_eq!(config.initial_colors[1].value.to_string(), "oklch(96.1% 0.014 264)");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(PaletteConfig::from_json_str("{}").unwrap(), PaletteConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = PaletteConfig::from_json_str(
            r#"{
                "lowercase_slugs": true,
                "random": { "hue": [180, 270] },
                "initial_colors": [
                    { "name": "accent", "lightness": 73.9, "chroma": 0.155, "hue": 53, "alpha": 0.8 }
                ]
            }"#,
        )
        .unwrap();
        assert!(config.lowercase_slugs);
        assert_eq!(config.random.hue, [180., 270.]);
        assert_eq!(config.random.lightness, [40., 80.]);
        assert_eq!(config.initial_colors.len(), 1);
        assert_eq!(config.initial_colors[0].value.alpha, Some(0.8));
    }

    #[test]
    fn test_invalid_ranges() {
        let inverted = PaletteConfig::from_json_str(r#"{ "random": { "lightness": [80, 40] } }"#);
        match inverted {
            Err(ConfigError::InvalidRange { field, .. }) => assert_eq!(field, "lightness"),
            other => panic!("expected a range error, got {:?}", other),
        }
        let negative = PaletteConfig::from_json_str(r#"{ "random": { "chroma": [-0.1, 0.2] } }"#);
        assert!(negative.is_err());
        let too_light = PaletteConfig::from_json_str(r#"{ "random": { "lightness": [50, 101] } }"#);
        assert!(too_light.is_err());
    }

    #[test]
    fn test_bad_json() {
        match PaletteConfig::from_json_str("{ not json") {
            Err(ConfigError::Json(_)) => {}
            other => panic!("expected a JSON error, got {:?}", other),
        }
        match PaletteConfig::from_json_str(r#"{ "lowercase_slugs": "yes" }"#) {
            Err(ConfigError::Json(_)) => {}
            other => panic!("expected a JSON error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        match PaletteConfig::from_path("/definitely/not/here/okpalette.json") {
            Err(ConfigError::Io(_)) => {}
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }
}
