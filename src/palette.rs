//! The palette is the single owner of the working set of colors. It hands out identities, keeps
//! colors in the order they were added, and derives every text form from its current contents on
//! demand, so nothing it returns can go stale after a mutation.
//!
//! Operations on an identity the palette doesn't hold are no-ops that report so through their
//! return value, and imports replace the whole palette or nothing.

use rand::Rng;
use thiserror::Error;

use crate::color::{ColorData, ColorId, ColorRecord, ColorUpdate};
use crate::config::PaletteConfig;
use crate::convert::{color_formats, ColorFormat};
use crate::output::{self, CssVariable, OutputFormat, OutputOptions};
use crate::stylesheet::parse_stylesheet;

/// An error in importing colors into a palette.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum ImportError {
    /// The text held no `--color-*: oklch(...)` declarations, so nothing was replaced.
    #[error("no OKLCH color declarations found; expected --color-* properties with oklch() values")]
    NoColorsFound,
}

/// An ordered, in-memory collection of colors.
///
/// # Example
/// ```
/// # use okpalette::prelude::*;
/// let mut palette = Palette::empty(PaletteConfig::default());
/// let id = palette.add(ColorData::new("primary", Oklch::new(55., 0.224, 264., None)));
/// palette.update(id, ColorUpdate::default().hue(200.));
/// let copy = palette.duplicate(id).unwrap();
/// assert_eq!(palette.get(copy).unwrap().name, "primary Copy");
/// assert_eq!(
///     palette.generate(OutputFormat::Theme),
///     "@theme {\n  --color-primary: oklch(55% 0.224 200);\n  --color-primary-Copy: oklch(55% 0.224 200);\n}"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<ColorRecord>,
    config: PaletteConfig,
}

impl Palette {
    /// Creates a palette seeded with the config's initial colors.
    pub fn new(config: PaletteConfig) -> Palette {
        let colors = config
            .initial_colors
            .iter()
            .cloned()
            .map(|data| data.into_record(ColorId::new_v4()))
            .collect();
        Palette { colors, config }
    }

    /// Creates a palette with no colors.
    pub fn empty(config: PaletteConfig) -> Palette {
        Palette {
            colors: Vec::new(),
            config,
        }
    }

    /// The configuration this palette was built with.
    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    /// The colors, in display order.
    pub fn colors(&self) -> &[ColorRecord] {
        &self.colors
    }

    /// The number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the palette holds no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Looks up a color by identity.
    pub fn get(&self, id: ColorId) -> Option<&ColorRecord> {
        self.colors.iter().find(|c| c.id() == id)
    }

    fn position(&self, id: ColorId) -> Option<usize> {
        self.colors.iter().position(|c| c.id() == id)
    }

    /// Appends a color under a fresh identity, which is returned.
    pub fn add(&mut self, data: ColorData) -> ColorId {
        let id = ColorId::new_v4();
        debug!("adding color {} as {:?}", id, data.name);
        self.colors.push(data.into_record(id));
        id
    }

    /// Appends a randomly generated color, sampled within the configured ranges.
    pub fn add_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ColorId {
        let data = ColorData::random(rng, &self.config.random);
        self.add(data)
    }

    /// Merges the given fields into the color with this identity. Returns `false`, changing nothing,
    /// if there is no such color or if any field given is NaN or infinite.
    pub fn update(&mut self, id: ColorId, update: ColorUpdate) -> bool {
        if !update.is_finite() {
            warn!("rejected update of color {} with a non-finite component", id);
            return false;
        }
        match self.colors.iter_mut().find(|c| c.id() == id) {
            Some(record) => {
                record.apply(&update);
                debug!("updated color {}", id);
                true
            }
            None => {
                warn!("update of unknown color {}", id);
                false
            }
        }
    }

    /// Removes the color with this identity, returning it. Returns `None` if there is no such color.
    pub fn remove(&mut self, id: ColorId) -> Option<ColorRecord> {
        match self.position(id) {
            Some(idx) => {
                debug!("removing color {}", id);
                Some(self.colors.remove(idx))
            }
            None => {
                warn!("removal of unknown color {}", id);
                None
            }
        }
    }

    /// Appends a copy of the color with this identity, under a fresh identity and with the configured
    /// suffix added to its name. Returns the new identity, or `None` if there is no such color.
    pub fn duplicate(&mut self, id: ColorId) -> Option<ColorId> {
        let source = match self.get(id) {
            Some(record) => record.data(),
            None => {
                warn!("duplicate of unknown color {}", id);
                return None;
            }
        };
        let name = format!("{}{}", source.name, self.config.duplicate_suffix);
        Some(self.add(ColorData::new(name, source.value)))
    }

    /// Removes every color.
    pub fn clear(&mut self) {
        debug!("clearing {} colors", self.colors.len());
        self.colors.clear();
    }

    /// Replaces the whole palette with the given colors, in order, each under a fresh identity.
    pub fn import_replace(&mut self, colors: Vec<ColorData>) {
        let records = colors
            .into_iter()
            .map(|data| data.into_record(ColorId::new_v4()))
            .collect();
        self.colors = records;
        debug!("imported {} colors", self.colors.len());
    }

    /// Parses stylesheet text and, if it declares any colors, replaces the palette with them,
    /// returning how many there were. If it declares none, the palette is left exactly as it was.
    ///
    /// # Errors
    /// Returns [`ImportError::NoColorsFound`] if the text has no color declarations.
    pub fn import_stylesheet(&mut self, text: &str) -> Result<usize, ImportError> {
        let parsed = parse_stylesheet(text);
        if parsed.is_empty() {
            return Err(ImportError::NoColorsFound);
        }
        let count = parsed.len();
        self.import_replace(parsed);
        Ok(count)
    }

    fn output_options(&self) -> OutputOptions {
        OutputOptions {
            lowercase_slugs: self.config.lowercase_slugs,
        }
    }

    /// Writes the current colors out in the given format.
    pub fn generate(&self, format: OutputFormat) -> String {
        output::generate_with(&self.colors, format, self.output_options())
    }

    /// The current colors as `--<slug>` custom properties.
    pub fn css_variables(&self) -> Vec<CssVariable> {
        output::css_variables(&self.colors, self.output_options())
    }

    /// Every text form of the color with this identity, or `None` if there is no such color.
    pub fn formats(&self, id: ColorId) -> Option<Vec<ColorFormat>> {
        self.get(id).map(|record| color_formats(&record.value))
    }
}

impl Default for Palette {
    fn default() -> Palette {
        Palette::new(PaletteConfig::default())
    }
}
