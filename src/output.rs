//! This module turns a list of colors into text that can be pasted into a build pipeline. There are
//! three target formats, all written with two-space indentation and one color per line:
//!
//! - [`OutputFormat::CssVariables`]: custom properties scoped to `:root`,
//!   `--<slug>: oklch(...);`
//! - [`OutputFormat::LegacyConfig`]: a JavaScript module exporting a `theme.extend.colors` object,
//!   `'<slug>': 'oklch(...)',`
//! - [`OutputFormat::Theme`]: an `@theme` block, `--color-<slug>: oklch(...);`
//!
//! Output is a pure function of the input: the same colors in the same order always give the same
//! bytes. An empty list still produces the enclosing block, with nothing between its braces but an
//! empty line, which is how callers recognize an empty palette.

use std::fmt;

use crate::color::ThemeColor;

/// The text formats a palette can be written out as.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// A `:root { ... }` block of custom properties.
    CssVariables,
    /// A `module.exports = { theme: { extend: { colors: { ... } } } }` configuration module.
    LegacyConfig,
    /// An `@theme { ... }` block with `--color-` prefixed properties.
    Theme,
}

/// Every output format, in the order they are usually offered.
pub static OUTPUT_FORMATS: [OutputFormat; 3] = [
    OutputFormat::CssVariables,
    OutputFormat::LegacyConfig,
    OutputFormat::Theme,
];

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            OutputFormat::CssVariables => "CSS variables",
            OutputFormat::LegacyConfig => "legacy config",
            OutputFormat::Theme => "theme",
        };
        write!(f, "{}", name)
    }
}

/// Options that change how names are rendered.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Lower-case slugs before use, so `"Brand Blue"` becomes `brand-blue`.
    pub lowercase_slugs: bool,
}

/// One custom property: a variable name, including its leading `--`, and the value text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssVariable {
    /// The property name, such as `--primary`.
    pub name: String,
    /// The property value, such as `oklch(55% 0.224 264)`.
    pub value: String,
}

impl fmt::Display for CssVariable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

// characters that would end a declaration name early
fn breaks_slug(c: char) -> bool {
    c.is_whitespace() || c == ':' || c == ';' || c == '{' || c == '}'
}

/// Turns a color name into an identifier fragment: surrounding whitespace is trimmed, and each run of
/// whitespace inside becomes a single hyphen. `:` `;` `{` and `}` can't appear in a declaration name,
/// so they are treated as whitespace too.
///
/// # Example
/// ```
/// # use okpalette::output::slugify;
/// assert_eq!(slugify("  brand   blue ", false), "brand-blue");
/// assert_eq!(slugify("Brand Blue", true), "brand-blue");
/// assert_eq!(slugify("a:b", false), "a-b");
/// ```
pub fn slugify(name: &str, lowercase: bool) -> String {
    let slug = name
        .split(breaks_slug)
        .filter(|part| !part.is_empty())
        .collect::<Vec<&str>>()
        .join("-");
    if lowercase {
        slug.to_lowercase()
    } else {
        slug
    }
}

fn variables<T: ThemeColor>(colors: &[T], prefix: &str, options: OutputOptions) -> Vec<CssVariable> {
    colors
        .iter()
        .map(|color| CssVariable {
            name: format!("{}{}", prefix, slugify(color.name(), options.lowercase_slugs)),
            value: color.value().to_string(),
        })
        .collect()
}

/// The `--<slug>` custom properties for each color, in order.
pub fn css_variables<T: ThemeColor>(colors: &[T], options: OutputOptions) -> Vec<CssVariable> {
    variables(colors, "--", options)
}

// Wraps lines in `header {` ... `}`, with the closing brace at the given indent. No lines still
// leaves an empty line between the braces.
fn block(header: &str, lines: &[String], closing_indent: &str) -> String {
    format!("{} {{\n{}\n{}}}", header, lines.join("\n"), closing_indent)
}

fn declaration_lines(vars: &[CssVariable]) -> Vec<String> {
    vars.iter().map(|v| format!("  {};", v)).collect()
}

// single-quoted JavaScript string literal
fn js_string(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn legacy_config<T: ThemeColor>(colors: &[T], options: OutputOptions) -> String {
    let entries: Vec<String> = colors
        .iter()
        .map(|color| {
            format!(
                "        {}: {},",
                js_string(&slugify(color.name(), options.lowercase_slugs)),
                js_string(&color.value().to_string())
            )
        })
        .collect();
    let colors_block = block("      colors:", &entries, "      ");
    format!(
        "module.exports = {{\n  theme: {{\n    extend: {{\n{},\n    }},\n  }},\n}};",
        colors_block
    )
}

/// Writes the colors out in the given format, with default options.
///
/// # Example
/// ```
/// # use okpalette::prelude::*;
/// let colors = vec![ColorData::new("primary", Oklch::new(55., 0.224, 264., None))];
/// assert_eq!(
///     generate(&colors, OutputFormat::Theme),
///     "@theme {\n  --color-primary: oklch(55% 0.224 264);\n}"
/// );
/// let none: Vec<ColorData> = vec![];
/// assert_eq!(generate(&none, OutputFormat::CssVariables), ":root {\n\n}");
/// ```
pub fn generate<T: ThemeColor>(colors: &[T], format: OutputFormat) -> String {
    generate_with(colors, format, OutputOptions::default())
}

/// Writes the colors out in the given format.
pub fn generate_with<T: ThemeColor>(colors: &[T], format: OutputFormat, options: OutputOptions) -> String {
    match format {
        OutputFormat::CssVariables => {
            block(":root", &declaration_lines(&css_variables(colors, options)), "")
        }
        OutputFormat::LegacyConfig => legacy_config(colors, options),
        OutputFormat::Theme => block(
            "@theme",
            &declaration_lines(&variables(colors, "--color-", options)),
            "",
        ),
    }
}
