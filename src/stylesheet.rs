//! This file reads OKLCH color declarations out of free-form stylesheet text, such as a pasted
//! `@theme` block or a whole CSS file. It does not try to understand CSS in general: it finds
//! declarations of one specific shape and ignores everything around them.
//!
//! The grammar, with whitespace allowed wherever a space is shown:
//!
//! ```text
//! declaration := "--color-" name ":" "oklch(" components ")" [";"]
//! name        := one or more characters other than ':' ';' '{' '}' or a line break
//! components  := lightness chroma hue [ "/" alpha ]
//! lightness   := number ["%"]
//! chroma, hue := number
//! alpha       := number ["%"]
//! ```
//!
//! A `number` is read from the front of its token, so `0.2abc` reads as `0.2`; a token with no
//! numeric prefix, or one that isn't finite, rejects the whole declaration. The `/` before alpha
//! may touch its neighbors (`53/0.8`). Declarations may appear anywhere in the text, several to a
//! line, and are returned in the order they appear.

use regex::Regex;

use crate::color::{ColorData, Oklch};
use crate::cssnumeric::parse_leading_number;

lazy_static! {
    static ref DECLARATION: Regex =
        Regex::new(r"--color-([^:;{}\r\n]+):\s*(?i:oklch)\(([^)]+)\)").expect("declaration pattern is valid");
}

/// Extracts every OKLCH color declared in `text`, in order of appearance.
///
/// Names have surrounding whitespace trimmed and hyphens turned into spaces, so
/// `--color-brand-blue` becomes `"brand blue"`. Lightness, chroma, and hue are rounded to one, three,
/// and zero decimals. An alpha of 1 is dropped. A declaration whose lightness, chroma, or hue can't
/// be read is skipped without affecting the others, and text with no declarations gives an empty
/// list: there is no other way for parsing to fail.
///
/// # Example
/// ```
/// # use okpalette::stylesheet::parse_stylesheet;
/// let colors = parse_stylesheet("@theme {
///   --color-primary: oklch(55% 0.224 264);
///   --color-accent: oklch(73.9% 0.155 53 / 0.8);
/// }");
/// assert_eq!(colors.len(), 2);
/// assert_eq!(colors[0].name, "primary");
/// assert_eq!(colors[1].value.alpha, Some(0.8));
/// ```
pub fn parse_stylesheet(text: &str) -> Vec<ColorData> {
    let mut colors = Vec::new();
    for caps in DECLARATION.captures_iter(text) {
        let raw_name = &caps[1];
        let components = &caps[2];
        match parse_components(components) {
            Some(value) => {
                let name = raw_name.trim().replace('-', " ");
                trace!("parsed color {:?}: {}", name, value);
                colors.push(ColorData { name, value });
            }
            None => warn!(
                "skipping --color-{} declaration with unreadable components {:?}",
                raw_name.trim(),
                components
            ),
        }
    }
    debug!("found {} color declarations", colors.len());
    colors
}

// "/" is its own token even when written without spaces around it
fn tokenize(components: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for word in components.split_whitespace() {
        let mut rest = word;
        while let Some(idx) = rest.find('/') {
            if idx > 0 {
                tokens.push(&rest[..idx]);
            }
            tokens.push("/");
            rest = &rest[idx + 1..];
        }
        if !rest.is_empty() {
            tokens.push(rest);
        }
    }
    tokens
}

// Reads a number that may be written as a percentage of 1, as alpha can be.
fn parse_fraction(token: &str) -> Option<f64> {
    if token.ends_with('%') {
        parse_leading_number(token.trim_end_matches('%')).map(|v| v / 100.0)
    } else {
        parse_leading_number(token)
    }
}

fn parse_components(components: &str) -> Option<Oklch> {
    let tokens = tokenize(components);
    if tokens.len() < 3 {
        return None;
    }
    let lightness = parse_leading_number(tokens[0].trim_end_matches('%'))?;
    let chroma = parse_leading_number(tokens[1])?;
    let hue = parse_leading_number(tokens[2])?;
    // a missing or unreadable alpha just means opaque
    let alpha = match (tokens.get(3), tokens.get(4)) {
        (Some(&"/"), Some(token)) => parse_fraction(token),
        _ => None,
    };
    let value = Oklch::new(lightness, chroma, hue, alpha).rounded();
    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use pretty_assertions::assert_eq;

    fn one(text: &str) -> ColorData {
        let mut colors = parse_stylesheet(text);
        assert_eq!(colors.len(), 1, "expected one color in {:?}", text);
        colors.remove(0)
    }

    #[test]
    fn test_simple_declaration() {
        let c = one("--color-primary: oklch(55% 0.224 264);");
        assert_eq!(c, ColorData::new("primary", Oklch::new(55., 0.224, 264., None)));
    }

    #[test]
    fn test_alpha_declaration() {
        let c = one("--color-accent: oklch(73.9% 0.155 53 / 0.8);");
        assert_eq!(c, ColorData::new("accent", Oklch::new(73.9, 0.155, 53., Some(0.8))));
    }

    #[test]
    fn test_alpha_of_one_is_dropped() {
        assert_eq!(one("--color-x: oklch(50% 0.1 10 / 1);").value.alpha, None);
        assert_eq!(one("--color-x: oklch(50% 0.1 10 / 100%);").value.alpha, None);
        assert_eq!(one("--color-x: oklch(50% 0.1 10 / 40%);").value.alpha, Some(0.4));
    }

    #[test]
    fn test_unreadable_alpha_means_opaque() {
        let c = one("--color-x: oklch(50% 0.1 10 / abc);");
        assert_eq!(c.value, Oklch::new(50., 0.1, 10., None));
        // no slash, no alpha
        assert_eq!(one("--color-x: oklch(50% 0.1 10 0.5);").value.alpha, None);
    }

    #[test]
    fn test_slash_without_spaces() {
        let c = one("--color-accent: oklch(73.9% 0.155 53/0.8)");
        assert_eq!(c.value, Oklch::new(73.9, 0.155, 53., Some(0.8)));
    }

    #[test]
    fn test_names() {
        assert_eq!(one("--color-brand-blue-500: oklch(50% 0.1 250);").name, "brand blue 500");
        assert_eq!(one("--color- padded  : oklch(50% 0.1 250);").name, "padded");
    }

    #[test]
    fn test_whitespace_tolerance() {
        let c = one("  --color-primary  :\toklch(  55%   0.224\n264  ) ;");
        assert_eq!(c.value, Oklch::new(55., 0.224, 264., None));
        let c = one("--color-primary:oklch(55% 0.224 264)");
        assert_eq!(c.value, Oklch::new(55., 0.224, 264., None));
    }

    #[test]
    fn test_rounding_at_parse_time() {
        let c = one("--color-x: oklch(62.7955% 0.257683 29.2339);");
        assert_eq!(c.value, Oklch::new(62.8, 0.258, 29., None));
        // parsing what was generated from a parsed color changes nothing
        let again = one(&format!("--color-x: {};", c.value));
        assert_eq!(again, c);
    }

    #[test]
    fn test_order_and_surroundings() {
        let text = "
            /* theme */
            @theme {
              --font-sans: Inter, sans-serif;
              --color-b: oklch(20% 0.1 20); --color-a: oklch(10% 0.1 10);
              --spacing: 4px;
              --color-c: oklch(30% 0.1 30 / 0.5);
            }
            .button { color: var(--color-b); }
        ";
        let names: Vec<String> = parse_stylesheet(text).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_bad_entries_are_skipped() {
        let text = "
            --color-good: oklch(50% 0.1 10);
            --color-bad-lightness: oklch(abc 0.1 10);
            --color-short: oklch(50% 0.1);
            --color-infinite: oklch(50% 1e999 10);
            --color-also-good: oklch(60% 0.2 20);
        ";
        let names: Vec<String> = parse_stylesheet(text).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["good", "also good"]);
    }

    #[test]
    fn test_huge_components_stay_finite() {
        let c = one("--color-x: oklch(1e308% 0.1 10);");
        assert!(c.value.is_finite());
        assert_eq!(c.value.lightness, 1e308);
        let c = one("--color-x: oklch(50% 1e306 10);");
        assert!(c.value.is_finite());
        // an alpha too large to be finite reads as no alpha at all
        let c = one("--color-x: oklch(50% 0.1 10 / 1e309%);");
        assert_eq!(c.value.alpha, None);
    }

    #[test]
    fn test_nothing_found() {
        assert!(parse_stylesheet("").is_empty());
        assert!(parse_stylesheet("body { color: red; }").is_empty());
        assert!(parse_stylesheet("--color-primary: #3b82f6;").is_empty());
        assert!(parse_stylesheet("--color-primary: oklch(").is_empty());
        assert!(parse_stylesheet("--primary: oklch(55% 0.224 264);").is_empty());
    }

    #[test]
    fn test_hue_is_not_wrapped() {
        assert_eq!(one("--color-x: oklch(50% 0.1 400);").value.hue, 400.);
        assert_eq!(one("--color-x: oklch(50% 0.1 -30);").value.hue, -30.);
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("55% 0.2 264 / 0.5"), vec!["55%", "0.2", "264", "/", "0.5"]);
        assert_eq!(tokenize("55% 0.2 264/0.5"), vec!["55%", "0.2", "264", "/", "0.5"]);
        assert_eq!(tokenize(" 1 /2"), vec!["1", "/", "2"]);
    }
}
