//! The flat parameter mapping a guide sheet is described by.
//!
//! Parameters arrive as `name = value` string pairs, from a TOML file, the command line, or
//! anywhere else. Parsing is deliberately forgiving: a number that is missing, empty, or not
//! a number at all reads as `0`, a flag reads as `false`, and an unusable colour falls back
//! to the default one. Each substitution is logged as a warning. The only value that can
//! fail is the page size, since there is no sensible page to fall back to.
//!
//! Names are matched ignoring case, `_` and `-`, so `x_height`, `xHeight` and `x-height`
//! all refer to the same parameter.

use crate::colour::Colour;
use crate::error::GuideError;
use crate::pagesize::PageSizeName;
use log::{debug, warn};
use serde::Serialize;

/// Name of the configuration file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "guide-sheet.toml";

/// Everything needed to draw a guide sheet, as supplied by the user
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct GuideConfig {
    pub page_size: PageSizeName,
    pub landscape: bool,
    pub page_margin_inches: f32,
    pub nib_mm: f32,
    pub ascender: f32,
    pub x_height: f32,
    pub descender: f32,
    /// Gap below each guide-set, in nib widths
    pub spacing: f32,
    pub slant_guides: bool,
    pub slant_degrees: f32,
    pub draw_squares: bool,
    /// Shrink squares by the guide stroke so their drawn footprint is exactly one nib wide
    pub stroke_correction: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide_colour: Option<Colour>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slant_colour: Option<Colour>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Param {
    PageSize,
    Landscape,
    PageMarginInches,
    NibMm,
    Ascender,
    XHeight,
    Descender,
    Spacing,
    SlantGuides,
    SlantDegrees,
    DrawSquares,
    StrokeCorrection,
    GuideColour,
    SlantColour,
}

impl Param {
    fn lookup(key: &str) -> Option<Param> {
        let canonical: String = key
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        Some(match canonical.as_str() {
            "pagesize" | "size" => Param::PageSize,
            "landscape" => Param::Landscape,
            "pagemargininches" | "margininches" | "margin" => Param::PageMarginInches,
            "nibmm" | "nibsizemm" | "nib" => Param::NibMm,
            "ascender" => Param::Ascender,
            "xheight" => Param::XHeight,
            "descender" => Param::Descender,
            "spacing" => Param::Spacing,
            "slantguides" | "slant" => Param::SlantGuides,
            "slantdegrees" | "slantangle" => Param::SlantDegrees,
            "drawsquares" | "squares" => Param::DrawSquares,
            "strokecorrection" => Param::StrokeCorrection,
            "guidecolour" | "guidecolor" => Param::GuideColour,
            "slantcolour" | "slantcolor" => Param::SlantColour,
            _ => return None,
        })
    }
}

impl GuideConfig {
    /// Build a configuration from `(name, value)` pairs. Later pairs override earlier ones,
    /// and anything not mentioned keeps its zero / `false` / default value.
    ///
    /// ```
    /// use guide_sheets::{GuideConfig, PageSizeName};
    ///
    /// let config = GuideConfig::from_params([
    ///     ("pageSize", "A4"),
    ///     ("nib_mm", "3.8"),
    ///     ("xHeight", ""),
    /// ]).unwrap();
    /// assert_eq!(config.page_size, PageSizeName::A4);
    /// assert_eq!(config.nib_mm, 3.8);
    /// assert_eq!(config.x_height, 0.0);
    /// ```
    pub fn from_params<I, K, V>(params: I) -> Result<GuideConfig, GuideError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = GuideConfig::default();
        for (key, value) in params {
            config.set(key.as_ref(), value.as_ref())?;
        }
        Ok(config)
    }

    /// Set a single parameter from its textual value
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), GuideError> {
        let Some(param) = Param::lookup(key) else {
            warn!("ignoring unknown parameter `{key}`");
            return Ok(());
        };

        match param {
            Param::PageSize => self.page_size = value.parse()?,
            Param::Landscape => self.landscape = parse_flag(key, value),
            Param::PageMarginInches => self.page_margin_inches = parse_number(key, value),
            Param::NibMm => self.nib_mm = parse_number(key, value),
            Param::Ascender => self.ascender = parse_number(key, value),
            Param::XHeight => self.x_height = parse_number(key, value),
            Param::Descender => self.descender = parse_number(key, value),
            Param::Spacing => self.spacing = parse_number(key, value),
            Param::SlantGuides => self.slant_guides = parse_flag(key, value),
            Param::SlantDegrees => self.slant_degrees = parse_number(key, value),
            Param::DrawSquares => self.draw_squares = parse_flag(key, value),
            Param::StrokeCorrection => self.stroke_correction = parse_flag(key, value),
            Param::GuideColour => self.guide_colour = parse_colour(key, value),
            Param::SlantColour => self.slant_colour = parse_colour(key, value),
        }
        Ok(())
    }

    /// Log the effective configuration
    pub fn log_effective(&self) {
        match toml::to_string(self) {
            Ok(rendered) => debug!("effective configuration:\n{rendered}"),
            Err(e) => debug!("effective configuration: {self:?} ({e})"),
        }
    }
}

/// Read the top-level scalar values of a TOML document as parameter pairs. Tables and
/// arrays have no meaning as parameters and are skipped with a warning.
pub fn params_from_toml(source: &str) -> Result<Vec<(String, String)>, GuideError> {
    let table: toml::Table = toml::from_str(source)?;
    let mut params = Vec::with_capacity(table.len());
    for (key, value) in table {
        let value = match value {
            toml::Value::String(s) => s,
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            toml::Value::Boolean(b) => b.to_string(),
            other => {
                warn!("ignoring parameter `{key}`: {} values are not supported", other.type_str());
                continue;
            }
        };
        params.push((key, value));
    }
    Ok(params)
}

/// Split a `KEY=VALUE` command-line override. The value may be empty.
pub fn parse_override(raw: &str) -> Result<(String, String), GuideError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(GuideError::MalformedOverride(raw.to_string())),
    }
}

/// Missing, empty, or unparsable numbers are zero
fn parse_number(key: &str, value: &str) -> f32 {
    let value = value.trim();
    if value.is_empty() {
        return 0.0;
    }
    match value.parse::<f32>() {
        Ok(number) if number.is_finite() => number,
        _ => {
            warn!("parameter `{key}`: `{value}` is not a number, using 0");
            0.0
        }
    }
}

fn parse_flag(key: &str, value: &str) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" => true,
        "false" | "no" | "off" | "" => false,
        other => parse_number(key, other) != 0.0,
    }
}

fn parse_colour(key: &str, value: &str) -> Option<Colour> {
    if value.trim().is_empty() {
        return None;
    }
    match value.parse() {
        Ok(colour) => Some(colour),
        Err(e) => {
            warn!("parameter `{key}`: {e}, using the default colour");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;

    #[test]
    fn empty_mapping_is_all_zero() {
        let config = GuideConfig::from_params(Vec::<(&str, &str)>::new()).unwrap();
        assert_eq!(config, GuideConfig::default());
        assert_eq!(config.page_size, PageSizeName::Letter);
        assert_eq!(config.nib_mm, 0.0);
        assert!(!config.draw_squares);
    }

    #[test_log::test]
    fn missing_empty_and_garbage_numbers_read_as_zero() {
        let zero = GuideConfig::from_params([("ascender", "0")]).unwrap();
        let empty = GuideConfig::from_params([("ascender", "  ")]).unwrap();
        let garbage = GuideConfig::from_params([("ascender", "three")]).unwrap();
        let infinite = GuideConfig::from_params([("ascender", "inf")]).unwrap();
        let missing = GuideConfig::from_params([("descender", "0")]).unwrap();
        assert_eq!(zero, empty);
        assert_eq!(zero, garbage);
        assert_eq!(zero, infinite);
        assert_eq!(zero, missing);
    }

    #[test]
    fn camel_case_names_are_accepted() {
        let config = GuideConfig::from_params([
            ("pageSize", "1"),
            ("pageMargin_inches", ".25"),
            ("nib_mm", "3.8"),
            ("xHeight", "4"),
            ("slantGuides", "True"),
            ("slantDegrees", "10"),
            ("drawSquares", "1"),
        ])
        .unwrap();
        assert_eq!(config.page_size, PageSizeName::Legal);
        assert_eq!(config.page_margin_inches, 0.25);
        assert_eq!(config.nib_mm, 3.8);
        assert_eq!(config.x_height, 4.0);
        assert!(config.slant_guides);
        assert_eq!(config.slant_degrees, 10.0);
        assert!(config.draw_squares);
    }

    #[test]
    fn later_values_override_earlier_ones() {
        let config =
            GuideConfig::from_params([("spacing", "2"), ("SPACING", "0.75")]).unwrap();
        assert_eq!(config.spacing, 0.75);
    }

    #[test_log::test]
    fn unknown_keys_are_ignored() {
        let config = GuideConfig::from_params([("flourish", "lots")]).unwrap();
        assert_eq!(config, GuideConfig::default());
    }

    #[test]
    fn unknown_page_size_is_an_error() {
        let result = GuideConfig::from_params([("page_size", "Foolscap")]);
        assert!(matches!(result, Err(GuideError::UnknownPageSize(name)) if name == "Foolscap"));
    }

    #[test_log::test]
    fn flags_and_colours() {
        let config = GuideConfig::from_params([
            ("landscape", "yes"),
            ("draw_squares", "0"),
            ("stroke_correction", "on"),
            ("guide_colour", "0.8"),
            ("slant_colour", "mauve"),
        ])
        .unwrap();
        assert!(config.landscape);
        assert!(!config.draw_squares);
        assert!(config.stroke_correction);
        assert_eq!(config.guide_colour, Some(colours::SLANT_GREY));
        assert_eq!(config.slant_colour, None);
    }

    #[test]
    fn toml_scalars_become_params() {
        let params = params_from_toml(
            r#"
            page_size = "A4"
            nib_mm = 3.8
            ascender = 3
            landscape = true
            "#,
        )
        .unwrap();
        let config = GuideConfig::from_params(params).unwrap();
        assert_eq!(config.page_size, PageSizeName::A4);
        assert_eq!(config.nib_mm, 3.8);
        assert_eq!(config.ascender, 3.0);
        assert!(config.landscape);
    }

    #[test_log::test]
    fn toml_tables_are_skipped() {
        let params = params_from_toml("nib_mm = 2\n[extra]\nfoo = 1\n").unwrap();
        assert_eq!(params, vec![("nib_mm".to_string(), "2".to_string())]);
    }

    #[test]
    fn toml_syntax_errors_surface() {
        assert!(matches!(
            params_from_toml("nib_mm = = 2"),
            Err(GuideError::ConfigSyntax(_))
        ));
    }

    #[test]
    fn overrides_split_on_the_first_equals() {
        assert_eq!(
            parse_override("guide_colour=#000000").unwrap(),
            ("guide_colour".to_string(), "#000000".to_string())
        );
        assert_eq!(
            parse_override("spacing=").unwrap(),
            ("spacing".to_string(), String::new())
        );
        assert!(matches!(
            parse_override("spacing"),
            Err(GuideError::MalformedOverride(_))
        ));
        assert!(parse_override("=3").is_err());
    }
}
