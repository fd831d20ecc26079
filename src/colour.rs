use serde::Serialize;
use std::str::FromStr;

/// A colour, expressed in RGB, CMYK, or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug, Serialize)]
#[serde(tag = "space", rename_all = "lowercase")]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceCMYK colour; c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the CMYK space. c, m, y, and k range from 0.0 to 1.0
    pub fn new_cmyk(c: f32, m: f32, y: f32, k: f32) -> Colour {
        Colour::CMYK { c, m, y, k }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }
}

/// The ways a colour string can fail to parse
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseColourError {
    #[error("expected 1, 3 or 4 components, found {0}")]
    ComponentCount(usize),
    #[error("`{0}` is not a number")]
    Component(String),
    #[error("`{0}` is not a #rrggbb hex colour")]
    Hex(String),
}

/// Parses a grey level (`0.8`), an RGB triple (`1,0,0`), a CMYK quadruple
/// (`0.25,0,0,0`), or an RGB hex string (`#3366cc`).
impl FromStr for Colour {
    type Err = ParseColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            let byte = |i: usize| {
                hex.get(i..i + 2)
                    .and_then(|h| u8::from_str_radix(h, 16).ok())
                    .ok_or_else(|| ParseColourError::Hex(s.to_string()))
            };
            if hex.len() != 6 {
                return Err(ParseColourError::Hex(s.to_string()));
            }
            return Ok(Colour::new_rgb_bytes(byte(0)?, byte(2)?, byte(4)?));
        }

        let components = s
            .split(',')
            .map(|c| {
                c.trim()
                    .parse::<f32>()
                    .map_err(|_| ParseColourError::Component(c.trim().to_string()))
            })
            .collect::<Result<Vec<f32>, _>>()?;

        match components.as_slice() {
            [g] => Ok(Colour::new_grey(*g)),
            [r, g, b] => Ok(Colour::new_rgb(*r, *g, *b)),
            [c, m, y, k] => Ok(Colour::new_cmyk(*c, *m, *y, *k)),
            other => Err(ParseColourError::ComponentCount(other.len())),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    /// The light grey the slant guides are drawn in unless configured otherwise
    pub const SLANT_GREY: Colour = Colour::Grey { g: 0.8 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grey_levels() {
        assert_eq!("0.8".parse::<Colour>(), Ok(colours::SLANT_GREY));
        assert_eq!(" 0 ".parse::<Colour>(), Ok(colours::BLACK));
    }

    #[test]
    fn parses_component_lists() {
        assert_eq!(
            "1, 0, 0".parse::<Colour>(),
            Ok(Colour::new_rgb(1.0, 0.0, 0.0))
        );
        assert_eq!(
            "0.25,0,0,0".parse::<Colour>(),
            Ok(Colour::new_cmyk(0.25, 0.0, 0.0, 0.0))
        );
    }

    #[test]
    fn parses_hex() {
        assert_eq!(
            "#ff0000".parse::<Colour>(),
            Ok(Colour::new_rgb(1.0, 0.0, 0.0))
        );
        assert_eq!(
            "#ff00".parse::<Colour>(),
            Err(ParseColourError::Hex("#ff00".to_string()))
        );
        assert!("#gg0000".parse::<Colour>().is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            "1,2".parse::<Colour>(),
            Err(ParseColourError::ComponentCount(2))
        );
        assert_eq!(
            "red".parse::<Colour>(),
            Err(ParseColourError::Component("red".to_string()))
        );
    }
}
