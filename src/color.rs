//! Color parsing and conversion utilities
//!
//! Colors travel through the API as `#RRGGBB` hex strings. This module
//! parses them into [`Rgb`] values and converts between RGB and HSL.
//!
//! HSL hue is stored as a fraction of a full turn (`0.0..1.0`), never in
//! degrees. Callers that need degrees multiply by 360 at the point of use.

use std::fmt;

use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Invalid length (must be exactly 6 hex chars after the optional '#')
    #[error("invalid color length {0}, expected 6 hex digits")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A color in hue/saturation/lightness form.
///
/// `hue` is a fraction of a turn in `[0, 1)`; `saturation` and `lightness`
/// are in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

/// Parse a hex color string (`#RRGGBB` or `RRGGBB`, case-insensitive).
///
/// # Examples
///
/// ```
/// use beauty_palette::color::{parse_hex, Rgb};
///
/// assert_eq!(parse_hex("#FF8000").unwrap(), Rgb { r: 255, g: 128, b: 0 });
/// assert_eq!(parse_hex("ff8000").unwrap(), Rgb { r: 255, g: 128, b: 0 });
/// assert!(parse_hex("#F80").is_err());
/// ```
///
/// # Errors
///
/// Returns `ColorError` if the input is empty, contains a non-hex character,
/// or does not have exactly 6 digits.
pub fn parse_hex(s: &str) -> Result<Rgb, ColorError> {
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    let hex = s.strip_prefix('#').unwrap_or(s);

    // Validate all characters are hex
    for c in hex.chars() {
        if !c.is_ascii_hexdigit() {
            return Err(ColorError::InvalidHex(c));
        }
    }

    if hex.len() != 6 {
        return Err(ColorError::InvalidLength(hex.len()));
    }

    Ok(Rgb { r: parse_hex_pair(&hex[0..2])?, g: parse_hex_pair(&hex[2..4])?, b: parse_hex_pair(&hex[4..6])? })
}

/// Parse a single hex digit (0-9, A-F, a-f) to u8 (0-15)
fn parse_hex_digit(c: u8) -> Result<u8, ColorError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ColorError::InvalidHex(c as char)),
    }
}

/// Parse a two-character hex string to u8 (0-255)
fn parse_hex_pair(s: &str) -> Result<u8, ColorError> {
    let bytes = s.as_bytes();
    let high = parse_hex_digit(bytes[0])?;
    let low = parse_hex_digit(bytes[1])?;
    Ok(high * 16 + low)
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to `[0, 1]`.
    pub fn normalized(self) -> (f64, f64, f64) {
        (self.r as f64 / 255.0, self.g as f64 / 255.0, self.b as f64 / 255.0)
    }

    /// Build from channels in `[0, 1]`, rounding to the nearest 8-bit value.
    pub fn from_normalized(r: f64, g: f64, b: f64) -> Self {
        let to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r: to_u8(r), g: to_u8(g), b: to_u8(b) }
    }

    /// Convert to HSL.
    ///
    /// Achromatic colors (all channels equal) get hue 0 and saturation 0.
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let sum = max + min;
        let range = max - min;
        let lightness = sum / 2.0;

        if range == 0.0 {
            return Hsl { hue: 0.0, saturation: 0.0, lightness };
        }

        let saturation = if lightness <= 0.5 { range / sum } else { range / (2.0 - sum) };

        let rc = (max - r) / range;
        let gc = (max - g) / range;
        let bc = (max - b) / range;
        let sector = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Hsl { hue: (sector / 6.0).rem_euclid(1.0), saturation, lightness }
    }

    /// Uppercase `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Hsl {
    /// Hue in degrees, `[0, 360)`.
    pub fn hue_degrees(&self) -> f64 {
        self.hue * 360.0
    }

    /// Rotate the hue by `degrees` (may be negative), keeping saturation and
    /// lightness.
    pub fn rotate(self, degrees: f64) -> Self {
        Self { hue: (self.hue + degrees / 360.0).rem_euclid(1.0), ..self }
    }

    /// Convert back to RGB.
    pub fn to_rgb(self) -> Rgb {
        let Hsl { hue, saturation, lightness } = self;
        if saturation == 0.0 {
            return Rgb::from_normalized(lightness, lightness, lightness);
        }

        let m2 = if lightness <= 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let m1 = 2.0 * lightness - m2;

        Rgb::from_normalized(
            hue_channel(m1, m2, hue + 1.0 / 3.0),
            hue_channel(m1, m2, hue),
            hue_channel(m1, m2, hue - 1.0 / 3.0),
        )
    }
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_parse_hex_with_and_without_hash() {
        assert_eq!(parse_hex("#FF0000"), Ok(Rgb::new(255, 0, 0)));
        assert_eq!(parse_hex("00ff00"), Ok(Rgb::new(0, 255, 0)));
        assert_eq!(parse_hex("#1e40aF"), Ok(Rgb::new(0x1E, 0x40, 0xAF)));
    }

    #[test]
    fn test_parse_hex_errors() {
        assert_eq!(parse_hex(""), Err(ColorError::Empty));
        assert_eq!(parse_hex("#F00"), Err(ColorError::InvalidLength(3)));
        assert_eq!(parse_hex("#FF00000"), Err(ColorError::InvalidLength(7)));
        assert_eq!(parse_hex("#"), Err(ColorError::InvalidLength(0)));
        assert_eq!(parse_hex("#GG0000"), Err(ColorError::InvalidHex('G')));
        assert_eq!(parse_hex("notacolor"), Err(ColorError::InvalidHex('n')));
        assert_eq!(parse_hex("##FF0000"), Err(ColorError::InvalidHex('#')));
    }

    #[test]
    fn test_primary_hues() {
        let red = Rgb::new(255, 0, 0).to_hsl();
        let green = Rgb::new(0, 255, 0).to_hsl();
        let blue = Rgb::new(0, 0, 255).to_hsl();

        assert!(approx(red.hue_degrees(), 0.0));
        assert!(approx(green.hue_degrees(), 120.0));
        assert!(approx(blue.hue_degrees(), 240.0));
        for c in [red, green, blue] {
            assert!(approx(c.saturation, 1.0));
            assert!(approx(c.lightness, 0.5));
        }
    }

    #[test]
    fn test_achromatic_has_zero_hue() {
        let black = Rgb::new(0, 0, 0).to_hsl();
        let white = Rgb::new(255, 255, 255).to_hsl();
        assert_eq!(black, Hsl { hue: 0.0, saturation: 0.0, lightness: 0.0 });
        assert_eq!(white, Hsl { hue: 0.0, saturation: 0.0, lightness: 1.0 });
    }

    #[test]
    fn test_magenta_hue_wraps_into_range() {
        // Red is max and blue > green, so the raw sector is negative
        let hsl = Rgb::new(255, 0, 128).to_hsl();
        assert!(hsl.hue > 0.9 && hsl.hue < 1.0);
    }

    #[test]
    fn test_hsl_round_trip_samples() {
        for hex in ["#FFB6C1", "#1E40AF", "#8B5A3C", "#708090", "#FFFFFF", "#000000"] {
            let rgb = parse_hex(hex).unwrap();
            assert_eq!(rgb.to_hsl().to_rgb(), rgb, "round trip failed for {}", hex);
        }
    }

    #[test]
    fn test_rotate() {
        let red = Rgb::new(255, 0, 0).to_hsl();
        assert_eq!(red.rotate(180.0).to_rgb().to_hex(), "#00FFFF");
        assert_eq!(red.rotate(120.0).to_rgb().to_hex(), "#00FF00");
        assert_eq!(red.rotate(-120.0).to_rgb().to_hex(), "#0000FF");
    }

    #[test]
    fn test_display_is_uppercase_hex() {
        assert_eq!(Rgb::new(0xab, 0xcd, 0xef).to_string(), "#ABCDEF");
    }
}
