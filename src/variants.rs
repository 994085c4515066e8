//! Harmony variants of a single base color
//!
//! Each [`Scheme`] is a fixed set of hue rotations. Saturation and lightness
//! of the base color are kept, so variants stay in the same "family".

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::catalog::UnknownName;
use crate::color::{parse_hex, ColorError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    Complementary,
    Analogous,
    Triadic,
    SplitComplementary,
    Tetradic,
}

impl Scheme {
    pub const ALL: &'static [Scheme] = &[
        Scheme::Complementary,
        Scheme::Analogous,
        Scheme::Triadic,
        Scheme::SplitComplementary,
        Scheme::Tetradic,
    ];

    const NAMES: &'static [&'static str] =
        &["complementary", "analogous", "triadic", "split-complementary", "tetradic"];

    /// Hue rotations in degrees, applied to the base color.
    pub fn angles(self) -> &'static [f64] {
        match self {
            Scheme::Complementary => &[180.0],
            Scheme::Analogous => &[-30.0, 30.0],
            Scheme::Triadic => &[120.0, 240.0],
            Scheme::SplitComplementary => &[150.0, 210.0],
            Scheme::Tetradic => &[60.0, 180.0, 240.0],
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scheme::Complementary => "Opposite colors that create vibrant contrast",
            Scheme::Analogous => "Adjacent colors that create soft harmony",
            Scheme::Triadic => "Three evenly spaced colors",
            Scheme::SplitComplementary => "A softer variation of complementary colors",
            Scheme::Tetradic => "Four colors in a rectangular scheme",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Complementary => "complementary",
            Scheme::Analogous => "analogous",
            Scheme::Triadic => "triadic",
            Scheme::SplitComplementary => "split-complementary",
            Scheme::Tetradic => "tetradic",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "complementary" => Ok(Scheme::Complementary),
            "analogous" => Ok(Scheme::Analogous),
            "triadic" => Ok(Scheme::Triadic),
            "split-complementary" | "split" => Ok(Scheme::SplitComplementary),
            "tetradic" | "rectangle" => Ok(Scheme::Tetradic),
            _ => Err(UnknownName { kind: "harmony scheme", value: s.to_string(), expected: Self::NAMES }),
        }
    }
}

/// A base color and its variants for one scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarmonyVariants {
    pub base: String,
    pub scheme: Scheme,
    pub description: &'static str,
    /// Base color first, then one color per rotation
    pub colors: Vec<String>,
}

/// Generate the variants of `base` for `scheme`.
///
/// # Examples
///
/// ```
/// use beauty_palette::variants::{variants, Scheme};
///
/// let v = variants("#FF0000", Scheme::Complementary).unwrap();
/// assert_eq!(v.colors, vec!["#FF0000", "#00FFFF"]);
/// ```
pub fn variants(base: &str, scheme: Scheme) -> Result<HarmonyVariants, ColorError> {
    let rgb = parse_hex(base)?;
    let hsl = rgb.to_hsl();

    let mut colors = Vec::with_capacity(scheme.angles().len() + 1);
    colors.push(rgb.to_hex());
    colors.extend(scheme.angles().iter().map(|deg| hsl.rotate(*deg).to_rgb().to_hex()));

    Ok(HarmonyVariants { base: rgb.to_hex(), scheme, description: scheme.description(), colors })
}

/// Variants of `base` for every scheme, in [`Scheme::ALL`] order.
pub fn all_variants(base: &str) -> Result<Vec<HarmonyVariants>, ColorError> {
    Scheme::ALL.iter().map(|s| variants(base, *s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complementary_red() {
        let v = variants("#ff0000", Scheme::Complementary).unwrap();
        assert_eq!(v.base, "#FF0000");
        assert_eq!(v.colors, vec!["#FF0000", "#00FFFF"]);
    }

    #[test]
    fn test_triadic_red() {
        let v = variants("#FF0000", Scheme::Triadic).unwrap();
        assert_eq!(v.colors, vec!["#FF0000", "#00FF00", "#0000FF"]);
    }

    #[test]
    fn test_analogous_wraps_below_zero() {
        let v = variants("#FF0000", Scheme::Analogous).unwrap();
        assert_eq!(v.colors.len(), 3);
        // -30° from red is a magenta-leaning red
        assert_eq!(v.colors[1], "#FF0080");
        assert_eq!(v.colors[2], "#FF8000");
    }

    #[test]
    fn test_gray_has_no_hue_to_rotate() {
        let v = variants("#808080", Scheme::Tetradic).unwrap();
        assert!(v.colors.iter().all(|c| c == "#808080"));
        assert_eq!(v.colors.len(), 4);
    }

    #[test]
    fn test_invalid_base() {
        assert_eq!(variants("#12", Scheme::Triadic), Err(ColorError::InvalidLength(2)));
        assert!(all_variants("blue").is_err());
    }

    #[test]
    fn test_all_variants_cover_every_scheme() {
        let all = all_variants("#4169E1").unwrap();
        let schemes: Vec<Scheme> = all.iter().map(|v| v.scheme).collect();
        assert_eq!(schemes, Scheme::ALL);
        for v in &all {
            assert_eq!(v.colors.len(), v.scheme.angles().len() + 1);
        }
    }

    #[test]
    fn test_scheme_parsing() {
        assert_eq!("split_complementary".parse::<Scheme>(), Ok(Scheme::SplitComplementary));
        assert_eq!("Triadic".parse::<Scheme>(), Ok(Scheme::Triadic));
        let err = "triadc".parse::<Scheme>().unwrap_err();
        assert!(err.to_string().contains("Did you mean 'triadic'?"));
    }

    #[test]
    fn test_scheme_serializes_kebab_case() {
        assert_eq!(serde_json::to_value(Scheme::SplitComplementary).unwrap(), "split-complementary");
    }
}
