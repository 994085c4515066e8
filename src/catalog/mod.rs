//! Built-in beauty color tables.
//!
//! Every table is static data compiled into the binary. The enums in this
//! module are the keys: each parses case-insensitively from its English name
//! or from the Spanish key used by older clients (`clara`, `fiesta`, ...).

mod tables;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::suggest::{format_suggestion, suggest};

pub use tables::{
    EventPalette, SeasonalAdjustment, SkinProfile, UndertoneProfile, CHEEK_COLORS,
};

/// A name that is not a key of one of the catalog tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName {
    /// Table the lookup was made against (e.g. "skin tone")
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
    /// Canonical names accepted for this table
    pub expected: &'static [&'static str],
}

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}', expected one of: {}", self.kind, self.value, self.expected.join(", "))?;
        if let Some(hint) = format_suggestion(&suggest(&self.value, self.expected, 3)) {
            write!(f, ". {}", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for UnknownName {}

/// Declares a catalog key enum with its canonical name and accepted aliases.
macro_rules! catalog_key {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $canonical:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every key, in table order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical names, in table order.
            pub const NAMES: &'static [&'static str] = &[$($canonical),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $canonical),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($canonical $(| $alias)* => Ok($name::$variant),)+
                    _ => Err(UnknownName { kind: $kind, value: s.to_string(), expected: Self::NAMES }),
                }
            }
        }
    };
}

catalog_key! {
    /// Skin tone depth
    SkinTone, "skin tone" {
        Fair => "fair" | "clara" | "light",
        Medium => "medium" | "media",
        Deep => "deep" | "oscura" | "dark",
    }
}

catalog_key! {
    /// Skin undertone, usually judged by vein color
    Undertone, "undertone" {
        Cool => "cool" | "frio" | "frío",
        Warm => "warm" | "calido" | "cálido",
        Neutral => "neutral" | "neutro",
    }
}

catalog_key! {
    /// Occasion the palette is for
    EventType, "event type" {
        Work => "work" | "trabajo",
        Casual => "casual",
        Party => "party" | "fiesta",
        Formal => "formal",
        Date => "date" | "cita",
    }
}

catalog_key! {
    Season, "season" {
        Spring => "spring" | "primavera",
        Summer => "summer" | "verano",
        Autumn => "autumn" | "otono" | "otoño" | "fall",
        Winter => "winter" | "invierno",
    }
}

catalog_key! {
    EyeColor, "eye color" {
        Blue => "blue" | "azul",
        Green => "green" | "verde",
        Brown => "brown" | "cafe" | "café",
        Gray => "gray" | "gris" | "grey",
        Black => "black" | "negro",
    }
}

catalog_key! {
    /// What a generated palette is for
    PaletteKind, "palette type" {
        Clothing => "clothing" | "ropa",
        Makeup => "makeup" | "maquillaje",
        Accessories => "accessories" | "accesorios",
    }
}

impl Default for SkinTone {
    fn default() -> Self {
        SkinTone::Medium
    }
}

impl Default for Undertone {
    fn default() -> Self {
        Undertone::Neutral
    }
}

impl Default for EventType {
    fn default() -> Self {
        EventType::Casual
    }
}

impl Default for Season {
    fn default() -> Self {
        Season::Summer
    }
}

impl Default for EyeColor {
    fn default() -> Self {
        EyeColor::Brown
    }
}

impl SkinTone {
    pub fn profile(self) -> &'static SkinProfile {
        match self {
            SkinTone::Fair => &tables::FAIR,
            SkinTone::Medium => &tables::MEDIUM,
            SkinTone::Deep => &tables::DEEP,
        }
    }

    /// Lipstick shades that flatter this skin tone.
    pub fn lip_colors(self) -> &'static [&'static str] {
        match self {
            SkinTone::Fair => &["#FF69B4", "#DC143C", "#CD5C5C"],
            SkinTone::Medium => &["#B22222", "#FF4500", "#D2691E"],
            SkinTone::Deep => &["#8B0000", "#FF6347", "#DC143C"],
        }
    }
}

impl Undertone {
    pub fn profile(self) -> &'static UndertoneProfile {
        match self {
            Undertone::Cool => &tables::COOL,
            Undertone::Warm => &tables::WARM,
            Undertone::Neutral => &tables::NEUTRAL,
        }
    }
}

impl EventType {
    pub fn palette(self) -> &'static EventPalette {
        match self {
            EventType::Work => &tables::WORK,
            EventType::Casual => &tables::CASUAL,
            EventType::Party => &tables::PARTY,
            EventType::Formal => &tables::FORMAL,
            EventType::Date => &tables::DATE,
        }
    }

    /// Styling tips for the occasion. Formal and date events have none.
    pub fn styling_tips(self) -> &'static [&'static str] {
        match self {
            EventType::Work => &[
                "Keep a professional look with neutral colors as the base",
                "Add a touch of color in accessories for personality",
                "Avoid overly vibrant colors in the workplace",
            ],
            EventType::Party => &[
                "Time to shine! Wear intense and metallic colors",
                "Combine different textures to create visual interest",
                "Gold or silver accents add glamour",
            ],
            EventType::Casual => &[
                "Play with colors and try fun combinations",
                "Denim and neutrals make a perfect base",
                "Add color with accessories to match your mood",
            ],
            EventType::Formal | EventType::Date => &[],
        }
    }
}

impl Season {
    pub fn adjustment(self) -> &'static SeasonalAdjustment {
        match self {
            Season::Spring => &tables::SPRING,
            Season::Summer => &tables::SUMMER,
            Season::Autumn => &tables::AUTUMN,
            Season::Winter => &tables::WINTER,
        }
    }
}

impl EyeColor {
    /// Eye shadow shades that bring out this eye color.
    pub fn shadow_colors(self) -> &'static [&'static str] {
        match self {
            EyeColor::Blue => &["#D2691E", "#CD853F", "#B8860B"],
            EyeColor::Green => &["#8B0000", "#9370DB", "#B22222"],
            EyeColor::Brown => &["#4682B4", "#8B4513", "#DAA520"],
            EyeColor::Gray => &["#4B0082", "#FF6347", "#20B2AA"],
            EyeColor::Black => &["#B8860B", "#8B4513", "#CD853F"],
        }
    }
}
