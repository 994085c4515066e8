//! Static color data backing the catalog lookups.

use serde::Serialize;

/// Colors and advice for one skin tone.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinProfile {
    pub base_colors: &'static [&'static str],
    pub best_colors: &'static [&'static str],
    pub avoid_colors: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

/// Colors and metals for one undertone.
#[derive(Debug, Serialize)]
pub struct UndertoneProfile {
    pub colors: &'static [&'static str],
    pub metals: &'static [&'static str],
    pub description: &'static str,
}

/// Color groups for an occasion.
#[derive(Debug, Serialize)]
pub struct EventPalette {
    pub primary: &'static [&'static str],
    pub secondary: &'static [&'static str],
    pub accent: &'static [&'static str],
    /// Empty for every event but parties
    #[serde(skip_serializing_if = "is_empty")]
    pub metallic: &'static [&'static str],
    pub description: &'static str,
}

fn is_empty(colors: &&[&str]) -> bool {
    colors.is_empty()
}

#[derive(Debug, Serialize)]
pub struct SeasonalAdjustment {
    pub colors: &'static [&'static str],
    pub mood: &'static str,
}

/// Blush and bronzer, shared by every makeup palette.
pub const CHEEK_COLORS: &[&str] = &["#F08080", "#E9967A"];

// Skin tones

pub(super) static FAIR: SkinProfile = SkinProfile {
    base_colors: &["#F5E6D3", "#E8D4C2", "#F2E7D5", "#FDF2E9"],
    best_colors: &["#FFB6C1", "#87CEEB", "#DDA0DD", "#F0E68C", "#98FB98"],
    avoid_colors: &["#000000", "#8B0000", "#2F4F4F", "#4B0082"],
    recommendations: &[
        "Pastels and soft tones bring out fair skin",
        "Avoid very dark or intense colors",
        "Cool colors such as blues and pinks suit you",
    ],
};

pub(super) static MEDIUM: SkinProfile = SkinProfile {
    base_colors: &["#D4B896", "#C1A882", "#B8956A", "#DEB887"],
    best_colors: &["#FF6347", "#32CD32", "#4169E1", "#DAA520", "#FF69B4"],
    avoid_colors: &["#FFFF00", "#00FF00", "#FF00FF", "#00FFFF"],
    recommendations: &[
        "You have the versatility to wear many colors",
        "Earthy and warm tones look especially good on you",
        "You can experiment with vibrant colors",
    ],
};

pub(super) static DEEP: SkinProfile = SkinProfile {
    base_colors: &["#8B5A3C", "#6B4423", "#4A2C17", "#5D4037"],
    best_colors: &["#FF4500", "#9400D3", "#FFD700", "#DC143C", "#00CED1"],
    avoid_colors: &["#FFFFE0", "#F0F8FF", "#FFFAF0", "#F5F5DC"],
    recommendations: &[
        "Rich and vibrant colors enhance your beauty",
        "Avoid very pale colors that can wash you out",
        "Metallics like gold and copper are perfect",
    ],
};

// Undertones

pub(super) static COOL: UndertoneProfile = UndertoneProfile {
    colors: &["#4169E1", "#9370DB", "#C71585", "#00CED1", "#4682B4"],
    metals: &["silver", "platinum", "white gold", "steel"],
    description: "Blue veins; best in cool tones and silver metals",
};

pub(super) static WARM: UndertoneProfile = UndertoneProfile {
    colors: &["#FF6347", "#DAA520", "#D2691E", "#CD853F", "#B22222"],
    metals: &["gold", "copper", "bronze", "rose gold"],
    description: "Green veins; best in warm tones and golden metals",
};

pub(super) static NEUTRAL: UndertoneProfile = UndertoneProfile {
    colors: &["#708090", "#BC8F8F", "#F0E68C", "#DEB887", "#D2B48C"],
    metals: &["rose gold", "stainless steel", "yellow gold", "oxidized silver"],
    description: "You can wear both golden and silver metals",
};

// Events

pub(super) static WORK: EventPalette = EventPalette {
    primary: &["#1E40AF", "#374151", "#6B7280", "#1F2937"],
    secondary: &["#F8FAFC", "#F1F5F9", "#E2E8F0", "#CBD5E1"],
    accent: &["#3B82F6", "#6366F1", "#8B5CF6"],
    metallic: &[],
    description: "Professional colors that inspire confidence",
};

pub(super) static CASUAL: EventPalette = EventPalette {
    primary: &["#3B82F6", "#10B981", "#F59E0B", "#EF4444"],
    secondary: &["#DBEAFE", "#D1FAE5", "#FEF3C7", "#FEE2E2"],
    accent: &["#1D4ED8", "#059669", "#D97706", "#DC2626"],
    metallic: &[],
    description: "Relaxed, versatile colors for everyday wear",
};

pub(super) static PARTY: EventPalette = EventPalette {
    primary: &["#EC4899", "#8B5CF6", "#06B6D4", "#F59E0B"],
    secondary: &["#F9A8D4", "#C4B5FD", "#67E8F9", "#FCD34D"],
    accent: &["#FFD700", "#C0C0C0", "#B87333"],
    metallic: &["#FFD700", "#C0C0C0", "#CD7F32", "#E6E6FA"],
    description: "Vibrant, eye-catching colors to stand out",
};

pub(super) static FORMAL: EventPalette = EventPalette {
    primary: &["#1F2937", "#374151", "#6B7280", "#111827"],
    secondary: &["#9CA3AF", "#D1D5DB", "#F3F4F6", "#F9FAFB"],
    accent: &["#1E40AF", "#7C2D12", "#064E3B", "#92400E"],
    metallic: &[],
    description: "Classic elegance for important events",
};

pub(super) static DATE: EventPalette = EventPalette {
    primary: &["#EC4899", "#F59E0B", "#8B5CF6", "#EF4444"],
    secondary: &["#F9A8D4", "#FCD34D", "#C4B5FD", "#FCA5A5"],
    accent: &["#BE185D", "#D97706", "#6D28D9", "#B91C1C"],
    metallic: &[],
    description: "Romantic, flattering colors",
};

// Seasons

pub(super) static SPRING: SeasonalAdjustment = SeasonalAdjustment {
    colors: &["#98FB98", "#FFB6C1", "#F0E68C", "#DDA0DD"],
    mood: "Fresh and renewing",
};

pub(super) static SUMMER: SeasonalAdjustment = SeasonalAdjustment {
    colors: &["#87CEEB", "#F0E68C", "#98FB98", "#FFB6C1"],
    mood: "Bright and luminous",
};

pub(super) static AUTUMN: SeasonalAdjustment = SeasonalAdjustment {
    colors: &["#D2691E", "#CD853F", "#DAA520", "#B22222"],
    mood: "Warm and cozy",
};

pub(super) static WINTER: SeasonalAdjustment = SeasonalAdjustment {
    colors: &["#4169E1", "#9370DB", "#C71585", "#2F4F4F"],
    mood: "Deep and intense",
};
