//! Palette generation from a user profile
//!
//! A palette is assembled from the catalog tables for the requested kind
//! (clothing, makeup, accessories), then annotated with styling advice and a
//! harmony analysis of its own colors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{EventType, EyeColor, PaletteKind, Season, SkinTone, Undertone, CHEEK_COLORS};
use crate::error::RequestError;
use crate::harmony::{analyze, HarmonyReport};

/// Makeup palettes are capped at this many swatches.
const MAX_MAKEUP_SWATCHES: usize = 8;
const MAX_SWATCHES: usize = 6;

/// Who is asking. Every field is optional; missing ones use catalog defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, alias = "user_id")]
    pub user_id: Option<String>,
    #[serde(default, alias = "skin_tone")]
    pub skin_tone: Option<String>,
    #[serde(default)]
    pub undertone: Option<String>,
    #[serde(default, alias = "eye_color")]
    pub eye_color: Option<String>,
}

impl UserProfile {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.skin_tone.is_none()
            && self.undertone.is_none()
            && self.eye_color.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub season: Option<String>,
}

/// Body of a palette generation request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteRequest {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default, alias = "palette_type")]
    pub palette_type: Option<String>,
    #[serde(default, alias = "event_type")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
}

/// Identity of the service that produced a palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: "Beauty Palette Server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            url: None,
        }
    }
}

/// One color of a generated palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    pub hex: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub usage: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StylingRecommendations {
    pub styling_tips: Vec<String>,
    pub color_combinations: Vec<String>,
    pub seasonal_notes: Vec<String>,
    pub personalized_advice: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPalette {
    pub palette_id: String,
    pub user_profile: String,
    pub palette_type: PaletteKind,
    pub event_type: EventType,
    pub season: Season,
    pub colors: Vec<Swatch>,
    pub recommendations: StylingRecommendations,
    pub harmony_analysis: HarmonyReport,
    pub created_at: DateTime<Utc>,
    pub server_info: ServerInfo,
}

/// A profile with every name resolved against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProfile {
    pub user_id: String,
    pub skin_tone: SkinTone,
    pub undertone: Undertone,
    pub eye_color: EyeColor,
}

impl TryFrom<&UserProfile> for ResolvedProfile {
    type Error = RequestError;

    fn try_from(p: &UserProfile) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: p.user_id.clone().unwrap_or_else(|| "anonymous".to_string()),
            skin_tone: parse_or_default(p.skin_tone.as_deref())?,
            undertone: parse_or_default(p.undertone.as_deref())?,
            eye_color: parse_or_default(p.eye_color.as_deref())?,
        })
    }
}

fn parse_or_default<T>(value: Option<&str>) -> Result<T, RequestError>
where
    T: std::str::FromStr<Err = crate::catalog::UnknownName> + Default,
{
    match value {
        Some(v) => Ok(v.parse()?),
        None => Ok(T::default()),
    }
}

/// Resolve the event name. Unknown or missing events mean casual.
fn resolve_event(name: Option<&str>) -> EventType {
    match name.map(str::parse::<EventType>) {
        Some(Ok(event)) => event,
        Some(Err(e)) => {
            debug!("Falling back to casual: {}", e);
            EventType::Casual
        }
        None => EventType::Casual,
    }
}

/// Build a palette for `request`, timestamped with `now`.
///
/// # Errors
///
/// Fails when the profile is missing or empty, or when the palette type,
/// a profile field or the season is not a catalog name.
pub fn generate(
    request: &PaletteRequest,
    server: &ServerInfo,
    now: DateTime<Utc>,
) -> Result<GeneratedPalette, RequestError> {
    let profile = match &request.profile {
        Some(p) if !p.is_empty() => ResolvedProfile::try_from(p)?,
        _ => return Err(RequestError::MissingProfile),
    };

    let kind: PaletteKind = request.palette_type.as_deref().unwrap_or("clothing").parse()?;
    let event = resolve_event(request.event_type.as_deref());
    let season: Season = parse_or_default(
        request.preferences.as_ref().and_then(|p| p.season.as_deref()),
    )?;

    let colors = match kind {
        PaletteKind::Clothing => clothing_swatches(&profile, event),
        PaletteKind::Makeup => makeup_swatches(&profile, event),
        PaletteKind::Accessories => accessory_swatches(&profile, event),
    };

    let hexes: Vec<&str> = colors.iter().map(|s| s.hex).collect();
    let harmony_analysis = analyze(hexes.as_slice());
    let recommendations = styling_recommendations(&profile, event, season, &colors);

    Ok(GeneratedPalette {
        palette_id: format!("beauty_{}_{}", kind, now.format("%Y%m%d_%H%M%S")),
        user_profile: profile.user_id,
        palette_type: kind,
        event_type: event,
        season,
        colors,
        recommendations,
        harmony_analysis,
        created_at: now,
        server_info: server.clone(),
    })
}

fn clothing_swatches(profile: &ResolvedProfile, event: EventType) -> Vec<Swatch> {
    const NAMES: [&str; MAX_SWATCHES] = [
        "Main Blouse",
        "Base Trousers",
        "Jacket",
        "Vibrant Accessory",
        "Elegant Neutral",
        "Complement",
    ];
    const CATEGORIES: [&str; MAX_SWATCHES] = ["top", "bottom", "top", "accent", "neutral", "complement"];

    let best = profile.skin_tone.profile().best_colors;
    event
        .palette()
        .primary
        .iter()
        .chain(best.iter().take(3))
        .zip(NAMES.iter().zip(CATEGORIES.iter()))
        .map(|(&hex, (&name, &category))| Swatch {
            hex,
            name,
            category,
            usage: format!("Ideal for {} at {}", category, event),
        })
        .collect()
}

fn makeup_swatches(profile: &ResolvedProfile, event: EventType) -> Vec<Swatch> {
    type Group = (&'static [&'static str], &'static [&'static str], &'static str);
    let groups: [Group; 3] = [
        (profile.eye_color.shadow_colors(), &["Main Shadow", "Complement Shadow", "Eyeliner"], "eyes"),
        (profile.skin_tone.lip_colors(), &["Main Lipstick", "Day Lipstick", "Night Lipstick"], "lips"),
        (CHEEK_COLORS, &["Natural Blush", "Bronzer"], "cheeks"),
    ];

    groups
        .into_iter()
        .flat_map(|(hexes, names, category)| {
            hexes.iter().zip(names.iter()).map(move |(&hex, &name)| Swatch {
                hex,
                name,
                category,
                usage: format!("Perfect for {} at {}", category, event),
            })
        })
        .take(MAX_MAKEUP_SWATCHES)
        .collect()
}

fn accessory_swatches(profile: &ResolvedProfile, event: EventType) -> Vec<Swatch> {
    const NAMES: [&str; MAX_SWATCHES] = [
        "Main Jewelry",
        "Coordinated Bag",
        "Elegant Footwear",
        "Complementary Metal",
        "Special Texture",
        "Final Accent",
    ];
    const CATEGORIES: [&str; MAX_SWATCHES] = ["jewelry", "bags", "footwear", "metals", "textiles", "misc"];

    profile
        .undertone
        .profile()
        .colors
        .iter()
        .take(3)
        .chain(event.palette().primary.iter().take(3))
        .zip(NAMES.iter().zip(CATEGORIES.iter()))
        .map(|(&hex, (&name, &category))| Swatch {
            hex,
            name,
            category,
            usage: format!("Ideal for {} at {} events", category, event),
        })
        .collect()
}

fn styling_recommendations(
    profile: &ResolvedProfile,
    event: EventType,
    season: Season,
    colors: &[Swatch],
) -> StylingRecommendations {
    let owned = |lines: &[&str]| lines.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    let color_combinations = match colors {
        [first, second, third, ..] => vec![
            format!("Combine {} with {} for a balanced look", first.name, second.name),
            format!("{} works perfectly as an accent", third.name),
            format!("For more impact, use {} as the dominant color", first.name),
        ],
        _ => Vec::new(),
    };

    let adjustment = season.adjustment();
    let seasonal_notes = vec![
        format!("{} mood: {}", season, adjustment.mood),
        format!("Seasonal colors to mix in: {}", adjustment.colors.join(", ")),
    ];

    StylingRecommendations {
        styling_tips: owned(event.styling_tips()),
        color_combinations,
        seasonal_notes,
        personalized_advice: owned(profile.skin_tone.profile().recommendations),
    }
}
