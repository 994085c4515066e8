//! Color recommendations for a skin tone and undertone pair

use serde::Serialize;

use crate::catalog::{SkinTone, Undertone};
use crate::error::RequestError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub best_colors: &'static [&'static str],
    pub avoid_colors: &'static [&'static str],
    pub skin_recommendations: &'static [&'static str],
    pub undertone_colors: &'static [&'static str],
    pub best_metals: &'static [&'static str],
    pub undertone_description: &'static str,
}

pub fn recommend(skin: SkinTone, undertone: Undertone) -> Recommendations {
    let skin_profile = skin.profile();
    let undertone_profile = undertone.profile();

    Recommendations {
        best_colors: skin_profile.best_colors,
        avoid_colors: skin_profile.avoid_colors,
        skin_recommendations: skin_profile.recommendations,
        undertone_colors: undertone_profile.colors,
        best_metals: undertone_profile.metals,
        undertone_description: undertone_profile.description,
    }
}

/// Parse both names and look up their recommendations.
pub fn recommend_by_name(skin: &str, undertone: &str) -> Result<Recommendations, RequestError> {
    Ok(recommend(skin.parse()?, undertone.parse()?))
}
