//! Color harmony analysis
//!
//! Scores an ordered list of hex colors by how their hues relate to each
//! other. The hue relationship picks a [`HarmonyType`] and a base score; the
//! spread of saturation and lightness then adds a bonus or a penalty.
//!
//! [`analyze`] always returns a report. Too few usable colors produce a
//! zero-score report, and internal failures produce a score-50 fallback.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::color::{parse_hex, Hsl};

/// Minimum number of valid colors needed for a real analysis.
pub const MIN_COLORS: usize = 2;

/// Score returned when the analysis itself fails.
pub const FALLBACK_SCORE: u8 = 50;

const MSG_TOO_FEW: &str = "at least 2 colors required";
const MSG_NO_VALID: &str = "no valid colors to analyze";

/// Qualitative relationship between a palette's hues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonyType {
    Analogous,
    Complementary,
    Triadic,
    Complex,
}

impl HarmonyType {
    /// Classify an average consecutive hue difference (degrees).
    ///
    /// Bands use strict inequalities and are checked in order, so the exact
    /// values 60, 90, 150 and 210 and the whole `[60, 90]` range land in
    /// `Complex`.
    pub fn classify(avg_hue_difference: f64) -> Self {
        if avg_hue_difference < 60.0 {
            HarmonyType::Analogous
        } else if avg_hue_difference > 150.0 && avg_hue_difference < 210.0 {
            HarmonyType::Complementary
        } else if avg_hue_difference > 90.0 && avg_hue_difference < 150.0 {
            HarmonyType::Triadic
        } else {
            HarmonyType::Complex
        }
    }

    pub fn base_score(self) -> i32 {
        match self {
            HarmonyType::Analogous => 85,
            HarmonyType::Complementary => 90,
            HarmonyType::Triadic => 80,
            HarmonyType::Complex => 70,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HarmonyType::Analogous => "neighboring colors that create calm cohesion",
            HarmonyType::Complementary => "opposing colors that create dynamic contrast and energy",
            HarmonyType::Triadic => "three balanced colors offering vitality with harmony",
            HarmonyType::Complex => "diverse palette requiring skill to balance",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HarmonyType::Analogous => "Analogous",
            HarmonyType::Complementary => "Complementary",
            HarmonyType::Triadic => "Triadic",
            HarmonyType::Complex => "Complex",
        }
    }

    fn advice(self) -> &'static [&'static str] {
        match self {
            HarmonyType::Analogous => &[
                "Perfect for relaxed and sophisticated looks",
                "Ideal for everyday wear and professional settings",
                "Pairs well with natural textures",
            ],
            HarmonyType::Complementary => &[
                "Excellent for occasions where you want to stand out",
                "Use one color as dominant and the other as an accent",
                "Perfect for creating focal points in your look",
            ],
            HarmonyType::Triadic => &[
                "A perfect balance between harmony and contrast",
                "Versatile across many occasions",
                "Allows creativity while keeping cohesion",
            ],
            HarmonyType::Complex => &[
                "Requires more care when putting it together",
                "Consider using neutrals to balance it",
                "Experiment with different proportions",
            ],
        }
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric diagnostics behind a harmony score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalDetails {
    /// Mean absolute hue difference between consecutive colors, in degrees
    pub average_hue_difference: f64,
    /// Saturation range (max - min)
    pub saturation_variance: f64,
    /// Lightness range (max - min)
    pub lightness_variance: f64,
}

/// Result of a harmony analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarmonyReport {
    pub score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harmony_type: Option<HarmonyType>,
    pub analysis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_details: Option<TechnicalDetails>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl HarmonyReport {
    fn degenerate(message: &str) -> Self {
        Self {
            score: 0,
            harmony_type: None,
            analysis: message.to_string(),
            technical_details: None,
            recommendations: Vec::new(),
        }
    }

    fn fallback(err: &AnalysisError) -> Self {
        Self {
            score: FALLBACK_SCORE,
            harmony_type: None,
            analysis: format!("analysis failed: {}", err),
            technical_details: None,
            recommendations: Vec::new(),
        }
    }

    /// True when the report came from a real classification.
    pub fn is_classified(&self) -> bool {
        self.harmony_type.is_some()
    }
}

/// Failures inside the analysis pipeline. Never escapes [`analyze`].
#[derive(Debug, Clone, PartialEq, Error)]
enum AnalysisError {
    #[error("non-finite {0} value")]
    NonFinite(&'static str),
}

/// Analyze the harmony of an ordered list of hex colors.
///
/// Order matters: hue differences are taken between neighbors in the list.
/// Malformed entries are skipped.
///
/// # Examples
///
/// ```
/// use beauty_palette::harmony::{analyze, HarmonyType};
///
/// let report = analyze(&["#FF0000", "#00FF00", "#0000FF"]);
/// assert_eq!(report.harmony_type, Some(HarmonyType::Triadic));
/// assert_eq!(report.score, 90);
/// ```
pub fn analyze<S: AsRef<str>>(colors: &[S]) -> HarmonyReport {
    if colors.len() < MIN_COLORS {
        return HarmonyReport::degenerate(MSG_TOO_FEW);
    }

    let hsl: Vec<Hsl> = colors
        .iter()
        .filter_map(|c| match parse_hex(c.as_ref()) {
            Ok(rgb) => Some(rgb.to_hsl()),
            Err(e) => {
                debug!("Skipping color {:?}: {}", c.as_ref(), e);
                None
            }
        })
        .collect();

    if hsl.len() < MIN_COLORS {
        return HarmonyReport::degenerate(MSG_NO_VALID);
    }

    match analyze_hsl(&hsl) {
        Ok(report) => report,
        Err(e) => {
            warn!("Harmony analysis failed: {}", e);
            HarmonyReport::fallback(&e)
        }
    }
}

fn analyze_hsl(hsl: &[Hsl]) -> Result<HarmonyReport, AnalysisError> {
    let details = measure(hsl)?;
    let harmony_type = HarmonyType::classify(details.average_hue_difference);
    let score = adjusted_score(harmony_type.base_score(), &details);

    let mut recommendations: Vec<String> =
        harmony_type.advice().iter().map(|s| s.to_string()).collect();
    recommendations.push(closing_remark(score).to_string());

    Ok(HarmonyReport {
        score,
        harmony_type: Some(harmony_type),
        analysis: harmony_type.description().to_string(),
        technical_details: Some(TechnicalDetails {
            average_hue_difference: round_to(details.average_hue_difference, 2),
            saturation_variance: round_to(details.saturation_variance, 3),
            lightness_variance: round_to(details.lightness_variance, 3),
        }),
        recommendations,
    })
}

/// Compute unrounded diagnostics for at least two colors.
fn measure(hsl: &[Hsl]) -> Result<TechnicalDetails, AnalysisError> {
    let diffs: Vec<f64> = hsl.windows(2).map(|w| (w[0].hue - w[1].hue).abs() * 360.0).collect();
    let average_hue_difference = diffs.iter().sum::<f64>() / diffs.len() as f64;

    let details = TechnicalDetails {
        average_hue_difference,
        saturation_variance: range(hsl.iter().map(|c| c.saturation)),
        lightness_variance: range(hsl.iter().map(|c| c.lightness)),
    };

    if !details.average_hue_difference.is_finite() {
        return Err(AnalysisError::NonFinite("hue difference"));
    }
    if !details.saturation_variance.is_finite() {
        return Err(AnalysisError::NonFinite("saturation"));
    }
    if !details.lightness_variance.is_finite() {
        return Err(AnalysisError::NonFinite("lightness"));
    }
    Ok(details)
}

fn range(values: impl Iterator<Item = f64>) -> f64 {
    let (min, max) =
        values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    max - min
}

fn adjusted_score(base: i32, details: &TechnicalDetails) -> u8 {
    let sat = details.saturation_variance;
    let light = details.lightness_variance;
    let adjustment = if sat < 0.3 && light < 0.3 {
        10
    } else if sat > 0.7 || light > 0.7 {
        -15
    } else {
        0
    };
    (base + adjustment).clamp(0, 100) as u8
}

fn closing_remark(score: u8) -> &'static str {
    if score >= 85 {
        "Excellent combination! Wear it with confidence"
    } else if score >= 70 {
        "Good harmony, works well in most situations"
    } else {
        "Consider adjusting proportions or adding a neutral"
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(avg: f64, sat: f64, light: f64) -> TechnicalDetails {
        TechnicalDetails {
            average_hue_difference: avg,
            saturation_variance: sat,
            lightness_variance: light,
        }
    }

    #[test]
    fn test_rgb_primaries_are_triadic() {
        let report = analyze(&["#FF0000", "#00FF00", "#0000FF"]);
        assert_eq!(report.harmony_type, Some(HarmonyType::Triadic));
        assert_eq!(report.score, 90);
        let td = report.technical_details.unwrap();
        assert_eq!(td.average_hue_difference, 120.0);
        assert_eq!(td.saturation_variance, 0.0);
        assert_eq!(td.lightness_variance, 0.0);
        assert_eq!(report.analysis, HarmonyType::Triadic.description());
    }

    #[test]
    fn test_fewer_than_two_colors() {
        let empty: [&str; 0] = [];
        for report in [analyze(&empty), analyze(&["#FF0000"])] {
            assert_eq!(report.score, 0);
            assert_eq!(report.analysis, MSG_TOO_FEW);
            assert!(report.technical_details.is_none());
            assert!(report.harmony_type.is_none());
        }
    }

    #[test]
    fn test_all_invalid_colors() {
        let report = analyze(&["#XYZ", "nope", "#12345"]);
        assert_eq!(report.score, 0);
        assert_eq!(report.analysis, MSG_NO_VALID);
    }

    #[test]
    fn test_one_valid_after_filtering() {
        let report = analyze(&["#FF0000", "garbage"]);
        assert_eq!(report.score, 0);
        assert_eq!(report.analysis, MSG_NO_VALID);
    }

    #[test]
    fn test_malformed_entries_are_dropped() {
        let with_junk = analyze(&["#FF0000", "notacolor", "#00FF00"]);
        let clean = analyze(&["#FF0000", "#00FF00"]);
        assert_eq!(with_junk, clean);
    }

    #[test]
    fn test_black_and_white() {
        let report = analyze(&["#000000", "#FFFFFF"]);
        let td = report.technical_details.unwrap();
        assert_eq!(td.average_hue_difference, 0.0);
        assert_eq!(td.lightness_variance, 1.0);
        assert_eq!(report.harmony_type, Some(HarmonyType::Analogous));
        // 85 base, lightness range 1.0 > 0.7 → -15
        assert_eq!(report.score, 70);
    }

    #[test]
    fn test_pair_order_does_not_matter() {
        let a = analyze(&["#FF0000", "#00FF00"]);
        let b = analyze(&["#00FF00", "#FF0000"]);
        assert_eq!(
            a.technical_details.unwrap().average_hue_difference,
            b.technical_details.unwrap().average_hue_difference
        );
    }

    #[test]
    fn test_adjacency_changes_result() {
        // hues 0, 120, 240 → diffs [120, 120]
        let forward = analyze(&["#FF0000", "#00FF00", "#0000FF"]);
        // hues 0, 240, 120 → diffs [240, 120]
        let swapped = analyze(&["#FF0000", "#0000FF", "#00FF00"]);
        assert_eq!(forward.technical_details.unwrap().average_hue_difference, 120.0);
        assert_eq!(swapped.technical_details.unwrap().average_hue_difference, 180.0);
        assert_eq!(swapped.harmony_type, Some(HarmonyType::Complementary));
    }

    #[test]
    fn test_band_boundaries_fall_into_complex() {
        for avg in [60.0, 75.0, 90.0, 150.0, 210.0, 300.0] {
            assert_eq!(HarmonyType::classify(avg), HarmonyType::Complex, "avg = {}", avg);
        }
        assert_eq!(HarmonyType::classify(59.99), HarmonyType::Analogous);
        assert_eq!(HarmonyType::classify(90.01), HarmonyType::Triadic);
        assert_eq!(HarmonyType::classify(149.99), HarmonyType::Triadic);
        assert_eq!(HarmonyType::classify(150.01), HarmonyType::Complementary);
        assert_eq!(HarmonyType::classify(209.99), HarmonyType::Complementary);
    }

    #[test]
    fn test_score_adjustments() {
        assert_eq!(adjusted_score(85, &details(0.0, 0.1, 0.1)), 95);
        assert_eq!(adjusted_score(85, &details(0.0, 0.8, 0.1)), 70);
        assert_eq!(adjusted_score(85, &details(0.0, 0.1, 0.75)), 70);
        assert_eq!(adjusted_score(85, &details(0.0, 0.5, 0.5)), 85);
        // exactly at the thresholds: neither bonus nor penalty
        assert_eq!(adjusted_score(70, &details(0.0, 0.3, 0.7)), 70);
        assert_eq!(adjusted_score(95, &details(0.0, 0.0, 0.0)), 100);
    }

    #[test]
    fn test_score_is_bounded() {
        let palettes: [&[&str]; 5] = [
            &["#FF0000", "#00FFFF"],
            &["#000000", "#FFFFFF", "#FF0000"],
            &["#F5E6D3", "#E8D4C2", "#F2E7D5", "#FDF2E9"],
            &["#123456", "#FEDCBA", "#00FF7F", "#7F00FF"],
            &["#808080", "#808081"],
        ];
        for colors in palettes {
            let report = analyze(colors);
            assert!(report.score <= 100);
            assert!(report.harmony_type.is_some());
        }
    }

    #[test]
    fn test_round_to_ties_to_even() {
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(0.1234, 3), 0.123);
    }

    #[test]
    fn test_closing_remark_thresholds() {
        let triadic = analyze(&["#FF0000", "#00FF00", "#0000FF"]);
        assert_eq!(triadic.recommendations.len(), 4);
        assert_eq!(triadic.recommendations.last().unwrap(), closing_remark(90));

        assert_eq!(closing_remark(85), "Excellent combination! Wear it with confidence");
        assert_eq!(closing_remark(84), "Good harmony, works well in most situations");
        assert_eq!(closing_remark(70), "Good harmony, works well in most situations");
        assert_eq!(closing_remark(69), "Consider adjusting proportions or adding a neutral");
    }

    #[test]
    fn test_non_finite_maps_to_fallback() {
        let nan = Hsl { hue: f64::NAN, saturation: 0.5, lightness: 0.5 };
        let ok = Hsl { hue: 0.0, saturation: 0.5, lightness: 0.5 };
        let err = analyze_hsl(&[nan, ok]).unwrap_err();
        let report = HarmonyReport::fallback(&err);
        assert_eq!(report.score, FALLBACK_SCORE);
        assert!(report.analysis.contains("hue difference"));
    }

    #[test]
    fn test_report_json_shape() {
        let report = analyze(&["#FF0000", "#00FF00", "#0000FF"]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["score"], 90);
        assert_eq!(json["harmonyType"], "Triadic");
        assert_eq!(json["technicalDetails"]["averageHueDifference"], 120.0);
        assert!(json["recommendations"].is_array());

        let degenerate = serde_json::to_value(analyze(&["#FF0000"])).unwrap();
        assert!(degenerate.get("harmonyType").is_none());
        assert!(degenerate.get("technicalDetails").is_none());
    }
}
