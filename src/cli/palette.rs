//! Palette and recommendation command implementations

use std::process::ExitCode;

use chrono::Utc;

use crate::config::default_config;
use crate::error::RequestError;
use crate::generator::{generate, GeneratedPalette, PaletteRequest, Preferences, UserProfile};
use crate::logging;
use crate::recommend::{recommend_by_name, Recommendations};

use super::{print_json, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Arguments of the palette command
pub struct PaletteArgs {
    pub kind: String,
    pub event: Option<String>,
    pub skin: Option<String>,
    pub undertone: Option<String>,
    pub eyes: Option<String>,
    pub season: Option<String>,
    pub user: Option<String>,
    pub json: bool,
}

/// Execute the recommend command
pub fn run_recommend(skin: &str, undertone: &str, json: bool) -> ExitCode {
    let recs = match recommend_by_name(skin, undertone) {
        Ok(recs) => recs,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    if json {
        return print_json(&recs);
    }

    print_recommendations(&recs);
    ExitCode::from(EXIT_SUCCESS)
}

fn print_recommendations(recs: &Recommendations) {
    println!("Best colors:      {}", recs.best_colors.join(", "));
    println!("Avoid:            {}", recs.avoid_colors.join(", "));
    println!("Undertone colors: {}", recs.undertone_colors.join(", "));
    println!("Metals:           {}", recs.best_metals.join(", "));
    println!();
    println!("{}", recs.undertone_description);
    for tip in recs.skin_recommendations {
        println!("  - {}", tip);
    }
}

/// Execute the palette command
pub fn run_palette(args: PaletteArgs) -> ExitCode {
    logging::init(tracing::Level::WARN);

    let request = PaletteRequest {
        profile: Some(UserProfile {
            user_id: Some(args.user.unwrap_or_else(|| "anonymous".to_string())),
            skin_tone: args.skin,
            undertone: args.undertone,
            eye_color: args.eyes,
        }),
        palette_type: Some(args.kind),
        event_type: args.event,
        preferences: Some(Preferences { season: args.season }),
    };

    let info = default_config().server.info();
    let palette = match generate(&request, &info, Utc::now()) {
        Ok(palette) => palette,
        Err(e) => return report_error(&e),
    };

    if args.json {
        return print_json(&palette);
    }

    print_palette(&palette);
    ExitCode::from(EXIT_SUCCESS)
}

fn report_error(e: &RequestError) -> ExitCode {
    eprintln!("Error: {}", e);
    ExitCode::from(EXIT_INVALID_ARGS)
}

fn print_palette(palette: &GeneratedPalette) {
    println!(
        "{} palette for {} ({})  [{}]",
        palette.palette_type, palette.event_type, palette.season, palette.palette_id
    );
    println!();
    for swatch in &palette.colors {
        println!("  {}  {:<18} {:<10} {}", swatch.hex, swatch.name, swatch.category, swatch.usage);
    }

    let harmony = &palette.harmony_analysis;
    println!();
    match harmony.harmony_type {
        Some(kind) => println!("Harmony: {} ({}/100)", kind, harmony.score),
        None => println!("Harmony: {}", harmony.analysis),
    }

    let recs = &palette.recommendations;
    let sections = [
        ("Styling tips", &recs.styling_tips),
        ("Combinations", &recs.color_combinations),
        ("Seasonal notes", &recs.seasonal_notes),
        ("Personalized advice", &recs.personalized_advice),
    ];
    for (title, lines) in sections {
        if lines.is_empty() {
            continue;
        }
        println!();
        println!("{}:", title);
        for line in lines {
            println!("  - {}", line);
        }
    }
}
