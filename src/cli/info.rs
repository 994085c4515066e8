//! Info command implementations (quote, catalog)

use std::process::ExitCode;

use chrono::Utc;

use crate::catalog::{EventType, EyeColor, PaletteKind, Season, SkinTone, Undertone};
use crate::quotes::{categories, pick_quote};
use crate::variants::Scheme;

use super::EXIT_SUCCESS;

/// Execute the quote command
pub fn run_quote(category: Option<&str>) -> ExitCode {
    let quote = pick_quote(category, &mut rand::rng(), Utc::now());
    println!("\"{}\"", quote.entry.quote);
    println!("  - {} ({})", quote.entry.author, quote.entry.category);
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the catalog command
pub fn run_catalog() -> ExitCode {
    let schemes: Vec<&str> = Scheme::ALL.iter().map(|s| s.as_str()).collect();
    let quote_categories = categories();
    let tables: [(&str, &[&str]); 8] = [
        ("Skin tones", SkinTone::NAMES),
        ("Undertones", Undertone::NAMES),
        ("Eye colors", EyeColor::NAMES),
        ("Events", EventType::NAMES),
        ("Seasons", Season::NAMES),
        ("Palette kinds", PaletteKind::NAMES),
        ("Harmony schemes", schemes.as_slice()),
        ("Quote categories", quote_categories.as_slice()),
    ];

    for (title, names) in tables {
        println!("{:<18} {}", format!("{}:", title), names.join(", "));
    }
    ExitCode::from(EXIT_SUCCESS)
}
