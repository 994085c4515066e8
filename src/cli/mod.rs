//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod color;
mod info;
mod palette;
mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Beauty Palette - color recommendations and harmony analysis for styling
#[derive(Parser)]
#[command(name = "beauty-palette")]
#[command(about = "Beauty Palette - color recommendations and harmony analysis for styling")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Interface to bind (overrides beauty.toml and defaults)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides PORT and beauty.toml)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to a beauty.toml (skips discovery)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log level: error, warn, info, debug, trace (overrides BEAUTY_LOG)
        #[arg(long)]
        log_level: Option<String>,
    },

    /// Analyze the harmony of an ordered list of hex colors
    Analyze {
        /// Colors such as "#FF0000" or "00ff00"; order matters
        #[arg(required = true)]
        colors: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show harmony variants of a base color
    Variants {
        /// Base color
        color: String,

        /// Only this scheme: complementary, analogous, triadic,
        /// split-complementary, tetradic
        #[arg(short, long)]
        scheme: Option<String>,

        /// Print the variants as JSON
        #[arg(long)]
        json: bool,
    },

    /// Color recommendations for a skin tone and undertone
    Recommend {
        /// Skin tone: fair, medium, deep
        skin: String,

        /// Undertone: cool, warm, neutral
        undertone: String,

        /// Print the recommendations as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a personalized palette
    Palette {
        /// Palette kind: clothing, makeup, accessories
        #[arg(short, long, default_value = "clothing")]
        kind: String,

        /// Event: work, casual, party, formal, date
        #[arg(short, long)]
        event: Option<String>,

        /// Skin tone: fair, medium, deep
        #[arg(long)]
        skin: Option<String>,

        /// Undertone: cool, warm, neutral
        #[arg(long)]
        undertone: Option<String>,

        /// Eye color: blue, green, brown, gray, black
        #[arg(long)]
        eyes: Option<String>,

        /// Season: spring, summer, autumn, winter
        #[arg(long)]
        season: Option<String>,

        /// User identifier recorded in the palette
        #[arg(long)]
        user: Option<String>,

        /// Print the palette as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print an inspirational beauty quote
    Quote {
        /// Quote category (unknown categories pick from all quotes)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List the names accepted by every catalog table
    Catalog,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port, config, log_level } => {
            serve::run_serve(host, port, config.as_deref(), log_level)
        }
        Commands::Analyze { colors, json } => color::run_analyze(&colors, json),
        Commands::Variants { color, scheme, json } => {
            color::run_variants(&color, scheme.as_deref(), json)
        }
        Commands::Recommend { skin, undertone, json } => {
            palette::run_recommend(&skin, &undertone, json)
        }
        Commands::Palette { kind, event, skin, undertone, eyes, season, user, json } => {
            palette::run_palette(palette::PaletteArgs {
                kind,
                event,
                skin,
                undertone,
                eyes,
                season,
                user,
                json,
            })
        }
        Commands::Quote { category } => info::run_quote(category.as_deref()),
        Commands::Catalog => info::run_catalog(),
    }
}

/// Print `value` as pretty JSON.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: Failed to encode JSON: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
