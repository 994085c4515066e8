//! Color command implementations (analyze, variants)

use std::process::ExitCode;

use crate::harmony::{analyze, HarmonyReport};
use crate::logging;
use crate::variants::{all_variants, variants, HarmonyVariants, Scheme};

use super::{print_json, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the analyze command
///
/// Exits with an error when fewer than two usable colors were given.
pub fn run_analyze(colors: &[String], json: bool) -> ExitCode {
    logging::init(tracing::Level::WARN);

    let report = analyze(colors);
    let degenerate = report.score == 0 && !report.is_classified();

    if json {
        let printed = print_json(&report);
        if degenerate {
            return ExitCode::from(EXIT_ERROR);
        }
        return printed;
    }

    print_report(&report);
    if degenerate {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}

fn print_report(report: &HarmonyReport) {
    match report.harmony_type {
        Some(kind) => println!("Harmony: {} ({}/100)", kind, report.score),
        None => println!("Harmony: unclassified ({}/100)", report.score),
    }
    println!("{}", report.analysis);

    if let Some(details) = &report.technical_details {
        println!();
        println!("Average hue difference: {:.2}°", details.average_hue_difference);
        println!("Saturation variance:    {:.3}", details.saturation_variance);
        println!("Lightness variance:     {:.3}", details.lightness_variance);
    }

    if !report.recommendations.is_empty() {
        println!();
        println!("Recommendations:");
        for rec in &report.recommendations {
            println!("  - {}", rec);
        }
    }
}

/// Execute the variants command
pub fn run_variants(color: &str, scheme: Option<&str>, json: bool) -> ExitCode {
    let result = match scheme {
        Some(name) => match name.parse::<Scheme>() {
            Ok(scheme) => variants(color, scheme).map(|v| vec![v]),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        },
        None => all_variants(color),
    };

    let sets = match result {
        Ok(sets) => sets,
        Err(e) => {
            eprintln!("Error: invalid color '{}': {}", color, e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    if json {
        return print_json(&sets);
    }

    for set in &sets {
        print_variants(set);
    }
    ExitCode::from(EXIT_SUCCESS)
}

fn print_variants(set: &HarmonyVariants) {
    println!("{:<20} {}", set.scheme.as_str(), set.colors.join("  "));
    println!("{:<20} {}", "", set.description);
}
