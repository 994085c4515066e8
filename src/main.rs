//! Beauty Palette - command-line tool and HTTP server for styling color palettes

use std::process::ExitCode;

use beauty_palette::cli;

fn main() -> ExitCode {
    cli::run()
}
