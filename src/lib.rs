//! Beauty Palette - color recommendations and harmony analysis for styling
//!
//! This library provides functionality to:
//! - Analyze the harmony of an ordered list of hex colors
//! - Generate harmony variants of a base color
//! - Build clothing, makeup and accessory palettes from static color tables
//! - Serve all of the above as a JSON HTTP API

pub mod catalog;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod generator;
pub mod harmony;
pub mod logging;
pub mod quotes;
pub mod recommend;
pub mod server;
pub mod suggest;
pub mod variants;
