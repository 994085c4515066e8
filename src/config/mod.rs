//! Server configuration
//!
//! Provides types, discovery and layered loading for `beauty.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
