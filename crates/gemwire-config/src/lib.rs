//! Configuration for gemwire
//!
//! Loaded from a TOML file with `{{ env.VAR }}` placeholder expansion.

#![allow(clippy::must_use_candidate)]

mod env;
pub mod gemini;
mod loader;

use serde::Deserialize;

pub use env::ExpandError;
pub use gemini::*;

/// Top-level gemwire configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Gemini provider configuration
    #[serde(default)]
    pub gemini: GeminiConfig,
}
