//! Configuration for the TripAI application
//!
//! Credentials come from the process environment; there are no config
//! files and no CLI flags.

use std::env;

use anyhow::{Context, Result, bail};

/// Environment variable holding the generative-language API key
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Environment variable holding the places-search API key
pub const FOURSQUARE_API_KEY_VAR: &str = "FOURSQUARE_API_KEY";

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct TripAiConfig {
    /// Key for the generative-language API
    pub gemini_api_key: String,
    /// Key for the places-search API
    pub foursquare_api_key: String,
}

impl TripAiConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        let gemini_api_key = env::var(GEMINI_API_KEY_VAR)
            .with_context(|| format!("Missing {GEMINI_API_KEY_VAR} env var"))?;
        let foursquare_api_key = env::var(FOURSQUARE_API_KEY_VAR)
            .with_context(|| format!("Missing {FOURSQUARE_API_KEY_VAR} env var"))?;

        let config = Self {
            gemini_api_key,
            foursquare_api_key,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject credentials that cannot possibly be valid
    pub fn validate(&self) -> Result<()> {
        if self.gemini_api_key.is_empty() {
            bail!("{GEMINI_API_KEY_VAR} cannot be empty");
        }
        if self.foursquare_api_key.is_empty() {
            bail!("{FOURSQUARE_API_KEY_VAR} cannot be empty");
        }
        Ok(())
    }
}
