//! Configuration module for the sigmoid explorer.
//!
//! Configuration is read from environment variables (a `.env` file is loaded first by the
//! binaries), organized by concern: backend API and desktop window.

mod api_config;
mod ui_config;

pub use api_config::{ApiEnvConfig, DEFAULT_API_BASE_URL, parse_base_url};
pub use ui_config::UiEnvConfig;

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Looks up a variable by name. `Config::from_env` uses the process environment;
/// tests pass a map.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Which service implementation backs the explorer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Talk to the HTTP backend.
    Http,
    /// Compute everything in-process.
    Mock,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(Mode::Http),
            "mock" => Ok(Mode::Mock),
            _ => anyhow::bail!("Invalid MODE: {}. Must be 'http' or 'mock'", s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub api: ApiEnvConfig,
    pub ui: UiEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(&|key| env::var(key).ok())
    }

    pub fn from_vars(lookup: EnvLookup<'_>) -> Result<Self> {
        let mode_str = lookup("MODE").unwrap_or_else(|| "http".to_string());
        let mode = Mode::from_str(&mode_str)?;

        let api = ApiEnvConfig::from_vars(lookup).context("Failed to load API config")?;
        let ui = UiEnvConfig::from_vars(lookup).context("Failed to load UI config")?;

        Ok(Self { mode, api, ui })
    }
}

/// Parses `key` if present. Unparseable values are errors rather than silent defaults.
pub(crate) fn parse_optional<T>(lookup: EnvLookup<'_>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("Failed to parse {}: {:?}", key, raw))
        })
        .transpose()
}
