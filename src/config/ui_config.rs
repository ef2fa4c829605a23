use super::{EnvLookup, parse_optional};
use anyhow::Result;

/// Desktop window configuration
#[derive(Debug, Clone, PartialEq)]
pub struct UiEnvConfig {
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for UiEnvConfig {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl UiEnvConfig {
    pub fn from_vars(lookup: EnvLookup<'_>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            window_width: parse_optional(lookup, "SIGMOID_WINDOW_WIDTH")?
                .unwrap_or(defaults.window_width),
            window_height: parse_optional(lookup, "SIGMOID_WINDOW_HEIGHT")?
                .unwrap_or(defaults.window_height),
        })
    }
}
