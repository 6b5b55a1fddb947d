use serde::{Deserialize, Serialize};

use crate::todo::VisibilityFilter;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Default settings for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Visibility filter the list opens with (default: all).
    #[serde(default)]
    pub filter: VisibilityFilter,
    /// UI tick interval in milliseconds (default: 250). Must be > 0.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            filter: VisibilityFilter::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
