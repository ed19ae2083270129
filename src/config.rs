//! Runtime configuration
//!
//! Read from environment variables. Invalid values are logged and replaced
//! by their defaults.

use crate::ui::tree::Layout;
use crate::ui::widgets::COLLAPSED_WIDTH;

/// Expanded sidebar width (columns)
pub const SIDEBAR_WIDTH_VAR: &str = "SIDENAV_SIDEBAR_WIDTH";
/// Build the page without a toggler when set to `1`/`true`
pub const NO_TOGGLER_VAR: &str = "SIDENAV_NO_TOGGLER";
/// Log file path; logging is off when unset
pub const LOG_FILE_VAR: &str = "SIDENAV_LOG";

/// Default expanded sidebar width
pub const DEFAULT_SIDEBAR_WIDTH: u16 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Expanded sidebar width, borders included
    pub sidebar_width: u16,
    /// Which optional elements the page contains
    pub layout: Layout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            layout: Layout::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(SIDEBAR_WIDTH_VAR) {
            match raw.trim().parse::<u16>() {
                Ok(width) if width >= COLLAPSED_WIDTH => config.sidebar_width = width,
                _ => tracing::warn!(
                    var = SIDEBAR_WIDTH_VAR,
                    value = %raw,
                    default = DEFAULT_SIDEBAR_WIDTH,
                    "invalid sidebar width, using default"
                ),
            }
        }

        if let Some(raw) = lookup(NO_TOGGLER_VAR)
            && is_truthy(&raw)
        {
            config.layout = Layout::without_toggler();
        }

        config
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
