//! Serializable construction settings.
//!
//! [`Config`] lets applications keep status line settings in their own configuration
//! files (TOML, JSON, ...) and hand them to
//! [`StatusLineBuilder::from_config`](crate::StatusLineBuilder::from_config).

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// ANSI "erase entire line" followed by "cursor to column 1".
pub const DEFAULT_CLEAR_SEQUENCE: &str = "\x1b[2K\x1b[G";

/// Default minimum spacing between unforced renders, in milliseconds.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 100;

/// Status line settings that can be loaded from a configuration file.
///
/// Missing fields fall back to their defaults.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum wall-clock spacing between unforced renders. `0` renders on every update.
    pub refresh_interval_ms: u64,

    /// Control sequence written to erase the previous frame. `None` uses
    /// [`DEFAULT_CLEAR_SEQUENCE`].
    pub clear_sequence: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            clear_sequence: None,
        }
    }
}

impl Config {
    /// The refresh interval as a [`Duration`].
    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    /// The clear sequence in effect.
    #[must_use]
    pub fn clear_sequence(&self) -> &str {
        self.clear_sequence
            .as_deref()
            .unwrap_or(DEFAULT_CLEAR_SEQUENCE)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Config, DEFAULT_CLEAR_SEQUENCE};

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.refresh_interval(), Duration::from_millis(100));
        assert_eq!(config.clear_sequence(), DEFAULT_CLEAR_SEQUENCE);
    }

    #[test]
    fn test_overrides() {
        let config: Config =
            serde_json::from_str(r#"{"refresh_interval_ms": 0, "clear_sequence": "\r"}"#).unwrap();
        assert_eq!(config.refresh_interval(), Duration::ZERO);
        assert_eq!(config.clear_sequence(), "\r");
    }
}
