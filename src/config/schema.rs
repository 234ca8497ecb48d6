//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the
//! `.taxprep.yml` file format.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Display name used in status output when no config overrides it.
pub const DEFAULT_APP_NAME: &str = "PocketSmith Tax Prep";

/// Seconds to wait after a stop request before force-killing the app.
pub const DEFAULT_GRACE_PERIOD_SECS: u64 = 10;

/// Root configuration structure for `.taxprep.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Application name (for display purposes)
    pub app_name: String,

    /// Seconds to wait for a graceful stop before force-killing
    pub grace_period_secs: u64,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            grace_period_secs: DEFAULT_GRACE_PERIOD_SECS,
        }
    }
}

impl LaunchConfig {
    /// The configured grace period as a [`Duration`].
    pub fn grace_period(&self) -> Duration {
        Duration::from_secs(self.grace_period_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_conventions() {
        let config = LaunchConfig::default();
        assert_eq!(config.app_name, "PocketSmith Tax Prep");
        assert_eq!(config.grace_period_secs, 10);
    }

    #[test]
    fn grace_period_converts_to_duration() {
        let config = LaunchConfig {
            grace_period_secs: 3,
            ..Default::default()
        };
        assert_eq!(config.grace_period(), Duration::from_secs(3));
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: LaunchConfig = serde_yaml::from_str("app_name: Test App").unwrap();
        assert_eq!(config.app_name, "Test App");
        assert_eq!(config.grace_period_secs, DEFAULT_GRACE_PERIOD_SECS);
    }

    #[test]
    fn full_yaml_overrides_everything() {
        let yaml = "app_name: Test App\ngrace_period_secs: 2\n";
        let config: LaunchConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.app_name, "Test App");
        assert_eq!(config.grace_period_secs, 2);
    }
}
