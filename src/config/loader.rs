//! Configuration file loading.
//!
//! The config file is optional: a missing file yields the defaults, while a
//! present-but-malformed file is a fatal error so typos don't silently fall
//! back to defaults.

use crate::config::schema::LaunchConfig;
use crate::error::{LaunchError, Result};
use std::fs;
use std::path::Path;

/// File name of the optional launcher config, relative to the app root.
pub const CONFIG_FILE: &str = ".taxprep.yml";

/// Load the launcher config from `root`, falling back to defaults.
pub fn load(root: &Path) -> Result<LaunchConfig> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(LaunchConfig::default());
    }

    let text = fs::read_to_string(&path)?;
    serde_yaml::from_str(&text).map_err(|e| LaunchError::ConfigParseError {
        path,
        message: e.to_string(),
    })
}
