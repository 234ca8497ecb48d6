//! Launcher configuration.
//!
//! The launcher works with zero configuration; an optional `.taxprep.yml`
//! at the app root can override the display name and the shutdown grace
//! period.

pub mod loader;
pub mod schema;

pub use loader::{load, CONFIG_FILE};
pub use schema::LaunchConfig;
