//! taxprep-launch - One-command launcher for the PocketSmith Tax Prep app.
//!
//! The launcher verifies that Node tooling is available, installs the app's
//! dependencies when the `node_modules` marker directory is absent, then
//! starts the app under `npm start` and supervises it until it exits or the
//! user presses Ctrl-C.
//!
//! # Modules
//!
//! - [`bootstrap`] - Dependency marker check and `npm install`
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.taxprep.yml` launcher configuration
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Launch orchestration and child process supervision
//! - [`tooling`] - Required-executable discovery on PATH
//! - [`ui`] - Terminal output and theming
//!
//! # Example
//!
//! ```no_run
//! use taxprep_launch::config::LaunchConfig;
//! use taxprep_launch::runner::Launcher;
//! use taxprep_launch::ui::{Output, OutputMode};
//!
//! let output = Output::new(OutputMode::Normal, false);
//! let launcher = Launcher::new("/opt/taxprep".into(), LaunchConfig::default(), None, &output);
//! let exit_code = launcher.run().unwrap();
//! std::process::exit(exit_code);
//! ```

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod tooling;
pub mod ui;

pub use error::{LaunchError, Result};
