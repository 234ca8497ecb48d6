//! Launch orchestration.
//!
//! The launch sequence is strictly ordered: tooling verification gates the
//! dependency bootstrap, which gates the app start, which is then supervised
//! until exit. No step is retried; every failure surfaces to the invoker.

pub mod supervise;

pub use supervise::{exit_code, EXIT_INTERRUPTED};

use crate::bootstrap;
use crate::config::LaunchConfig;
use crate::error::{LaunchError, Result};
use crate::tooling;
use crate::ui::Output;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

/// Orchestrates the check / install / start / wait sequence.
pub struct Launcher<'a> {
    root: PathBuf,
    config: LaunchConfig,
    grace_period: Duration,
    output: &'a Output,
}

impl<'a> Launcher<'a> {
    /// Create a launcher for the app rooted at `root`.
    ///
    /// `grace_override` takes precedence over the configured grace period.
    pub fn new(
        root: PathBuf,
        config: LaunchConfig,
        grace_override: Option<u64>,
        output: &'a Output,
    ) -> Self {
        let grace_period = grace_override
            .map(Duration::from_secs)
            .unwrap_or_else(|| config.grace_period());
        Self {
            root,
            config,
            grace_period,
            output,
        }
    }

    /// Get the app root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run the full launch sequence, returning the exit code to report.
    ///
    /// The returned code is the app's own exit code on normal completion, or
    /// [`EXIT_INTERRUPTED`] when the run was stopped with Ctrl-C.
    pub fn run(&self) -> Result<i32> {
        let found = tooling::verify(&tooling::parse_system_path())?;
        self.output
            .detail(&format!("Using npm at {}", found.npm.display()));

        bootstrap::ensure_dependencies(&self.root, self.output, &|root| {
            bootstrap::npm_install(&found.npm, root)
        })?;

        // Installed before the spawn so an early Ctrl-C is never dropped.
        let interrupted = supervise::install_interrupt_handler()?;

        self.output
            .status(&format!("Starting {}...", self.config.app_name));
        let child = Command::new(&found.npm)
            .arg("start")
            .current_dir(&self.root)
            .spawn()
            .map_err(|source| LaunchError::SpawnFailed {
                command: format!("{} start", found.npm.display()),
                source,
            })?;
        tracing::debug!("app started with pid {}", child.id());

        supervise::wait_with_interrupt(child, &interrupted, self.grace_period, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    #[test]
    fn grace_override_wins_over_config() {
        let output = Output::new(OutputMode::Quiet, false);
        let config = LaunchConfig {
            grace_period_secs: 10,
            ..Default::default()
        };
        let launcher = Launcher::new("/tmp".into(), config, Some(3), &output);
        assert_eq!(launcher.grace_period, Duration::from_secs(3));
    }

    #[test]
    fn config_grace_period_used_without_override() {
        let output = Output::new(OutputMode::Quiet, false);
        let config = LaunchConfig {
            grace_period_secs: 4,
            ..Default::default()
        };
        let launcher = Launcher::new("/tmp".into(), config, None, &output);
        assert_eq!(launcher.grace_period, Duration::from_secs(4));
    }

    #[test]
    fn launcher_exposes_root() {
        let output = Output::new(OutputMode::Quiet, false);
        let launcher = Launcher::new("/opt/app".into(), LaunchConfig::default(), None, &output);
        assert_eq!(launcher.root(), Path::new("/opt/app"));
    }
}
