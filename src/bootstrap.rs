//! Dependency bootstrap.
//!
//! The presence of the `node_modules` directory is the sole signal that the
//! app's dependencies are installed. The directory's contents are never
//! inspected; it is created by `npm install`, which runs synchronously with
//! inherited streams so install output and prompts reach the console.

use crate::error::{LaunchError, Result};
use crate::runner::exit_code;
use crate::ui::Output;
use std::path::Path;
use std::process::Command;

/// Directory whose existence marks dependencies as installed.
pub const MARKER_DIR: &str = "node_modules";

/// Ensure the app's dependencies are installed under `root`.
///
/// Skips entirely when the marker directory exists. Otherwise runs the
/// `install` collaborator exactly once and fails with the collaborator's
/// exit code if it reports failure. The collaborator is injected so tests
/// can observe whether and where the install was invoked.
pub fn ensure_dependencies(
    root: &Path,
    output: &Output,
    install: &dyn Fn(&Path) -> Result<i32>,
) -> Result<()> {
    let marker = root.join(MARKER_DIR);
    if marker.exists() {
        tracing::debug!("{} present, skipping install", marker.display());
        return Ok(());
    }

    output.status("Installing dependencies...");
    let code = install(root)?;
    if code != 0 {
        return Err(LaunchError::InstallFailed { code });
    }
    Ok(())
}

/// Run `npm install` in `root` with inherited stdio.
///
/// `npm` must be the resolved binary path from the tooling check.
pub fn npm_install(npm: &Path, root: &Path) -> Result<i32> {
    tracing::debug!("running {} install in {}", npm.display(), root.display());
    let status = Command::new(npm)
        .arg("install")
        .current_dir(root)
        .status()
        .map_err(|source| LaunchError::SpawnFailed {
            command: format!("{} install", npm.display()),
            source,
        })?;
    Ok(exit_code(status))
}
