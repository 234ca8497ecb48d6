//! Required-tool verification.
//!
//! This is a precondition gate: it runs before the install and start steps
//! and fails the whole launch when anything is missing, naming exactly the
//! absent tools.

use crate::error::{LaunchError, Result};
use crate::tooling::probe::resolve_tool_path;
use std::path::PathBuf;

/// Executables the launcher shells out to, in diagnostic order.
pub const REQUIRED_TOOLS: &[&str] = &["node", "npm"];

/// Remediation hint shown alongside a missing-tooling diagnostic.
pub const INSTALL_HINT: &str = "Install Node.js from https://nodejs.org/ and retry.";

/// Absolute paths of the verified tooling.
///
/// Commands are always invoked through these resolved paths rather than
/// re-looked-up through a shell, so the binaries that were verified are the
/// binaries that run.
#[derive(Debug, Clone)]
pub struct ResolvedTooling {
    /// Resolved `node` binary.
    pub node: PathBuf,
    /// Resolved `npm` binary.
    pub npm: PathBuf,
}

/// Verify that every required tool is present on the given PATH entries.
///
/// Returns the resolved paths on success. On failure the error lists exactly
/// the tools that could not be found, in [`REQUIRED_TOOLS`] order.
pub fn verify(path_entries: &[PathBuf]) -> Result<ResolvedTooling> {
    let node = resolve_tool_path("node", path_entries);
    let npm = resolve_tool_path("npm", path_entries);

    let missing: Vec<String> = REQUIRED_TOOLS
        .iter()
        .zip([&node, &npm])
        .filter(|(_, path)| path.is_none())
        .map(|(name, _)| (*name).to_string())
        .collect();

    match (node, npm) {
        (Some(node), Some(npm)) => {
            tracing::debug!(
                "tooling verified: node at {}, npm at {}",
                node.display(),
                npm.display()
            );
            Ok(ResolvedTooling { node, npm })
        }
        _ => Err(LaunchError::MissingTooling { tools: missing }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn fake_tool(dir: &Path, name: &str) {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
    }

    #[test]
    #[cfg(unix)]
    fn verify_resolves_both_tools() {
        let temp = TempDir::new().unwrap();
        fake_tool(temp.path(), "node");
        fake_tool(temp.path(), "npm");

        let tooling = verify(&[temp.path().to_path_buf()]).unwrap();
        assert_eq!(tooling.node, temp.path().join("node"));
        assert_eq!(tooling.npm, temp.path().join("npm"));
    }

    #[test]
    fn verify_reports_all_missing_tools() {
        let temp = TempDir::new().unwrap();
        let err = verify(&[temp.path().to_path_buf()]).unwrap_err();
        match err {
            LaunchError::MissingTooling { tools } => {
                assert_eq!(tools, vec!["node".to_string(), "npm".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn verify_names_only_the_missing_tool() {
        let temp = TempDir::new().unwrap();
        fake_tool(temp.path(), "node");

        let err = verify(&[temp.path().to_path_buf()]).unwrap_err();
        match err {
            LaunchError::MissingTooling { tools } => {
                assert_eq!(tools, vec!["npm".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn verify_with_empty_path_misses_everything() {
        let err = verify(&[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required command(s): node, npm"
        );
    }
}
