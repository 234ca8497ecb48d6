//! PATH probing primitives.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command, which is sometimes a shell builtin with
/// inconsistent error handling.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).unwrap();
    }

    #[test]
    #[cfg(unix)]
    fn is_executable_returns_true_for_executable_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tool");
        fs::write(&path, "#!/bin/sh\n").unwrap();
        make_executable(&path);
        assert!(is_executable(&path));
    }

    #[test]
    #[cfg(unix)]
    fn is_executable_returns_false_for_non_executable_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();
        assert!(!is_executable(&path));
    }

    #[test]
    fn is_executable_returns_false_for_nonexistent_file() {
        #[cfg(unix)]
        assert!(!is_executable(Path::new("/nonexistent/path/to/file")));
    }

    #[test]
    #[cfg(unix)]
    fn resolve_tool_path_finds_first_match() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        for dir in [&first, &second] {
            let path = dir.path().join("node");
            fs::write(&path, "#!/bin/sh\n").unwrap();
            make_executable(&path);
        }

        let entries = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        let resolved = resolve_tool_path("node", &entries).unwrap();
        assert_eq!(resolved, first.path().join("node"));
    }

    #[test]
    fn resolve_tool_path_returns_none_when_absent() {
        let temp = TempDir::new().unwrap();
        let entries = vec![temp.path().to_path_buf()];
        assert!(resolve_tool_path("definitely-not-a-tool", &entries).is_none());
    }

    #[test]
    #[cfg(unix)]
    fn resolve_tool_path_skips_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("node")).unwrap();
        let entries = vec![temp.path().to_path_buf()];
        assert!(resolve_tool_path("node", &entries).is_none());
    }
}
