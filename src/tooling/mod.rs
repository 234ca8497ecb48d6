//! Required-executable discovery.
//!
//! The launcher refuses to do any work until the Node tooling it shells out
//! to is actually present. Lookup walks the PATH entries directly instead of
//! shelling out to `which`, whose behavior varies across systems.

pub mod check;
pub mod probe;

pub use check::{verify, ResolvedTooling, INSTALL_HINT, REQUIRED_TOOLS};
pub use probe::{is_executable, parse_system_path, resolve_tool_path};
