//! Terminal output.
//!
//! The launcher's own output is a handful of status lines; everything else
//! on the console comes from the app and the package manager, whose streams
//! are inherited untouched.

pub mod output;
pub mod theme;

pub use output::{Output, OutputMode};
pub use theme::{should_use_colors, LaunchTheme};
