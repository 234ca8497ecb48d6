//! Output mode and writer.

use crate::ui::theme::LaunchTheme;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show status lines plus extra detail such as resolved tool paths.
    Verbose,
    /// Show status lines only.
    #[default]
    Normal,
    /// Show nothing except errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows extra detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Output writer that respects output mode.
///
/// Status lines go to stdout; errors and hints go to stderr and are shown
/// in every mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
    theme: LaunchTheme,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode, use_colors: bool) -> Self {
        let theme = if use_colors {
            LaunchTheme::new()
        } else {
            LaunchTheme::plain()
        };
        Self { mode, theme }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write a status line if the mode allows it.
    pub fn status(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{msg}");
        }
    }

    /// Write a detail line in verbose mode only.
    pub fn detail(&self, msg: &str) {
        if self.mode.shows_detail() {
            println!("{}", self.theme.dim.apply_to(msg));
        }
    }

    /// Write an error line to stderr.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.error.apply_to(msg));
    }

    /// Write a secondary hint line to stderr.
    pub fn hint(&self, msg: &str) {
        eprintln!("{}", self.theme.dim.apply_to(msg));
    }
}
