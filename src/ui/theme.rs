//! Visual theme and styling.

use console::Style;

/// Styles applied to the launcher's own lines.
#[derive(Debug, Clone)]
pub struct LaunchTheme {
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text such as remediation hints.
    pub dim: Style,
}

impl Default for LaunchTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            dim: Style::new(),
        }
    }
}

/// Decide whether colored output should be used.
///
/// Respects an explicit `--no-color` flag, the `NO_COLOR` convention, and
/// whether the terminal supports colors at all.
pub fn should_use_colors(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::colors_enabled()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_flag_disables_colors() {
        assert!(!should_use_colors(true));
    }

    #[test]
    fn plain_theme_renders_text_unchanged() {
        let theme = LaunchTheme::plain();
        assert_eq!(theme.error.apply_to("boom").to_string(), "boom");
    }
}
