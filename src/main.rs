//! Launcher CLI entry point.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use taxprep_launch::cli::Cli;
use taxprep_launch::config;
use taxprep_launch::runner::Launcher;
use taxprep_launch::tooling::INSTALL_HINT;
use taxprep_launch::ui::{should_use_colors, Output, OutputMode};
use taxprep_launch::LaunchError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("taxprep_launch=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taxprep_launch=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

/// Resolve the app root.
///
/// An explicit `--project` wins; otherwise the directory containing the
/// launcher binary is used, so the launcher behaves the same no matter
/// where it is invoked from.
fn resolve_root(project: Option<&PathBuf>) -> PathBuf {
    if let Some(root) = project {
        return root.clone();
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}

/// Exit code for a failed launch.
fn exit_code_for(err: &LaunchError) -> u8 {
    match err {
        LaunchError::MissingTooling { .. } => 1,
        LaunchError::InstallFailed { code } => *code as u8,
        _ => 1,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("launcher starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };
    let output = Output::new(output_mode, should_use_colors(cli.no_color));

    let root = resolve_root(cli.project.as_ref());
    tracing::debug!("app root: {}", root.display());

    let launch_config = match config::load(&root) {
        Ok(c) => c,
        Err(e) => {
            output.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let launcher = Launcher::new(root, launch_config, cli.grace_period, &output);
    match launcher.run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            output.error(&format!("Error: {}", e));
            if matches!(e, LaunchError::MissingTooling { .. }) {
                output.hint(INSTALL_HINT);
            }
            ExitCode::from(exit_code_for(&e))
        }
    }
}
