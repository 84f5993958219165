//! pkgcheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pkgcheck::cli::{CheckCommand, Cli, Command};
use pkgcheck::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs are written to stderr; stdout carries only the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pkgcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pkgcheck=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --no-color before any styled output is produced
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    init_tracing(cli.debug);

    tracing::debug!("pkgcheck starting with args: {:?}", cli);

    let mut ui = create_ui(OutputMode::from_flags(cli.verbose, cli.quiet));

    match CheckCommand::new(cli.check).execute(ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
