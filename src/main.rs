//! commented-config: splice comment blocks into YAML config files.
//!
//! Parses arguments, installs logging, dispatches to the command handler and
//! maps errors to exit codes.

mod cli;
mod commands;

use cli::Cli;
use commented_config::{ConfigError, exit_codes};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    match commands::dispatch(cli.command, &mut stdout) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {err:#}");

            let code = err
                .downcast_ref::<ConfigError>()
                .map_or(exit_codes::USER_ERROR, ConfigError::exit_code);
            ExitCode::from(code as u8)
        }
    }
}

/// Log to stderr so command output on stdout stays machine-readable.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
