//! deploy-notify: Preview Deployment Notifier
//!
//! Entry point for the deploy-notify action step.

use deploy_notify::config::{Cli, ValidatedConfig};
use deploy_notify::github::{ActionsReporter, FailureReporter};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let reporter = ActionsReporter::stdout();

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            reporter.set_failed(&e.to_string());
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    // Setup logging and run
    setup_tracing(config.verbose);
    run::mask_secrets(&config, &reporter);
    tracing::info!("{config}");

    run_application(&config, &reporter)
}

/// Runs the notification on a Tokio runtime.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(config: &ValidatedConfig, reporter: &ActionsReporter) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            reporter.set_failed(&format!("Failed to create Tokio runtime: {e}"));
            return exit_code::runtime_error();
        }
    };

    runtime.block_on(run::execute(config, reporter));

    if reporter.has_failed() {
        exit_code::runtime_error()
    } else {
        exit_code::SUCCESS
    }
}
