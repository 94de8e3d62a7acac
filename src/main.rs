//! card-check CLI entry point
//!
//! Validates `card.txt` in the working directory. Takes no arguments and
//! always exits 0; diagnostics go to stderr.

use card_check::platform::clock::ThreadSleeper;
use card_check::platform::fs::LocalFileSystem;
use card_check::version::Provenance;
use card_check::{run_card_check, CardCheckConfig};

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("card_check=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(build = %Provenance::current(), "card-check starting");

    let stdout = std::io::stdout();
    if let Err(e) = run_card_check(
        CardCheckConfig::default(),
        &LocalFileSystem,
        &ThreadSleeper,
        stdout.lock(),
    ) {
        tracing::error!(error = %e, "card check did not complete");
    }

    ExitCode::SUCCESS
}
