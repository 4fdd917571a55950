//! Staffq CLI binary.

use anyhow::Result;
use staffq::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Controlled via RUST_LOG, e.g. RUST_LOG=staffq=debug,staffq_ops=trace
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("staffq=info,staffq_ops=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting staffq CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("Staffq CLI completed successfully");
    Ok(())
}
