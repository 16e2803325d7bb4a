//! CLI entry point for doctext.

use doctext::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing with WARN level by default, respecting RUST_LOG.
    // Diagnostics go to stderr so stdout carries only extracted text.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Failures are reported on stdout and do not change the exit status;
    // the printed line is the sole error channel.
    if let Err(e) = cli::run() {
        println!("Error: {e}");
    }
}
