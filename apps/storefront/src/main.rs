//! # Storefront Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr)
//! 2. Parse flags
//! 3. Run the session until `quit` or end of input

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use storefront::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    storefront::init_tracing();
    let cli = Cli::parse();

    match storefront::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Storefront failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
