//! snix-launcher - massCode snippet search for Alfred
//!
//! Invoked by an Alfred Script Filter with the typed query as its only
//! argument. Prints the feedback JSON on stdout and exits; any failure to
//! reach or decode the massCode API is logged to stderr and ends the run
//! with a non-zero status and no output.

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use snix_launcher::cli::{self, Cli};
use snix_launcher::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn Error + Send + Sync>> {
    color_eyre::install()?;

    let args = Cli::parse();
    logging::init(args.verbose);

    match cli::execute(args).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::error!("{e:#}");
            Ok(ExitCode::FAILURE)
        }
    }
}
