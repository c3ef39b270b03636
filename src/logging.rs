use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "SNIX_LAUNCHER_LOG";

/// Installs the global subscriber.
///
/// Logs go to stderr: stdout belongs to the launcher and must only ever
/// carry the feedback document.
pub fn init(verbose: bool) {
    let default_level = if verbose { "snix_launcher=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        eprintln!("logging already initialised: {e}");
    }
}
