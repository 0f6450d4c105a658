// Logging for the CLI, powered by tracing-subscriber.
//
// The library logs through the `log` facade; `tracing_log::LogTracer`
// forwards those records to the fmt subscriber installed here.

use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG`, falling back to the verbosity flag.
fn build_env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(format!("warn,sql2bind={level}"))
    })
}

/// Install the stderr subscriber. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    tracing_log::LogTracer::init().ok();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(verbose)
        .without_time()
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        tracing::trace!("logging initialized: verbose={verbose}");
    }
}
