use tracing_subscriber::EnvFilter;

/// Initialise the global `tracing` subscriber.
///
/// Respects `RUST_LOG`. Otherwise only warnings are shown, or this crate's
/// debug events with `verbose`. Logs go to stderr so they never mix with
/// command output.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "albatroz_cli=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
