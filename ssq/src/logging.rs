use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Respects the `SSQ_LOG` environment variable for filtering and defaults
/// to `warn`. Output goes to stderr; stdout carries only tickets.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("SSQ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
