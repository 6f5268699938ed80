use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. Honors `RUST_LOG`, defaulting to
/// `info` for this crate and `tower_http`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("todo_server=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
