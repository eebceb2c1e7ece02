use tracing_subscriber::EnvFilter;

/// tracingの初期化
///
/// RUST_LOG があればそれを使い、なければ info（--verbose 時は debug）
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "review_ai_rust=debug,info" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
