pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod discovery;
pub mod extractor;
pub mod fetcher;
pub mod llm;
pub mod pipeline;
pub mod profile;
pub mod relevance;
pub mod sites;

/// Install the global `tracing` subscriber; `RUST_LOG` picks the level and
/// `PROFILER_LOG_JSON=1` switches to JSON lines.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if std::env::var("PROFILER_LOG_JSON").is_ok_and(|v| v == "1") {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
