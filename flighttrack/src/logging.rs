use tracing_subscriber::EnvFilter;

/// Initialize console logging at the configured level.
/// `RUST_LOG` still takes precedence over the config value.
pub fn init_logging(level: &str) {
    let level = match level {
        "trace" | "debug" | "info" | "warn" | "error" => level,
        other => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", other);
            "info"
        }
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.parse().expect("validated log level"))
        .parse_lossy(std::env::var("RUST_LOG").unwrap_or_default());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
