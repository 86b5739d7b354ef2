//! Tracing subscriber setup.

use flora_config::schema::LogLevel;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "flora=info";

/// Pick the filter directive: `RUST_LOG`, then `--log-level`, then config.
///
/// A bare level on the command line is scoped to the flora crates so
/// dependency noise (wgpu, naga) stays quiet.
pub fn resolve_directive(env: Option<&str>, cli: Option<&str>, config: LogLevel) -> String {
    if let Some(env) = env.map(str::trim).filter(|s| !s.is_empty()) {
        return env.to_string();
    }
    if let Some(cli) = cli.map(str::trim).filter(|s| !s.is_empty()) {
        if cli.parse::<tracing::Level>().is_ok() {
            return format!("flora={}", cli.to_ascii_lowercase());
        }
        return cli.to_string();
    }
    config.directive().to_string()
}

/// Install the global `fmt` subscriber.
pub fn init(cli: Option<&str>, config: LogLevel) {
    let env = std::env::var("RUST_LOG").ok();
    let directive = resolve_directive(env.as_deref(), cli, config);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("invalid log filter {directive:?} ({e}), using {DEFAULT_DIRECTIVE}");
        EnvFilter::new(DEFAULT_DIRECTIVE)
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
