//! Diagnostic logging setup.
//!
//! Logs go to stderr so command output on stdout stays clean for scripts.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a full filter directive.
pub const LOG_ENV: &str = "WALLET_LOG";

/// Pick the filter directive: `WALLET_LOG`, then `-v` count, then config.
pub fn filter_directive(verbose: u8, config_level: Option<&str>) -> String {
    if let Ok(value) = std::env::var(LOG_ENV) {
        if !value.trim().is_empty() {
            return value;
        }
    }
    let level = match verbose {
        0 => config_level.unwrap_or("warn"),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("wallet={level},wallet_core={level}", level = level)
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: u8, config_level: Option<&str>) {
    let filter = EnvFilter::try_new(filter_directive(verbose, config_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
