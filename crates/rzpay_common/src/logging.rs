//! Logging utilities for rzpay.
//!
//! Every binary calls [`init`] once at startup. Library crates only emit
//! events through the `tracing` macros.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO.
///
/// # Examples
///
/// ```
/// use rzpay_common::logging;
///
/// logging::init();
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level for rzpay crates.
///
/// `RUST_LOG` is honoured for everything else. Request logs from
/// `tower_http` follow `level` unless `RUST_LOG` names that target itself.
/// Calling this more than once is harmless.
///
/// # Arguments
///
/// * `level` - The minimum log level for `rzpay*` targets.
pub fn init_with_level(level: Level) {
    let filter = default_filter(level, std::env::var("RUST_LOG").ok().as_deref());

    // try_init: a global subscriber may already be installed (tests, embedding)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Builds the filter: `rust_log` directives plus `rzpay` (and, unless
/// `rust_log` mentions it, `tower_http`) at `level`.
fn default_filter(level: Level, rust_log: Option<&str>) -> EnvFilter {
    let rust_log = rust_log.unwrap_or_default();
    let mut filter = EnvFilter::builder().parse_lossy(rust_log);

    let mut targets = vec!["rzpay"];
    if !rust_log.contains("tower_http") {
        targets.push("tower_http");
    }
    for target in targets {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_logs_enabled_by_default() {
        let filter = default_filter(Level::INFO, None).to_string();

        assert!(filter.contains("rzpay=info"), "filter was: {filter}");
        assert!(filter.contains("tower_http=info"), "filter was: {filter}");
    }

    #[test]
    fn test_rust_log_keeps_its_tower_http_level() {
        let filter = default_filter(Level::INFO, Some("tower_http=debug")).to_string();

        assert!(filter.contains("tower_http=debug"), "filter was: {filter}");
        assert!(!filter.contains("tower_http=info"), "filter was: {filter}");
        assert!(filter.contains("rzpay=info"), "filter was: {filter}");
    }
}
