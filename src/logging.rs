//! Tracing setup
//!
//! Log output goes to stderr so command output on stdout stays clean.
//! When `RUST_LOG` is set it is used as-is; otherwise the filter is
//! `expense_report=info`.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "expense_report=info";

/// Filter from an explicit `RUST_LOG` value, or the crate default
fn build_filter(rust_log: Option<&str>) -> EnvFilter {
    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::new(DEFAULT_DIRECTIVE),
    }
}

/// Install the global tracing subscriber; later calls are no-ops
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

        tracing_subscriber::fmt()
            .with_env_filter(build_filter(rust_log.as_deref()))
            .with_writer(std::io::stderr)
            .init();
    });
}
