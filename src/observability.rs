//! Tracing setup for host applications.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// `directive` is a fallback filter (e.g. `"info,repcycle=debug"`) used
/// when `RUST_LOG` is unset. Call once at startup; a second call is a
/// no-op because the global subscriber is already set.
pub fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive));

    let _ = fmt().with_env_filter(filter).try_init();
}
