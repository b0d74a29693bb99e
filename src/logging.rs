//! Diagnostic logging to stderr.
//!
//! Command output goes to stdout, so logs never mix with it.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "LEARNKIT_LOG";

/// Filter used when neither environment variable is set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "learnkit=debug"
    } else {
        "learnkit=warn"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. Returns false if one was already set.
///
/// `verbose` only picks the fallback filter: when `LEARNKIT_LOG` or
/// `RUST_LOG` is set, that filter is used as is.
pub fn init(verbose: bool) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .is_ok()
}
