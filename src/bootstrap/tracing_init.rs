//! Tracing initialization utilities.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when the host passes nothing more specific.
pub const DEFAULT_FILTER: &str = "storefront_config=info,warn";

/// Initialize tracing with the given default filter.
///
/// The filter can be overridden by the `RUST_LOG` environment variable.
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one stays in place.
///
/// # Example
///
/// ```rust
/// use storefront_config::init_tracing;
///
/// // Debug output for config assembly, warnings for everything else
/// init_tracing("storefront_config=debug,warn");
/// ```
///
/// # Filter Syntax
///
/// The filter follows the `tracing_subscriber::EnvFilter` syntax:
/// - `info` - Enable info level for all targets
/// - `storefront_config=debug` - Enable debug level for this crate
/// - `storefront_config=debug,info` - Debug for this crate, info for everything else
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let _ = init_tracing(DEFAULT_FILTER);
        assert!(!init_tracing("debug"));
    }
}
