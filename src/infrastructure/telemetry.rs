//! Tracing subscriber setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "wrldbldr_gm_tools=debug";

/// Install a fmt subscriber filtered by `RUST_LOG`.
///
/// Returns `false` without touching anything if the host already installed
/// a global subscriber.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_a_no_op() {
        init_tracing();
        assert!(!init_tracing());
    }
}
