//! Tracing initialisation.
//!
//! Logs go to stderr so the delegate's stdout is passed through untouched.
//! `RUST_LOG` takes precedence over `--debug`.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Default level when `RUST_LOG` is not set
pub fn default_level(debug: bool) -> Level {
    if debug { Level::DEBUG } else { Level::WARN }
}

/// Initialise the global subscriber; only the first call takes effect
pub fn init_logging(debug: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(debug).as_str()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .ok();
}
