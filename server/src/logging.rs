//! Tracing subscriber setup.

use tracing_subscriber::{
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

use crate::config::LogConfig;

/// Installs the global subscriber. `RUST_LOG` takes precedence over
/// `config.level` when set.
pub fn init(config: &LogConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level)));

    if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .finish()
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .finish()
            .try_init()
    }
}

fn default_directives(level: &str) -> String {
    format!("{level},todo_server={level},todo_core={level},tower_http={level}")
}
