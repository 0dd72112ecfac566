//! Diagnostic channel set-up.
//!
//! Domain errors and convergence failures of the numeric crates are reported as
//! `tracing` events. Nothing is printed until a subscriber is installed here.

use std::env::{self, VarError};

use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::layer::SubscriberExt;

pub const ENV: &str = "DD_LOG";

struct LoggerConfig {
    filter: Result<String, VarError>,
}

impl LoggerConfig {
    fn from_env() -> Self {
        let filter = env::var(ENV);
        Self { filter }
    }
}

/// Installs a hierarchical stderr subscriber filtered by `DD_LOG`.
///
/// Does nothing when the variable is unset. An empty value enables `error`
/// level. Calling it again after a subscriber is installed is harmless.
pub fn init_tracing() {
    let cfg = LoggerConfig::from_env();
    let filter = match cfg.filter {
        Ok(filter) if filter.trim().is_empty() => {
            EnvFilter::default().add_directive(LevelFilter::ERROR.into())
        }
        Ok(filter) => EnvFilter::new(filter),
        Err(_) => return,
    };
    let layer = tracing_tree::HierarchicalLayer::default().with_writer(std::io::stderr);
    let subscribe = tracing_subscriber::Registry::default()
        .with(filter)
        .with(layer);
    let _ = tracing::subscriber::set_global_default(subscribe);
}
