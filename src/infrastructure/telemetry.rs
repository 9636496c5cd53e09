use tracing_subscriber::EnvFilter;

use crate::settings::AppEnvironment;

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` filter.
///
/// Production emits JSON lines; other environments use the human readable formatter.
pub fn init_tracing(env: &AppEnvironment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match env {
        AppEnvironment::Production => builder.json().try_init(),
        _ => builder.try_init(),
    };

    if let Err(e) = result {
        tracing::debug!("Tracing subscriber already installed: {}", e);
    }
}
