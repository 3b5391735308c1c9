use crate::Environment;
use tracing::debug;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Installs color-eyre. Repeated calls are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

fn default_filter(environment: &Environment) -> EnvFilter {
    if environment.is_production() {
        EnvFilter::new("info,sea_orm=warn,sqlx=warn,h2=warn")
    } else {
        EnvFilter::new("debug,h2=info,tower=info,hyper_util=info")
    }
}

/// Initialize tracing for the given environment.
///
/// - Production (`APP_ENV=production`): flattened JSON events, no targets.
/// - Development: pretty human-readable output.
///
/// Both install a `tracing_error::ErrorLayer` so eyre reports carry span
/// traces. `RUST_LOG` overrides the default filter. Calling this twice is a
/// no-op, which keeps tests that share a process happy.
pub fn init_tracing(environment: &Environment) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(environment));

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(()) => tracing::info!(environment = environment.as_str(), "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}
