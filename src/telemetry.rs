//! Telemetry and Observability
//!
//! Structured logging setup, before and after configuration is known.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Filter used until the observability section has been loaded.
pub const DEFAULT_FILTER: &str = "info,tasker=debug";

/// Initialize tracing subscriber with the default filter
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

/// Initialize tracing subscriber from the observability section.
///
/// `RUST_LOG` still takes precedence over the configured level.
pub fn init_tracing_for(observability: &ObservabilityConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(observability.tracing_directive()));

    let registry = tracing_subscriber::registry().with(env_filter);

    if observability.log_format == "json" {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(false),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    }

    tracing::info!(
        service = %observability.service_name,
        environment = %observability.environment,
        level = %observability.log_level,
        "Tracing initialized"
    );
}
