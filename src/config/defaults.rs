//! Whole-section defaults for optional sections.
//!
//! An optional section is either taken exactly as supplied or replaced by
//! its built-in record. Partial input is never completed field by field.

use super::settings::{AppConfig, ConfigSchema, CronConfig, ObservabilityConfig, SERVICE_NAME};

/// Built-in observability settings.
pub fn default_observability_config() -> ObservabilityConfig {
    ObservabilityConfig {
        service_name: SERVICE_NAME.to_string(),
        environment: "development".to_string(),
        log_level: "info".to_string(),
        log_format: "json".to_string(),
        slow_query_threshold_ms: 100,
        exporter_endpoint: "http://localhost:4318".to_string(),
        exporter_license_key: String::new(),
        sample_rate_percent: 100,
        health_check_interval_secs: 30,
        health_check_timeout_secs: 5,
        health_checks: vec!["database".to_string(), "redis".to_string()],
    }
}

/// Built-in scheduled job tuning.
pub fn default_cron_config() -> CronConfig {
    CronConfig {
        archive_days_threshold: 30,
        batch_size: 100,
        reminder_hours: 24,
        max_todos_per_user_notification: 10,
    }
}

/// Resolve optional sections and force the computed identity fields.
pub fn inject_defaults(schema: ConfigSchema) -> AppConfig {
    let ConfigSchema {
        primary,
        server,
        database,
        auth,
        redis,
        integration,
        aws,
        observability,
        cron,
    } = schema;

    let mut observability = observability.unwrap_or_else(|| {
        tracing::debug!("Observability section not supplied, using defaults");
        default_observability_config()
    });
    observability.service_name = SERVICE_NAME.to_string();
    observability.environment = primary.env.clone();

    let cron = cron.unwrap_or_else(|| {
        tracing::debug!("Cron section not supplied, using defaults");
        default_cron_config()
    });

    AppConfig {
        primary,
        server,
        database,
        auth,
        redis,
        integration,
        aws,
        observability,
        cron,
    }
}
