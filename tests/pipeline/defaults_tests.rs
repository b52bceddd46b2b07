//! Optional section defaulting tests

use pretty_assertions::assert_eq;
use tasker::config::{default_cron_config, default_observability_config, SERVICE_NAME};

use crate::common::{env_with, loader, required_env};

#[test]
fn test_absent_observability_uses_defaults() {
    let config = loader()
        .load_from(env_with(&[("TASKER_PRIMARY_ENV", "staging")]))
        .unwrap();

    let mut expected = default_observability_config();
    expected.environment = "staging".into();
    assert_eq!(config.observability, expected);
}

#[test]
fn test_absent_cron_uses_defaults() {
    let config = loader().load_from(required_env()).unwrap();
    assert_eq!(config.cron, default_cron_config());
}

#[test]
fn test_supplied_sections_are_used() {
    let config = loader()
        .load_from(env_with(&[
            ("TASKER_PRIMARY_ENV", "production"),
            ("TASKER_OBSERVABILITY_SERVICE_NAME", "other"),
            ("TASKER_OBSERVABILITY_ENVIRONMENT", "development"),
            ("TASKER_OBSERVABILITY_LOG_LEVEL", "warn"),
            ("TASKER_OBSERVABILITY_LOG_FORMAT", "console"),
            ("TASKER_OBSERVABILITY_EXPORTER_ENDPOINT", "http://otel:4318"),
            ("TASKER_OBSERVABILITY_HEALTH_CHECK_INTERVAL_SECS", "15"),
            ("TASKER_OBSERVABILITY_HEALTH_CHECK_TIMEOUT_SECS", "2"),
            ("TASKER_OBSERVABILITY_HEALTH_CHECKS", "database"),
            ("TASKER_CRON_ARCHIVE_DAYS_THRESHOLD", "7"),
            ("TASKER_CRON_BATCH_SIZE", "10"),
            ("TASKER_CRON_REMINDER_HOURS", "12"),
            ("TASKER_CRON_MAX_TODOS_PER_USER_NOTIFICATION", "3"),
        ]))
        .unwrap();

    let observability = &config.observability;
    assert_eq!(observability.service_name, SERVICE_NAME);
    assert_eq!(observability.environment, "production");
    assert!(observability.is_production());
    assert_eq!(observability.log_level, "warn");
    assert_eq!(observability.log_format, "console");
    assert_eq!(observability.sample_rate_percent, 0);
    assert_eq!(observability.health_checks, vec!["database"]);

    assert_eq!(config.cron.archive_days_threshold, 7);
    assert_eq!(config.cron.batch_size, 10);
    assert_eq!(config.cron.reminder_hours, 12);
    assert_eq!(config.cron.max_todos_per_user_notification, 3);
}
