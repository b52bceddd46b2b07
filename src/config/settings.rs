//! Configuration schema: one record per section.
//!
//! Every section derives `Default` so that a section with no input at all
//! populates to its zero value. Sections with rules derive `Validate` so they live
//! next to the fields they guard.

use std::time::Duration;

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Service identity forced into the observability section.
pub const SERVICE_NAME: &str = "tasker";

/// Accepted observability log levels.
pub const LOG_LEVELS: &[&str] = &["debug", "info", "warn", "error"];

/// Accepted observability log formats.
pub const LOG_FORMATS: &[&str] = &["json", "console"];

/// Populated configuration, before defaults are applied.
///
/// Optional sections are `None` when nothing at all was supplied for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct ConfigSchema {
    #[validate(nested)]
    pub primary: Primary,

    #[validate(nested)]
    pub server: ServerConfig,

    #[validate(nested)]
    pub database: DatabaseConfig,

    #[validate(nested)]
    pub auth: AuthConfig,

    #[validate(nested)]
    pub redis: RedisConfig,

    #[validate(nested)]
    pub integration: IntegrationConfig,

    #[validate(nested)]
    pub aws: AwsConfig,

    /// Checked after defaulting, not here.
    pub observability: Option<ObservabilityConfig>,

    /// Checked after defaulting, not here.
    pub cron: Option<CronConfig>,
}

/// Fully assembled application configuration.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct AppConfig {
    #[validate(nested)]
    pub primary: Primary,

    #[validate(nested)]
    pub server: ServerConfig,

    #[validate(nested)]
    pub database: DatabaseConfig,

    #[validate(nested)]
    pub auth: AuthConfig,

    /// Cache (Redis) connection
    #[validate(nested)]
    pub redis: RedisConfig,

    #[validate(nested)]
    pub integration: IntegrationConfig,

    /// Object storage (S3 compatible)
    #[validate(nested)]
    pub aws: AwsConfig,

    #[validate(nested)]
    pub observability: ObservabilityConfig,

    /// Scheduled job tuning
    pub cron: CronConfig,
}

/// Primary identity of the running deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct Primary {
    /// Active environment name (development, staging, production)
    #[validate(length(min = 1, code = "required"))]
    pub env: String,
}

impl Primary {
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to listen on, kept as text (e.g. "8080")
    #[validate(length(min = 1, code = "required"))]
    pub port: String,

    /// Read timeout in seconds
    #[validate(range(min = 1, code = "required"))]
    pub read_timeout: u32,

    /// Write timeout in seconds
    #[validate(range(min = 1, code = "required"))]
    pub write_timeout: u32,

    /// Idle timeout in seconds
    #[validate(range(min = 1, code = "required"))]
    pub idle_timeout: u32,

    /// Allowed CORS origins (comma-separated in env)
    #[validate(length(min = 1, code = "required"))]
    pub cors_allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.read_timeout))
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.write_timeout))
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.idle_timeout))
    }
}

/// PostgreSQL connection and pool settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct DatabaseConfig {
    #[validate(length(min = 1, code = "required"))]
    pub host: String,

    #[validate(range(min = 1, code = "required"))]
    pub port: u16,

    #[validate(length(min = 1, code = "required"))]
    pub user: String,

    pub password: String,

    #[validate(length(min = 1, code = "required"))]
    pub name: String,

    #[validate(length(min = 1, code = "required"))]
    pub ssl_mode: String,

    #[validate(range(min = 1, code = "required"))]
    pub max_open_conns: u32,

    #[validate(range(min = 1, code = "required"))]
    pub max_idle_conns: u32,

    /// Connection max lifetime in seconds
    #[validate(range(min = 1, code = "required"))]
    pub conn_max_lifetime: u32,

    /// Connection max idle time in seconds
    #[validate(range(min = 1, code = "required"))]
    pub conn_max_idle_time: u32,
}

impl DatabaseConfig {
    /// Build a postgres connection URL. The password is omitted when empty.
    pub fn connection_url(&self) -> String {
        let credentials = if self.password.is_empty() {
            self.user.clone()
        } else {
            format!("{}:{}", self.user, self.password)
        };
        format!(
            "postgres://{}@{}:{}/{}?sslmode={}",
            credentials, self.host, self.port, self.name, self.ssl_mode
        )
    }

    pub fn conn_max_lifetime(&self) -> Duration {
        Duration::from_secs(u64::from(self.conn_max_lifetime))
    }

    pub fn conn_max_idle_time(&self) -> Duration {
        Duration::from_secs(u64::from(self.conn_max_idle_time))
    }
}

/// Authentication secret material.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct AuthConfig {
    #[validate(length(min = 1, code = "required"))]
    pub secret_key: String,
}

/// Redis cache connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct RedisConfig {
    /// Bare `host:port` after normalization
    #[validate(length(min = 1, code = "required"))]
    pub address: String,

    pub password: String,
}

/// Third-party integrations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct IntegrationConfig {
    /// Resend (transactional email) API key
    #[validate(length(min = 1, code = "required"))]
    pub resend_api_key: String,
}

/// Object storage credentials and target bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct AwsConfig {
    #[validate(length(min = 1, code = "required"))]
    pub region: String,

    #[validate(length(min = 1, code = "required"))]
    pub access_key_id: String,

    #[validate(length(min = 1, code = "required"))]
    pub secret_access_key: String,

    #[validate(length(min = 1, code = "required"))]
    pub upload_bucket: String,

    /// Custom endpoint for S3-compatible stores; empty means AWS itself
    pub endpoint_url: String,
}

impl AwsConfig {
    pub fn custom_endpoint(&self) -> Option<&str> {
        let endpoint = self.endpoint_url.trim();
        (!endpoint.is_empty()).then_some(endpoint)
    }
}

/// Logging, tracing export and health check settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct ObservabilityConfig {
    #[validate(length(min = 1, code = "required"))]
    pub service_name: String,

    #[validate(length(min = 1, code = "required"))]
    pub environment: String,

    #[validate(
        length(min = 1, code = "required"),
        custom(function = "validate_log_level")
    )]
    pub log_level: String,

    #[validate(
        length(min = 1, code = "required"),
        custom(function = "validate_log_format")
    )]
    pub log_format: String,

    /// Queries slower than this are logged, in milliseconds
    pub slow_query_threshold_ms: u32,

    /// Trace exporter endpoint
    #[validate(length(min = 1, code = "required"))]
    pub exporter_endpoint: String,

    pub exporter_license_key: String,

    #[validate(range(max = 100, message = "must be a percentage between 0 and 100"))]
    pub sample_rate_percent: u32,

    #[validate(range(min = 1, code = "required"))]
    pub health_check_interval_secs: u32,

    #[validate(range(min = 1, code = "required"))]
    pub health_check_timeout_secs: u32,

    /// Dependencies probed by the health checker
    pub health_checks: Vec<String>,
}

impl ObservabilityConfig {
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    pub fn slow_query_threshold(&self) -> Duration {
        Duration::from_millis(u64::from(self.slow_query_threshold_ms))
    }

    /// `EnvFilter` directive derived from the configured level.
    pub fn tracing_directive(&self) -> String {
        format!("{level},{SERVICE_NAME}={level}", level = self.log_level)
    }
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    one_of(level, LOG_LEVELS, "log_level")
}

fn validate_log_format(format: &str) -> Result<(), ValidationError> {
    one_of(format, LOG_FORMATS, "log_format")
}

fn one_of(value: &str, allowed: &[&str], code: &'static str) -> Result<(), ValidationError> {
    // Emptiness is reported by the presence check.
    if value.is_empty() || allowed.contains(&value) {
        return Ok(());
    }
    Err(ValidationError::new(code).with_message(
        format!("invalid value {value:?} (must be one of: {})", allowed.join(", ")).into(),
    ))
}

/// Thresholds and batch sizes for periodic maintenance jobs.
///
/// No field is required: a supplied section is used exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CronConfig {
    pub archive_days_threshold: u32,
    pub batch_size: u32,
    pub reminder_hours: u32,
    pub max_todos_per_user_notification: u32,
}
