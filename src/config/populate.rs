//! Schema population from collected key paths.
//!
//! Each schema field is looked up by its `section.field` path, coerced to
//! its declared kind and handed to a `config::Config` builder, which then
//! deserializes the typed [`ConfigSchema`].

use config::Config;

use super::collector::KeyPaths;
use super::settings::ConfigSchema;
use crate::shared::error::{ConfigError, FieldError};

/// Separator for list-valued fields.
pub const LIST_SEPARATOR: char = ',';

/// Declared type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Unsigned 32-bit integer
    Integer,
    /// TCP port (unsigned 16-bit integer)
    Port,
    List,
}

impl FieldKind {
    fn expected(self) -> &'static str {
        match self {
            Self::Integer => "an unsigned 32-bit integer",
            Self::Port => "a port number (0-65535)",
            Self::Text => "a string",
            Self::List => "a comma-separated list",
        }
    }
}

/// One field of the fixed schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaField {
    pub section: &'static str,
    pub name: &'static str,
    pub kind: FieldKind,
}

impl SchemaField {
    const fn new(section: &'static str, name: &'static str, kind: FieldKind) -> Self {
        Self {
            section,
            name,
            kind,
        }
    }

    pub fn path(&self) -> String {
        format!("{}.{}", self.section, self.name)
    }
}

use FieldKind::{Integer, List, Port, Text};

/// Every field the schema knows about. Keys outside this table are ignored.
pub const SCHEMA_FIELDS: &[SchemaField] = &[
    SchemaField::new("primary", "env", Text),
    SchemaField::new("server", "port", Text),
    SchemaField::new("server", "read_timeout", Integer),
    SchemaField::new("server", "write_timeout", Integer),
    SchemaField::new("server", "idle_timeout", Integer),
    SchemaField::new("server", "cors_allowed_origins", List),
    SchemaField::new("database", "host", Text),
    SchemaField::new("database", "port", Port),
    SchemaField::new("database", "user", Text),
    SchemaField::new("database", "password", Text),
    SchemaField::new("database", "name", Text),
    SchemaField::new("database", "ssl_mode", Text),
    SchemaField::new("database", "max_open_conns", Integer),
    SchemaField::new("database", "max_idle_conns", Integer),
    SchemaField::new("database", "conn_max_lifetime", Integer),
    SchemaField::new("database", "conn_max_idle_time", Integer),
    SchemaField::new("auth", "secret_key", Text),
    SchemaField::new("redis", "address", Text),
    SchemaField::new("redis", "password", Text),
    SchemaField::new("integration", "resend_api_key", Text),
    SchemaField::new("aws", "region", Text),
    SchemaField::new("aws", "access_key_id", Text),
    SchemaField::new("aws", "secret_access_key", Text),
    SchemaField::new("aws", "upload_bucket", Text),
    SchemaField::new("aws", "endpoint_url", Text),
    SchemaField::new("observability", "service_name", Text),
    SchemaField::new("observability", "environment", Text),
    SchemaField::new("observability", "log_level", Text),
    SchemaField::new("observability", "log_format", Text),
    SchemaField::new("observability", "slow_query_threshold_ms", Integer),
    SchemaField::new("observability", "exporter_endpoint", Text),
    SchemaField::new("observability", "exporter_license_key", Text),
    SchemaField::new("observability", "sample_rate_percent", Integer),
    SchemaField::new("observability", "health_check_interval_secs", Integer),
    SchemaField::new("observability", "health_check_timeout_secs", Integer),
    SchemaField::new("observability", "health_checks", List),
    SchemaField::new("cron", "archive_days_threshold", Integer),
    SchemaField::new("cron", "batch_size", Integer),
    SchemaField::new("cron", "reminder_hours", Integer),
    SchemaField::new("cron", "max_todos_per_user_notification", Integer),
];

/// Populate the schema from collected key paths.
///
/// Fields without input keep their zero value. Every value that cannot be
/// coerced to its field's kind is reported in a single error.
pub fn populate(keys: &KeyPaths) -> Result<ConfigSchema, ConfigError> {
    let mut builder = Config::builder();
    let mut failures = Vec::new();

    for field in SCHEMA_FIELDS {
        let Some(raw) = keys.lookup(field.section, field.name) else {
            continue;
        };
        let path = field.path();
        builder = match field.kind {
            Text => builder.set_override(&path, raw.to_string())?,
            List => builder.set_override(&path, split_list(raw))?,
            // Blank integers decode to zero, leaving presence checks to report them.
            Integer | Port if raw.trim().is_empty() => builder.set_override(&path, 0_i64)?,
            Integer => match raw.trim().parse::<u32>() {
                Ok(value) => builder.set_override(&path, i64::from(value))?,
                Err(_) => {
                    failures.push(FieldError::type_coercion(&path, raw, field.kind.expected()));
                    builder
                }
            },
            Port => match raw.trim().parse::<u16>() {
                Ok(value) => builder.set_override(&path, i64::from(value))?,
                Err(_) => {
                    failures.push(FieldError::type_coercion(&path, raw, field.kind.expected()));
                    builder
                }
            },
        };
    }

    if !failures.is_empty() {
        return Err(ConfigError::invalid(failures));
    }

    builder
        .build()?
        .try_deserialize()
        .map_err(coercion_error)
}

/// Split a list value, keeping order and dropping empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn coercion_error(error: config::ConfigError) -> ConfigError {
    match error {
        config::ConfigError::Type {
            unexpected,
            expected,
            key: Some(key),
            ..
        } => ConfigError::invalid(vec![FieldError::type_coercion(
            key,
            unexpected.to_string(),
            expected,
        )]),
        other => ConfigError::Assembly(other),
    }
}
