//! # Configuration Module
//!
//! This module assembles the application configuration once, at startup.
//! The stages run in a fixed order:
//!
//! 1. Override files (`.env`, then `apps/backend/.env`) are read into an overlay
//! 2. The process environment plus the overlay is filtered by the `TASKER_` prefix
//! 3. Key paths populate the typed schema
//! 4. Required sections are validated
//! 5. Optional sections (observability, cron) receive their built-in defaults
//! 6. Values are normalized (Redis address scheme stripping)
//! 7. The finished configuration is validated again
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tasker::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! println!("Server will listen on port {}", config.server.port);
//! ```

mod collector;
mod defaults;
mod normalize;
mod overlay;
mod populate;
mod settings;

use std::path::PathBuf;

use validator::Validate;

pub use collector::{EnvCollector, KeyPaths};
pub use defaults::{default_cron_config, default_observability_config, inject_defaults};
pub use normalize::{normalize, normalize_cache_address, CACHE_SCHEMES};
pub use overlay::{parse_line, Overlay};
pub use populate::{populate, split_list, FieldKind, SchemaField, LIST_SEPARATOR, SCHEMA_FIELDS};
pub use settings::*;

use crate::shared::error::ConfigError;
use crate::shared::validation::field_errors;

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "TASKER_";

/// Hierarchy separator inside environment keys.
pub const ENV_DELIMITER: &str = ".";

/// Override files, lowest precedence first.
pub const OVERRIDE_FILES: &[&str] = &[".env", "apps/backend/.env"];

/// Runs the configuration pipeline.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    override_files: Vec<PathBuf>,
    collector: EnvCollector,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            override_files: OVERRIDE_FILES.iter().map(PathBuf::from).collect(),
            collector: EnvCollector::new(ENV_PREFIX, ENV_DELIMITER),
        }
    }
}

impl ConfigLoader {
    /// Loader for a custom prefix, with no override files.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            override_files: Vec::new(),
            collector: EnvCollector::new(prefix, ENV_DELIMITER),
        }
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.collector = EnvCollector::new(self.collector.prefix(), delimiter);
        self
    }

    /// Replace the override file list. Later files take precedence.
    pub fn with_override_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.override_files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn override_files(&self) -> &[PathBuf] {
        &self.override_files
    }

    /// Assemble the configuration from the real process environment.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        // Non-unicode variables cannot address any schema field.
        let environment = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
        self.load_from(environment)
    }

    /// Assemble the configuration from an explicit environment snapshot.
    pub fn load_from<I, K, V>(&self, environment: I) -> Result<AppConfig, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let overlay = Overlay::load(self.override_files.as_slice());
        let keys = self.collector.collect(environment, &overlay);

        let schema = populate(&keys)?;
        schema
            .validate()
            .map_err(|errors| ConfigError::invalid(field_errors("", &errors)))?;

        let config = normalize(inject_defaults(schema));
        config
            .validate()
            .map_err(|errors| ConfigError::invalid(field_errors("", &errors)))?;

        tracing::info!(
            environment = %config.primary.env,
            override_keys = overlay.len(),
            "Configuration assembled"
        );
        Ok(config)
    }
}

impl AppConfig {
    /// Load configuration with the default prefix and override files.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` listing every failing field path when a
    /// required value is missing, cannot be parsed, or breaks a constraint.
    pub fn load() -> Result<Self, ConfigError> {
        ConfigLoader::default().load()
    }
}
