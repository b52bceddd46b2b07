//! Configuration Error Types
//!
//! Every startup failure is reported with the dotted path of the field that
//! caused it, so an operator can fix the environment in one pass.

/// A single field-level failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{path}: required field is missing")]
    MissingRequiredField { path: String },

    #[error("{path}: cannot parse {value:?} as {expected}")]
    TypeCoercion {
        path: String,
        value: String,
        expected: String,
    },

    #[error("{path}: {message}")]
    ValidationConstraint { path: String, message: String },
}

impl FieldError {
    pub fn missing(path: impl Into<String>) -> Self {
        Self::MissingRequiredField { path: path.into() }
    }

    pub fn type_coercion(
        path: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::TypeCoercion {
            path: path.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    pub fn constraint(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationConstraint {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Dotted path of the offending field, e.g. `database.name`.
    pub fn path(&self) -> &str {
        match self {
            Self::MissingRequiredField { path }
            | Self::TypeCoercion { path, .. }
            | Self::ValidationConstraint { path, .. } => path,
        }
    }
}

/// Configuration assembly error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {}", join_failures(.0))]
    Invalid(Vec<FieldError>),

    #[error("failed to assemble configuration: {0}")]
    Assembly(#[from] config::ConfigError),
}

impl ConfigError {
    /// Build an `Invalid` error with failures ordered by field path.
    pub fn invalid(mut failures: Vec<FieldError>) -> Self {
        failures.sort_by(|a, b| a.path().cmp(b.path()));
        failures.dedup();
        Self::Invalid(failures)
    }

    /// Field failures carried by this error (empty for assembly errors).
    pub fn failures(&self) -> &[FieldError] {
        match self {
            Self::Invalid(failures) => failures,
            Self::Assembly(_) => &[],
        }
    }

    /// Paths of all failing fields, in report order.
    pub fn paths(&self) -> Vec<&str> {
        self.failures().iter().map(FieldError::path).collect()
    }
}

fn join_failures(failures: &[FieldError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
