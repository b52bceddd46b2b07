//! Validation Utilities

use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use super::error::FieldError;

/// Error code used by presence checks on schema fields.
pub const REQUIRED: &str = "required";

/// Flatten `validator` errors into field failures with dotted paths.
///
/// Nested section errors are prefixed with the section name, so a missing
/// `name` inside `database` is reported as `database.name`.
pub fn field_errors(prefix: &str, errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    collect(prefix, errors, &mut out);
    out
}

fn collect(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let path = join_path(prefix, field);
        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|e| to_field_error(&path, e)));
            }
            ValidationErrorsKind::Struct(inner) => collect(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}

fn to_field_error(path: &str, error: &ValidationError) -> FieldError {
    if error.code == REQUIRED {
        return FieldError::missing(path);
    }
    let message = error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("failed `{}` check", error.code));
    FieldError::constraint(path, message)
}

fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}
