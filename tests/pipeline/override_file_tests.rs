//! Override file tests

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use crate::common::{env_with, loader, required_env, write_override};

#[test]
fn test_later_file_wins() {
    let dir = TempDir::new().unwrap();
    let first = write_override(&dir, "a.env", "TASKER_SERVER_PORT=7000\n");
    let second = write_override(&dir, "b.env", "TASKER_SERVER_PORT=7001\n");

    let config = loader()
        .with_override_files([first, second])
        .load_from(required_env())
        .unwrap();
    assert_eq!(config.server.port, "7001");
}

#[test]
fn test_override_file_beats_environment() {
    let dir = TempDir::new().unwrap();
    let file = write_override(
        &dir,
        ".env",
        "# local overrides\n\nTASKER_PRIMARY_ENV=local\n",
    );

    let config = loader()
        .with_override_files([file])
        .load_from(env_with(&[("TASKER_PRIMARY_ENV", "production")]))
        .unwrap();
    assert_eq!(config.primary.env, "local");
    assert_eq!(config.observability.environment, "local");
}

#[test]
fn test_quoted_values_are_unwrapped() {
    let dir = TempDir::new().unwrap();
    let file = write_override(
        &dir,
        ".env",
        "TASKER_AUTH_SECRET_KEY = \"quoted value\"  \nTASKER_AWS_REGION='eu-west-1'\n",
    );

    let config = loader()
        .with_override_files([file])
        .load_from(required_env())
        .unwrap();
    assert_eq!(config.auth.secret_key, "quoted value");
    assert_eq!(config.aws.region, "eu-west-1");
}

#[test]
fn test_override_file_can_supply_required_fields() {
    let dir = TempDir::new().unwrap();
    let file = write_override(
        &dir,
        ".env",
        "TASKER_DATABASE_NAME=tasks\nTASKER_INTEGRATION_RESEND_API_KEY=re_x=y\n",
    );
    let env = required_env()
        .into_iter()
        .filter(|(k, _)| k != "TASKER_DATABASE_NAME" && k != "TASKER_INTEGRATION_RESEND_API_KEY")
        .collect::<Vec<_>>();

    let config = loader().with_override_files([file]).load_from(env).unwrap();
    assert_eq!(config.database.name, "tasks");
    assert_eq!(config.integration.resend_api_key, "re_x=y");
}

#[test]
fn test_missing_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    let present = write_override(&dir, "present.env", "TASKER_SERVER_PORT=9090\n");

    let config = loader()
        .with_override_files([dir.path().join("absent.env"), present])
        .load_from(required_env())
        .unwrap();
    assert_eq!(config.server.port, "9090");
}

#[test]
fn test_non_utf8_comment_does_not_drop_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, b"# caf\xe9 settings\nTASKER_SERVER_PORT=9999\n").unwrap();

    let loader = loader().with_override_files([path.clone()]);
    assert_eq!(loader.override_files(), &[path]);

    let config = loader.load_from(required_env()).unwrap();
    assert_eq!(config.server.port, "9999");
}
