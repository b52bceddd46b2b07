//! End-to-end loading tests

use pretty_assertions::assert_eq;
use tasker::config::ConfigLoader;

use crate::common::{env_with, loader, required_env, PREFIX};

#[test]
fn test_full_environment_loads() {
    let config = loader().load_from(required_env()).unwrap();

    assert_eq!(config.primary.env, "development");
    assert_eq!(config.server.port, "8080");
    assert_eq!(config.server.read_timeout, 30);
    assert_eq!(
        config.server.cors_allowed_origins,
        vec!["http://localhost:3000", "http://localhost:5173"]
    );
    assert_eq!(config.database.port, 5432);
    assert_eq!(config.database.max_open_conns, 25);
    assert_eq!(config.auth.secret_key, "super-secret");
    assert_eq!(config.integration.resend_api_key, "re_123");
    assert_eq!(config.aws.upload_bucket, "uploads");
    assert_eq!(config.aws.custom_endpoint(), None);
}

#[test]
fn test_custom_prefix() {
    let env: Vec<(String, String)> = required_env()
        .into_iter()
        .map(|(k, v)| (k.replacen(PREFIX, "APP_", 1), v))
        .chain([
            ("APP_SERVER_PORT".to_string(), "8080".to_string()),
            ("APP_DATABASE_HOST".to_string(), "db".to_string()),
        ])
        .collect();

    let config = ConfigLoader::new("APP_").load_from(env).unwrap();
    assert_eq!(config.server.port, "8080");
    assert_eq!(config.database.host, "db");
}

#[test]
fn test_redis_address_is_normalized() {
    let config = loader().load_from(required_env()).unwrap();
    assert_eq!(config.redis.address, "cache:6379");

    let config = loader()
        .load_from(env_with(&[("TASKER_REDIS_ADDRESS", " rediss://cache:6380 ")]))
        .unwrap();
    assert_eq!(config.redis.address, "cache:6380");
}

#[test]
fn test_dotted_key_wins_over_flat_key() {
    let config = loader()
        .load_from(env_with(&[("TASKER_SERVER.READ_TIMEOUT", "5")]))
        .unwrap();
    assert_eq!(config.server.read_timeout, 5);
}

#[test]
fn test_custom_delimiter() {
    let env: Vec<(String, String)> = required_env()
        .into_iter()
        .chain([("TASKER_SERVER__IDLE_TIMEOUT".to_string(), "90".to_string())])
        .filter(|(k, _)| k != "TASKER_SERVER_IDLE_TIMEOUT")
        .collect();

    let config = loader().with_delimiter("__").load_from(env).unwrap();
    assert_eq!(config.server.idle_timeout, 90);
}

#[test]
fn test_unprefixed_keys_do_not_leak() {
    let config = loader()
        .load_from(env_with(&[
            ("SERVER_PORT", "1"),
            ("tasker_server_port", "2"),
            ("Tasker_SERVER_PORT", "3"),
        ]))
        .unwrap();
    assert_eq!(config.server.port, "8080");
}

#[test]
fn test_optional_endpoint() {
    let config = loader()
        .load_from(env_with(&[("TASKER_AWS_ENDPOINT_URL", "http://minio:9000")]))
        .unwrap();
    assert_eq!(config.aws.custom_endpoint(), Some("http://minio:9000"));
}

#[test]
fn test_optional_password_may_be_absent() {
    let env = crate::common::env_without("TASKER_DATABASE_PASSWORD");
    let config = loader().load_from(env).unwrap();
    assert_eq!(
        config.database.connection_url(),
        "postgres://tasker@db:5432/tasker?sslmode=disable"
    );
}
