//! # Tasker
//!
//! Startup entry point: assembles and validates the configuration, then
//! installs logging according to the observability section.

use anyhow::Result;
use tracing::{error, info};

use tasker::config::AppConfig;

fn main() -> Result<()> {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tasker::telemetry::init_tracing();
            for failure in err.failures() {
                error!(path = %failure.path(), "{failure}");
            }
            error!("Configuration assembly failed");
            return Err(err.into());
        }
    };

    tasker::telemetry::init_tracing_for(&config.observability);

    info!(
        port = %config.server.port,
        environment = %config.primary.env,
        database = %config.database.host,
        redis = %config.redis.address,
        bucket = %config.aws.upload_bucket,
        custom_endpoint = config.aws.custom_endpoint().is_some(),
        "Configuration loaded"
    );

    Ok(())
}
