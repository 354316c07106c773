//! gesture-processor binary

use anyhow::Context;

use gesture_processor::api;
use gesture_processor::config::{AppConfig, RuntimeMode};
use gesture_processor::handler;
use gesture_processor::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config.logging)?;

    match config.resolved_mode() {
        RuntimeMode::Lambda => {
            tracing::info!("Starting Lambda runtime");
            handler::run().await?;
        }
        _ => {
            api::serve(&config.server).await.with_context(|| {
                format!(
                    "failed to serve on {}:{}",
                    config.server.host, config.server.port
                )
            })?;
        }
    }

    Ok(())
}
