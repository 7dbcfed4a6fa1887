mod bot;
mod config;
mod error;
mod model;
mod platform;
mod service;
mod startup;

use crate::{config::Config, error::AppError, service::PresenceService};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_logging(&config)?;

    tracing::info!(
        "Starting temporary voice channel bot (trigger channel {})",
        config.trigger_channel_id
    );

    let presence = PresenceService::from_config(&config);
    let client = bot::start::init_bot(&config, presence).await?;

    bot::start::start_bot(client).await
}
