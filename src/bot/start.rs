use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord bot client and exposes its HTTP handle.
///
/// The returned `Http` is shared with the scheduler and anything else that
/// needs to send Discord messages outside the gateway event loop.
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Ready-to-start client and its HTTP handle
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: &Arc<Config>,
    db: DatabaseConnection,
    http_client: reqwest::Client,
) -> Result<(Client, Arc<Http>), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in the Discord
    // Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(db, config.clone(), http_client);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the Discord bot in a blocking manner.
///
/// Call from within a tokio::spawn task; this blocks until the bot shuts
/// down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
