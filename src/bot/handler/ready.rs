//! Ready event handler for bot initialization.
//!
//! The ready event fires once the bot completes the gateway handshake. The
//! guild's slash commands are (re)registered here so a restart always leaves
//! the command set in sync with the binary.

use std::sync::Arc;

use serenity::all::{Context, GuildId, Ready};

use crate::{bot::commands, config::Config};

/// Handles the ready event when the bot connects to Discord.
///
/// Registers the guild slash commands. Registration failures are logged and
/// leave the previously registered command set in place.
pub async fn handle_ready(config: &Arc<Config>, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let guild_id = GuildId::new(config.guild_id);
    match guild_id.set_commands(&ctx.http, commands::all()).await {
        Ok(registered) => {
            tracing::info!(
                guild_id = config.guild_id,
                count = registered.len(),
                "Registered guild slash commands"
            );
        }
        Err(e) => {
            tracing::error!("Failed to register guild commands: {:?}", e);
        }
    }
}
