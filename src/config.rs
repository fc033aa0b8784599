use std::collections::{HashMap, HashSet};

use crate::{
    error::{config::ConfigError, AppError},
    model::rank::Rank,
};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    pub guild_id: u64,
    pub verified_role_id: u64,
    /// Channel the `verify` command is restricted to.
    pub verify_channel_id: u64,
    pub admin_channel_id: u64,
    /// Rank name to Discord role ID, parsed from `MLBB_RANK_ROLES`. Ranks
    /// without an entry simply get no rank role.
    pub rank_roles: HashMap<Rank, u64>,
    /// Discord user IDs allowed to use the moderator HTTP API, parsed from
    /// `MODERATOR_USER_IDS`. An empty list leaves the review endpoints
    /// closed to everyone.
    pub moderator_user_ids: HashSet<u64>,

    /// Base URL of the external account validator.
    pub validator_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            discord_client_id: require("DISCORD_CLIENT_ID")?,
            discord_client_secret: require("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: require("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            guild_id: require_u64("DISCORD_GUILD_ID")?,
            verified_role_id: require_u64("VERIFIED_ROLE_ID")?,
            verify_channel_id: require_u64("VERIFY_CHANNEL_ID")?,
            admin_channel_id: require_u64("ADMIN_CHANNEL_ID")?,
            rank_roles: parse_rank_roles(
                &std::env::var("MLBB_RANK_ROLES").unwrap_or_default(),
            )?,
            moderator_user_ids: parse_id_list(
                "MODERATOR_USER_IDS",
                &std::env::var("MODERATOR_USER_IDS").unwrap_or_default(),
            )?,
            validator_url: require("VALIDATOR_URL")?,
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn require_u64(name: &str) -> Result<u64, ConfigError> {
    require(name)?.parse().map_err(|_| {
        ConfigError::InvalidEnvVar(name.to_string(), "expected a numeric ID".to_string())
    })
}

/// Parses the rank role mapping from its `Rank Name=role_id,...` form, e.g.
/// `Warrior=111,Epic=222,Mythical Glory=333`. An empty string yields an empty
/// mapping.
fn parse_rank_roles(raw: &str) -> Result<HashMap<Rank, u64>, ConfigError> {
    let mut roles = HashMap::new();

    for pair in raw.split(',').filter(|pair| !pair.trim().is_empty()) {
        let (name, role_id) = pair.split_once('=').ok_or_else(|| {
            ConfigError::InvalidEnvVar(
                "MLBB_RANK_ROLES".to_string(),
                format!("expected 'Rank Name=role_id', got '{}'", pair.trim()),
            )
        })?;

        let rank = Rank::from_name(name.trim()).map_err(|_| {
            ConfigError::InvalidEnvVar(
                "MLBB_RANK_ROLES".to_string(),
                format!("unknown rank name '{}'", name.trim()),
            )
        })?;
        let role_id = role_id.trim().parse().map_err(|_| {
            ConfigError::InvalidEnvVar(
                "MLBB_RANK_ROLES".to_string(),
                format!("invalid role ID for rank '{}'", name.trim()),
            )
        })?;

        roles.insert(rank, role_id);
    }

    Ok(roles)
}

/// Parses a comma-separated list of Discord IDs, e.g. `1001,2002`. An empty
/// string yields an empty set.
fn parse_id_list(name: &str, raw: &str) -> Result<HashSet<u64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse().map_err(|_| {
                ConfigError::InvalidEnvVar(
                    name.to_string(),
                    format!("expected a numeric ID, got '{}'", part),
                )
            })
        })
        .collect()
}
