use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use serenity::async_trait;

use crate::{
    config::Config,
    model::rank::Rank,
    service::validator::{AccountValidator, ValidatorError},
};

mod fraud;
mod rank;
mod verification;

/// Validator double that answers every lookup with a fixed attribute map and
/// counts how often it was called.
pub(crate) struct ScriptedValidator {
    attributes: HashMap<String, String>,
    calls: AtomicUsize,
}

impl ScriptedValidator {
    pub(crate) fn returning(pairs: &[(&str, &str)]) -> Self {
        Self {
            attributes: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountValidator for ScriptedValidator {
    async fn lookup(
        &self,
        _game_id: &str,
        _server_id: &str,
    ) -> Result<HashMap<String, String>, ValidatorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.attributes.clone())
    }
}

/// Validator double that rejects every lookup.
pub(crate) struct UnavailableValidator;

#[async_trait]
impl AccountValidator for UnavailableValidator {
    async fn lookup(
        &self,
        game_id: &str,
        server_id: &str,
    ) -> Result<HashMap<String, String>, ValidatorError> {
        Err(ValidatorError::InvalidAccount {
            game_id: game_id.to_string(),
            server_id: server_id.to_string(),
        })
    }
}

pub(crate) const VERIFIED_ROLE: u64 = 900;
pub(crate) const WARRIOR_ROLE: u64 = 901;
pub(crate) const MASTER_ROLE: u64 = 903;
pub(crate) const EPIC_ROLE: u64 = 905;
pub(crate) const MODERATOR_USER: u64 = 5005;

pub(crate) fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        discord_bot_token: "token".to_string(),
        discord_client_id: "client-id".to_string(),
        discord_client_secret: "client-secret".to_string(),
        discord_redirect_url: "http://localhost/callback".to_string(),
        discord_auth_url: "https://discord.com/oauth2/authorize".to_string(),
        discord_token_url: "https://discord.com/api/oauth2/token".to_string(),
        guild_id: 42,
        verified_role_id: VERIFIED_ROLE,
        verify_channel_id: 700,
        admin_channel_id: 800,
        rank_roles: [
            (Rank::Warrior, WARRIOR_ROLE),
            (Rank::Master, MASTER_ROLE),
            (Rank::Epic, EPIC_ROLE),
        ]
        .into_iter()
        .collect(),
        moderator_user_ids: [MODERATOR_USER].into_iter().collect(),
        validator_url: "http://localhost".to_string(),
    }
}
