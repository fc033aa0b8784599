//! External MLBB account validator client.
//!
//! The upstream endpoint is a storefront ID-validation form that answers with
//! the account's public attributes when the game and server IDs resolve to a
//! real account. The response carries the attributes as a line-oriented
//! `key: value` blob inside a JSON `message` field.

use std::collections::HashMap;

use serde::Deserialize;
use serenity::async_trait;
use thiserror::Error;

use crate::util::parse::parse_key_value_payload;

/// Form fields the upstream validation endpoint expects. The opaque names
/// come from the storefront's form builder and change only when the upstream
/// form is rebuilt.
const FIELD_GAME_ID: &str = "text-5f6f144f8ffee";
const FIELD_SERVER_ID: &str = "text-1601115253775";

#[derive(Error, Debug)]
pub enum ValidatorError {
    /// The HTTP call to the validator failed or returned a non-JSON body.
    #[error(transparent)]
    Upstream(#[from] reqwest::Error),

    /// The validator answered but did not recognize the account.
    #[error("Validator did not recognize game ID {game_id} on server {server_id}")]
    InvalidAccount { game_id: String, server_id: String },

    /// The validator answered without any parseable account attributes.
    #[error("Validator returned a payload with no account attributes")]
    EmptyPayload,
}

/// External account lookup seam.
///
/// The verification pipeline only depends on this trait; tests substitute a
/// scripted implementation so no network traffic happens under test.
#[async_trait]
pub trait AccountValidator: Send + Sync {
    /// Resolves a game ID and server ID to the account's attribute map.
    async fn lookup(
        &self,
        game_id: &str,
        server_id: &str,
    ) -> Result<HashMap<String, String>, ValidatorError>;
}

#[derive(Debug, Deserialize)]
struct ValidatorResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Validator backed by the Moogold storefront ID-validation endpoint.
pub struct MoogoldValidator {
    http_client: reqwest::Client,
    base_url: String,
}

impl MoogoldValidator {
    pub fn new(http_client: reqwest::Client, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/wp-content/plugins/id-validation-new/id-validation-ajax.php",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl AccountValidator for MoogoldValidator {
    async fn lookup(
        &self,
        game_id: &str,
        server_id: &str,
    ) -> Result<HashMap<String, String>, ValidatorError> {
        let form = [
            ("attribute_amount", "Weekly Pass"),
            (FIELD_GAME_ID, game_id),
            (FIELD_SERVER_ID, server_id),
            ("quantity", "1"),
            ("add-to-cart", "15145"),
            ("product_id", "15145"),
            ("variation_id", "4690783"),
        ];

        let response: ValidatorResponse = self
            .http_client
            .post(self.endpoint())
            .header(
                "Referer",
                format!("{}/product/mobile-legends/", self.base_url.trim_end_matches('/')),
            )
            .header("Origin", self.base_url.trim_end_matches('/'))
            .form(&form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let Some(message) = response.message else {
            return Err(ValidatorError::InvalidAccount {
                game_id: game_id.to_string(),
                server_id: server_id.to_string(),
            });
        };

        let attributes = parse_key_value_payload(&message);
        if attributes.is_empty() {
            return Err(ValidatorError::EmptyPayload);
        }

        Ok(attributes)
    }
}
