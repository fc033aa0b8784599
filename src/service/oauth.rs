//! OAuth2 login with Discord for the moderator API.

use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use url::Url;

use crate::{
    error::{auth::AuthError, AppError},
    model::api::DiscordUserDto,
    state::OAuth2Client,
};

pub struct DiscordAuthService<'a> {
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(http_client: &'a reqwest::Client, oauth_client: &'a OAuth2Client) -> Self {
        Self {
            http_client,
            oauth_client,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and CSRF state token to stash
    ///   in the session for callback validation
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Exchanges the callback's authorization code and fetches the user.
    ///
    /// # Returns
    /// - `Ok(DiscordUserDto)` - The logged-in Discord user
    /// - `Err(AppError::AuthErr)` - Token exchange rejected by Discord
    /// - `Err(AppError::ReqwestErr)` - Fetching the user's identity failed
    pub async fn callback(&self, authorization_code: String) -> Result<DiscordUserDto, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|err| AuthError::TokenExchange(err.to_string()))?;

        let access_token = token.access_token().secret();

        let user = self
            .http_client
            .get("https://discord.com/api/users/@me")
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<DiscordUserDto>()
            .await?;

        Ok(user)
    }
}
