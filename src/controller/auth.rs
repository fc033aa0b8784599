use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    model::api::DiscordUserDto,
    service::oauth::DiscordAuthService,
    state::AppState,
};

/// Session key for the OAuth CSRF token.
static SESSION_OAUTH_CSRF_TOKEN: &str = "oauth:csrf_token";
/// Session key for the logged-in Discord user.
pub(crate) static SESSION_AUTH_USER: &str = "auth:user";

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Discord SSO for token exchange.
    pub code: String,
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(&state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    // Store CSRF token in session for verification during callback
    session
        .insert(SESSION_OAUTH_CSRF_TOKEN, csrf_token.secret())
        .await?;

    Ok(Redirect::temporary(url.as_ref()))
}

pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(&state.http_client, &state.oauth_client);

    validate_csrf(&session, &params.0.state).await?;

    let user = auth_service.callback(params.0.code).await?;
    session.insert(SESSION_AUTH_USER, user.clone()).await?;

    Ok((StatusCode::OK, Json(user)))
}

pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.clear().await;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_user(session: Session) -> Result<impl IntoResponse, AppError> {
    let user = session
        .get::<DiscordUserDto>(SESSION_AUTH_USER)
        .await?
        .ok_or(AuthError::NotLoggedIn)?;

    Ok(Json(user))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state: Option<String> = session.remove(SESSION_OAUTH_CSRF_TOKEN).await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
