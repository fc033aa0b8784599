use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Request to a protected endpoint without a logged-in session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User is not logged in")]
    NotLoggedIn,

    /// Logged-in user lacks a permission the endpoint requires.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - Discord ID of the user that was denied
    /// - Reason the permission check failed, for server-side logging
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(String, String),

    /// Discord rejected the OAuth2 authorization code exchange.
    ///
    /// Results in a 400 Bad Request response.
    #[error("OAuth token exchange failed: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For CSRF failures
/// - 401 Unauthorized - For missing sessions
/// - 403 Forbidden - For failed permission checks
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::NotLoggedIn => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in to access this resource.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::warn!("Access denied for user {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to access this resource.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::TokenExchange(err) => {
                tracing::debug!("OAuth token exchange failed: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "There was an issue logging you in, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
