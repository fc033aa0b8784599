use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, service::validator::ValidatorError};

/// Errors that abort a verification attempt before it reaches an outcome.
///
/// None of these variants produce an audit trail record: malformed claims are
/// rejected before any lookup, and lookup failures leave no durable state so
/// the user can simply retry.
#[derive(Error, Debug)]
pub enum VerificationError {
    /// Game ID does not match the expected shape (8 to 10 digits).
    ///
    /// Results in a 400 Bad Request response.
    #[error("Game ID must be 8 to 10 digits")]
    MalformedGameId,

    /// Server ID does not match the expected shape (digits only).
    ///
    /// Results in a 400 Bad Request response.
    #[error("Server ID must contain only digits")]
    MalformedServerId,

    /// The external account lookup failed or rejected the account.
    ///
    /// Results in a 502 Bad Gateway response.
    #[error(transparent)]
    Lookup(#[from] ValidatorError),

    /// Database operation failed mid-pipeline.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

/// Converts verification errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For malformed game or server IDs
/// - 502 Bad Gateway - For upstream lookup failures
/// - 500 Internal Server Error - For database failures
impl IntoResponse for VerificationError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MalformedGameId | Self::MalformedServerId => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::Lookup(err) => {
                tracing::warn!("Account lookup failed: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    "Account lookup is currently unavailable, please try again later.".to_string(),
                )
            }
            Self::Db(err) => {
                tracing::error!("Database error during verification: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
