//! Application state shared across all request handlers.
//!
//! Holds the shared resources initialized once at startup and cloned into
//! each Axum handler: the database pool, HTTP client, OAuth2 client, Discord
//! HTTP client, and the parsed configuration.

use std::sync::Arc;

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::http::Http;

use crate::config::Config;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the database connection shares a pool,
/// `reqwest::Client` is internally reference counted, and the rest are `Arc`s
/// or clone-friendly by design.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for the external validator and Discord API requests.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the moderator API's Discord login flow.
    pub oauth_client: OAuth2Client,

    /// Discord HTTP client for bot API operations.
    pub discord_http: Arc<Http>,

    /// Parsed environment configuration.
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord_http: Arc<Http>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord_http,
            config,
        }
    }
}
