use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{config::Config, error::AppError, state::OAuth2Client};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application's Sqlite database.
///
/// Sessions are persisted in their own table so moderator logins survive
/// restarts. Sessions expire after a week of inactivity.
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store.migrate().await?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7))))
}

/// Shared HTTP client for the validator and Discord API requests.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Builds the OAuth2 client for the Discord login flow.
///
/// The auth and token endpoint URLs come from configuration so tests can
/// point the flow at a local double.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.discord_auth_url.clone())
        .map_err(|err| AppError::InternalError(format!("Invalid OAuth auth URL: {}", err)))?;
    let token_url = TokenUrl::new(config.discord_token_url.clone())
        .map_err(|err| AppError::InternalError(format!("Invalid OAuth token URL: {}", err)))?;
    let redirect_url = RedirectUrl::new(config.discord_redirect_url.clone())
        .map_err(|err| AppError::InternalError(format!("Invalid OAuth redirect URL: {}", err)))?;

    Ok(
        BasicClient::new(ClientId::new(config.discord_client_id.clone()))
            .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
            .set_auth_uri(auth_url)
            .set_token_uri(token_url)
            .set_redirect_uri(redirect_url),
    )
}
