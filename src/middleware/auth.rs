use tower_sessions::Session;

use crate::{
    config::Config,
    controller::auth::SESSION_AUTH_USER,
    error::{auth::AuthError, AppError},
    model::api::DiscordUserDto,
};

pub enum Permission {
    Moderator,
}

/// Session-backed permission guard for the moderator HTTP API.
///
/// Completing the OAuth login only proves the caller owns some Discord
/// account; the guard additionally checks requested permissions against the
/// configured moderator allow list before a handler touches review data.
pub struct AuthGuard<'a> {
    config: &'a Config,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(config: &'a Config, session: &'a Session) -> Self {
        Self { config, session }
    }

    /// Fetches the logged-in user and checks every requested permission.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the caller must hold, all of them
    ///
    /// # Returns
    /// - `Ok(DiscordUserDto)` - User is logged in and holds all permissions
    /// - `Err(AppError::AuthErr(NotLoggedIn))` - No user in the session
    /// - `Err(AppError::AuthErr(AccessDenied))` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<DiscordUserDto, AppError> {
        let Some(user) = self
            .session
            .get::<DiscordUserDto>(SESSION_AUTH_USER)
            .await?
        else {
            return Err(AuthError::NotLoggedIn.into());
        };

        for permission in permissions {
            match permission {
                Permission::Moderator => {
                    if !self.is_moderator(&user) {
                        return Err(AuthError::AccessDenied(
                            user.id.clone(),
                            "user is not on the moderator allow list".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    fn is_moderator(&self, user: &DiscordUserDto) -> bool {
        user.id
            .parse::<u64>()
            .is_ok_and(|id| self.config.moderator_user_ids.contains(&id))
    }
}
