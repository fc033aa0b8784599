use test_utils::builder::TestBuilder;

use crate::{
    controller::auth::SESSION_AUTH_USER,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::api::DiscordUserDto,
    service::test::{test_config, MODERATOR_USER},
};

mod require;

fn discord_user(id: u64) -> DiscordUserDto {
    DiscordUserDto {
        id: id.to_string(),
        username: "tester".to_string(),
        global_name: None,
    }
}
