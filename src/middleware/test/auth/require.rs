use super::*;

/// Tests the guard rejecting a request with no logged-in user.
///
/// Expected: Err(NotLoggedIn)
#[tokio::test]
async fn missing_session_user_is_rejected() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_, session) = test.db_and_session().await.unwrap();

    let config = test_config();
    let result = AuthGuard::new(&config, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotLoggedIn))
    ));

    Ok(())
}

/// Tests that completing the login alone does not grant moderator access.
///
/// A logged-in user outside the allow list must be turned away from
/// endpoints requiring the moderator permission.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn logged_in_user_outside_allow_list_is_denied() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_, session) = test.db_and_session().await.unwrap();

    session
        .insert(SESSION_AUTH_USER, discord_user(1234))
        .await?;

    let config = test_config();
    let result = AuthGuard::new(&config, session)
        .require(&[Permission::Moderator])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an allow-listed moderator passing the permission check.
///
/// Expected: Ok(user)
#[tokio::test]
async fn allow_listed_moderator_passes() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_, session) = test.db_and_session().await.unwrap();

    session
        .insert(SESSION_AUTH_USER, discord_user(MODERATOR_USER))
        .await?;

    let config = test_config();
    let user = AuthGuard::new(&config, session)
        .require(&[Permission::Moderator])
        .await?;

    assert_eq!(user.id, MODERATOR_USER.to_string());

    Ok(())
}

/// Tests an empty permission list only requiring a logged-in session.
///
/// Expected: Ok(user) for any logged-in user
#[tokio::test]
async fn empty_permission_list_only_requires_login() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_, session) = test.db_and_session().await.unwrap();

    session
        .insert(SESSION_AUTH_USER, discord_user(1234))
        .await?;

    let config = test_config();
    let user = AuthGuard::new(&config, session).require(&[]).await?;

    assert_eq!(user.id, "1234");

    Ok(())
}
