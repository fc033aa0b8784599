use super::*;

/// Tests summing attempts across windows inside the trailing duration.
///
/// Expected: Ok with counts from both recent windows summed
#[tokio::test]
async fn sums_attempts_across_recent_windows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RateLimitWindow)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::rate_limit_window::RateLimitWindowFactory::new(db)
        .user_id("1001")
        .guild_id("42")
        .attempt_count(2)
        .window_start(Utc::now() - Duration::minutes(3))
        .build()
        .await?;
    factory::rate_limit_window::RateLimitWindowFactory::new(db)
        .user_id("1001")
        .guild_id("42")
        .attempt_count(3)
        .window_start(Utc::now() - Duration::minutes(1))
        .build()
        .await?;

    let repo = RateLimitWindowRepository::new(db);
    let attempts = repo.attempts_within(1001, 42, Duration::minutes(5)).await?;

    assert_eq!(attempts, 5);

    Ok(())
}

/// Tests that windows opened before the cutoff are excluded.
///
/// Expected: Ok counting only the recent window
#[tokio::test]
async fn excludes_windows_before_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RateLimitWindow)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::rate_limit_window::RateLimitWindowFactory::new(db)
        .user_id("1001")
        .guild_id("42")
        .attempt_count(5)
        .window_start(Utc::now() - Duration::minutes(30))
        .build()
        .await?;
    factory::rate_limit_window::RateLimitWindowFactory::new(db)
        .user_id("1001")
        .guild_id("42")
        .attempt_count(1)
        .window_start(Utc::now() - Duration::minutes(2))
        .build()
        .await?;

    let repo = RateLimitWindowRepository::new(db);
    let attempts = repo.attempts_within(1001, 42, Duration::minutes(5)).await?;

    assert_eq!(attempts, 1);

    Ok(())
}

/// Tests attempts from other users or guilds are not counted.
///
/// Expected: Ok with zero attempts for an uninvolved user
#[tokio::test]
async fn ignores_other_identities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RateLimitWindow)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::rate_limit_window::RateLimitWindowFactory::new(db)
        .user_id("2002")
        .guild_id("42")
        .attempt_count(4)
        .build()
        .await?;

    let repo = RateLimitWindowRepository::new(db);
    let attempts = repo.attempts_within(1001, 42, Duration::minutes(5)).await?;

    assert_eq!(attempts, 0);
    assert!(!repo.has_attempt_within(1001, 42, Duration::hours(1)).await?);

    Ok(())
}

/// Tests the trailing cooldown lookup on the same table.
///
/// A window opened half an hour ago means the user attempted within the
/// hour, so the cooldown check answers true.
///
/// Expected: Ok true within an hour, false within five minutes
#[tokio::test]
async fn cooldown_lookup_uses_window_history() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RateLimitWindow)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::rate_limit_window::RateLimitWindowFactory::new(db)
        .user_id("1001")
        .guild_id("42")
        .window_start(Utc::now() - Duration::minutes(30))
        .build()
        .await?;

    let repo = RateLimitWindowRepository::new(db);

    assert!(repo.has_attempt_within(1001, 42, Duration::hours(1)).await?);
    assert!(!repo.has_attempt_within(1001, 42, Duration::minutes(5)).await?);

    Ok(())
}
