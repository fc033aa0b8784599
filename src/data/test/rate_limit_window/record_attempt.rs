use super::*;

/// Tests the first attempt opening a fresh window.
///
/// Expected: Ok with a new window counting one attempt
#[tokio::test]
async fn first_attempt_opens_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RateLimitWindow)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RateLimitWindowRepository::new(db);
    let window = repo.record_attempt(1001, 42, false).await?;

    assert_eq!(window.attempt_count, 1);
    assert!(!window.flagged);
    assert!(window.window_end > window.window_start);

    Ok(())
}

/// Tests attempts inside an open window bumping its counter.
///
/// Expected: Ok with the same window counting three attempts
#[tokio::test]
async fn attempts_inside_window_increment_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RateLimitWindow)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RateLimitWindowRepository::new(db);
    let first = repo.record_attempt(1001, 42, false).await?;
    repo.record_attempt(1001, 42, false).await?;
    let third = repo.record_attempt(1001, 42, false).await?;

    assert_eq!(third.id, first.id);
    assert_eq!(third.attempt_count, 3);

    Ok(())
}

/// Tests that an expired window is not reused.
///
/// An attempt after the previous window closed opens a new row instead of
/// bumping the stale one.
///
/// Expected: Ok with a second window at count 1
#[tokio::test]
async fn expired_window_is_not_reused() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RateLimitWindow)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stale = factory::rate_limit_window::RateLimitWindowFactory::new(db)
        .user_id("1001")
        .guild_id("42")
        .attempt_count(4)
        .window_start(Utc::now() - Duration::minutes(10))
        .build()
        .await?;

    let repo = RateLimitWindowRepository::new(db);
    let window = repo.record_attempt(1001, 42, false).await?;

    assert_ne!(window.id, stale.id);
    assert_eq!(window.attempt_count, 1);

    Ok(())
}

/// Tests that windows are scoped per user and guild.
///
/// Expected: Ok with separate windows per identity
#[tokio::test]
async fn windows_are_scoped_per_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RateLimitWindow)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RateLimitWindowRepository::new(db);
    let a = repo.record_attempt(1001, 42, false).await?;
    let b = repo.record_attempt(2002, 42, false).await?;
    let c = repo.record_attempt(1001, 43, false).await?;

    assert_ne!(a.id, b.id);
    assert_ne!(a.id, c.id);
    assert_eq!(a.attempt_count, 1);

    Ok(())
}

/// Tests the bumped counter being stored, not just returned.
///
/// The increment is applied inside the database, so a later reader summing
/// the window rows must see the same count the bump reported.
///
/// Expected: Ok with stored and returned counts agreeing
#[tokio::test]
async fn bumped_counter_is_visible_to_later_reads() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RateLimitWindow)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RateLimitWindowRepository::new(db);
    repo.record_attempt(1001, 42, false).await?;
    let second = repo.record_attempt(1001, 42, true).await?;

    let stored = repo.attempts_within(1001, 42, Duration::minutes(1)).await?;
    assert_eq!(stored, i64::from(second.attempt_count));
    assert_eq!(stored, 2);

    Ok(())
}

/// Tests the flagged marker following the latest attempt's verdict.
///
/// Expected: Ok with flagged overwritten each attempt
#[tokio::test]
async fn flagged_follows_latest_attempt() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RateLimitWindow)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RateLimitWindowRepository::new(db);
    repo.record_attempt(1001, 42, false).await?;
    let flagged = repo.record_attempt(1001, 42, true).await?;
    assert!(flagged.flagged);

    let cleared = repo.record_attempt(1001, 42, false).await?;
    assert!(!cleared.flagged);

    Ok(())
}
