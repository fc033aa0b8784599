use super::*;

const USER: u64 = 1001;
const GUILD: u64 = 42;
const GAME_ID: &str = "123456789";

/// Seeds a duplicate registry row claiming the game ID for someone else.
async fn seed_duplicate(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    factory::duplicate_game_id::DuplicateGameIdFactory::new(db)
        .game_id(GAME_ID)
        .primary_user_id("9999")
        .severity("medium")
        .build()
        .await?;
    Ok(())
}

/// Seeds an open rate-limit window with two prior attempts, so the attempt
/// under check is the third.
async fn seed_rapid(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    factory::rate_limit_window::RateLimitWindowFactory::new(db)
        .user_id(USER.to_string())
        .guild_id(GUILD.to_string())
        .attempt_count(2)
        .build()
        .await?;
    Ok(())
}

fn anomalous_attrs() -> HashMap<String, String> {
    attrs(&[("level", "60")])
}

/// Tests the combined check with nothing to report.
///
/// Expected: clean verdict, no reasons, no activity type
#[tokio::test]
async fn no_signals_is_clean() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let verdict = FraudService::new(db)
        .perform_check(USER, GUILD, GAME_ID, &attrs(&[("level", "42")]))
        .await?;

    assert!(!verdict.is_fraudulent);
    assert!(verdict.reasons.is_empty());
    assert!(verdict.activity_type.is_none());

    Ok(())
}

/// Tests the duplicate signal firing alone.
///
/// Expected: fraudulent, medium, duplicate_gameid, one reason
#[tokio::test]
async fn duplicate_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_duplicate(db).await?;

    let verdict = FraudService::new(db)
        .perform_check(USER, GUILD, GAME_ID, &attrs(&[("level", "42")]))
        .await?;

    assert!(verdict.is_fraudulent);
    assert_eq!(verdict.severity, Severity::Medium);
    assert_eq!(verdict.activity_type, Some(ActivityType::DuplicateGameId));
    assert_eq!(verdict.reasons.len(), 1);

    Ok(())
}

/// Tests the rapid signal firing alone on the third attempt in the window.
///
/// Expected: fraudulent, medium, rapid_verify
#[tokio::test]
async fn rapid_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_rapid(db).await?;

    let verdict = FraudService::new(db)
        .perform_check(USER, GUILD, GAME_ID, &attrs(&[("level", "42")]))
        .await?;

    assert!(verdict.is_fraudulent);
    assert_eq!(verdict.severity, Severity::Medium);
    assert_eq!(verdict.activity_type, Some(ActivityType::RapidVerify));

    Ok(())
}

/// Tests the rapid signal escalating once the window holds four attempts.
///
/// Expected: fraudulent, high, rapid_verify
#[tokio::test]
async fn rapid_escalates_to_high() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::rate_limit_window::RateLimitWindowFactory::new(db)
        .user_id(USER.to_string())
        .guild_id(GUILD.to_string())
        .attempt_count(4)
        .build()
        .await?;

    let verdict = FraudService::new(db)
        .perform_check(USER, GUILD, GAME_ID, &attrs(&[("level", "42")]))
        .await?;

    assert!(verdict.is_fraudulent);
    assert_eq!(verdict.severity, Severity::High);
    assert_eq!(verdict.activity_type, Some(ActivityType::RapidVerify));

    Ok(())
}

/// Tests the stat signal firing alone.
///
/// Expected: fraudulent, low, stat_anomaly
#[tokio::test]
async fn stat_anomaly_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let verdict = FraudService::new(db)
        .perform_check(USER, GUILD, GAME_ID, &anomalous_attrs())
        .await?;

    assert!(verdict.is_fraudulent);
    assert_eq!(verdict.severity, Severity::Low);
    assert_eq!(verdict.activity_type, Some(ActivityType::StatAnomaly));

    Ok(())
}

/// Tests duplicate and rapid firing together.
///
/// The activity type keeps check order precedence and the reason lists
/// concatenate.
///
/// Expected: fraudulent, medium, duplicate_gameid, two reasons
#[tokio::test]
async fn duplicate_and_rapid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_duplicate(db).await?;
    seed_rapid(db).await?;

    let verdict = FraudService::new(db)
        .perform_check(USER, GUILD, GAME_ID, &attrs(&[("level", "42")]))
        .await?;

    assert!(verdict.is_fraudulent);
    assert_eq!(verdict.severity, Severity::Medium);
    assert_eq!(verdict.activity_type, Some(ActivityType::DuplicateGameId));
    assert_eq!(verdict.reasons.len(), 2);

    Ok(())
}

/// Tests duplicate and stat anomaly firing together.
///
/// Expected: fraudulent, medium, duplicate_gameid, two reasons
#[tokio::test]
async fn duplicate_and_stat_anomaly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_duplicate(db).await?;

    let verdict = FraudService::new(db)
        .perform_check(USER, GUILD, GAME_ID, &anomalous_attrs())
        .await?;

    assert!(verdict.is_fraudulent);
    assert_eq!(verdict.severity, Severity::Medium);
    assert_eq!(verdict.activity_type, Some(ActivityType::DuplicateGameId));
    assert_eq!(verdict.reasons.len(), 2);

    Ok(())
}

/// Tests rapid and stat anomaly firing together.
///
/// Expected: fraudulent, medium, rapid_verify, two reasons
#[tokio::test]
async fn rapid_and_stat_anomaly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_rapid(db).await?;

    let verdict = FraudService::new(db)
        .perform_check(USER, GUILD, GAME_ID, &anomalous_attrs())
        .await?;

    assert!(verdict.is_fraudulent);
    assert_eq!(verdict.severity, Severity::Medium);
    assert_eq!(verdict.activity_type, Some(ActivityType::RapidVerify));
    assert_eq!(verdict.reasons.len(), 2);

    Ok(())
}

/// Tests all three signals firing at once.
///
/// Expected: fraudulent, severity is the maximum across signals, activity
/// type keeps check order precedence, three reasons
#[tokio::test]
async fn all_signals_together() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::duplicate_game_id::DuplicateGameIdFactory::new(db)
        .game_id(GAME_ID)
        .primary_user_id("9999")
        .severity("high")
        .build()
        .await?;
    seed_rapid(db).await?;

    let verdict = FraudService::new(db)
        .perform_check(USER, GUILD, GAME_ID, &anomalous_attrs())
        .await?;

    assert!(verdict.is_fraudulent);
    assert_eq!(verdict.severity, Severity::High);
    assert_eq!(verdict.activity_type, Some(ActivityType::DuplicateGameId));
    assert_eq!(verdict.reasons.len(), 3);

    Ok(())
}

/// Tests an expired window not counting toward the rapid signal.
///
/// Expected: clean verdict even with four attempts in an old window
#[tokio::test]
async fn expired_window_does_not_trip_rapid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::rate_limit_window::RateLimitWindowFactory::new(db)
        .user_id(USER.to_string())
        .guild_id(GUILD.to_string())
        .attempt_count(4)
        .window_start(chrono::Utc::now() - chrono::Duration::minutes(30))
        .build()
        .await?;

    let verdict = FraudService::new(db)
        .perform_check(USER, GUILD, GAME_ID, &attrs(&[("level", "42")]))
        .await?;

    assert!(!verdict.is_fraudulent);

    Ok(())
}
