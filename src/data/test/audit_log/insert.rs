use super::*;

/// Tests appending an audit entry.
///
/// Expected: Ok with all claim fields stored
#[tokio::test]
async fn inserts_audit_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::VerificationAuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VerificationAuditLogRepository::new(db);
    let entry = repo.insert(params(1001, AttemptStatus::Success)).await?;

    assert_eq!(entry.user_id, "1001");
    assert_eq!(entry.game_id, "123456789");
    assert_eq!(entry.username.as_deref(), Some("Hero"));
    assert_eq!(entry.status, "success");
    assert_eq!(entry.ip_hash.as_deref(), Some("deadbeefdeadbeef"));

    Ok(())
}

/// Tests the recent listing order and limit.
///
/// Expected: Ok with newest entries first, capped at the limit
#[tokio::test]
async fn lists_recent_entries_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::VerificationAuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VerificationAuditLogRepository::new(db);
    for user_id in [1001, 1002, 1003] {
        repo.insert(params(user_id, AttemptStatus::Success)).await?;
    }

    let recent = repo.recent_for_guild(42, 2).await?;

    assert_eq!(recent.len(), 2);

    Ok(())
}

/// Tests counting entries after a point in time.
///
/// Expected: Ok with entries before the cutoff excluded
#[tokio::test]
async fn counts_entries_since_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::VerificationAuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VerificationAuditLogRepository::new(db);
    repo.insert(params(1001, AttemptStatus::Success)).await?;
    repo.insert(params(1002, AttemptStatus::Suspicious)).await?;

    let hour_ago = chrono::Utc::now() - chrono::Duration::hours(1);
    let tomorrow = chrono::Utc::now() + chrono::Duration::days(1);

    assert_eq!(repo.count_since(42, hour_ago).await?, 2);
    assert_eq!(repo.count_since(42, tomorrow).await?, 0);
    assert_eq!(repo.count_since(99, hour_ago).await?, 0);

    Ok(())
}
