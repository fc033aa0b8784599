use super::*;

/// Tests removing a verified user's record.
///
/// The record is deleted and the verified role plus the held rank role are
/// revoked.
///
/// Expected: Ok(Some) with both roles removed
#[tokio::test]
async fn deletes_record_and_revokes_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();
    seed_warrior(db).await?;

    let service = RankService::new(db, &config);
    let delta = service.unverify(1001, 42).await.unwrap();

    assert_eq!(
        delta,
        Some(RoleDelta {
            add: Vec::new(),
            remove: vec![VERIFIED_ROLE, WARRIOR_ROLE],
        })
    );
    assert_eq!(entity::prelude::UserRank::find().count(db).await?, 0);

    Ok(())
}

/// Tests unverifying a user who was never verified.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_record_is_reported() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();

    let service = RankService::new(db, &config);
    let delta = service.unverify(1001, 42).await.unwrap();

    assert!(delta.is_none());

    Ok(())
}

/// Tests reconciliation for a member missing both expected roles.
///
/// Expected: both roles added, stray rank roles removed
#[tokio::test]
async fn reconcile_adds_missing_and_removes_stray_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();
    seed_warrior(db).await?;

    let service = RankService::new(db, &config);
    let record = service.profile(1001, 42).await.unwrap().unwrap();

    // Holds a rank role that no longer matches the record.
    let delta = service.reconcile_roles(&record, &[MASTER_ROLE]);

    assert_eq!(delta.add, vec![VERIFIED_ROLE, WARRIOR_ROLE]);
    assert_eq!(delta.remove, vec![MASTER_ROLE]);

    Ok(())
}

/// Tests reconciliation when the member already holds the right roles.
///
/// Expected: empty delta
#[tokio::test]
async fn reconcile_is_quiet_when_roles_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();
    seed_warrior(db).await?;

    let service = RankService::new(db, &config);
    let record = service.profile(1001, 42).await.unwrap().unwrap();

    let delta = service.reconcile_roles(&record, &[VERIFIED_ROLE, WARRIOR_ROLE]);

    assert_eq!(delta, RoleDelta::default());

    Ok(())
}
