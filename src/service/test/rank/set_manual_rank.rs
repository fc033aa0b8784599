use super::*;

/// Tests promoting a verified user from Warrior to Master.
///
/// The record keeps its verified game ID and server, remembers the previous
/// rank with a change timestamp, becomes confirmed, and the caller is told to
/// swap the Warrior role for the Master role.
///
/// Expected: Ok with updated record and role swap
#[tokio::test]
async fn promotes_and_swaps_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();
    seed_warrior(db).await?;

    let service = RankService::new(db, &config);
    let (record, delta) = service
        .set_manual_rank(1001, 42, Rank::Master, Some("III".to_string()))
        .await
        .unwrap();

    assert_eq!(record.current_rank, Rank::Master);
    assert_eq!(record.division.as_deref(), Some("III"));
    assert_eq!(record.previous_rank, Some(Rank::Warrior));
    assert!(record.rank_changed_at.is_some());
    assert_eq!(record.status, RankStatus::Confirmed);
    assert_eq!(record.game_id, "123456789");
    assert_eq!(record.server_id, "2001");

    assert_eq!(
        delta,
        RoleDelta {
            add: vec![MASTER_ROLE],
            remove: vec![WARRIOR_ROLE],
        }
    );

    Ok(())
}

/// Tests re-selecting the rank the user already holds.
///
/// No rank change is recorded and no role swap is required.
///
/// Expected: Ok with empty delta and no previous rank
#[tokio::test]
async fn same_rank_is_a_quiet_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();
    seed_warrior(db).await?;

    let service = RankService::new(db, &config);
    let (record, delta) = service
        .set_manual_rank(1001, 42, Rank::Warrior, None)
        .await
        .unwrap();

    assert_eq!(record.current_rank, Rank::Warrior);
    assert!(record.previous_rank.is_none());
    assert!(record.rank_changed_at.is_none());
    assert_eq!(record.status, RankStatus::Confirmed);
    assert_eq!(delta, RoleDelta::default());

    Ok(())
}

/// Tests setting a rank without a verification record.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn requires_prior_verification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();

    let service = RankService::new(db, &config);
    let result = service.set_manual_rank(1001, 42, Rank::Epic, None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::UserRank::find().count(db).await?, 0);

    Ok(())
}

/// Tests selecting a rank with no configured role.
///
/// The old role is still removed, but nothing is granted.
///
/// Expected: Ok with remove-only delta
#[tokio::test]
async fn unmapped_rank_removes_old_role_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_verification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = test_config();
    seed_warrior(db).await?;

    let service = RankService::new(db, &config);
    let (record, delta) = service
        .set_manual_rank(1001, 42, Rank::Legend, None)
        .await
        .unwrap();

    assert_eq!(record.current_rank, Rank::Legend);
    assert_eq!(
        delta,
        RoleDelta {
            add: Vec::new(),
            remove: vec![WARRIOR_ROLE],
        }
    );

    Ok(())
}
