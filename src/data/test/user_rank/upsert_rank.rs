use super::*;

/// Tests inserting a fresh rank record.
///
/// Verifies that a first-time upsert stores the claimed identifiers and
/// leaves the rank-change markers unset.
///
/// Expected: Ok with new provisional record
#[tokio::test]
async fn inserts_fresh_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserRank)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRankRepository::new(db);
    let record = repo
        .upsert_rank(params(1001, Rank::Warrior, RankStatus::Provisional))
        .await?;

    assert_eq!(record.user_id, "1001");
    assert_eq!(record.game_id, "123456789");
    assert_eq!(record.current_rank, "Warrior");
    assert_eq!(record.status, "provisional");
    assert!(record.previous_rank.is_none());
    assert!(record.rank_changed_at.is_none());

    Ok(())
}

/// Tests re-upserting with the same rank.
///
/// Verifies that `previous_rank` and `rank_changed_at` stay unset when the
/// rank did not move, while `last_checked` advances.
///
/// Expected: Ok with no rank-change markers
#[tokio::test]
async fn same_rank_does_not_mark_change() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserRank)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRankRepository::new(db);
    let first = repo
        .upsert_rank(params(1001, Rank::Epic, RankStatus::Confirmed))
        .await?;
    let second = repo
        .upsert_rank(params(1001, Rank::Epic, RankStatus::Confirmed))
        .await?;

    assert_eq!(second.id, first.id);
    assert!(second.previous_rank.is_none());
    assert!(second.rank_changed_at.is_none());
    assert!(second.last_checked >= first.last_checked);

    Ok(())
}

/// Tests a rank change recording the previous rank.
///
/// Expected: Ok with previous_rank and rank_changed_at set
#[tokio::test]
async fn rank_change_records_previous_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserRank)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRankRepository::new(db);
    repo.upsert_rank(params(1001, Rank::Epic, RankStatus::Confirmed))
        .await?;
    let record = repo
        .upsert_rank(params(1001, Rank::Legend, RankStatus::Confirmed))
        .await?;

    assert_eq!(record.current_rank, "Legend");
    assert_eq!(record.previous_rank.as_deref(), Some("Epic"));
    assert!(record.rank_changed_at.is_some());

    Ok(())
}

/// Tests that updates keep the originally claimed identifiers.
///
/// A later upsert with different game and server IDs must not overwrite
/// what the record was verified against.
///
/// Expected: Ok with original game_id and server_id
#[tokio::test]
async fn update_keeps_claimed_identifiers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserRank)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRankRepository::new(db);
    repo.upsert_rank(params(1001, Rank::Epic, RankStatus::Confirmed))
        .await?;

    let mut changed = params(1001, Rank::Epic, RankStatus::Confirmed);
    changed.game_id = "999999999".to_string();
    changed.server_id = "9999".to_string();
    let record = repo.upsert_rank(changed).await?;

    assert_eq!(record.game_id, "123456789");
    assert_eq!(record.server_id, "2001");

    Ok(())
}

/// Tests that a confirmed record is never demoted to provisional.
///
/// Re-verification upserts provisionally, but a rank the user already
/// confirmed stays confirmed.
///
/// Expected: Ok with status still confirmed
#[tokio::test]
async fn confirmed_record_is_not_demoted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserRank)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user_rank::UserRankFactory::new(db)
        .user_id("1001")
        .guild_id("42")
        .current_rank("Mythic")
        .status("confirmed")
        .build()
        .await?;

    let repo = UserRankRepository::new(db);
    let record = repo
        .upsert_rank(params(1001, Rank::Mythic, RankStatus::Provisional))
        .await?;

    assert_eq!(record.status, "confirmed");

    Ok(())
}

/// Tests that absent optional fields keep their stored values.
///
/// Expected: Ok with player_name preserved across an update
#[tokio::test]
async fn missing_optionals_keep_stored_values() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserRank)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRankRepository::new(db);
    let mut with_name = params(1001, Rank::Epic, RankStatus::Confirmed);
    with_name.player_name = Some("Hero".to_string());
    with_name.division = Some("III".to_string());
    repo.upsert_rank(with_name).await?;

    let record = repo
        .upsert_rank(params(1001, Rank::Epic, RankStatus::Confirmed))
        .await?;

    assert_eq!(record.player_name.as_deref(), Some("Hero"));
    assert_eq!(record.division.as_deref(), Some("III"));

    Ok(())
}
