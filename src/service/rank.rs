//! Rank record management outside the verification pipeline.

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    data::{
        audit_log::VerificationAuditLogRepository,
        suspicious_activity::SuspiciousActivityRepository, user_rank::UserRankRepository,
    },
    error::AppError,
    model::{
        rank::{Rank, RankRecord, RankStatus},
        verification::UpsertRankParams,
    },
};

/// Game ID stored when a rank was set manually rather than through
/// verification. Only lands in the record when no verified claim exists yet.
const MANUAL_GAME_ID: &str = "manual-submission";

/// Raw rank data from an external rank source, before tier normalization.
#[derive(Debug, Clone)]
pub struct LiveRank {
    /// Loosely-formatted tier label as the source reports it.
    pub tier: String,
    pub stars: i32,
}

/// Role changes the caller should apply after a rank mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleDelta {
    pub add: Vec<u64>,
    pub remove: Vec<u64>,
}

/// Aggregate guild counters for the stats view.
#[derive(Debug, Clone)]
pub struct GuildStats {
    pub verified_members: u64,
    pub unresolved_activities: u64,
    pub attempts_today: u64,
}

pub struct RankService<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
}

impl<'a> RankService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
        Self { db, config }
    }

    /// Sets a verified user's rank from an explicit selection.
    ///
    /// Requires an existing rank record; manual selection confirms the
    /// record. Returns the updated record plus the role swap to apply.
    ///
    /// # Returns
    /// - `Ok((RankRecord, RoleDelta))` - Updated record and roles to swap
    /// - `Err(AppError::NotFound)` - User has no rank record yet
    pub async fn set_manual_rank(
        &self,
        user_id: u64,
        guild_id: u64,
        rank: Rank,
        division: Option<String>,
    ) -> Result<(RankRecord, RoleDelta), AppError> {
        let repo = UserRankRepository::new(self.db);

        let Some(existing) = repo.find_by_user_id(user_id, guild_id).await? else {
            return Err(AppError::NotFound(
                "You must verify your account before setting a rank".to_string(),
            ));
        };
        let previous = RankRecord::from_entity(existing)?;

        let rank_role = self.config.rank_roles.get(&rank).copied();
        let updated = repo
            .upsert_rank(UpsertRankParams {
                user_id,
                guild_id,
                game_id: MANUAL_GAME_ID.to_string(),
                server_id: previous.server_id.clone(),
                rank,
                stars: previous.stars,
                points: previous.points,
                division,
                player_name: None,
                role_id: rank_role.unwrap_or(0),
                status: RankStatus::Confirmed,
            })
            .await?;
        let record = RankRecord::from_entity(updated)?;

        let mut delta = RoleDelta::default();
        if previous.role_id != 0 && Some(previous.role_id) != rank_role {
            delta.remove.push(previous.role_id);
        }
        if let Some(role_id) = rank_role {
            if role_id != previous.role_id {
                delta.add.push(role_id);
            }
        }

        Ok((record, delta))
    }

    /// Fetches a user's rank record, if they are verified.
    pub async fn profile(
        &self,
        user_id: u64,
        guild_id: u64,
    ) -> Result<Option<RankRecord>, AppError> {
        let entity = UserRankRepository::new(self.db)
            .find_by_user_id(user_id, guild_id)
            .await?;

        entity.map(RankRecord::from_entity).transpose()
    }

    /// All rank records in a guild, for the re-check loop and stats view.
    pub async fn all_records(&self, guild_id: u64) -> Result<Vec<RankRecord>, AppError> {
        UserRankRepository::new(self.db)
            .get_all(guild_id)
            .await?
            .into_iter()
            .map(RankRecord::from_entity)
            .collect()
    }

    /// Aggregate counters for the administrator stats view.
    pub async fn guild_stats(&self, guild_id: u64) -> Result<GuildStats, AppError> {
        let day_ago = chrono::Utc::now() - chrono::Duration::days(1);

        Ok(GuildStats {
            verified_members: UserRankRepository::new(self.db)
                .count_for_guild(guild_id)
                .await?,
            unresolved_activities: SuspiciousActivityRepository::new(self.db)
                .count_unresolved(guild_id)
                .await?,
            attempts_today: VerificationAuditLogRepository::new(self.db)
                .count_since(guild_id, day_ago)
                .await?,
        })
    }

    /// Removes a user's verification.
    ///
    /// # Returns
    /// - `Ok(Some(RoleDelta))` - Record deleted; roles to revoke
    /// - `Ok(None)` - User was not verified
    pub async fn unverify(
        &self,
        user_id: u64,
        guild_id: u64,
    ) -> Result<Option<RoleDelta>, AppError> {
        let repo = UserRankRepository::new(self.db);
        let Some(existing) = repo.find_by_user_id(user_id, guild_id).await? else {
            return Ok(None);
        };
        let record = RankRecord::from_entity(existing)?;

        repo.delete_by_user_id(user_id, guild_id).await?;

        let mut remove = vec![self.config.verified_role_id];
        if record.role_id != 0 {
            remove.push(record.role_id);
        }

        Ok(Some(RoleDelta {
            add: Vec::new(),
            remove,
        }))
    }

    /// Compares a user's persisted rank against the roles they actually hold.
    ///
    /// Role grants are non-fatal during verification, so held roles can drift
    /// from the rank store. The delta returned here brings the member back in
    /// line with the record of truth.
    pub fn reconcile_roles(&self, record: &RankRecord, held_roles: &[u64]) -> RoleDelta {
        let expected_rank_role = self.config.rank_roles.get(&record.current_rank).copied();

        let mut delta = RoleDelta::default();

        if !held_roles.contains(&self.config.verified_role_id) {
            delta.add.push(self.config.verified_role_id);
        }
        if let Some(role_id) = expected_rank_role {
            if !held_roles.contains(&role_id) {
                delta.add.push(role_id);
            }
        }
        for (_, role_id) in self.config.rank_roles.iter() {
            if Some(*role_id) != expected_rank_role && held_roles.contains(role_id) {
                delta.remove.push(*role_id);
            }
        }
        delta.remove.sort_unstable();

        delta
    }

    /// Attempts to fetch a user's current rank from a live source.
    ///
    /// No public rank API exists for the game, so this always answers
    /// `Ok(None)` and the re-check loop treats every record as unchanged.
    /// Kept as the seam the loop would use if a source ever appears.
    pub async fn fetch_live_rank(
        &self,
        _game_id: &str,
        _server_id: &str,
    ) -> Result<Option<LiveRank>, AppError> {
        Ok(None)
    }
}
