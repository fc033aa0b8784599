//! Verification pipeline orchestration.

use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    data::{
        audit_log::VerificationAuditLogRepository, duplicate_game_id::DuplicateGameIdRepository,
        rate_limit_window::RateLimitWindowRepository, user_rank::UserRankRepository,
    },
    error::verification::VerificationError,
    model::{
        fraud::{ActivityType, Severity},
        player::{AuditAttributes, PlayerProfile},
        rank::RankStatus,
        verification::{
            AttemptStatus, FlagActivityParams, FraudAlert, LogAttemptParams, UpsertRankParams,
            VerificationOutcome, VerificationRequest,
        },
    },
    service::{fraud::FraudService, validator::AccountValidator},
    util::hash::hash_origin,
};

/// Minimum time between accepted attempts from one user.
///
/// Enforced by the command surface before the pipeline runs, against the
/// same window table the rate limiter writes, so cooldowns survive restarts.
pub const VERIFY_COOLDOWN: Duration = Duration::hours(1);

/// Origin sentinel used when the caller supplied no origin hint.
const UNKNOWN_ORIGIN: &str = "unknown";

/// Orchestrates one verification attempt end to end.
///
/// The pipeline runs a fixed sequence: shape validation, external lookup,
/// attribute extraction, origin hashing, fraud check, audit write, rate-limit
/// bookkeeping, then the verdict branch. Any error aborts the remainder of
/// the attempt; the only side effects already applied are the ones listed
/// before the failing step.
pub struct VerificationService<'a> {
    db: &'a DatabaseConnection,
    validator: &'a dyn AccountValidator,
    config: &'a Config,
}

impl<'a> VerificationService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        validator: &'a dyn AccountValidator,
        config: &'a Config,
    ) -> Self {
        Self {
            db,
            validator,
            config,
        }
    }

    /// Whether the user attempted verification inside the cooldown period.
    pub async fn cooldown_active(
        &self,
        user_id: u64,
        guild_id: u64,
    ) -> Result<bool, VerificationError> {
        let repo = RateLimitWindowRepository::new(self.db);
        Ok(repo
            .has_attempt_within(user_id, guild_id, VERIFY_COOLDOWN)
            .await?)
    }

    /// Runs the full verification pipeline for one claim.
    ///
    /// # Returns
    /// - `Ok(VerificationOutcome::Accepted)` - Account verified, roles to grant returned
    /// - `Ok(VerificationOutcome::Flagged)` - Attempt completed but held for review
    /// - `Err(VerificationError)` - Malformed input, lookup failure, or persistence failure;
    ///   malformed input and lookup failures leave no audit record
    pub async fn verify(
        &self,
        request: VerificationRequest,
    ) -> Result<VerificationOutcome, VerificationError> {
        validate_shape(&request.game_id, &request.server_id)?;

        let attributes = self
            .validator
            .lookup(&request.game_id, &request.server_id)
            .await?;

        let profile = PlayerProfile::extract(&attributes, &request.server_id);
        let audit_attributes = AuditAttributes::extract(&attributes);
        let origin_token = hash_origin(request.origin_hint.as_deref().unwrap_or(UNKNOWN_ORIGIN));

        let fraud = FraudService::new(self.db);
        let verdict = fraud
            .perform_check(request.user_id, request.guild_id, &request.game_id, &attributes)
            .await?;

        VerificationAuditLogRepository::new(self.db)
            .insert(LogAttemptParams {
                user_id: request.user_id,
                guild_id: request.guild_id,
                game_id: request.game_id.clone(),
                server_id: request.server_id.clone(),
                attributes: audit_attributes,
                status: if verdict.is_fraudulent {
                    AttemptStatus::Suspicious
                } else {
                    AttemptStatus::Success
                },
                ip_hash: Some(origin_token),
                user_agent: request.client_hint.clone(),
            })
            .await?;

        RateLimitWindowRepository::new(self.db)
            .record_attempt(request.user_id, request.guild_id, verdict.is_fraudulent)
            .await?;

        if !verdict.is_fraudulent {
            return self.accept(request, profile).await;
        }

        let activity_type = verdict
            .activity_type
            .unwrap_or(ActivityType::MultipleFactors);

        let activity = fraud
            .flag_activity(FlagActivityParams {
                user_id: request.user_id,
                guild_id: request.guild_id,
                game_id: Some(request.game_id.clone()),
                activity_type,
                reason: verdict.reasons.join("; "),
                severity: verdict.severity,
            })
            .await?;

        if activity_type == ActivityType::DuplicateGameId {
            let registry = DuplicateGameIdRepository::new(self.db);

            // Seed the registry with the verified owner as primary before
            // appending this claimant, so the owner's later re-verification
            // stays clean.
            if registry.find_by_game_id(&request.game_id).await?.is_none() {
                if let Some(owner) = UserRankRepository::new(self.db)
                    .find_by_game_id(&request.game_id)
                    .await?
                {
                    registry
                        .register(
                            &request.game_id,
                            &request.server_id,
                            &owner.user_id,
                            verdict.severity,
                        )
                        .await?;
                }
            }

            registry
                .register(
                    &request.game_id,
                    &request.server_id,
                    &request.user_id.to_string(),
                    verdict.severity,
                )
                .await?;
        }

        let alert = (verdict.severity == Severity::High).then(|| FraudAlert {
            activity_id: activity.id,
            user_id: request.user_id,
            game_id: request.game_id.clone(),
            server_id: request.server_id.clone(),
            activity_type,
            severity: verdict.severity,
            reasons: verdict.reasons.clone(),
        });

        tracing::info!(
            user_id = request.user_id,
            game_id = %request.game_id,
            severity = %verdict.severity,
            "Verification attempt flagged for review"
        );

        Ok(VerificationOutcome::Flagged {
            reasons: verdict.reasons,
            alert,
        })
    }

    async fn accept(
        &self,
        request: VerificationRequest,
        profile: PlayerProfile,
    ) -> Result<VerificationOutcome, VerificationError> {
        let rank = request.rank.unwrap_or_default();
        let status = if request.rank.is_some() {
            RankStatus::Confirmed
        } else {
            RankStatus::Provisional
        };
        let rank_role = self.config.rank_roles.get(&rank).copied();
        let player_name = (profile.name != "Unknown").then(|| profile.name.clone());

        UserRankRepository::new(self.db)
            .upsert_rank(UpsertRankParams {
                user_id: request.user_id,
                guild_id: request.guild_id,
                game_id: request.game_id,
                server_id: request.server_id,
                rank,
                stars: 0,
                points: 0,
                division: request.division,
                player_name,
                role_id: rank_role.unwrap_or(0),
                status,
            })
            .await?;

        let mut roles = vec![self.config.verified_role_id];
        roles.extend(rank_role);

        tracing::info!(
            user_id = request.user_id,
            rank = %rank,
            "Verification accepted"
        );

        Ok(VerificationOutcome::Accepted {
            profile,
            rank,
            roles,
        })
    }
}

/// Rejects claims whose identifiers do not even look like MLBB IDs.
///
/// Game IDs are 8 to 10 digits; server IDs are all digits. Nothing about the
/// attempt is persisted on rejection.
fn validate_shape(game_id: &str, server_id: &str) -> Result<(), VerificationError> {
    let game_ok =
        (8..=10).contains(&game_id.len()) && game_id.chars().all(|c| c.is_ascii_digit());
    if !game_ok {
        return Err(VerificationError::MalformedGameId);
    }

    if server_id.is_empty() || !server_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(VerificationError::MalformedServerId);
    }

    Ok(())
}
