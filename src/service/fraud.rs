//! Fraud detection checks and their aggregation.
//!
//! Three independent checks feed the aggregated verdict: the duplicate game
//! ID registry, the rolling rate-limit counter, and the stat plausibility
//! pass over the validator's attributes. Each check reports its own verdict;
//! the aggregator combines them without the checks sharing any state.

use std::collections::HashMap;

use chrono::Duration;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    data::{
        duplicate_game_id::DuplicateGameIdRepository,
        rate_limit_window::RateLimitWindowRepository,
        suspicious_activity::SuspiciousActivityRepository, user_rank::UserRankRepository,
    },
    model::{
        fraud::{ActivityType, FraudVerdict, Severity},
        verification::FlagActivityParams,
    },
};

/// Trailing duration the rapid-verify check counts attempts over.
pub const RAPID_WINDOW: Duration = Duration::minutes(5);
/// Attempts within the window at which rapid-verify trips.
const RAPID_THRESHOLD: i64 = 3;
/// Attempts at which rapid-verify escalates to high severity.
const RAPID_HIGH_THRESHOLD: i64 = 5;

/// Level above which an account is implausibly developed for a fresh join.
const LEVEL_CAP: i64 = 50;
/// Win rate (percent) above which the account is statistically suspect.
const WIN_RATE_CAP: f64 = 75.0;
/// Account age (days) under which a high level is suspect.
const NEW_ACCOUNT_DAYS: i64 = 7;
/// Level a days-old account should not plausibly have reached.
const NEW_ACCOUNT_LEVEL_CAP: i64 = 30;

pub struct FraudService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FraudService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether the claimed game ID already belongs to someone else.
    ///
    /// Two sources of prior claims: the duplicate registry (written when an
    /// earlier attempt was already flagged as a duplicate) and the rank
    /// store's verified claims. The registry takes precedence and carries its
    /// stored severity; a clean verified claim by another user flags at
    /// medium. The original owner re-verifying is always clean.
    pub async fn check_duplicate(
        &self,
        game_id: &str,
        claimant_id: u64,
    ) -> Result<FraudVerdict, DbErr> {
        let claimant = claimant_id.to_string();

        let severity = match DuplicateGameIdRepository::new(self.db)
            .find_by_game_id(game_id)
            .await?
        {
            Some(record) if record.primary_user_id == claimant => return Ok(FraudVerdict::clean()),
            Some(record) => record.severity.parse().map_err(|err| {
                DbErr::Custom(format!("duplicate_game_id row {game_id}: {err}"))
            })?,
            None => {
                match UserRankRepository::new(self.db).find_by_game_id(game_id).await? {
                    Some(claim) if claim.user_id != claimant => Severity::Medium,
                    _ => return Ok(FraudVerdict::clean()),
                }
            }
        };

        Ok(FraudVerdict {
            is_fraudulent: true,
            severity,
            reasons: vec![format!("game ID {game_id} already registered to another user")],
            activity_type: Some(ActivityType::DuplicateGameId),
        })
    }

    /// Checks the rolling attempt counter for this identity.
    ///
    /// Under 3 attempts in the trailing window is clean; the 3rd and 4th are
    /// medium, the 5th onward high. The attempt being checked is recorded
    /// later in the pipeline, so it is added to the stored sum here to make
    /// the cumulative count include the attempt itself.
    pub async fn check_rapid(&self, user_id: u64, guild_id: u64) -> Result<FraudVerdict, DbErr> {
        let repo = RateLimitWindowRepository::new(self.db);
        let attempts = repo.attempts_within(user_id, guild_id, RAPID_WINDOW).await? + 1;

        if attempts < RAPID_THRESHOLD {
            return Ok(FraudVerdict::clean());
        }

        let severity = if attempts >= RAPID_HIGH_THRESHOLD {
            Severity::High
        } else {
            Severity::Medium
        };

        Ok(FraudVerdict {
            is_fraudulent: true,
            severity,
            reasons: vec![format!(
                "{} verification attempts within {} minutes",
                attempts,
                RAPID_WINDOW.num_minutes()
            )],
            activity_type: Some(ActivityType::RapidVerify),
        })
    }

    /// Checks the validator's attributes for implausible combinations.
    ///
    /// Pure over the attribute map. Each signal only fires when its
    /// attributes are present and parse; absence silently skips the signal.
    pub fn check_stat_anomalies(attributes: &HashMap<String, String>) -> FraudVerdict {
        let mut reasons = Vec::new();
        let mut severity = Severity::Low;

        let level = attributes.get("level").and_then(|v| v.parse::<i64>().ok());

        if let Some(level) = level {
            if level > LEVEL_CAP {
                reasons.push(format!("unusually high level ({level})"));
            }
        }

        let win_rate = attributes
            .get("win-rate")
            .or_else(|| attributes.get("winrate"))
            .and_then(|v| v.trim_end_matches('%').parse::<f64>().ok());
        if let Some(win_rate) = win_rate {
            if win_rate > WIN_RATE_CAP {
                reasons.push(format!("implausible win rate ({win_rate}%)"));
                severity = severity.max(Severity::Medium);
            }
        }

        let account_age_days = attributes
            .get("account-age")
            .and_then(|v| v.parse::<i64>().ok());
        if let (Some(age), Some(level)) = (account_age_days, level) {
            if age < NEW_ACCOUNT_DAYS && level > NEW_ACCOUNT_LEVEL_CAP {
                reasons.push(format!("account only {age} days old at level {level}"));
                severity = severity.max(Severity::Medium);
            }
        }

        if reasons.is_empty() {
            return FraudVerdict::clean();
        }

        FraudVerdict {
            is_fraudulent: true,
            severity,
            reasons,
            activity_type: Some(ActivityType::StatAnomaly),
        }
    }

    /// Runs all three checks and combines their verdicts.
    ///
    /// The combined verdict ORs the fraud flags, takes the maximum severity,
    /// and concatenates the reason lists in check order (duplicate, rapid,
    /// stat anomaly) without de-duplication. The activity type comes from the
    /// first check in that order that reported a reason.
    pub async fn perform_check(
        &self,
        user_id: u64,
        guild_id: u64,
        game_id: &str,
        attributes: &HashMap<String, String>,
    ) -> Result<FraudVerdict, DbErr> {
        let duplicate = self.check_duplicate(game_id, user_id).await?;
        let rapid = self.check_rapid(user_id, guild_id).await?;
        let stats = Self::check_stat_anomalies(attributes);

        Ok(aggregate([duplicate, rapid, stats]))
    }

    /// Persists a suspicious activity row for manual review.
    pub async fn flag_activity(
        &self,
        params: FlagActivityParams,
    ) -> Result<entity::suspicious_activity::Model, DbErr> {
        SuspiciousActivityRepository::new(self.db)
            .insert(params)
            .await
    }
}

/// Combines per-check verdicts in evaluation order.
fn aggregate<const N: usize>(verdicts: [FraudVerdict; N]) -> FraudVerdict {
    let mut combined = FraudVerdict::clean();

    for verdict in verdicts {
        combined.is_fraudulent |= verdict.is_fraudulent;
        combined.severity = combined.severity.max(verdict.severity);
        if combined.activity_type.is_none() && !verdict.reasons.is_empty() {
            combined.activity_type = verdict.activity_type;
        }
        combined.reasons.extend(verdict.reasons);
    }

    combined
}
