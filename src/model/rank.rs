//! MLBB competitive rank ladder and per-user rank records.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{
    error::{internal::InternalError, AppError},
    util::parse::parse_u64_from_string,
};

/// The ten-tier MLBB ranked ladder, lowest to highest.
///
/// The enum's derived `Ord` follows ladder order. Mythic sub-tiers are
/// distinguished by star count when parsing rank payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Warrior,
    Elite,
    Master,
    Grandmaster,
    Epic,
    Legend,
    Mythic,
    MythicalHonor,
    MythicalGlory,
    MythicalImmortal,
}

impl Rank {
    /// All ranks in ladder order.
    pub const ALL: [Rank; 10] = [
        Rank::Warrior,
        Rank::Elite,
        Rank::Master,
        Rank::Grandmaster,
        Rank::Epic,
        Rank::Legend,
        Rank::Mythic,
        Rank::MythicalHonor,
        Rank::MythicalGlory,
        Rank::MythicalImmortal,
    ];

    /// Display name, also the stable string form stored in the database.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Warrior => "Warrior",
            Rank::Elite => "Elite",
            Rank::Master => "Master",
            Rank::Grandmaster => "Grandmaster",
            Rank::Epic => "Epic",
            Rank::Legend => "Legend",
            Rank::Mythic => "Mythic",
            Rank::MythicalHonor => "Mythical Honor",
            Rank::MythicalGlory => "Mythical Glory",
            Rank::MythicalImmortal => "Mythical Immortal",
        }
    }

    /// Sub-divisions selectable within this tier, highest division last.
    ///
    /// Mythic tiers have no Roman-numeral divisions; their single entry
    /// documents the star bracket instead.
    pub fn divisions(&self) -> &'static [&'static str] {
        match self {
            Rank::Warrior | Rank::Elite => &["III", "II", "I"],
            Rank::Master => &["IV", "III", "II", "I"],
            Rank::Grandmaster | Rank::Epic | Rank::Legend => &["V", "IV", "III", "II", "I"],
            Rank::Mythic => &["Base Mythic (0-24 stars)"],
            Rank::MythicalHonor => &["25-49 stars"],
            Rank::MythicalGlory => &["50-99 stars"],
            Rank::MythicalImmortal => &["100+ stars"],
        }
    }

    /// Parses a rank from its exact display name.
    pub fn from_name(name: &str) -> Result<Self, InternalError> {
        Rank::ALL
            .iter()
            .copied()
            .find(|rank| rank.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| InternalError::UnknownRank {
                value: name.to_string(),
            })
    }
}

impl Default for Rank {
    /// The rank assigned to a fresh provisional record.
    fn default() -> Self {
        Rank::Warrior
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a rank from a loosely-formatted tier label plus star count.
///
/// Tier labels from rank payloads vary in casing and decoration, so matching
/// is by substring. Mythic sub-tiers are derived from stars: 100+ Immortal,
/// 50+ Glory, 25+ Honor, else base Mythic. Unrecognized labels fall back to
/// the default rank.
pub fn parse_rank(tier: &str, stars: i32) -> Rank {
    let tier = tier.to_lowercase();

    if tier.contains("warrior") {
        Rank::Warrior
    } else if tier.contains("grandmaster") {
        // Checked before "master", which it contains as a substring
        Rank::Grandmaster
    } else if tier.contains("elite") {
        Rank::Elite
    } else if tier.contains("master") {
        Rank::Master
    } else if tier.contains("epic") {
        Rank::Epic
    } else if tier.contains("legend") {
        Rank::Legend
    } else if tier.contains("mythic") {
        if stars >= 100 {
            Rank::MythicalImmortal
        } else if stars >= 50 {
            Rank::MythicalGlory
        } else if stars >= 25 {
            Rank::MythicalHonor
        } else {
            Rank::Mythic
        }
    } else {
        Rank::default()
    }
}

/// Two-phase lifecycle of a rank record.
///
/// `Provisional` records are created at verification time with the default
/// rank; they become `Confirmed` once the user selects a rank explicitly or
/// a re-check obtains one. Row presence alone is never used as a phase
/// marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankStatus {
    Provisional,
    Confirmed,
}

impl RankStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankStatus::Provisional => "provisional",
            RankStatus::Confirmed => "confirmed",
        }
    }
}

impl std::str::FromStr for RankStatus {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "provisional" => Ok(RankStatus::Provisional),
            "confirmed" => Ok(RankStatus::Confirmed),
            other => Err(InternalError::UnknownRankStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// A user's verified MLBB account and rank, converted from the entity at the
/// repository boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct RankRecord {
    pub user_id: u64,
    pub guild_id: u64,
    pub game_id: String,
    pub server_id: String,
    pub player_name: Option<String>,
    pub current_rank: Rank,
    pub division: Option<String>,
    pub previous_rank: Option<Rank>,
    pub stars: i32,
    pub points: i32,
    /// Discord role ID currently assigned for this rank; zero when none.
    pub role_id: u64,
    pub status: RankStatus,
    pub last_checked: DateTime<Utc>,
    pub rank_changed_at: Option<DateTime<Utc>>,
}

impl RankRecord {
    /// Converts an entity model to the domain record.
    ///
    /// # Returns
    /// - `Ok(RankRecord)` - Converted record
    /// - `Err(AppError::InternalErr)` - Stored IDs, rank, or status could not
    ///   be parsed (indicates corrupt data, not user error)
    pub fn from_entity(entity: entity::user_rank::Model) -> Result<Self, AppError> {
        let user_id = parse_u64_from_string(entity.user_id)?;
        let guild_id = parse_u64_from_string(entity.guild_id)?;
        let role_id = if entity.role_id.is_empty() {
            0
        } else {
            parse_u64_from_string(entity.role_id)?
        };

        Ok(Self {
            user_id,
            guild_id,
            game_id: entity.game_id,
            server_id: entity.server_id,
            player_name: entity.player_name,
            current_rank: Rank::from_name(&entity.current_rank)?,
            division: entity.division,
            previous_rank: entity
                .previous_rank
                .as_deref()
                .map(Rank::from_name)
                .transpose()?,
            stars: entity.stars,
            points: entity.points,
            role_id,
            status: entity.status.parse()?,
            last_checked: entity.last_checked,
            rank_changed_at: entity.rank_changed_at,
        })
    }

    /// Display label combining rank and division, e.g. "Master III".
    pub fn rank_display(&self) -> String {
        match &self.division {
            Some(division) => format!("{} {}", self.current_rank, division),
            None => self.current_rank.to_string(),
        }
    }
}
