//! Fraud verdict types shared by the fraud checks and the aggregator.

use std::fmt;
use std::str::FromStr;

use crate::error::internal::InternalError;

/// Escalation level of a fraud signal.
///
/// Severities form a total order (`Low < Medium < High`) and every comparison
/// in the system goes through this enum's `Ord`, never through string
/// comparison of the stored values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Stable string form stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            other => Err(InternalError::UnknownSeverity {
                value: other.to_string(),
            }),
        }
    }
}

/// Category of suspicious activity detected by a fraud check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    /// Game ID already registered to a different Discord user.
    DuplicateGameId,
    /// Too many verification attempts inside the rolling window.
    RapidVerify,
    /// Implausible combination of player attributes.
    StatAnomaly,
    /// Several independent signals triggered without a single dominant one.
    MultipleFactors,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::DuplicateGameId => "duplicate_gameid",
            ActivityType::RapidVerify => "rapid_verify",
            ActivityType::StatAnomaly => "stat_anomaly",
            ActivityType::MultipleFactors => "multiple_factors",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single fraud check or of the aggregated pass.
///
/// Individual checks report `Severity::Low` with no reasons when clean; the
/// aggregator ORs the flags, takes the maximum severity, and concatenates the
/// reason lists in check order without de-duplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FraudVerdict {
    pub is_fraudulent: bool,
    pub severity: Severity,
    pub reasons: Vec<String>,
    /// Set by the first check (in evaluation order) that reported a reason.
    /// Irrelevant when `is_fraudulent` is false.
    pub activity_type: Option<ActivityType>,
}

impl FraudVerdict {
    /// A clean verdict: not fraudulent, lowest severity, no reasons.
    pub fn clean() -> Self {
        Self {
            is_fraudulent: false,
            severity: Severity::Low,
            reasons: Vec::new(),
            activity_type: None,
        }
    }
}
