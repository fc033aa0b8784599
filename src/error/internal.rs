use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Results a in 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored severity string is not one of the known values.
    ///
    /// Severity rows are only ever written from `Severity::as_str()`, so this
    /// indicates corrupt data or a schema migration gap.
    #[error("Unknown severity '{value}' stored in database")]
    UnknownSeverity {
        /// The severity string that failed to parse
        value: String,
    },

    /// A stored rank name does not match any ladder tier.
    #[error("Unknown rank '{value}' stored in database")]
    UnknownRank {
        /// The rank string that failed to parse
        value: String,
    },

    /// A stored rank record status is not one of the known phases.
    #[error("Unknown rank record status '{value}' stored in database")]
    UnknownRankStatus {
        /// The status string that failed to parse
        value: String,
    },
}
