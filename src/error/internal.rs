use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Stored Discord snowflakes should always parse back into u64; a
    /// failure means the row was written incorrectly.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// The guild is in `WINNER_CHOSEN` state but has no winner history.
    ///
    /// Can only happen if rows were deleted out from under the bot.
    #[error("Guild {guild_id} is in WINNER_CHOSEN state but has no recorded winner")]
    MissingCurrentWinner {
        /// Guild whose state and history disagree
        guild_id: u64,
    },
}
