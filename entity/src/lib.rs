//! SeaORM entity models for the Bias-of-the-Week bot.
//!
//! All Discord snowflakes (guilds, members, channels, roles) are stored as
//! strings since SQLite has no unsigned 64-bit integer type. Instants are
//! stored as UTC timestamps.

pub mod botw_winner;
pub mod guild_settings;
pub mod idol;
pub mod nomination;
pub mod prelude;
