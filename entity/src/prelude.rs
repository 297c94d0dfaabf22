pub use super::botw_winner::Entity as BotwWinner;
pub use super::guild_settings::Entity as GuildSettings;
pub use super::idol::Entity as Idol;
pub use super::nomination::Entity as Nomination;
