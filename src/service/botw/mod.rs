//! The per-guild election state machine.
//!
//! Each guild cycles through three states: `DEFAULT` (nominations open),
//! `WINNER_CHOSEN` (a pick was announced, awaiting the role handover) and
//! `SKIP` (the next announcement tick passes without a pick). Hourly ticks
//! drive the scheduled transitions; operator commands drive the rest.
//!
//! Locking discipline: `process_tick` acquires each guild's lock itself.
//! Every other mutating method assumes the caller (the command front-end)
//! already holds the guild lock, and returns queued chat messages for the
//! caller to deliver after releasing it.

#[cfg(test)]
mod test;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::{
    data::{settings::SettingsRepository, winner::WinnerRepository},
    error::{botw::BotwError, internal::InternalError, AppError},
    model::{botw::BotwState, idol::Idol},
    service::{locks::GuildLocks, nomination::NominationService, transport::ChatTransport},
    util::{
        parse::parse_u64_from_string,
        schedule::{next_at_midnight, previous_at_midnight, weekday_index, weekday_name},
    },
};

/// A chat message queued during a transition, delivered after the guild
/// lock is released. Failures are logged and never undo the transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outbound {
    Channel { channel_id: u64, text: String },
    Direct { user_id: u64, text: String },
}

pub struct BotwService<'a> {
    db: &'a DatabaseConnection,
    transport: Arc<dyn ChatTransport>,
}

impl<'a> BotwService<'a> {
    pub fn new(db: &'a DatabaseConnection, transport: Arc<dyn ChatTransport>) -> Self {
        Self { db, transport }
    }

    /// Runs one tick for every guild with a settings row.
    ///
    /// `now` should be a tick-window boundary (top of an hour, UTC).
    /// Transitions only fire at hour 0; other hours are no-ops. Errors in
    /// one guild are logged and do not stop the others. Replaying the same
    /// boundary twice is harmless: the state guards make every scheduled
    /// transition fire at most once.
    pub async fn process_tick(&self, locks: &GuildLocks, now: DateTime<Utc>) {
        use chrono::Timelike;

        if now.hour() != 0 {
            return;
        }

        let all_settings = match SettingsRepository::new(self.db).get_all().await {
            Ok(settings) => settings,
            Err(e) => {
                error!("Failed to load guild settings for tick: {}", e);
                return;
            }
        };

        for settings in all_settings {
            let guild_id = match parse_u64_from_string(settings.guild_id.clone()) {
                Ok(id) => id,
                Err(e) => {
                    error!("Skipping settings row with bad guild ID: {}", e);
                    continue;
                }
            };

            let lock = locks.for_guild(guild_id);
            let outbound = {
                let _guard = lock.lock().await;
                match self.tick_guild(guild_id, now).await {
                    Ok(outbound) => outbound,
                    Err(e) => {
                        error!("Tick failed for guild {}: {}", guild_id, e);
                        continue;
                    }
                }
            };

            self.deliver(outbound).await;
        }
    }

    /// Runs the scheduled transitions for a single guild. Caller holds the
    /// guild lock.
    async fn tick_guild(
        &self,
        guild_id: u64,
        now: DateTime<Utc>,
    ) -> Result<Vec<Outbound>, AppError> {
        let settings = SettingsRepository::new(self.db).get_or_create(guild_id).await?;
        let state = match BotwState::parse(&settings.state) {
            Some(state) => state,
            None => {
                warn!(
                    "Guild {} has corrupt state '{}'; resetting to DEFAULT",
                    guild_id, settings.state
                );
                SettingsRepository::new(self.db)
                    .set_state(settings, BotwState::Default)
                    .await?;
                return Ok(Vec::new());
            }
        };

        let day = weekday_index(now);
        let mut outbound = Vec::new();

        if day == settings.announcement_day as u8 {
            match state {
                BotwState::Default if !settings.enabled => {
                    debug!("Guild {} is disabled; skipping announcement tick", guild_id);
                }
                BotwState::Default => {
                    outbound.extend(self.run_announcement(&settings, now, false).await?);
                }
                BotwState::Skip => {
                    info!("Guild {} skips this week's pick; resetting state", guild_id);
                    SettingsRepository::new(self.db)
                        .set_state(settings.clone(), BotwState::Default)
                        .await?;
                }
                BotwState::WinnerChosen => {}
            }
        } else if day == settings.winner_day as u8 && state == BotwState::WinnerChosen {
            outbound.extend(self.run_winner_day(&settings, guild_id).await?);
        }

        Ok(outbound)
    }

    /// Picks and announces a winner: random choice over the nomination
    /// book, history append, removal of the picked member's nomination, and
    /// the `DEFAULT → WINNER_CHOSEN` transition.
    ///
    /// Returns `EmptyNominations` only when `forced`; the scheduled tick
    /// treats an empty book as a logged skip.
    async fn run_announcement(
        &self,
        settings: &entity::guild_settings::Model,
        now: DateTime<Utc>,
        forced: bool,
    ) -> Result<Vec<Outbound>, AppError> {
        let guild_id = parse_u64_from_string(settings.guild_id.clone())?;
        let nomination_service = NominationService::new(self.db);

        let picked = match nomination_service.pick_random(guild_id).await {
            Ok(picked) => picked,
            Err(AppError::Botw(BotwError::EmptyNominations)) if !forced => {
                info!("Guild {} has no nominations; skipping this week's pick", guild_id);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let member_id = parse_u64_from_string(picked.member_id.clone())?;
        let idol = Idol::from(&picked);

        WinnerRepository::new(self.db)
            .append(guild_id, member_id, &idol, now)
            .await?;
        nomination_service.clear(guild_id, member_id).await?;
        SettingsRepository::new(self.db)
            .set_state(settings.clone(), BotwState::WinnerChosen)
            .await?;

        info!(
            "Guild {}: picked {} (nominated by {}) as Bias of the Week",
            guild_id, idol, member_id
        );

        let mut outbound = Vec::new();
        if let Some(channel) = &settings.announcement_channel_id {
            let channel_id = parse_u64_from_string(channel.clone())?;
            let handover = next_at_midnight(settings.winner_day as u8, now);
            outbound.push(Outbound::Channel {
                channel_id,
                text: format!(
                    "🎉 <@{member_id}>'s bias **{idol}** is the Bias of the Week! \
                     The winner role will be handed over <t:{}:F>.",
                    handover.timestamp()
                ),
            });
        }

        Ok(outbound)
    }

    /// Hands the winner role over and returns to `DEFAULT`.
    ///
    /// The role swap is the only critical side effect: each mutation is
    /// retried once, and a second failure aborts the transition so the next
    /// winner-day tick can try again. The congratulation DM is queued and
    /// its failure only logged.
    async fn run_winner_day(
        &self,
        settings: &entity::guild_settings::Model,
        guild_id: u64,
    ) -> Result<Vec<Outbound>, AppError> {
        let (current, previous) = WinnerRepository::new(self.db).top_two(guild_id).await?;
        let current = current.ok_or(InternalError::MissingCurrentWinner { guild_id })?;
        let winner_id = parse_u64_from_string(current.member_id.clone())?;

        if let Some(role) = &settings.winner_role_id {
            let role_id = parse_u64_from_string(role.clone())?;

            if let Some(previous) = previous {
                let previous_id = parse_u64_from_string(previous.member_id.clone())?;
                if previous_id != winner_id {
                    self.swap_role(guild_id, previous_id, role_id, false).await?;
                }
            }
            self.swap_role(guild_id, winner_id, role_id, true).await?;
        }

        SettingsRepository::new(self.db)
            .set_state(settings.clone(), BotwState::Default)
            .await?;

        info!("Guild {}: winner role handed over to {}", guild_id, winner_id);

        Ok(vec![Outbound::Direct {
            user_id: winner_id,
            text: format!(
                "Congratulations, your bias **{} {}** is the Bias of the Week! \
                 You hold the winner role until the next handover. \
                 Nominations for next week are already open.",
                current.idol_group, current.idol_name
            ),
        }])
    }

    /// Adds or removes the winner role, retrying once before surfacing the
    /// failure.
    async fn swap_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
        add: bool,
    ) -> Result<(), AppError> {
        let attempt = || async {
            if add {
                self.transport.add_role(guild_id, user_id, role_id).await
            } else {
                self.transport.remove_role(guild_id, user_id, role_id).await
            }
        };

        if let Err(first) = attempt().await {
            warn!(
                "Role {} of user {} in guild {} failed ({}); retrying once",
                if add { "grant" } else { "removal" },
                user_id,
                guild_id,
                first
            );
            attempt().await?;
        }

        Ok(())
    }

    /// Toggles the skip flag for the next announcement. Caller holds the
    /// guild lock.
    ///
    /// # Returns
    /// - `Ok((state, outbound))` - The new state, `SKIP` or `DEFAULT`, plus
    ///   the skip announcement when one is due
    /// - `Err(SkipAfterWinner)` - A winner is already waiting for handover
    pub async fn toggle_skip(
        &self,
        guild_id: u64,
    ) -> Result<(BotwState, Vec<Outbound>), AppError> {
        let repo = SettingsRepository::new(self.db);
        let settings = repo.get_or_create(guild_id).await?;

        match BotwState::parse(&settings.state) {
            Some(BotwState::WinnerChosen) => Err(BotwError::SkipAfterWinner.into()),
            Some(BotwState::Skip) => {
                repo.set_state(settings, BotwState::Default).await?;
                info!("Guild {}: skip cancelled", guild_id);
                Ok((BotwState::Default, Vec::new()))
            }
            _ => {
                let announcement_day = settings.announcement_day;
                let channel = settings.announcement_channel_id.clone();
                repo.set_state(settings, BotwState::Skip).await?;
                info!("Guild {}: next pick will be skipped", guild_id);

                let mut outbound = Vec::new();
                if let Some(channel) = channel {
                    // A corrupt stored day must not panic the toggle; the
                    // skip still arms, only the announcement is dropped.
                    match u8::try_from(announcement_day).ok().filter(|day| *day < 7) {
                        Some(day) => outbound.push(Outbound::Channel {
                            channel_id: parse_u64_from_string(channel)?,
                            text: format!(
                                "No Bias of the Week will be picked on the coming {}.",
                                weekday_name(day)
                            ),
                        }),
                        None => warn!(
                            "Guild {} has corrupt announcement day {}; skip goes unannounced",
                            guild_id, announcement_day
                        ),
                    }
                }
                Ok((BotwState::Skip, outbound))
            }
        }
    }

    /// Forces an immediate winner pick (operator `winner` command). Caller
    /// holds the guild lock.
    pub async fn force_winner(
        &self,
        guild_id: u64,
        silent: bool,
        now: DateTime<Utc>,
    ) -> Result<(entity::botw_winner::Model, Vec<Outbound>), AppError> {
        let repo = SettingsRepository::new(self.db);
        let settings = repo.get_or_create(guild_id).await?;

        match BotwState::parse(&settings.state) {
            Some(BotwState::Default) => {}
            Some(BotwState::WinnerChosen) => {
                return Err(BotwError::Validation(
                    "A winner has already been chosen for this week.".to_string(),
                )
                .into());
            }
            Some(BotwState::Skip) => {
                return Err(BotwError::Validation(
                    "This week's pick is marked as skipped; cancel the skip first.".to_string(),
                )
                .into());
            }
            None => {
                return Err(BotwError::Validation(
                    "This guild's election state is unreadable.".to_string(),
                )
                .into());
            }
        }

        let mut outbound = self.run_announcement(&settings, now, true).await?;
        if silent {
            outbound.clear();
        }

        let (winner, _) = WinnerRepository::new(self.db).top_two(guild_id).await?;
        let winner = winner.ok_or(InternalError::MissingCurrentWinner { guild_id })?;

        Ok((winner, outbound))
    }

    /// Back-fills a winner record (operator `addwinner`). The timestamp is
    /// the announcement day preceding `starting_day`. Caller holds the
    /// guild lock.
    pub async fn add_past_winner(
        &self,
        guild_id: u64,
        member_id: u64,
        starting_day: NaiveDate,
        idol: Idol,
    ) -> Result<entity::botw_winner::Model, AppError> {
        let settings = SettingsRepository::new(self.db).get_or_create(guild_id).await?;

        let won_at = previous_at_midnight(
            settings.announcement_day as u8,
            starting_day.and_time(NaiveTime::MIN).and_utc(),
        );

        Ok(WinnerRepository::new(self.db)
            .append(guild_id, member_id, &idol, won_at)
            .await?)
    }

    /// Sends queued messages, logging and swallowing failures.
    pub async fn deliver(&self, outbound: Vec<Outbound>) {
        for message in outbound {
            let result = match &message {
                Outbound::Channel { channel_id, text } => {
                    self.transport.send_channel(*channel_id, text).await.map(|_| ())
                }
                Outbound::Direct { user_id, text } => {
                    self.transport.send_direct(*user_id, text).await
                }
            };

            if let Err(e) = result {
                warn!("Failed to deliver {:?}: {}", message, e);
            }
        }
    }
}
