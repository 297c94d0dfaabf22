//! The nomination book: one nomination per member per guild, unique idols
//! within a guild, fuzzy-deduplicated against everything the bot has seen.

#[cfg(test)]
mod test;

use chrono::Utc;
use rand::seq::IndexedRandom;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        idol::IdolRepository, nomination::NominationRepository, settings::SettingsRepository,
        winner::WinnerRepository,
    },
    error::{botw::BotwError, AppError},
    model::{botw::NominateOutcome, idol::Idol},
    service::catalog::CatalogService,
    util::fuzzy,
};

pub struct NominationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NominationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attempts to nominate `idol` for a member.
    ///
    /// Unless `accept_as_is` is set, the idol is first checked against the
    /// union of the catalog, the guild's winner history and every current
    /// nomination; a distinct near-match (score ≥ 75) is returned as
    /// `SuggestMatch` for the member to confirm. On accepted input, in
    /// order: an idol already nominated by another member in the guild is
    /// `DuplicateIdol`; an idol that won within the cooldown window is
    /// `RecentlyWon`; a member with an existing nomination gets
    /// `RequiresOverride`. Otherwise the nomination is stored and the idol
    /// joins the catalog.
    ///
    /// Callers must hold the guild lock.
    pub async fn nominate(
        &self,
        guild_id: u64,
        member_id: u64,
        idol: Idol,
        accept_as_is: bool,
    ) -> Result<NominateOutcome, AppError> {
        let idol = validated(idol)?;

        let settings = SettingsRepository::new(self.db).get_or_create(guild_id).await?;
        let nomination_repo = NominationRepository::new(self.db);

        if !accept_as_is {
            if let Some(candidate) = self.find_suggestion(guild_id, &idol).await? {
                return Ok(NominateOutcome::SuggestMatch { candidate });
            }
        }

        self.check_available(guild_id, member_id, &idol, settings.renomination_cooldown_days)
            .await?;

        if let Some(existing) = nomination_repo.get_by_member(guild_id, member_id).await? {
            return Ok(NominateOutcome::RequiresOverride {
                current: Idol::from(&existing),
            });
        }

        nomination_repo.create(guild_id, member_id, &idol).await?;
        CatalogService::new(self.db).add(&idol).await?;

        Ok(NominateOutcome::Added(idol))
    }

    /// Replaces a member's nomination after an override confirmation, or
    /// creates it if the member cleared theirs in the meantime.
    ///
    /// The confirmation prompt runs outside the guild lock, so the book may
    /// have changed while the member was deciding; the duplicate and
    /// cooldown rules are checked again here and surface as
    /// `DuplicateIdol`/`RecentlyWon`.
    ///
    /// Callers must hold the guild lock.
    pub async fn override_nomination(
        &self,
        guild_id: u64,
        member_id: u64,
        idol: Idol,
    ) -> Result<entity::nomination::Model, AppError> {
        let idol = validated(idol)?;

        let settings = SettingsRepository::new(self.db).get_or_create(guild_id).await?;
        self.check_available(guild_id, member_id, &idol, settings.renomination_cooldown_days)
            .await?;

        let repo = NominationRepository::new(self.db);

        let model = match repo.get_by_member(guild_id, member_id).await? {
            Some(existing) => repo.replace(existing, &idol).await?,
            None => repo.create(guild_id, member_id, &idol).await?,
        };
        CatalogService::new(self.db).add(&idol).await?;

        Ok(model)
    }

    /// Removes a member's nomination. Silent no-op when none exists.
    pub async fn clear(&self, guild_id: u64, member_id: u64) -> Result<bool, AppError> {
        Ok(NominationRepository::new(self.db).delete(guild_id, member_id).await?)
    }

    /// All current nominations for a guild, in insertion order.
    pub async fn list(&self, guild_id: u64) -> Result<Vec<entity::nomination::Model>, AppError> {
        Ok(NominationRepository::new(self.db).get_by_guild(guild_id).await?)
    }

    /// Picks a uniformly random nomination from the guild's book.
    pub async fn pick_random(
        &self,
        guild_id: u64,
    ) -> Result<entity::nomination::Model, AppError> {
        let nominations = NominationRepository::new(self.db).get_by_guild(guild_id).await?;

        nominations
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| BotwError::EmptyNominations.into())
    }

    /// Enforces the idol-availability rules for a guild: no other member
    /// may hold the idol, and it must not have won within the cooldown
    /// window.
    async fn check_available(
        &self,
        guild_id: u64,
        member_id: u64,
        idol: &Idol,
        cooldown_days: i32,
    ) -> Result<(), AppError> {
        let guild_nominations = NominationRepository::new(self.db).get_by_guild(guild_id).await?;
        let duplicate = guild_nominations.iter().any(|nomination| {
            nomination.member_id != member_id.to_string() && &Idol::from(nomination) == idol
        });
        if duplicate {
            return Err(BotwError::DuplicateIdol {
                group: idol.group.clone(),
                name: idol.name.clone(),
            }
            .into());
        }

        let recently_won = WinnerRepository::new(self.db)
            .has_recent(guild_id, idol, cooldown_days as i64, Utc::now())
            .await?;
        if recently_won {
            return Err(BotwError::RecentlyWon {
                group: idol.group.clone(),
                name: idol.name.clone(),
                cooldown_days,
            }
            .into());
        }

        Ok(())
    }

    /// Best fuzzy match for `idol` over the catalog, the guild's past
    /// winners and all current nominations, excluding exact (case-insensitive)
    /// matches of the idol itself.
    async fn find_suggestion(
        &self,
        guild_id: u64,
        idol: &Idol,
    ) -> Result<Option<Idol>, AppError> {
        let mut candidates: Vec<Idol> = Vec::new();

        let catalog = IdolRepository::new(self.db).get_all().await?;
        candidates.extend(catalog.iter().map(Idol::from));

        let winners = WinnerRepository::new(self.db).get_by_guild_desc(guild_id).await?;
        candidates.extend(winners.iter().map(Idol::from));

        let nominations = NominationRepository::new(self.db).get_all().await?;
        candidates.extend(nominations.iter().map(Idol::from));

        let best = fuzzy::best_match(idol, &candidates, fuzzy::DEFAULT_CUTOFF);

        Ok(best.filter(|candidate| *candidate != idol).cloned())
    }
}

fn validated(idol: Idol) -> Result<Idol, AppError> {
    let group = idol.group.trim();
    let name = idol.name.trim();

    if group.is_empty() || name.is_empty() {
        return Err(BotwError::Validation(
            "Both a group and a name are required, e.g. `nominate Aespa Karina`.".to_string(),
        )
        .into());
    }

    Ok(Idol::new(group, name))
}
