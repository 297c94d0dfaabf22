//! Idol catalog: the known-idol set backing fuzzy suggestions.

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;
use serenity::async_trait;
use std::collections::HashSet;

use crate::{
    data::idol::IdolRepository,
    error::{botw::BotwError, AppError},
    model::idol::Idol,
};

/// Operator-side disambiguation exchange for the batch loader.
///
/// Implementations should bound the exchange (the Discord one waits 60
/// seconds for a reply); returning `None` discards the line.
#[async_trait]
pub trait CatalogPrompt: Send + Sync {
    /// Presents the candidate `(group, name)` splits of an ambiguous line
    /// and returns the index of the chosen split.
    async fn choose_split(&self, line: &str, options: &[Idol]) -> Option<usize>;
}

/// Outcome counts of a batch load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines accepted and inserted into the catalog.
    pub added: usize,
    /// Lines dropped because some split was already cataloged.
    pub known: usize,
    /// Lines discarded: unsplittable, or no split was chosen.
    pub discarded: usize,
}

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Case-insensitive membership test.
    pub async fn contains(&self, idol: &Idol) -> Result<bool, AppError> {
        Ok(IdolRepository::new(self.db).find(idol).await?.is_some())
    }

    /// Idempotent insert.
    ///
    /// # Returns
    /// - `Ok(true)` - The idol was newly cataloged
    /// - `Ok(false)` - The idol was already present
    pub async fn add(&self, idol: &Idol) -> Result<bool, AppError> {
        let repo = IdolRepository::new(self.db);

        if repo.find(idol).await?.is_some() {
            return Ok(false);
        }
        repo.insert(idol).await?;

        Ok(true)
    }

    /// Strict insert, failing with `AlreadyPresent` when the idol is known.
    pub async fn add_strict(&self, idol: &Idol) -> Result<entity::idol::Model, AppError> {
        let repo = IdolRepository::new(self.db);

        if repo.find(idol).await?.is_some() {
            return Err(BotwError::AlreadyPresent {
                group: idol.group.clone(),
                name: idol.name.clone(),
            }
            .into());
        }

        Ok(repo.insert(idol).await?)
    }

    /// The whole catalog as domain values, in insertion order.
    pub async fn all(&self) -> Result<Vec<Idol>, AppError> {
        let models = IdolRepository::new(self.db).get_all().await?;

        Ok(models.iter().map(Idol::from).collect())
    }

    /// Batch-loads catalog lines.
    ///
    /// Each line is a whitespace-separated token sequence with every
    /// `(group, name)` split considered a candidate. Per line, in order:
    ///
    /// 1. If any split is already cataloged, the line is treated as known
    ///    and dropped, remembering that split's group.
    /// 2. If exactly one split's group was already seen during this load,
    ///    that split is accepted.
    /// 3. Otherwise the operator picks a split through `prompt`; no pick
    ///    discards the line.
    pub async fn load(
        &self,
        lines: impl IntoIterator<Item = &str>,
        prompt: &dyn CatalogPrompt,
    ) -> Result<LoadReport, AppError> {
        let mut report = LoadReport::default();
        let mut seen_groups: HashSet<String> = HashSet::new();

        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let splits = candidate_splits(line);
            if splits.is_empty() {
                report.discarded += 1;
                continue;
            }

            let mut known_split = None;
            for split in &splits {
                if self.contains(split).await? {
                    known_split = Some(split);
                    break;
                }
            }
            if let Some(split) = known_split {
                seen_groups.insert(split.group.to_lowercase());
                report.known += 1;
                continue;
            }

            let mut seen_matches = splits
                .iter()
                .filter(|split| seen_groups.contains(&split.group.to_lowercase()));
            let accepted = match (seen_matches.next(), seen_matches.next()) {
                (Some(only), None) => Some(only.clone()),
                _ => prompt
                    .choose_split(line, &splits)
                    .await
                    .and_then(|index| splits.get(index).cloned()),
            };

            match accepted {
                Some(idol) => {
                    seen_groups.insert(idol.group.to_lowercase());
                    self.add(&idol).await?;
                    report.added += 1;
                }
                None => report.discarded += 1,
            }
        }

        Ok(report)
    }
}

/// All `(group, name)` splits of a line with non-empty halves.
fn candidate_splits(line: &str) -> Vec<Idol> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    (1..tokens.len())
        .map(|at| Idol::new(tokens[..at].join(" "), tokens[at..].join(" ")))
        .collect()
}
