use std::sync::atomic::{AtomicUsize, Ordering};

use sea_orm::DbErr;
use serenity::async_trait;
use test_utils::{builder::TestBuilder, factory};

use super::*;
use crate::error::AppError;

/// Prompt stub that always answers with the same split index and counts
/// how often it was consulted.
struct FixedPrompt {
    answer: Option<usize>,
    calls: AtomicUsize,
}

impl FixedPrompt {
    fn new(answer: Option<usize>) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogPrompt for FixedPrompt {
    async fn choose_split(&self, _line: &str, _options: &[Idol]) -> Option<usize> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

/// Tests idempotent catalog insertion.
///
/// Expected: Ok(true) on first insert, Ok(false) on repeat with different
/// casing
#[tokio::test]
async fn add_is_idempotent_and_case_insensitive() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Idol)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CatalogService::new(db);

    assert!(service.add(&Idol::new("Aespa", "Karina")).await?);
    assert!(!service.add(&Idol::new("AESPA", "karina")).await?);
    assert_eq!(service.all().await?.len(), 1);

    Ok(())
}

/// Tests strict insertion of an already-cataloged idol.
///
/// Expected: Err(AlreadyPresent)
#[tokio::test]
async fn add_strict_rejects_known_idols() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Idol)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_idol(db, "Aespa", "Karina").await?;

    let service = CatalogService::new(db);
    let result = service.add_strict(&Idol::new("aespa", "KARINA")).await;

    assert!(matches!(
        result,
        Err(AppError::Botw(BotwError::AlreadyPresent { .. }))
    ));

    Ok(())
}

/// Tests that a line whose split is already cataloged is dropped as known.
///
/// The known split's group still seeds the seen-group rule for later lines,
/// so the follow-up line is accepted without prompting.
///
/// Expected: Ok with known = 1, added = 1, zero prompts
#[tokio::test]
async fn load_drops_known_lines_and_seeds_their_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Idol)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_idol(db, "Aespa", "Karina").await?;

    let service = CatalogService::new(db);
    let prompt = FixedPrompt::new(None);
    let report = service.load(["Aespa Karina", "Aespa Winter"], &prompt).await?;

    assert_eq!(report.known, 1);
    assert_eq!(report.added, 1);
    assert_eq!(report.discarded, 0);
    assert_eq!(prompt.calls(), 0);
    assert!(service.contains(&Idol::new("Aespa", "Winter")).await?);

    Ok(())
}

/// Tests the seen-group rule within a single load.
///
/// The first line is ambiguous and resolved via the prompt; the second
/// line has exactly one split matching a group seen during this load and
/// is accepted without asking again.
///
/// Expected: Ok with added = 2 and exactly one prompt
#[tokio::test]
async fn load_asks_once_then_reuses_the_seen_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Idol)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CatalogService::new(db);
    let prompt = FixedPrompt::new(Some(0));
    let report = service.load(["Aespa Karina", "Aespa Winter"], &prompt).await?;

    assert_eq!(report.added, 2);
    assert_eq!(prompt.calls(), 1);
    assert!(service.contains(&Idol::new("Aespa", "Karina")).await?);
    assert!(service.contains(&Idol::new("Aespa", "Winter")).await?);

    Ok(())
}

/// Tests discarding of unusable lines.
///
/// A single-token line has no valid split; an ambiguous line the operator
/// declines to resolve is dropped too.
///
/// Expected: Ok with discarded = 2, nothing added
#[tokio::test]
async fn load_discards_unsplittable_and_declined_lines() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Idol)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CatalogService::new(db);
    let prompt = FixedPrompt::new(None);
    let report = service.load(["Karina", "Red Velvet Irene"], &prompt).await?;

    assert_eq!(report.added, 0);
    assert_eq!(report.discarded, 2);
    assert_eq!(prompt.calls(), 1);

    Ok(())
}

/// Tests that blank lines are skipped without counting.
///
/// Expected: Ok with an all-zero report
#[tokio::test]
async fn load_skips_blank_lines() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Idol)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CatalogService::new(db);
    let prompt = FixedPrompt::new(None);
    let report = service.load(["", "   "], &prompt).await?;

    assert_eq!(report, LoadReport::default());

    Ok(())
}

#[test]
fn candidate_splits_cover_every_boundary() {
    let splits = candidate_splits("Red Velvet Irene");

    assert_eq!(splits.len(), 2);
    assert_eq!(splits[0], Idol::new("Red", "Velvet Irene"));
    assert_eq!(splits[1], Idol::new("Red Velvet", "Irene"));

    assert!(candidate_splits("Karina").is_empty());
}
