use super::*;

/// Tests listing a guild's nominations.
///
/// Verifies insertion order and isolation from other guilds.
///
/// Expected: Ok with only this guild's nominations, oldest first
#[tokio::test]
async fn lists_in_insertion_order_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Nomination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_nomination(db, 100, 200).await?;
    let second = factory::create_nomination(db, 100, 201).await?;
    factory::create_nomination(db, 999, 202).await?;

    let repo = NominationRepository::new(db);
    let nominations = repo.get_by_guild(100).await?;

    assert_eq!(nominations.len(), 2);
    assert_eq!(nominations[0].id, first.id);
    assert_eq!(nominations[1].id, second.id);

    Ok(())
}

/// Tests listing nominations for a guild without any.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Nomination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NominationRepository::new(db);
    assert!(repo.get_by_guild(100).await?.is_empty());

    Ok(())
}
