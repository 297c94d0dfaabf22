use super::*;

/// Tests looking up a member's nomination.
///
/// Expected: Ok with the member's nomination
#[tokio::test]
async fn finds_members_nomination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Nomination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_nomination(db, 100, 200).await?;
    factory::create_nomination(db, 100, 201).await?;

    let repo = NominationRepository::new(db);
    let found = repo.get_by_member(100, 200).await?;

    assert_eq!(found.map(|n| n.id), Some(created.id));

    Ok(())
}

/// Tests looking up a member with no nomination.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_nomination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Nomination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_nomination(db, 100, 200).await?;

    let repo = NominationRepository::new(db);
    assert!(repo.get_by_member(100, 999).await?.is_none());

    Ok(())
}
