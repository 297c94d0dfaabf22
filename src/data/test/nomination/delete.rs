use super::*;

/// Tests deleting a member's nomination.
///
/// Verifies the first delete reports removal, a repeat is a no-op, and
/// other members' nominations are untouched.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_only_the_members_nomination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Nomination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_nomination(db, 100, 200).await?;
    factory::create_nomination(db, 100, 201).await?;

    let repo = NominationRepository::new(db);

    assert!(repo.delete(100, 200).await?);
    assert!(!repo.delete(100, 200).await?);
    assert_eq!(repo.get_by_guild(100).await?.len(), 1);

    Ok(())
}
