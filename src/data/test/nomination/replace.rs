use super::*;

/// Tests replacing a nomination's idol in place.
///
/// Verifies that the member and original creation time survive an override
/// and only the idol changes.
///
/// Expected: Ok with updated idol, original timestamp
#[tokio::test]
async fn replaces_idol_keeping_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Nomination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::nomination::NominationFactory::new(db)
        .guild_id(100)
        .member_id(200)
        .idol("Aespa", "Karina")
        .created_at("2026-01-01T12:00:00Z".parse().unwrap())
        .build()
        .await?;

    let repo = NominationRepository::new(db);
    let replaced = repo.replace(existing.clone(), &Idol::new("Aespa", "Winter")).await?;

    assert_eq!(replaced.id, existing.id);
    assert_eq!(replaced.member_id, "200");
    assert_eq!(replaced.idol_name, "Winter");
    assert_eq!(replaced.created_at, existing.created_at);

    Ok(())
}
