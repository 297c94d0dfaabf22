use super::*;

/// Tests creating a nomination.
///
/// Verifies that the repository stores the guild, member and idol with
/// display casing intact and stamps a creation time.
///
/// Expected: Ok with nomination created
#[tokio::test]
async fn creates_nomination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Nomination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NominationRepository::new(db);
    let nomination = repo.create(100, 200, &Idol::new("Red Velvet", "Irene")).await?;

    assert_eq!(nomination.guild_id, "100");
    assert_eq!(nomination.member_id, "200");
    assert_eq!(nomination.idol_group, "Red Velvet");
    assert_eq!(nomination.idol_name, "Irene");

    Ok(())
}

/// Tests that the same idol may be nominated in different guilds.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn same_idol_in_different_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Nomination)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NominationRepository::new(db);
    let idol = Idol::new("Aespa", "Karina");

    repo.create(100, 200, &idol).await?;
    repo.create(101, 200, &idol).await?;

    assert_eq!(repo.get_by_guild(100).await?.len(), 1);
    assert_eq!(repo.get_by_guild(101).await?.len(), 1);

    Ok(())
}
