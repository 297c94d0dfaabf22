use super::*;

/// Tests listing a guild's winner history.
///
/// Verifies newest-first ordering and isolation from other guilds.
///
/// Expected: Ok with this guild's winners, newest first
#[tokio::test]
async fn lists_newest_first_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(BotwWinner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WinnerRepository::new(db);
    let older = repo
        .append(100, 200, &Idol::new("Aespa", "Karina"), at("2026-01-05T00:00:00Z"))
        .await?;
    let newer = repo
        .append(100, 201, &Idol::new("Twice", "Sana"), at("2026-01-12T00:00:00Z"))
        .await?;
    repo.append(999, 202, &Idol::new("Itzy", "Yeji"), at("2026-01-19T00:00:00Z"))
        .await?;

    let winners = repo.get_by_guild_desc(100).await?;

    assert_eq!(winners.len(), 2);
    assert_eq!(winners[0].id, newer.id);
    assert_eq!(winners[1].id, older.id);

    Ok(())
}

/// Tests the tie-break on equal timestamps.
///
/// Two records share a `won_at` (possible through admin back-fill); the
/// most recently appended one is the current winner.
///
/// Expected: Ok with the later append first
#[tokio::test]
async fn breaks_timestamp_ties_by_append_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(BotwWinner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let won_at = at("2026-01-05T00:00:00Z");
    let repo = WinnerRepository::new(db);
    repo.append(100, 200, &Idol::new("Aespa", "Karina"), won_at).await?;
    let latest = repo.append(100, 201, &Idol::new("Twice", "Sana"), won_at).await?;

    let winners = repo.get_by_guild_desc(100).await?;

    assert_eq!(winners[0].id, latest.id);

    Ok(())
}
