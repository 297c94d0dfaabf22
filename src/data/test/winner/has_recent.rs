use super::*;

/// Tests the renomination cooldown check inside the window.
///
/// Expected: Ok(true) for a win 7 days ago with a 28-day window
#[tokio::test]
async fn win_inside_window_is_recent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(BotwWinner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WinnerRepository::new(db);
    let idol = Idol::new("Aespa", "Karina");
    repo.append(100, 200, &idol, at("2026-01-05T00:00:00Z")).await?;

    assert!(repo.has_recent(100, &idol, 28, at("2026-01-12T00:00:00Z")).await?);

    Ok(())
}

/// Tests the cooldown check outside the window.
///
/// Expected: Ok(false) for a win 30 days ago with a 28-day window
#[tokio::test]
async fn win_outside_window_is_not_recent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(BotwWinner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WinnerRepository::new(db);
    let idol = Idol::new("Aespa", "Karina");
    repo.append(100, 200, &idol, at("2026-01-05T00:00:00Z")).await?;

    assert!(!repo.has_recent(100, &idol, 28, at("2026-02-04T00:00:00Z")).await?);

    Ok(())
}

/// Tests that the idol comparison ignores casing.
///
/// Expected: Ok(true) when only the casing differs
#[tokio::test]
async fn comparison_is_case_insensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(BotwWinner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WinnerRepository::new(db);
    repo.append(100, 200, &Idol::new("Aespa", "Karina"), at("2026-01-05T00:00:00Z"))
        .await?;

    let lowercase = Idol::new("aespa", "karina");
    assert!(repo.has_recent(100, &lowercase, 28, at("2026-01-12T00:00:00Z")).await?);

    Ok(())
}

/// Tests that other guilds' wins never trip the cooldown.
///
/// Expected: Ok(false) for a win recorded in a different guild
#[tokio::test]
async fn other_guilds_wins_are_ignored() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(BotwWinner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WinnerRepository::new(db);
    let idol = Idol::new("Aespa", "Karina");
    repo.append(999, 200, &idol, at("2026-01-05T00:00:00Z")).await?;

    assert!(!repo.has_recent(100, &idol, 28, at("2026-01-12T00:00:00Z")).await?);

    Ok(())
}
