use super::*;

/// Tests the current/previous winner lookup on an empty history.
///
/// Expected: Ok((None, None))
#[tokio::test]
async fn empty_history_has_no_winners() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(BotwWinner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (current, previous) = WinnerRepository::new(db).top_two(100).await?;

    assert!(current.is_none());
    assert!(previous.is_none());

    Ok(())
}

/// Tests the lookup with a single winner on record.
///
/// Expected: Ok((Some(current), None))
#[tokio::test]
async fn single_winner_has_no_previous() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(BotwWinner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let winner = factory::create_winner(db, 100, 200).await?;

    let (current, previous) = WinnerRepository::new(db).top_two(100).await?;

    assert_eq!(current.map(|w| w.id), Some(winner.id));
    assert!(previous.is_none());

    Ok(())
}

/// Tests the lookup with several winners on record.
///
/// Expected: Ok with the two newest, current first
#[tokio::test]
async fn returns_newest_two_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(BotwWinner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WinnerRepository::new(db);
    repo.append(100, 200, &Idol::new("Aespa", "Karina"), at("2026-01-05T00:00:00Z"))
        .await?;
    let second = repo
        .append(100, 201, &Idol::new("Twice", "Sana"), at("2026-01-12T00:00:00Z"))
        .await?;
    let third = repo
        .append(100, 202, &Idol::new("Itzy", "Yeji"), at("2026-01-19T00:00:00Z"))
        .await?;

    let (current, previous) = repo.top_two(100).await?;

    assert_eq!(current.map(|w| w.id), Some(third.id));
    assert_eq!(previous.map(|w| w.id), Some(second.id));

    Ok(())
}
