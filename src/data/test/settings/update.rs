use super::*;

/// Tests that state transitions write through to storage.
///
/// Expected: Ok with the new state visible on re-read
#[tokio::test]
async fn state_updates_are_visible_immediately() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingsRepository::new(db);
    let settings = repo.get_or_create(100).await?;

    let updated = repo.set_state(settings, BotwState::WinnerChosen).await?;
    assert_eq!(updated.state, "WINNER_CHOSEN");

    let reread = repo.get_or_create(100).await?;
    assert_eq!(reread.state, "WINNER_CHOSEN");

    Ok(())
}

/// Tests the remaining settings setters.
///
/// Expected: Ok with every field persisted
#[tokio::test]
async fn setters_persist_each_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingsRepository::new(db);
    let mut settings = repo.get_or_create(100).await?;

    settings = repo.set_enabled(settings, true).await?;
    settings = repo.set_days(settings, 4, 0).await?;
    settings = repo.set_winner_role(settings, 555).await?;
    settings = repo.set_nominations_channel(settings, 666).await?;
    settings = repo.set_announcement_channel(settings, 777).await?;

    assert!(settings.enabled);
    assert_eq!(settings.announcement_day, 4);
    assert_eq!(settings.winner_day, 0);
    assert_eq!(settings.winner_role_id, Some("555".to_string()));
    assert_eq!(settings.nominations_channel_id, Some("666".to_string()));
    assert_eq!(settings.announcement_channel_id, Some("777".to_string()));

    Ok(())
}
