use super::*;

/// Tests lazy creation of a guild's settings row.
///
/// Verifies the defaults: disabled, DEFAULT state, Monday announcements,
/// Thursday winner day, 28-day cooldown, no role or channels.
///
/// Expected: Ok with a fresh default row
#[tokio::test]
async fn creates_row_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = SettingsRepository::new(db).get_or_create(100).await?;

    assert_eq!(settings.guild_id, "100");
    assert!(!settings.enabled);
    assert_eq!(settings.state, "DEFAULT");
    assert_eq!(settings.announcement_day, 0);
    assert_eq!(settings.winner_day, 3);
    assert_eq!(settings.renomination_cooldown_days, 28);
    assert!(settings.winner_role_id.is_none());
    assert!(settings.nominations_channel_id.is_none());
    assert!(settings.announcement_channel_id.is_none());

    Ok(())
}

/// Tests that repeated access returns the existing row.
///
/// Expected: Ok with the same row, no duplicate created
#[tokio::test]
async fn returns_existing_row_on_repeat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingsRepository::new(db);
    let first = repo.get_or_create(100).await?;
    let modified = repo.set_enabled(first.clone(), true).await?;

    let second = repo.get_or_create(100).await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.enabled, modified.enabled);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
