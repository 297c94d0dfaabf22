use super::*;

/// Tests inserting an idol into the catalog.
///
/// Verifies display casing is preserved while the lookup keys are
/// lowercased.
///
/// Expected: Ok with display values and derived keys
#[tokio::test]
async fn preserves_casing_and_derives_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Idol).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = IdolRepository::new(db);
    let inserted = repo.insert(&IdolValue::new("Red Velvet", "Irene")).await?;

    assert_eq!(inserted.group_name, "Red Velvet");
    assert_eq!(inserted.name, "Irene");
    assert_eq!(inserted.group_key, "red velvet");
    assert_eq!(inserted.name_key, "irene");

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 1);

    Ok(())
}
