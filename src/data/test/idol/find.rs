use super::*;

/// Tests case-insensitive catalog lookup.
///
/// Expected: Ok(Some) regardless of query casing
#[tokio::test]
async fn finds_regardless_of_casing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Idol).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cataloged = factory::create_idol(db, "Red Velvet", "Irene").await?;

    let repo = IdolRepository::new(db);
    let found = repo.find(&IdolValue::new("RED VELVET", "irene")).await?;

    assert_eq!(found.map(|i| i.id), Some(cataloged.id));

    Ok(())
}

/// Tests lookup of an uncataloged idol.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_not_cataloged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Idol).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_idol(db, "Red Velvet", "Irene").await?;

    let repo = IdolRepository::new(db);
    assert!(repo.find(&IdolValue::new("Red Velvet", "Joy")).await?.is_none());

    Ok(())
}
