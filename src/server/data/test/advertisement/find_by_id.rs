use super::*;

/// Tests finding an existing advertisement.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_advertisement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_advertisement_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_advertisement(db).await?;

    let repo = AdvertisementRepository::new(db);
    let found = repo.find_by_id(created.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.company_name, created.company_name);
    assert_eq!(found.slogan, created.slogan);

    Ok(())
}

/// Tests finding an id that was never assigned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_advertisement_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdvertisementRepository::new(db);
    let found = repo.find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
