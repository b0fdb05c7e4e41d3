use super::*;

/// Tests that a deleted advertisement can no longer be read.
///
/// Expected: Ok(true) from delete, then Ok(None) from get
#[tokio::test]
async fn get_after_delete_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_advertisement_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_advertisement(db).await?;

    let service = AdvertisementService::new(db);
    assert!(service.delete(created.id).await?);
    assert!(service.get_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting an advertisement twice.
///
/// Expected: Ok(true) the first time, Ok(false) the second
#[tokio::test]
async fn second_delete_returns_false() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_advertisement_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_advertisement(db).await?;

    let service = AdvertisementService::new(db);
    assert!(service.delete(created.id).await?);
    assert!(!service.delete(created.id).await?);

    Ok(())
}
