use super::*;

/// Tests that a full update is visible on the next read.
///
/// Expected: Ok with both fields replaced exactly
#[tokio::test]
async fn get_after_update_returns_new_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_advertisement_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_advertisement(db).await?;

    let service = AdvertisementService::new(db);
    let updated = service
        .update(UpdateAdvertisementParam {
            id: created.id,
            company_name: "Acme".to_string(),
            slogan: "".to_string(),
        })
        .await?;
    assert!(updated.is_some());

    let fetched = service.get_by_id(created.id).await?.unwrap();
    assert_eq!(fetched.company_name, "Acme");
    assert_eq!(fetched.slogan, "");

    Ok(())
}

/// Tests that updating a missing advertisement reports absence.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_unknown_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_advertisement_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AdvertisementService::new(db);
    let updated = service
        .update(UpdateAdvertisementParam {
            id: 999,
            company_name: "Acme".to_string(),
            slogan: "Everything you need.".to_string(),
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
