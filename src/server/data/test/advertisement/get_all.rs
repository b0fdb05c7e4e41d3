use super::*;

/// Tests listing an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_advertisements() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_advertisement_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdvertisementRepository::new(db);
    let advertisements = repo.get_all().await?;

    assert!(advertisements.is_empty());

    Ok(())
}

/// Tests that advertisements are listed in insertion order.
///
/// Expected: Ok with advertisements ordered by ascending id
#[tokio::test]
async fn returns_advertisements_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_advertisement_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_advertisement(db).await?;
    let second = factory::create_advertisement(db).await?;
    let third = factory::create_advertisement(db).await?;

    let repo = AdvertisementRepository::new(db);
    let advertisements = repo.get_all().await?;

    let ids: Vec<i32> = advertisements.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
    assert_eq!(advertisements[1].company_name, second.company_name);

    Ok(())
}
