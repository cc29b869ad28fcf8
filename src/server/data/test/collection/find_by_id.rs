use super::*;

/// Tests finding a stored record by its decoded id.
///
/// Expected: Ok(Some(model)) with the matching id
#[tokio::test]
async fn finds_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(PirateCrew)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let crew = factory::create_crew(db).await?;
    let id = RecordId::decode(&crew.id).unwrap();

    let found = Collection::<PirateCrew>::new(db).find_by_id(&id).await?;

    assert_eq!(found, Some(crew));

    Ok(())
}

/// Tests that a well-formed id with no stored record yields None.
///
/// Expected: Ok(None) and exists() returns false
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(PirateCrew)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_crew(db).await?;
    let collection = Collection::<PirateCrew>::new(db);

    assert!(collection.find_by_id(&RecordId::new()).await?.is_none());
    assert!(!collection.exists(&RecordId::new()).await?);

    Ok(())
}

/// Tests that a missing collection surfaces as a database error.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = Collection::<Marine>::new(db).find_by_id(&RecordId::new()).await;

    assert!(result.is_err());

    Ok(())
}
