use super::*;

/// Tests that an empty filter matches every record.
///
/// Expected: Ok with all 3 marines
#[tokio::test]
async fn empty_filter_lists_everything() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Marine)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_marine(db).await?;
    }

    let marines = Collection::<Marine>::new(db)
        .list(ExactMatchFilter::new(), None)
        .await?;

    assert_eq!(marines.len(), 3);

    Ok(())
}

/// Tests that the limit truncates the result.
///
/// Expected: Ok with exactly 2 of the 5 marines
#[tokio::test]
async fn limit_truncates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Marine)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_marine(db).await?;
    }

    let marines = Collection::<Marine>::new(db)
        .list(ExactMatchFilter::new(), Some(2))
        .await?;

    assert_eq!(marines.len(), 2);

    Ok(())
}

/// Tests that every filter term must match.
///
/// Expected: Ok with only the crew matching both sea and crew_of_month
#[tokio::test]
async fn filter_terms_are_conjunctive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(PirateCrew)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let highlighted = factory::crew::CrewFactory::new(db)
        .sea("East Blue")
        .crew_of_month(true)
        .build()
        .await?;
    factory::crew::CrewFactory::new(db)
        .sea("East Blue")
        .build()
        .await?;
    factory::crew::CrewFactory::new(db)
        .sea("Grand Line")
        .crew_of_month(true)
        .build()
        .await?;

    let filter = ExactMatchFilter::new()
        .eq_text(entity::piratecrew::Column::Sea, Some("East Blue".to_string()))
        .eq(entity::piratecrew::Column::CrewOfMonth, Some(true));
    let crews = Collection::<PirateCrew>::new(db).list(filter, None).await?;

    assert_eq!(crews, vec![highlighted]);

    Ok(())
}

/// Tests counting records.
///
/// Expected: Ok(0) before inserts, Ok(2) after
#[tokio::test]
async fn counts_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let collection = Collection::<Event>::new(db);

    assert_eq!(collection.count().await?, 0);

    factory::create_event(db).await?;
    factory::create_event(db).await?;

    assert_eq!(collection.count().await?, 2);

    Ok(())
}
