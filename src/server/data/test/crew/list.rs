use super::*;

/// Tests that the sea filter is an exact match.
///
/// Crews whose sea merely contains "East Blue" are excluded.
///
/// Expected: Ok with only the crew whose sea is exactly "East Blue"
#[tokio::test]
async fn sea_filter_is_exact() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PirateCrew)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let east_blue = factory::crew::CrewFactory::new(db)
        .sea("East Blue")
        .build()
        .await?;
    factory::crew::CrewFactory::new(db)
        .sea("East Blue Outskirts")
        .build()
        .await?;
    factory::crew::CrewFactory::new(db)
        .sea("Far East Blue")
        .build()
        .await?;
    factory::crew::CrewFactory::new(db)
        .sea("east blue")
        .build()
        .await?;

    let crews = CrewRepository::new(db)
        .list(CrewListParams {
            sea: Some("East Blue".to_string()),
            crew_of_month: None,
        })
        .await?;

    assert_eq!(crews, vec![east_blue]);

    Ok(())
}

/// Tests that pattern and operator syntax in the sea value is matched literally.
///
/// Expected: Ok with only the crew whose stored sea equals the raw value
#[tokio::test]
async fn sea_filter_treats_special_characters_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PirateCrew)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::crew::CrewFactory::new(db)
        .sea("East Blue")
        .build()
        .await?;
    let literal = factory::crew::CrewFactory::new(db)
        .sea("East%Blue")
        .build()
        .await?;
    let repo = CrewRepository::new(db);

    for value in ["%", "East%", "East_Blue", ".*", "{\"$ne\": null}", "' OR '1'='1"] {
        let crews = repo
            .list(CrewListParams {
                sea: Some(value.to_string()),
                crew_of_month: None,
            })
            .await?;
        assert!(crews.is_empty(), "{:?} should match nothing", value);
    }

    let crews = repo
        .list(CrewListParams {
            sea: Some("East%Blue".to_string()),
            crew_of_month: None,
        })
        .await?;
    assert_eq!(crews, vec![literal]);

    Ok(())
}

/// Tests filtering on the crew of the month flag, including false.
///
/// Expected: Ok with 1 crew for true and 2 crews for false
#[tokio::test]
async fn filters_by_crew_of_month() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PirateCrew)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::crew::CrewFactory::new(db)
        .crew_of_month(true)
        .build()
        .await?;
    factory::create_crew(db).await?;
    factory::create_crew(db).await?;
    let repo = CrewRepository::new(db);

    let highlighted = repo
        .list(CrewListParams {
            sea: None,
            crew_of_month: Some(true),
        })
        .await?;
    let others = repo
        .list(CrewListParams {
            sea: None,
            crew_of_month: Some(false),
        })
        .await?;

    assert_eq!(highlighted.len(), 1);
    assert!(highlighted[0].crew_of_month);
    assert_eq!(others.len(), 2);

    Ok(())
}

/// Tests that an empty sea value leaves the sea unconstrained.
///
/// Expected: Ok with every crew
#[tokio::test]
async fn empty_sea_matches_any() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PirateCrew)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::crew::CrewFactory::new(db).sea("East Blue").build().await?;
    factory::crew::CrewFactory::new(db).sea("North Blue").build().await?;

    let crews = CrewRepository::new(db)
        .list(CrewListParams {
            sea: Some(String::new()),
            crew_of_month: None,
        })
        .await?;

    assert_eq!(crews.len(), 2);

    Ok(())
}
