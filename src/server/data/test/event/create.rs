use super::*;

/// Tests that result items are stored as embedded JSON.
///
/// Expected: Ok with results holding both items in order
#[tokio::test]
async fn stores_embedded_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = EventRepository::new(db)
        .create(CreateEventParams {
            title: "Cosplay Contest".to_string(),
            description: None,
            date: Utc::now() - Duration::days(1),
            status: EventStatus::Completed,
            banner_url: None,
            results: Some(vec![
                EventResultItem {
                    category: "Best Luffy".to_string(),
                    winner: "Alice".to_string(),
                    runner_up: Some("Bob".to_string()),
                    notes: None,
                },
                EventResultItem {
                    category: "Best Zoro".to_string(),
                    winner: "Carol".to_string(),
                    runner_up: None,
                    notes: Some("Three swords".to_string()),
                },
            ]),
        })
        .await?;

    assert_eq!(event.status, "completed");
    let results = event.results.unwrap();
    assert_eq!(results[0]["category"], "Best Luffy");
    assert_eq!(results[0]["runner_up"], "Bob");
    assert_eq!(results[1]["winner"], "Carol");
    assert_eq!(results[1]["notes"], "Three swords");

    Ok(())
}

/// Tests that an event without results stores no results.
///
/// Expected: Ok with results None and status "upcoming"
#[tokio::test]
async fn stores_absent_results_as_null() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = EventRepository::new(db)
        .create(CreateEventParams {
            title: "Watch Party".to_string(),
            description: None,
            date: Utc::now(),
            status: EventStatus::default(),
            banner_url: None,
            results: None,
        })
        .await?;

    assert_eq!(event.status, "upcoming");
    assert!(event.results.is_none());

    Ok(())
}
