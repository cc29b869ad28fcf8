use super::*;

/// Tests filtering events by exact status.
///
/// Expected: Ok with only the completed events
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_event(db).await?;
    factory::event::EventFactory::new(db)
        .status("completed")
        .build()
        .await?;
    factory::event::EventFactory::new(db)
        .status("completed")
        .build()
        .await?;
    let repo = EventRepository::new(db);

    let completed = repo.list(Some("completed".to_string())).await?;
    let unknown = repo.list(Some("Completed".to_string())).await?;
    let all = repo.list(None).await?;

    assert_eq!(completed.len(), 2);
    assert!(completed.iter().all(|e| e.status == "completed"));
    assert!(unknown.is_empty());
    assert_eq!(all.len(), 3);

    Ok(())
}
