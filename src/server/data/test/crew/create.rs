use super::*;

/// Tests creating a crew stores the sea as its display name.
///
/// Expected: Ok with a 24 character id, sea "Grand Line" and crew_of_month kept
#[tokio::test]
async fn creates_crew() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PirateCrew)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let crew = CrewRepository::new(db)
        .create(CreateCrewParams {
            name: "Red Hair Pirates".to_string(),
            sea: Sea::GrandLine,
            description: None,
            emblem_url: None,
            crew_of_month: true,
        })
        .await?;

    assert_eq!(crew.id.len(), 24);
    assert_eq!(crew.name, "Red Hair Pirates");
    assert_eq!(crew.sea, "Grand Line");
    assert!(crew.crew_of_month);

    Ok(())
}
