use super::*;

/// Tests looking a crew up by its exact name.
///
/// Expected: Ok(Some) for the exact name, Ok(None) for a differently cased name
#[tokio::test]
async fn matches_exact_name_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PirateCrew)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let crew = factory::crew::CrewFactory::new(db)
        .name("Buggy Pirates")
        .build()
        .await?;
    let repo = CrewRepository::new(db);

    assert_eq!(repo.find_by_name("Buggy Pirates").await?, Some(crew));
    assert_eq!(repo.find_by_name("buggy pirates").await?, None);
    assert_eq!(repo.find_by_name("Buggy").await?, None);

    Ok(())
}
