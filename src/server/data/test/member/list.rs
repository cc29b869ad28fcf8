use super::*;

/// Tests listing only the members of one crew.
///
/// Expected: Ok with the 2 members of the first crew
#[tokio::test]
async fn filters_by_crew() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (crew, members) = factory::helpers::create_crew_with_members(db, &[1, 2]).await?;
    factory::helpers::create_crew_with_members(db, &[3]).await?;
    let crew_id = RecordId::decode(&crew.id).unwrap();

    let listed = MemberRepository::new(db).get_by_crew_id(&crew_id).await?;

    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|m| m.crew_id == crew.id));
    assert!(members.iter().all(|m| listed.contains(m)));

    Ok(())
}

/// Tests listing members of a crew that has none.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_crew_without_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_crew_with_members(db, &[1]).await?;
    let lonely = factory::create_crew(db).await?;
    let crew_id = RecordId::decode(&lonely.id).unwrap();

    let listed = MemberRepository::new(db).list(Some(&crew_id)).await?;

    assert!(listed.is_empty());

    Ok(())
}

/// Tests listing without a crew lists every member.
///
/// Expected: Ok with all 3 members
#[tokio::test]
async fn lists_all_without_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_crew_with_members(db, &[1, 2]).await?;
    factory::helpers::create_crew_with_members(db, &[3]).await?;

    let listed = MemberRepository::new(db).list(None).await?;

    assert_eq!(listed.len(), 3);

    Ok(())
}
