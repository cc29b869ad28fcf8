use super::*;

/// Tests members are ordered by bounty descending and truncated.
///
/// Expected: Ok with the two highest bounties, highest first
#[tokio::test]
async fn orders_by_bounty_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_crew_with_members(
        db,
        &[366_000_000, 3_000_000_000, 1_111_000_000],
    )
    .await?;

    let top = MemberRepository::new(db).top_by_bounty(2).await?;

    let bounties: Vec<i64> = top.iter().map(|m| m.bounty).collect();
    assert_eq!(bounties, vec![3_000_000_000, 1_111_000_000]);

    Ok(())
}

/// Tests that equal bounties are ordered oldest record first.
///
/// Expected: Ok with tied members in insertion order
#[tokio::test]
async fn breaks_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, members) = factory::helpers::create_crew_with_members(db, &[500, 500, 500]).await?;

    let top = MemberRepository::new(db).top_by_bounty(3).await?;

    let mut expected: Vec<String> = members.into_iter().map(|m| m.id).collect();
    expected.sort();
    let ids: Vec<String> = top.into_iter().map(|m| m.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests a limit larger than the collection returns everything.
///
/// Expected: Ok with all 2 members
#[tokio::test]
async fn limit_larger_than_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_grandline_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_crew_with_members(db, &[1, 2]).await?;

    let top = MemberRepository::new(db).top_by_bounty(10).await?;

    assert_eq!(top.len(), 2);

    Ok(())
}
