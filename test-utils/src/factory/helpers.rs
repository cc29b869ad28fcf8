//! Shared helper utilities for factory methods.

use bson::oid::ObjectId;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique display names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh record id in its stored form, 24 lowercase hex characters.
pub fn new_record_id() -> String {
    ObjectId::new().to_hex()
}

/// Creates a crew together with one member per given bounty.
///
/// # Arguments
/// - `db` - Database connection
/// - `bounties` - Bounty of each member to create, in insertion order
///
/// # Returns
/// - `Ok((crew, members))` - The crew and its members in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_crew_with_members(
    db: &DatabaseConnection,
    bounties: &[i64],
) -> Result<(entity::piratecrew::Model, Vec<entity::piratemember::Model>), DbErr> {
    let crew = crate::factory::crew::create_crew(db).await?;

    let mut members = Vec::with_capacity(bounties.len());
    for bounty in bounties {
        let member = crate::factory::member::MemberFactory::new(db, &crew.id)
            .bounty(*bounty)
            .build()
            .await?;
        members.push(member);
    }

    Ok((crew, members))
}
