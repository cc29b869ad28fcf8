//! Crew member factory for creating test member records.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{new_record_id, next_id};

/// Factory for creating test members with customizable fields.
///
/// The crew reference is stored as given and is not checked, so a member can point
/// at a crew that does not exist.
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    crew_id: String,
    name: String,
    role: Option<String>,
    bounty: i64,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Member {n}"`
    /// - role: `None`
    /// - bounty: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the record
    /// - `crew_id` - Encoded id of the crew the member belongs to
    pub fn new(db: &'a DatabaseConnection, crew_id: impl Into<String>) -> Self {
        let n = next_id();
        Self {
            db,
            crew_id: crew_id.into(),
            name: format!("Member {}", n),
            role: None,
            bounty: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn bounty(mut self, bounty: i64) -> Self {
        self.bounty = bounty;
        self
    }

    /// Builds and inserts the member record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::piratemember::Model)` - Created member
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::piratemember::Model, DbErr> {
        entity::piratemember::ActiveModel {
            id: ActiveValue::Set(new_record_id()),
            crew_id: ActiveValue::Set(self.crew_id),
            name: ActiveValue::Set(self.name),
            role: ActiveValue::Set(self.role),
            bounty: ActiveValue::Set(self.bounty),
            avatar_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values for the given crew.
pub async fn create_member(
    db: &DatabaseConnection,
    crew_id: impl Into<String>,
) -> Result<entity::piratemember::Model, DbErr> {
    MemberFactory::new(db, crew_id).build().await
}
