//! Marine factory for creating test marine records.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{new_record_id, next_id};

/// Factory for creating test marines with customizable fields.
pub struct MarineFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    rank: String,
    bio: Option<String>,
}

impl<'a> MarineFactory<'a> {
    /// Creates a new MarineFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Marine {n}"`
    /// - rank: `"Captain"`
    /// - bio: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            name: format!("Marine {}", n),
            rank: "Captain".to_string(),
            bio: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = rank.into();
        self
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Builds and inserts the marine record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::marine::Model)` - Created marine
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::marine::Model, DbErr> {
        entity::marine::ActiveModel {
            id: ActiveValue::Set(new_record_id()),
            name: ActiveValue::Set(self.name),
            rank: ActiveValue::Set(self.rank),
            bio: ActiveValue::Set(self.bio),
            avatar_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a marine with default values.
pub async fn create_marine(db: &DatabaseConnection) -> Result<entity::marine::Model, DbErr> {
    MarineFactory::new(db).build().await
}
