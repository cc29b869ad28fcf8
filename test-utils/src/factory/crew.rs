//! Pirate crew factory for creating test crew records.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{new_record_id, next_id};

/// Factory for creating test crews with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let crew = CrewFactory::new(&db)
///     .name("Straw Hat Pirates")
///     .sea("East Blue")
///     .crew_of_month(true)
///     .build()
///     .await?;
/// ```
pub struct CrewFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    sea: String,
    crew_of_month: bool,
}

impl<'a> CrewFactory<'a> {
    /// Creates a new CrewFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Crew {n}"`
    /// - sea: `"East Blue"`
    /// - crew_of_month: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            name: format!("Crew {}", n),
            sea: "East Blue".to_string(),
            crew_of_month: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored sea string; any value is accepted, known region or not.
    pub fn sea(mut self, sea: impl Into<String>) -> Self {
        self.sea = sea.into();
        self
    }

    pub fn crew_of_month(mut self, crew_of_month: bool) -> Self {
        self.crew_of_month = crew_of_month;
        self
    }

    /// Builds and inserts the crew record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::piratecrew::Model)` - Created crew
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::piratecrew::Model, DbErr> {
        entity::piratecrew::ActiveModel {
            id: ActiveValue::Set(new_record_id()),
            name: ActiveValue::Set(self.name),
            sea: ActiveValue::Set(self.sea),
            description: ActiveValue::Set(None),
            emblem_url: ActiveValue::Set(None),
            crew_of_month: ActiveValue::Set(self.crew_of_month),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a crew with default values.
pub async fn create_crew(db: &DatabaseConnection) -> Result<entity::piratecrew::Model, DbErr> {
    CrewFactory::new(db).build().await
}
