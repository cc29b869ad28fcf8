//! Event factory for creating test event records.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{new_record_id, next_id};

/// Factory for creating test events with customizable fields.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    date: DateTime<Utc>,
    status: String,
    results: Option<serde_json::Value>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Event {n}"`
    /// - date: now
    /// - status: `"upcoming"`
    /// - results: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            title: format!("Event {}", n),
            date: Utc::now(),
            status: "upcoming".to_string(),
            results: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Sets the stored status string; any value is accepted.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the raw results JSON exactly as it will be stored.
    pub fn results(mut self, results: serde_json::Value) -> Self {
        self.results = Some(results);
        self
    }

    /// Builds and inserts the event record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            id: ActiveValue::Set(new_record_id()),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            date: ActiveValue::Set(self.date),
            status: ActiveValue::Set(self.status),
            banner_url: ActiveValue::Set(None),
            results: ActiveValue::Set(self.results),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}
