use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    data::{collection::Collection, filter::ExactMatchFilter},
    model::event::CreateEventParams,
    util::id::RecordId,
};

use entity::event::Column;

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<'a, entity::prelude::Event> {
        Collection::new(self.db)
    }

    /// Inserts an event with its embedded result items under a freshly generated id.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created event
    /// - `Err(DbErr)`: Database error, or result items that fail to serialize
    pub async fn create(&self, params: CreateEventParams) -> Result<entity::event::Model, DbErr> {
        let results = params
            .results
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        let event = entity::event::ActiveModel {
            id: ActiveValue::Set(RecordId::new().encode()),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            date: ActiveValue::Set(params.date),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            banner_url: ActiveValue::Set(params.banner_url),
            results: ActiveValue::Set(results),
            created_at: ActiveValue::Set(Utc::now()),
        };

        self.collection().insert(event).await
    }

    /// Gets an event by id.
    pub async fn find_by_id(&self, id: &RecordId) -> Result<Option<entity::event::Model>, DbErr> {
        self.collection().find_by_id(id).await
    }

    /// Lists events, optionally only those whose status is exactly `status`.
    pub async fn list(&self, status: Option<String>) -> Result<Vec<entity::event::Model>, DbErr> {
        let filter = ExactMatchFilter::new().eq_text(Column::Status, status);

        self.collection().list(filter, None).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        self.collection().count().await
    }
}
