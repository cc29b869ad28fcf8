use sea_orm::DatabaseConnection;

use crate::server::{
    data::event::EventRepository,
    error::AppError,
    model::event::{CreateEventParams, Event},
    util::id::{parse_record_id, RecordId},
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event and returns its new id
    pub async fn create(&self, params: CreateEventParams) -> Result<RecordId, AppError> {
        let repo = EventRepository::new(self.db);

        let event = Event::from_entity(repo.create(params).await?)?;

        Ok(event.id)
    }

    /// Lists events, optionally only those with exactly the given status
    pub async fn list(&self, status: Option<String>) -> Result<Vec<Event>, AppError> {
        let repo = EventRepository::new(self.db);

        repo.list(status)
            .await?
            .into_iter()
            .map(Event::from_entity)
            .collect()
    }

    /// Gets an event by its caller supplied id.
    ///
    /// # Returns
    /// - `Ok(Some(event))`: Event found
    /// - `Ok(None)`: No event with that id
    /// - `Err(AppError::InvalidIdentifier)`: `event_id` is malformed
    pub async fn get_by_id(&self, event_id: &str) -> Result<Option<Event>, AppError> {
        let id = parse_record_id("event", event_id)?;

        let repo = EventRepository::new(self.db);

        repo.find_by_id(&id)
            .await?
            .map(Event::from_entity)
            .transpose()
    }
}
