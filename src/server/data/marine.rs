use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    data::{collection::Collection, filter::ExactMatchFilter},
    model::marine::CreateMarineParams,
    util::id::RecordId,
};

pub struct MarineRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MarineRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<'a, entity::prelude::Marine> {
        Collection::new(self.db)
    }

    /// Inserts a marine under a freshly generated id.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created marine
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateMarineParams) -> Result<entity::marine::Model, DbErr> {
        let marine = entity::marine::ActiveModel {
            id: ActiveValue::Set(RecordId::new().encode()),
            name: ActiveValue::Set(params.name),
            rank: ActiveValue::Set(params.rank),
            bio: ActiveValue::Set(params.bio),
            avatar_url: ActiveValue::Set(params.avatar_url),
            created_at: ActiveValue::Set(Utc::now()),
        };

        self.collection().insert(marine).await
    }

    /// Lists marines in store order, optionally truncated to `limit` rows.
    pub async fn list(&self, limit: Option<u64>) -> Result<Vec<entity::marine::Model>, DbErr> {
        self.collection().list(ExactMatchFilter::new(), limit).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        self.collection().count().await
    }
}
