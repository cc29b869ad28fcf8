use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    data::{collection::Collection, filter::ExactMatchFilter},
    model::crew::{CreateCrewParams, CrewListParams},
    util::id::RecordId,
};

use entity::piratecrew::Column;

pub struct CrewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CrewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<'a, entity::prelude::PirateCrew> {
        Collection::new(self.db)
    }

    /// Inserts a crew under a freshly generated id.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created crew
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreateCrewParams,
    ) -> Result<entity::piratecrew::Model, DbErr> {
        let crew = entity::piratecrew::ActiveModel {
            id: ActiveValue::Set(RecordId::new().encode()),
            name: ActiveValue::Set(params.name),
            sea: ActiveValue::Set(params.sea.as_str().to_string()),
            description: ActiveValue::Set(params.description),
            emblem_url: ActiveValue::Set(params.emblem_url),
            crew_of_month: ActiveValue::Set(params.crew_of_month),
            created_at: ActiveValue::Set(Utc::now()),
        };

        self.collection().insert(crew).await
    }

    /// Gets a crew by id.
    ///
    /// # Returns
    /// - `Ok(Some(crew))`: Crew found
    /// - `Ok(None)`: Crew not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(
        &self,
        id: &RecordId,
    ) -> Result<Option<entity::piratecrew::Model>, DbErr> {
        self.collection().find_by_id(id).await
    }

    pub async fn exists(&self, id: &RecordId) -> Result<bool, DbErr> {
        self.collection().exists(id).await
    }

    /// Gets the first crew, in store order, whose name is exactly `name`.
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::piratecrew::Model>, DbErr> {
        let filter = ExactMatchFilter::new().eq(Column::Name, Some(name));

        Ok(self.collection().list(filter, Some(1)).await?.into_iter().next())
    }

    /// Lists crews matching the supplied exact-match constraints.
    ///
    /// # Arguments
    /// - `params`: Optional `sea` and `crew_of_month` values; absent or empty values
    ///   leave that column unconstrained
    pub async fn list(
        &self,
        params: CrewListParams,
    ) -> Result<Vec<entity::piratecrew::Model>, DbErr> {
        let filter = ExactMatchFilter::new()
            .eq_text(Column::Sea, params.sea)
            .eq(Column::CrewOfMonth, params.crew_of_month);

        self.collection().list(filter, None).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        self.collection().count().await
    }
}
