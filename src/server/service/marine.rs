use sea_orm::DatabaseConnection;

use crate::server::{
    data::marine::MarineRepository,
    error::AppError,
    model::marine::{CreateMarineParams, Marine},
    util::id::RecordId,
};

pub struct MarineService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MarineService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a marine and returns its new id
    pub async fn create(&self, params: CreateMarineParams) -> Result<RecordId, AppError> {
        let repo = MarineRepository::new(self.db);

        let marine = Marine::from_entity(repo.create(params).await?)?;

        Ok(marine.id)
    }

    /// Lists marines, optionally truncated to `limit`
    pub async fn list(&self, limit: Option<u64>) -> Result<Vec<Marine>, AppError> {
        let repo = MarineRepository::new(self.db);

        repo.list(limit)
            .await?
            .into_iter()
            .map(Marine::from_entity)
            .collect()
    }
}
