use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QuerySelect,
};
use std::marker::PhantomData;

use crate::server::{data::filter::ExactMatchFilter, util::id::RecordId};

/// A SeaORM entity exposed as a record collection.
pub trait RecordKind: EntityTrait {
    /// Collection (table) name.
    const COLLECTION: &'static str;

    /// Column holding the encoded record id.
    fn id_column() -> Self::Column;
}

impl RecordKind for entity::prelude::Marine {
    const COLLECTION: &'static str = "marine";

    fn id_column() -> Self::Column {
        entity::marine::Column::Id
    }
}

impl RecordKind for entity::prelude::PirateCrew {
    const COLLECTION: &'static str = "piratecrew";

    fn id_column() -> Self::Column {
        entity::piratecrew::Column::Id
    }
}

impl RecordKind for entity::prelude::PirateMember {
    const COLLECTION: &'static str = "piratemember";

    fn id_column() -> Self::Column {
        entity::piratemember::Column::Id
    }
}

impl RecordKind for entity::prelude::Event {
    const COLLECTION: &'static str = "event";

    fn id_column() -> Self::Column {
        entity::event::Column::Id
    }
}

/// Generic access to one collection.
pub struct Collection<'a, E> {
    db: &'a DatabaseConnection,
    kind: PhantomData<E>,
}

impl<'a, E> Collection<'a, E>
where
    E: RecordKind,
    E::Model: Send + Sync + 'static,
{
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            kind: PhantomData,
        }
    }

    /// Inserts a fully populated record, id included.
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored record
    /// - `Err(DbErr)`: Database error
    pub async fn insert<A>(&self, record: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
        E::Model: IntoActiveModel<A>,
    {
        record.insert(self.db).await
    }

    /// Gets a record by id.
    ///
    /// # Returns
    /// - `Ok(Some(model))`: Record found
    /// - `Ok(None)`: No record with that id
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: &RecordId) -> Result<Option<E::Model>, DbErr> {
        E::find()
            .filter(E::id_column().eq(id.encode()))
            .one(self.db)
            .await
    }

    /// Checks whether a record with the given id exists.
    pub async fn exists(&self, id: &RecordId) -> Result<bool, DbErr> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Lists records matching every term of `filter`.
    ///
    /// Rows come back in store order; callers needing an order must query for it
    /// explicitly.
    ///
    /// # Arguments
    /// - `filter`: Exact-match constraints; an empty filter matches every record
    /// - `limit`: Optional maximum number of records to return
    pub async fn list(
        &self,
        filter: ExactMatchFilter<E::Column>,
        limit: Option<u64>,
    ) -> Result<Vec<E::Model>, DbErr> {
        E::find()
            .filter(filter.into_condition())
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Counts every record in the collection.
    pub async fn count(&self) -> Result<u64, DbErr> {
        E::find().count(self.db).await
    }
}
