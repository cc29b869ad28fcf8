use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect};

use crate::server::{
    data::{collection::Collection, filter::ExactMatchFilter},
    model::member::CreateMemberParams,
    util::id::RecordId,
};

use entity::piratemember::Column;

pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<'a, entity::prelude::PirateMember> {
        Collection::new(self.db)
    }

    /// Inserts a member referencing an already resolved crew.
    ///
    /// Does not check that the crew exists; that is the caller's responsibility.
    ///
    /// # Arguments
    /// - `crew_id`: Decoded id of the crew, stored in its encoded form
    /// - `params`: Validated member fields
    ///
    /// # Returns
    /// - `Ok(Model)`: The created member
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        crew_id: &RecordId,
        params: CreateMemberParams,
    ) -> Result<entity::piratemember::Model, DbErr> {
        let member = entity::piratemember::ActiveModel {
            id: ActiveValue::Set(RecordId::new().encode()),
            crew_id: ActiveValue::Set(crew_id.encode()),
            name: ActiveValue::Set(params.name),
            role: ActiveValue::Set(params.role),
            bounty: ActiveValue::Set(params.bounty),
            avatar_url: ActiveValue::Set(params.avatar_url),
            created_at: ActiveValue::Set(Utc::now()),
        };

        self.collection().insert(member).await
    }

    /// Lists members, optionally only those referencing `crew_id`.
    ///
    /// The crew reference is compared against the encoded id, the form it is stored in.
    pub async fn list(
        &self,
        crew_id: Option<&RecordId>,
    ) -> Result<Vec<entity::piratemember::Model>, DbErr> {
        let filter = ExactMatchFilter::new().eq(Column::CrewId, crew_id.map(RecordId::encode));

        self.collection().list(filter, None).await
    }

    /// Gets every member referencing the given crew.
    pub async fn get_by_crew_id(
        &self,
        crew_id: &RecordId,
    ) -> Result<Vec<entity::piratemember::Model>, DbErr> {
        self.list(Some(crew_id)).await
    }

    /// Gets the `limit` members with the highest bounty.
    ///
    /// Ordered by bounty descending; equal bounties are ordered by id ascending, which
    /// for object ids means oldest record first.
    pub async fn top_by_bounty(
        &self,
        limit: u64,
    ) -> Result<Vec<entity::piratemember::Model>, DbErr> {
        entity::prelude::PirateMember::find()
            .order_by_desc(Column::Bounty)
            .order_by_asc(Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        self.collection().count().await
    }
}
