use sea_orm::DatabaseConnection;

use crate::server::{
    data::{crew::CrewRepository, member::MemberRepository},
    error::AppError,
    model::member::{CreateMemberParams, Member},
    util::id::{parse_record_id, RecordId},
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a member after checking that its crew exists.
    ///
    /// The crew reference is decoded first, then looked up, and only then is the member
    /// written. The check and the insert are not atomic: a crew removed in between is
    /// not detected.
    ///
    /// # Returns
    /// - `Ok(RecordId)`: Id of the new member
    /// - `Err(AppError::InvalidIdentifier)`: `crew_id` is malformed; nothing was queried
    /// - `Err(AppError::NotFound)`: `crew_id` does not reference a stored crew; nothing
    ///   was written
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn create(&self, params: CreateMemberParams) -> Result<RecordId, AppError> {
        let crew_id = parse_record_id("crew", &params.crew_id)?;

        let crew_repo = CrewRepository::new(self.db);
        if !crew_repo.exists(&crew_id).await? {
            return Err(AppError::NotFound("Crew not found".to_string()));
        }

        let member_repo = MemberRepository::new(self.db);
        let member = Member::from_entity(member_repo.create(&crew_id, params).await?)?;

        Ok(member.id)
    }

    /// Lists members, optionally only those of one crew.
    ///
    /// # Returns
    /// - `Ok(Vec<Member>)`: Matching members in store order
    /// - `Err(AppError::InvalidIdentifier)`: `crew_id` filter is malformed
    pub async fn list(&self, crew_id: Option<String>) -> Result<Vec<Member>, AppError> {
        let crew_id = crew_id
            .filter(|id| !id.is_empty())
            .map(|id| parse_record_id("crew", &id))
            .transpose()?;

        let repo = MemberRepository::new(self.db);

        repo.list(crew_id.as_ref())
            .await?
            .into_iter()
            .map(Member::from_entity)
            .collect()
    }
}
