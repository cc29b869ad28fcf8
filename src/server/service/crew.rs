use sea_orm::DatabaseConnection;

use crate::server::{
    data::{crew::CrewRepository, member::MemberRepository},
    error::AppError,
    model::{
        crew::{CreateCrewParams, Crew, CrewListParams, CrewWithMembers},
        member::Member,
    },
    util::id::{parse_record_id, RecordId},
};

pub struct CrewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CrewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a crew and returns its new id
    pub async fn create(&self, params: CreateCrewParams) -> Result<RecordId, AppError> {
        let repo = CrewRepository::new(self.db);

        let crew = Crew::from_entity(repo.create(params).await?)?;

        Ok(crew.id)
    }

    /// Lists crews matching the optional exact-match constraints
    pub async fn list(&self, params: CrewListParams) -> Result<Vec<Crew>, AppError> {
        let repo = CrewRepository::new(self.db);

        repo.list(params)
            .await?
            .into_iter()
            .map(Crew::from_entity)
            .collect()
    }

    /// Gets a crew together with every member referencing it.
    ///
    /// The crew and its members are read with two separate queries and no
    /// transaction; a member inserted between them may or may not be included.
    ///
    /// # Arguments
    /// - `crew_id`: Crew id as supplied by the caller
    ///
    /// # Returns
    /// - `Ok(CrewWithMembers)`: Crew with its members, `members` empty when none match
    /// - `Err(AppError::InvalidIdentifier)`: `crew_id` is malformed; nothing was queried
    /// - `Err(AppError::NotFound)`: No crew with that id
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn get_with_members(&self, crew_id: &str) -> Result<CrewWithMembers, AppError> {
        let id = parse_record_id("crew", crew_id)?;

        let crew_repo = CrewRepository::new(self.db);
        let member_repo = MemberRepository::new(self.db);

        let Some(crew) = crew_repo.find_by_id(&id).await? else {
            return Err(AppError::NotFound("Crew not found".to_string()));
        };
        let crew = Crew::from_entity(crew)?;

        let members = member_repo
            .get_by_crew_id(&crew.id)
            .await?
            .into_iter()
            .map(Member::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CrewWithMembers { crew, members })
    }
}
