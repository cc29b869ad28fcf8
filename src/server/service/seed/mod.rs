//! Bulk insertion of fixture data.
//!
//! Each collection is seeded independently: it receives its fixtures only when it is
//! empty or when seeding is forced. Inserts are not atomic, so a failure part way
//! leaves whatever was already written in place; re-running without `force` only
//! fills collections that are still empty.

pub mod fixtures;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{
        crew::CrewRepository, event::EventRepository, marine::MarineRepository,
        member::MemberRepository,
    },
    error::{internal::InternalError, AppError},
    model::{member::CreateMemberParams, seed::SeedReport},
    util::id::RecordId,
};

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds every collection with its fixtures.
    ///
    /// # Arguments
    /// - `force`: Insert fixtures even into collections that already hold records
    ///
    /// # Returns
    /// - `Ok(SeedReport)`: Number of records inserted per collection
    /// - `Err(AppError::DbErr)`: Database error; earlier inserts are kept
    pub async fn seed(&self, force: bool) -> Result<SeedReport, AppError> {
        let mut report = SeedReport::default();

        let marine_repo = MarineRepository::new(self.db);
        if force || marine_repo.count().await? == 0 {
            for params in fixtures::marines() {
                marine_repo.create(params).await?;
                report.marines += 1;
            }
        }

        // Crews inserted by this run win over older crews with the same name.
        let crew_repo = CrewRepository::new(self.db);
        let mut seeded_crews: HashMap<String, RecordId> = HashMap::new();
        if force || crew_repo.count().await? == 0 {
            for params in fixtures::crews() {
                let crew = crew_repo.create(params).await?;
                let id = decode_stored(&crew.id, "piratecrew")?;
                seeded_crews.insert(crew.name, id);
                report.crews += 1;
            }
        }

        let member_repo = MemberRepository::new(self.db);
        if force || member_repo.count().await? == 0 {
            for fixture in fixtures::MEMBERS.iter() {
                let crew_id = match seeded_crews.get(fixture.crew_name) {
                    Some(id) => Some(*id),
                    None => match crew_repo.find_by_name(fixture.crew_name).await? {
                        Some(crew) => Some(decode_stored(&crew.id, "piratecrew")?),
                        None => None,
                    },
                };

                let Some(crew_id) = crew_id else {
                    tracing::warn!(
                        "Skipping seed member {}: crew {} not found",
                        fixture.name,
                        fixture.crew_name
                    );
                    continue;
                };

                let params = CreateMemberParams {
                    crew_id: crew_id.encode(),
                    name: fixture.name.to_string(),
                    role: Some(fixture.role.to_string()),
                    bounty: fixture.bounty,
                    avatar_url: None,
                };
                member_repo.create(&crew_id, params).await?;
                report.members += 1;
            }
        }

        let event_repo = EventRepository::new(self.db);
        if force || event_repo.count().await? == 0 {
            for params in fixtures::events(Utc::now()) {
                event_repo.create(params).await?;
                report.events += 1;
            }
        }

        tracing::info!(
            "Seeded {} marines, {} crews, {} members, {} events (force: {})",
            report.marines,
            report.crews,
            report.members,
            report.events,
            force
        );

        Ok(report)
    }
}

fn decode_stored(id: &str, collection: &'static str) -> Result<RecordId, AppError> {
    RecordId::decode(id)
        .map_err(|source| InternalError::CorruptStoredId { collection, source }.into())
}
