//! Crew member domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::member::{CreateMemberDto, MemberDto},
    server::{
        error::{internal::InternalError, validation::ValidationError, AppError},
        model::{require_text, IntoDto},
        util::id::RecordId,
    },
};

/// Pirate crew member.
///
/// `crew_id` is kept as the stored string: it is a foreign key by convention only and
/// may reference a crew that has since been removed out-of-band.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: RecordId,
    pub crew_id: String,
    pub name: String,
    pub role: Option<String>,
    pub bounty: i64,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Converts an entity model to a member domain model at the repository boundary.
    pub fn from_entity(entity: entity::piratemember::Model) -> Result<Self, AppError> {
        let id = RecordId::decode(&entity.id).map_err(|source| InternalError::CorruptStoredId {
            collection: "piratemember",
            source,
        })?;

        Ok(Self {
            id,
            crew_id: entity.crew_id,
            name: entity.name,
            role: entity.role,
            bounty: entity.bounty,
            avatar_url: entity.avatar_url,
            created_at: entity.created_at,
        })
    }
}

impl IntoDto for Member {
    type Dto = MemberDto;

    fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id.encode(),
            crew_id: self.crew_id,
            name: self.name,
            role: self.role,
            bounty: self.bounty,
            avatar_url: self.avatar_url,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a member, shape-validated but with an unresolved crew reference.
///
/// The crew reference is decoded and checked for existence by the member service
/// before anything is written.
#[derive(Debug, Clone)]
pub struct CreateMemberParams {
    /// Crew reference exactly as supplied by the caller.
    pub crew_id: String,
    pub name: String,
    pub role: Option<String>,
    pub bounty: i64,
    pub avatar_url: Option<String>,
}

impl CreateMemberParams {
    /// Validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreateMemberParams)` - Name present and bounty non-negative
    /// - `Err(ValidationError)` - Blank name or negative bounty
    pub fn from_dto(dto: CreateMemberDto) -> Result<Self, ValidationError> {
        let name = require_text("name", dto.name)?;

        if dto.bounty < 0 {
            return Err(ValidationError::NegativeBounty(dto.bounty));
        }

        Ok(Self {
            crew_id: dto.crew_id,
            name,
            role: dto.role,
            bounty: dto.bounty,
            avatar_url: dto.avatar_url,
        })
    }
}
