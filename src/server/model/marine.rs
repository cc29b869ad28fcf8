//! Marine domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::marine::{CreateMarineDto, MarineDto},
    server::{
        error::{internal::InternalError, validation::ValidationError, AppError},
        model::{require_text, IntoDto},
        util::id::RecordId,
    },
};

/// Marine officer profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Marine {
    pub id: RecordId,
    pub name: String,
    pub rank: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Marine {
    /// Converts an entity model to a marine domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Marine)` - The converted domain model
    /// - `Err(AppError::InternalErr(CorruptStoredId))` - Stored id does not decode
    pub fn from_entity(entity: entity::marine::Model) -> Result<Self, AppError> {
        let id = RecordId::decode(&entity.id).map_err(|source| InternalError::CorruptStoredId {
            collection: "marine",
            source,
        })?;

        Ok(Self {
            id,
            name: entity.name,
            rank: entity.rank,
            bio: entity.bio,
            avatar_url: entity.avatar_url,
            created_at: entity.created_at,
        })
    }
}

impl IntoDto for Marine {
    type Dto = MarineDto;

    fn into_dto(self) -> MarineDto {
        MarineDto {
            id: self.id.encode(),
            name: self.name,
            rank: self.rank,
            bio: self.bio,
            avatar_url: self.avatar_url,
            created_at: self.created_at,
        }
    }
}

/// Validated parameters for creating a marine.
#[derive(Debug, Clone)]
pub struct CreateMarineParams {
    pub name: String,
    pub rank: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl CreateMarineParams {
    /// Validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreateMarineParams)` - Name and rank are present
    /// - `Err(ValidationError::EmptyField)` - Name or rank is blank
    pub fn from_dto(dto: CreateMarineDto) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_text("name", dto.name)?,
            rank: require_text("rank", dto.rank)?,
            bio: dto.bio,
            avatar_url: dto.avatar_url,
        })
    }
}
