//! Pirate crew domain models and parameters.

use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

use crate::{
    model::crew::{CreateCrewDto, CrewDetailDto, CrewDto},
    server::{
        error::{internal::InternalError, validation::ValidationError, AppError},
        model::{member::Member, require_text, IntoDto},
        util::id::RecordId,
    },
};

/// Region a crew sails in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sea {
    EastBlue,
    WestBlue,
    NorthBlue,
    SouthBlue,
    GrandLine,
}

impl Sea {
    pub const ALL: [Sea; 5] = [
        Sea::EastBlue,
        Sea::WestBlue,
        Sea::NorthBlue,
        Sea::SouthBlue,
        Sea::GrandLine,
    ];

    /// Name as stored and as matched by the `sea` list filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sea::EastBlue => "East Blue",
            Sea::WestBlue => "West Blue",
            Sea::NorthBlue => "North Blue",
            Sea::SouthBlue => "South Blue",
            Sea::GrandLine => "Grand Line",
        }
    }
}

impl fmt::Display for Sea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sea {
    type Err = ValidationError;

    /// Exact, case-sensitive match against the five known names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sea::ALL
            .into_iter()
            .find(|sea| sea.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownSea(s.to_string()))
    }
}

/// Pirate crew.
///
/// `sea` is kept as the stored string so rows written before validation existed
/// still read back.
#[derive(Debug, Clone, PartialEq)]
pub struct Crew {
    pub id: RecordId,
    pub name: String,
    pub sea: String,
    pub description: Option<String>,
    pub emblem_url: Option<String>,
    pub crew_of_month: bool,
    pub created_at: DateTime<Utc>,
}

impl Crew {
    /// Converts an entity model to a crew domain model at the repository boundary.
    pub fn from_entity(entity: entity::piratecrew::Model) -> Result<Self, AppError> {
        let id = RecordId::decode(&entity.id).map_err(|source| InternalError::CorruptStoredId {
            collection: "piratecrew",
            source,
        })?;

        Ok(Self {
            id,
            name: entity.name,
            sea: entity.sea,
            description: entity.description,
            emblem_url: entity.emblem_url,
            crew_of_month: entity.crew_of_month,
            created_at: entity.created_at,
        })
    }
}

impl IntoDto for Crew {
    type Dto = CrewDto;

    fn into_dto(self) -> CrewDto {
        CrewDto {
            id: self.id.encode(),
            name: self.name,
            sea: self.sea,
            description: self.description,
            emblem_url: self.emblem_url,
            crew_of_month: self.crew_of_month,
            created_at: self.created_at,
        }
    }
}

/// A crew joined with the members referencing it at read time.
#[derive(Debug, Clone, PartialEq)]
pub struct CrewWithMembers {
    pub crew: Crew,
    pub members: Vec<Member>,
}

impl IntoDto for CrewWithMembers {
    type Dto = CrewDetailDto;

    fn into_dto(self) -> CrewDetailDto {
        CrewDetailDto {
            crew: self.crew.into_dto(),
            members: self.members.into_dto(),
        }
    }
}

/// Validated parameters for creating a crew.
#[derive(Debug, Clone)]
pub struct CreateCrewParams {
    pub name: String,
    pub sea: Sea,
    pub description: Option<String>,
    pub emblem_url: Option<String>,
    pub crew_of_month: bool,
}

impl CreateCrewParams {
    /// Validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreateCrewParams)` - Name present and sea is a known region
    /// - `Err(ValidationError)` - Blank name or unknown sea
    pub fn from_dto(dto: CreateCrewDto) -> Result<Self, ValidationError> {
        let name = require_text("name", dto.name)?;
        let sea = dto.sea.trim().parse::<Sea>()?;

        Ok(Self {
            name,
            sea,
            description: dto.description,
            emblem_url: dto.emblem_url,
            crew_of_month: dto.crew_of_month,
        })
    }
}

/// Optional exact-match constraints for listing crews.
#[derive(Debug, Clone, Default)]
pub struct CrewListParams {
    /// Sea name compared literally; not required to be a known region.
    pub sea: Option<String>,
    pub crew_of_month: Option<bool>,
}
