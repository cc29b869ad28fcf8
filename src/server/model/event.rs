//! Event domain models and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{
    model::event::{CreateEventDto, EventDto, EventResultItemDto},
    server::{
        error::{internal::InternalError, validation::ValidationError, AppError},
        model::{require_text, IntoDto},
        util::id::RecordId,
    },
};

/// Lifecycle stage of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(EventStatus::Upcoming),
            "ongoing" => Ok(EventStatus::Ongoing),
            "completed" => Ok(EventStatus::Completed),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// Result line of an event. Has no identity of its own and lives embedded in its event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResultItem {
    pub category: String,
    pub winner: String,
    #[serde(default)]
    pub runner_up: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl EventResultItem {
    fn from_dto(dto: EventResultItemDto) -> Result<Self, ValidationError> {
        Ok(Self {
            category: require_text("results.category", dto.category)?,
            winner: require_text("results.winner", dto.winner)?,
            runner_up: dto.runner_up,
            notes: dto.notes,
        })
    }

    fn into_dto(self) -> EventResultItemDto {
        EventResultItemDto {
            category: self.category,
            winner: self.winner,
            runner_up: self.runner_up,
            notes: self.notes,
        }
    }
}

/// Fan site event such as a contest or a watch party.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: RecordId,
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    /// Stored status string; validated on write only.
    pub status: String,
    pub banner_url: Option<String>,
    pub results: Option<Vec<EventResultItem>>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Converts an entity model to an event domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Event)` - The converted domain model with decoded result items
    /// - `Err(AppError::InternalErr)` - Stored id or results JSON is corrupt
    pub fn from_entity(entity: entity::event::Model) -> Result<Self, AppError> {
        let results = entity
            .results
            .map(serde_json::from_value::<Vec<EventResultItem>>)
            .transpose()
            .map_err(|source| InternalError::EventResults {
                event_id: entity.id.clone(),
                source,
            })?;

        let id = RecordId::decode(&entity.id).map_err(|source| InternalError::CorruptStoredId {
            collection: "event",
            source,
        })?;

        Ok(Self {
            id,
            title: entity.title,
            description: entity.description,
            date: entity.date,
            status: entity.status,
            banner_url: entity.banner_url,
            results,
            created_at: entity.created_at,
        })
    }
}

impl IntoDto for Event {
    type Dto = EventDto;

    fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id.encode(),
            title: self.title,
            description: self.description,
            date: self.date,
            status: self.status,
            banner_url: self.banner_url,
            results: self
                .results
                .map(|items| items.into_iter().map(EventResultItem::into_dto).collect()),
            created_at: self.created_at,
        }
    }
}

/// Validated parameters for creating an event.
#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub status: EventStatus,
    pub banner_url: Option<String>,
    pub results: Option<Vec<EventResultItem>>,
}

impl CreateEventParams {
    /// Validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreateEventParams)` - Title present, known status, complete result items
    /// - `Err(ValidationError)` - First violation found
    pub fn from_dto(dto: CreateEventDto) -> Result<Self, ValidationError> {
        let title = require_text("title", dto.title)?;
        let status = dto.status.trim().parse::<EventStatus>()?;
        let results = dto
            .results
            .map(|items| {
                items
                    .into_iter()
                    .map(EventResultItem::from_dto)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(Self {
            title,
            description: dto.description,
            date: dto.date,
            status,
            banner_url: dto.banner_url,
            results,
        })
    }
}
