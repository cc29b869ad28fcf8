use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::member::MemberDto;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct CreateCrewDto {
    pub name: String,
    /// One of East Blue, West Blue, North Blue, South Blue, Grand Line
    pub sea: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub emblem_url: Option<String>,
    #[serde(default)]
    pub crew_of_month: bool,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct CrewDto {
    pub id: String,
    pub name: String,
    pub sea: String,
    pub description: Option<String>,
    pub emblem_url: Option<String>,
    pub crew_of_month: bool,
    pub created_at: DateTime<Utc>,
}

/// Crew with every member whose `crew_id` references it.
///
/// `members` is always present, and empty when the crew has no members.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct CrewDetailDto {
    #[serde(flatten)]
    pub crew: CrewDto,
    pub members: Vec<MemberDto>,
}
