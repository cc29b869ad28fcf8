use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_status() -> String {
    "upcoming".to_string()
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct EventResultItemDto {
    pub category: String,
    pub winner: String,
    #[serde(default)]
    pub runner_up: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct CreateEventDto {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    /// One of upcoming, ongoing, completed (default: upcoming)
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub banner_url: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<EventResultItemDto>>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct EventDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    pub status: String,
    pub banner_url: Option<String>,
    pub results: Option<Vec<EventResultItemDto>>,
    pub created_at: DateTime<Utc>,
}
