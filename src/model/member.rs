use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct CreateMemberDto {
    /// Id of an existing crew
    pub crew_id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    /// Bounty in Beli, must not be negative
    #[serde(default)]
    pub bounty: i64,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct MemberDto {
    pub id: String,
    pub crew_id: String,
    pub name: String,
    pub role: Option<String>,
    pub bounty: i64,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
