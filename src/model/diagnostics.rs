use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct CollectionStatsDto {
    pub name: String,
    pub count: u64,
}

/// Best-effort store connectivity report. Never an error response.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct DiagnosticsDto {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<CollectionStatsDto>,
}
