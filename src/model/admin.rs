use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of fixture records inserted per collection by a seeding run.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct SeedReportDto {
    pub marines: u64,
    pub crews: u64,
    pub members: u64,
    pub events: u64,
}
