//! Seeding outcome.

use crate::{model::admin::SeedReportDto, server::model::IntoDto};

/// Number of fixture records inserted per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub marines: u64,
    pub crews: u64,
    pub members: u64,
    pub events: u64,
}

impl IntoDto for SeedReport {
    type Dto = SeedReportDto;

    fn into_dto(self) -> SeedReportDto {
        SeedReportDto {
            marines: self.marines,
            crews: self.crews,
            members: self.members,
            events: self.events,
        }
    }
}
