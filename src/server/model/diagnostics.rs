//! Store connectivity report.

use crate::{
    model::diagnostics::{CollectionStatsDto, DiagnosticsDto},
    server::model::IntoDto,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionStats {
    pub name: &'static str,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<CollectionStats>,
}

impl IntoDto for Diagnostics {
    type Dto = DiagnosticsDto;

    fn into_dto(self) -> DiagnosticsDto {
        DiagnosticsDto {
            backend: self.backend,
            database: self.database,
            database_url: self.database_url,
            database_name: self.database_name,
            connection_status: self.connection_status,
            collections: self
                .collections
                .into_iter()
                .map(|c| CollectionStatsDto {
                    name: c.name.to_string(),
                    count: c.count,
                })
                .collect(),
        }
    }
}
