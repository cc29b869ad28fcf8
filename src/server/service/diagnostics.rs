use sea_orm::{DatabaseConnection, DbBackend, DbErr};

use entity::prelude::{Event, Marine, PirateCrew, PirateMember};

use crate::server::{
    data::{
        collection::RecordKind, crew::CrewRepository, event::EventRepository,
        marine::MarineRepository, member::MemberRepository,
    },
    model::diagnostics::{CollectionStats, Diagnostics},
};

/// Maximum number of collections listed in a report.
const MAX_COLLECTIONS: usize = 10;

/// Maximum length of an error message embedded in a report.
const MAX_ERROR_LEN: usize = 50;

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_LEN).collect()
}

fn backend_name(backend: DbBackend) -> &'static str {
    match backend {
        DbBackend::Sqlite => "sqlite",
        DbBackend::Postgres => "postgres",
        DbBackend::MySql => "mysql",
        #[allow(unreachable_patterns)]
        _ => "unknown",
    }
}

pub struct DiagnosticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiagnosticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds a best-effort connectivity report.
    ///
    /// Never fails: store errors are folded into the `database` field, truncated to
    /// 50 characters.
    pub async fn report(&self, database_url_set: bool) -> Diagnostics {
        let mut report = Diagnostics {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        };

        if let Err(e) = self.db.ping().await {
            tracing::warn!("Database ping failed: {}", e);
            report.database = format!("❌ Error: {}", truncate(&e.to_string()));
            return report;
        }

        report.database = "✅ Available".to_string();
        let url_state = if database_url_set {
            "✅ Set"
        } else {
            "❌ Not Set"
        };
        report.database_url = Some(url_state.to_string());
        report.database_name = Some(backend_name(self.db.get_database_backend()).to_string());
        report.connection_status = "Connected".to_string();

        match self.collection_stats().await {
            Ok(mut collections) => {
                collections.truncate(MAX_COLLECTIONS);
                report.collections = collections;
                report.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                tracing::warn!("Failed to count collections: {}", e);
                report.database =
                    format!("⚠️ Connected but Error: {}", truncate(&e.to_string()));
            }
        }

        report
    }

    async fn collection_stats(&self) -> Result<Vec<CollectionStats>, DbErr> {
        Ok(vec![
            CollectionStats {
                name: Marine::COLLECTION,
                count: MarineRepository::new(self.db).count().await?,
            },
            CollectionStats {
                name: PirateCrew::COLLECTION,
                count: CrewRepository::new(self.db).count().await?,
            },
            CollectionStats {
                name: PirateMember::COLLECTION,
                count: MemberRepository::new(self.db).count().await?,
            },
            CollectionStats {
                name: Event::COLLECTION,
                count: EventRepository::new(self.db).count().await?,
            },
        ])
    }
}
