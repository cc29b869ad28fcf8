use sea_orm::DatabaseConnection;

use crate::server::{data::member::MemberRepository, error::AppError, model::member::Member};

/// Number of members returned when no usable limit is requested.
pub const DEFAULT_LEADERBOARD_SIZE: u64 = 10;

/// Coerces a requested leaderboard size to a positive count.
///
/// Absent, zero and negative requests fall back to [`DEFAULT_LEADERBOARD_SIZE`].
pub fn resolve_limit(limit: Option<i64>) -> u64 {
    match limit {
        Some(n) if n > 0 => n as u64,
        _ => DEFAULT_LEADERBOARD_SIZE,
    }
}

pub struct LeaderboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the members with the highest bounties, computed at query time.
    ///
    /// Ordered by bounty descending, ties broken by oldest member first.
    pub async fn top_members(&self, limit: Option<i64>) -> Result<Vec<Member>, AppError> {
        let repo = MemberRepository::new(self.db);

        repo.top_by_bounty(resolve_limit(limit))
            .await?
            .into_iter()
            .map(Member::from_entity)
            .collect()
    }
}
