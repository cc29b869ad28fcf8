pub mod admin;
pub mod crew;
pub mod event;
pub mod leaderboard;
pub mod marine;
pub mod member;
pub mod param;
pub mod root;

#[cfg(test)]
mod test;
