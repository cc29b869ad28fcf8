//! Business logic layer.
//!
//! Services decode caller supplied identifiers, enforce the crew reference check for
//! members, assemble crews with their members, compute the bounty leaderboard and seed
//! fixture data. Every service borrows the shared database connection; none of them
//! holds locks or opens transactions, so multi-step reads and check-then-write flows
//! are not isolated from concurrent writers.

pub mod crew;
pub mod diagnostics;
pub mod event;
pub mod leaderboard;
pub mod marine;
pub mod member;
pub mod seed;

#[cfg(test)]
mod test;
