//! Database repository layer for all collections.
//!
//! `Collection` provides the generic insert / find / list / count operations over any
//! record kind, and `ExactMatchFilter` builds the only kind of list constraint the API
//! accepts. The per-kind repositories build entity active models from parameter models
//! and add the few queries that are specific to one collection (crew membership,
//! bounty ordering).

pub mod collection;
pub mod crew;
pub mod event;
pub mod filter;
pub mod marine;
pub mod member;

#[cfg(test)]
mod test;
