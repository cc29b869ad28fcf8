//! SeaORM entities for the Grandline collections.
//!
//! Every table keys its rows by the 24 character hex form of a BSON object id.

pub mod prelude;

pub mod event;
pub mod marine;
pub mod piratecrew;
pub mod piratemember;
