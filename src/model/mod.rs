//! API data transfer objects shared by every endpoint.
//!
//! Every record DTO exposes the record identifier as an `id` string; the storage
//! level key never leaks into a response under any other name.

pub mod admin;
pub mod api;
pub mod crew;
pub mod diagnostics;
pub mod event;
pub mod marine;
pub mod member;
