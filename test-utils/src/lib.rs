//! Grandline Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the Grandline
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and per-collection factories for inserting records directly.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Record factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_crew_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_grandline_tables()
//!         .build()
//!         .await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let crew = factory::create_crew(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
