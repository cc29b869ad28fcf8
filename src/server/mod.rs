//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the Grandline fan site,
//! including API endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, admin gating, and DTO conversion
//! - **Service Layer** (`service/`) - Validation-then-write flows, the crew/member join, the
//!   leaderboard and seeding
//! - **Data Layer** (`data/`) - Collection access and exact-match filter construction
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token guard for admin endpoints
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB connection, admin token)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Util** (`util`) - Record identifier codec
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** checks admin access where required, converts DTOs to params
//! 3. **Service** validates identifiers and references, orchestrates data operations
//! 4. **Data** queries the database and returns entity models
//! 5. **Service** converts entity models into domain models
//! 6. **Controller** converts domain models to DTOs and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
