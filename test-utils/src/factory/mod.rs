//! Factory methods for creating test data.
//!
//! Factories insert records straight into their collection with sensible defaults,
//! bypassing validation, so tests can also set up data the API itself would refuse.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let crew = factory::create_crew(&db).await?;
//! let member = factory::member::MemberFactory::new(&db, &crew.id)
//!     .name("Monkey D. Luffy")
//!     .bounty(3_000_000_000)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `marine` - Create marine records
//! - `crew` - Create pirate crew records
//! - `member` - Create crew member records
//! - `event` - Create event records
//! - `helpers` - Id generation and records created together with their dependencies

pub mod crew;
pub mod event;
pub mod helpers;
pub mod marine;
pub mod member;

pub use crew::create_crew;
pub use event::create_event;
pub use marine::create_marine;
pub use member::create_member;
