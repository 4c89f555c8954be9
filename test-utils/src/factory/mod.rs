//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test rows with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Counter for March 2025 holding 42 views
//!     let counter = factory::create_counter(&db, "March", 2025, 42).await?;
//!
//!     // Archive row for February 2025
//!     let archived = factory::create_archived_period(&db, "February", 2025, 17).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `visit_counter` - Insert the singleton counter row
//! - `archived_period` - Insert archived month rows

pub mod archived_period;
pub mod visit_counter;

pub use archived_period::create_archived_period;
pub use visit_counter::create_counter;
