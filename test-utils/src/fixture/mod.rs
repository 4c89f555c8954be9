//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! domain conversion tests and as default values.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let counter = fixture::visit_counter_entity();
//!
//! let archived = fixture::archived_period_entity_builder()
//!     .month("December")
//!     .year(2024)
//!     .build();
//! ```

pub mod archived_period;
pub mod visit_counter;

pub use archived_period::{
    entity as archived_period_entity, entity_builder as archived_period_entity_builder,
};
pub use visit_counter::{entity as visit_counter_entity, entity_builder as visit_counter_entity_builder};
