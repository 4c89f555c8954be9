//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep the
//! data layer separate from business logic. Each repository is generic over
//! `ConnectionTrait` so the same operations run against the pool or inside a transaction.

pub mod archived_period;
pub mod visit_counter;
