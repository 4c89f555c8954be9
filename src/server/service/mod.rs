//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! implement the counting rules, coordinate multi-step operations such as rollover inside a
//! transaction, and work with domain models rather than DTOs or entity models.

pub mod visit_counter;

#[cfg(test)]
mod test;
