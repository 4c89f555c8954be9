pub mod index;
pub mod visit;
