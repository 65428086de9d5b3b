//! Domain types for voter-file analysis

pub mod election;
pub mod types;

pub use election::{ElectionFilter, ElectionType};
pub use types::{BirthDateField, Ternary};
