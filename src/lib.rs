//! Helpers for voter-file analysis: age on election day, young-voter flags,
//! election history matching and a terminal progress bar.
//!
//! Every helper is stateless. Malformed records are expected in voter files,
//! so the record-level helpers report "cannot be determined" through
//! `Option` and [`Ternary`] instead of returning errors.

pub mod algorithm;
pub mod config;
pub mod dates;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
pub use config::{DateFormatConfig, VoterFileConfig};
pub use error::{Result, VoterFileError};
pub use models::{BirthDateField, ElectionFilter, ElectionType, Ternary};

// Record-level helpers
pub use algorithm::{
    YoungVoterCounts, age_at_election, age_at_election_with, age_on, find_election, is_young_on,
    young_at_election, young_at_election_par, young_at_election_with,
};

// Progress reporting
pub use utils::logging::{ProgressLine, init_logging, progress, render_bar, write_progress};
