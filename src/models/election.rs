//! Election types and history filters.
//!
//! Election histories in voter files are lists of opaque identifiers such as
//! `"2020_GE"` or `"PR2018"`. Each one embeds a four-digit year and a
//! two-letter type code somewhere in the string; no delimiter or position is
//! assumed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VoterFileError;

/// Type of election recorded in a voter history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElectionType {
    /// General election, coded "GE"
    General,
    /// Primary election, coded "PR"
    Primary,
}

impl ElectionType {
    /// Two-letter code used in election identifiers
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::General => "GE",
            Self::Primary => "PR",
        }
    }
}

impl FromStr for ElectionType {
    type Err = VoterFileError;

    /// Parse a label case-insensitively: "general" or "primary"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(Self::General),
            "primary" => Ok(Self::Primary),
            _ => Err(VoterFileError::UnknownElectionType(s.to_string())),
        }
    }
}

impl fmt::Display for ElectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::General => write!(f, "general"),
            Self::Primary => write!(f, "primary"),
        }
    }
}

/// Matches election identifiers for one year and election type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectionFilter {
    year: String,
    election_type: ElectionType,
}

impl ElectionFilter {
    /// Create a filter; `year` is matched by its decimal string form
    pub fn new(year: impl fmt::Display, election_type: ElectionType) -> Self {
        Self {
            year: year.to_string(),
            election_type,
        }
    }

    /// Year text searched for in identifiers
    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Election type searched for in identifiers
    #[must_use]
    pub const fn election_type(&self) -> ElectionType {
        self.election_type
    }

    /// Whether a single identifier contains both the year and the type code
    #[must_use]
    pub fn matches(&self, identifier: &str) -> bool {
        identifier.contains(self.year.as_str()) && identifier.contains(self.election_type.code())
    }

    /// Whether any identifier in a history matches
    pub fn matches_any<S: AsRef<str>>(&self, history: &[S]) -> bool {
        history.iter().any(|election| self.matches(election.as_ref()))
    }
}

impl fmt::Display for ElectionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.year, self.election_type)
    }
}
