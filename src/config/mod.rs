//! Configuration for voter-file helpers.
//!
//! The defaults reproduce the fixed behavior of the plain helper functions:
//! strict `YYYYMMDD` birth dates, a permissive election-date parser, a
//! young-voter cutoff 24 years after birth and a 60-character progress bar.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Format used for birth dates in voter files
pub const DEFAULT_BIRTH_DATE_FORMAT: &str = "%Y%m%d";

/// Years added to a birth date to get the last day someone counts as a young voter
pub const DEFAULT_YOUNG_VOTER_YEARS: u32 = 24;

/// Width of the rendered progress bar in characters
pub const DEFAULT_BAR_WIDTH: usize = 60;

/// Configuration for election-date handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormatConfig {
    /// Formats tried in order when parsing election dates
    pub date_formats: Vec<String>,
    /// Guess the format from the shape of the string when none of the formats match
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(),          // ISO format: 2024-11-05
                "%Y-%m-%dT%H:%M:%S".to_string(), // ISO datetime: 2024-11-05T00:00:00
                "%Y-%m-%d %H:%M:%S".to_string(), // 2024-11-05 00:00:00
                "%m/%d/%Y".to_string(),          // US: 11/05/2024
                "%Y/%m/%d".to_string(),          // 2024/11/05
                "%d.%m.%Y".to_string(),          // 05.11.2024
                "%Y%m%d".to_string(),            // Compact: 20241105
                "%d %b %Y".to_string(),          // 5 Nov 2024
                "%d %B %Y".to_string(),          // 5 November 2024
                "%b %d, %Y".to_string(),         // Nov 5, 2024
                "%B %d, %Y".to_string(),         // November 5, 2024
            ],
            enable_format_detection: true,
        }
    }
}

/// Configuration for the voter-file helpers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoterFileConfig {
    /// Strict format for birth dates
    pub birth_date_format: String,
    /// Election date parsing
    pub election_dates: DateFormatConfig,
    /// Young voter while `birth_date + young_voter_years >= election_date`
    pub young_voter_years: u32,
    /// Progress bar width in characters
    pub bar_width: usize,
}

impl Default for VoterFileConfig {
    fn default() -> Self {
        Self {
            birth_date_format: DEFAULT_BIRTH_DATE_FORMAT.to_string(),
            election_dates: DateFormatConfig::default(),
            young_voter_years: DEFAULT_YOUNG_VOTER_YEARS,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

impl VoterFileConfig {
    /// Load a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for VoterFileConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Voter File Configuration:")?;
        writeln!(f, "  Birth Date Format: {}", self.birth_date_format)?;
        writeln!(
            f,
            "  Election Date Formats: {}",
            self.election_dates.date_formats.join(", ")
        )?;
        writeln!(
            f,
            "  Format Detection: {}",
            self.election_dates.enable_format_detection
        )?;
        writeln!(f, "  Young Voter Years: {}", self.young_voter_years)?;
        writeln!(f, "  Bar Width: {}", self.bar_width)?;
        Ok(())
    }
}
