//! Age on election day and young-voter flags.
//!
//! Voter files routinely contain malformed or empty birth dates. None of the
//! functions here fail on such records: ages become `None` and young-voter
//! flags become `Ternary::Unknown`, so one bad row never aborts a batch.

use chrono::NaiveDate;
use log::{debug, trace};
use rayon::prelude::*;

use crate::config::VoterFileConfig;
use crate::dates::{add_years, parse_birth_date_with, parse_election_date_with, whole_years_between};
use crate::models::{BirthDateField, Ternary};

/// Age in completed years on a given date.
///
/// Someone 70 years and 360 days old is 70. Returns `None` if `date` is
/// before the birth date.
#[must_use]
pub fn age_on(birth_date: NaiveDate, date: NaiveDate) -> Option<u32> {
    whole_years_between(birth_date, date)
}

/// Age in completed years on election day.
///
/// `dob` is a `YYYYMMDD` string; `election_date` may be in any format the
/// election-date parser accepts. Returns `None` when either value cannot be
/// parsed, when the birth date is missing, or when the election precedes the
/// birth date.
pub fn age_at_election<T: BirthDateField + ?Sized>(dob: &T, election_date: &str) -> Option<u32> {
    age_at_election_with(dob, election_date, &VoterFileConfig::default())
}

/// Age on election day using explicit date formats
pub fn age_at_election_with<T: BirthDateField + ?Sized>(
    dob: &T,
    election_date: &str,
    config: &VoterFileConfig,
) -> Option<u32> {
    let election_date = parse_election_date_with(election_date, &config.election_dates)
        .map_err(|e| debug!("Cannot compute age: {e}"))
        .ok()?;
    let birth_date = parse_dob(dob, config)?;
    age_on(birth_date, election_date)
}

/// Young-voter test: `birth_date + years >= election_date`.
///
/// With the default of 24 years this holds for anyone who has not passed
/// their 24th birthday by election day, including someone whose 24th
/// birthday falls on election day itself.
///
/// Election dates are compared as calendar days. A time of day on the
/// election date has already been dropped by the parser, so a voter whose
/// 24th birthday is election day stays young whatever the polling hour.
#[must_use]
pub fn is_young_on(birth_date: NaiveDate, election_date: NaiveDate, years: u32) -> Ternary {
    add_years(birth_date, years)
        .map(|cutoff| cutoff >= election_date)
        .into()
}

/// Flag each birth date as a young voter on election day.
///
/// The result has one entry per input, in input order. Entries whose birth
/// date is missing or unparseable are `Ternary::Unknown`; if the election
/// date itself cannot be parsed, every entry is `Unknown`.
pub fn young_at_election<T: BirthDateField>(dobs: &[T], election_date: &str) -> Vec<Ternary> {
    young_at_election_with(dobs, election_date, &VoterFileConfig::default())
}

/// Young-voter flags using an explicit configuration
pub fn young_at_election_with<T: BirthDateField>(
    dobs: &[T],
    election_date: &str,
    config: &VoterFileConfig,
) -> Vec<Ternary> {
    let Some(election_date) = parse_batch_election_date(election_date, dobs.len(), config) else {
        return vec![Ternary::Unknown; dobs.len()];
    };

    let flags: Vec<Ternary> = dobs
        .iter()
        .map(|dob| young_flag(dob, election_date, config))
        .collect();

    log_summary(&flags, election_date);
    flags
}

/// Parallel version of [`young_at_election`] for large batches.
///
/// Output is identical to the sequential version, element for element.
pub fn young_at_election_par<T: BirthDateField + Sync>(
    dobs: &[T],
    election_date: &str,
    config: &VoterFileConfig,
) -> Vec<Ternary> {
    let Some(election_date) = parse_batch_election_date(election_date, dobs.len(), config) else {
        return vec![Ternary::Unknown; dobs.len()];
    };

    let flags: Vec<Ternary> = dobs
        .par_iter()
        .map(|dob| young_flag(dob, election_date, config))
        .collect();

    log_summary(&flags, election_date);
    flags
}

/// Tally of young-voter flags in a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YoungVoterCounts {
    /// Entries flagged young
    pub young: usize,
    /// Entries flagged not young
    pub not_young: usize,
    /// Entries that could not be decided
    pub unknown: usize,
}

impl YoungVoterCounts {
    /// Count the flags in a batch
    #[must_use]
    pub fn from_flags(flags: &[Ternary]) -> Self {
        flags.iter().fold(Self::default(), |mut counts, flag| {
            match flag {
                Ternary::Yes => counts.young += 1,
                Ternary::No => counts.not_young += 1,
                Ternary::Unknown => counts.unknown += 1,
            }
            counts
        })
    }

    /// Total number of entries
    #[must_use]
    pub const fn total(&self) -> usize {
        self.young + self.not_young + self.unknown
    }
}

fn parse_dob<T: BirthDateField + ?Sized>(dob: &T, config: &VoterFileConfig) -> Option<NaiveDate> {
    let Some(raw) = dob.birth_date_str() else {
        trace!("Missing birth date");
        return None;
    };
    parse_birth_date_with(raw, &config.birth_date_format)
        .map_err(|e| trace!("{e}"))
        .ok()
}

fn young_flag<T: BirthDateField>(
    dob: &T,
    election_date: NaiveDate,
    config: &VoterFileConfig,
) -> Ternary {
    parse_dob(dob, config).map_or(Ternary::Unknown, |birth_date| {
        is_young_on(birth_date, election_date, config.young_voter_years)
    })
}

fn parse_batch_election_date(
    election_date: &str,
    batch_len: usize,
    config: &VoterFileConfig,
) -> Option<NaiveDate> {
    parse_election_date_with(election_date, &config.election_dates)
        .map_err(|e| debug!("Marking {batch_len} young-voter flags unknown: {e}"))
        .ok()
}

fn log_summary(flags: &[Ternary], election_date: NaiveDate) {
    let counts = YoungVoterCounts::from_flags(flags);
    debug!(
        "Young voters on {}: {} young, {} not young, {} unknown of {}",
        election_date,
        counts.young,
        counts.not_young,
        counts.unknown,
        counts.total()
    );
}
