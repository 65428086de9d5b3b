//! Election history lookups

use log::debug;
use std::fmt::Display;

use crate::models::{ElectionFilter, ElectionType, Ternary};

/// Check whether a voter history contains a given election.
///
/// `history` is the voter's list of election identifiers, or `None` when the
/// voter file has no history for this person. `election_type` is "general" or
/// "primary" in any letter case. An identifier matches when it contains both
/// the decimal `year` and the type code ("GE" or "PR").
///
/// Returns `Unknown` when there is no history or the type is not recognized,
/// `Yes` on the first matching identifier and `No` otherwise.
pub fn find_election<S: AsRef<str>>(
    history: Option<&[S]>,
    year: impl Display,
    election_type: &str,
) -> Ternary {
    let Some(history) = history else {
        return Ternary::Unknown;
    };

    let election_type = match election_type.parse::<ElectionType>() {
        Ok(election_type) => election_type,
        Err(e) => {
            debug!("Cannot search election history: {e}");
            return Ternary::Unknown;
        }
    };

    ElectionFilter::new(year, election_type)
        .matches_any(history)
        .into()
}
