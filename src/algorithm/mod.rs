//! Voter-file computations: ages, young-voter flags and election history

pub mod age;
pub mod election;

pub use age::{
    YoungVoterCounts, age_at_election, age_at_election_with, age_on, is_young_on,
    young_at_election, young_at_election_par, young_at_election_with,
};
pub use election::find_election;
