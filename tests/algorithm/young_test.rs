use voterfile::{
    Ternary, VoterFileConfig, YoungVoterCounts, young_at_election, young_at_election_par,
    young_at_election_with,
};

use crate::utils::{date, dob};

#[test]
fn test_young_and_old() {
    let flags = young_at_election(&["20010101", "19900101"], "2024-06-01");
    assert_eq!(flags, vec![Ternary::Yes, Ternary::No]);
}

#[test]
fn test_cutoff_boundary() {
    // 24th birthday on election day
    assert_eq!(young_at_election(&["20000601"], "2024-06-01"), vec![Ternary::Yes]);
    // 24th birthday the day before
    assert_eq!(young_at_election(&["20000531"], "2024-06-01"), vec![Ternary::No]);
    // 25th birthday on election day
    assert_eq!(young_at_election(&["19990601"], "2024-06-01"), vec![Ternary::No]);
}

#[test]
fn test_election_time_of_day_ignored() {
    // Same calendar day as the 24th birthday, any hour
    for election in ["2024-06-01 07:00", "2024-06-01T23:59:59", "2024-06-01 00:00:00"] {
        assert_eq!(
            young_at_election(&["20000601"], election),
            vec![Ternary::Yes],
            "election {election:?}"
        );
    }
    assert_eq!(young_at_election(&["20000601"], "2024-06-02 00:00"), vec![Ternary::No]);
}

#[test]
fn test_unparseable_entries_are_unknown() {
    let dobs = vec![
        Some("20010101".to_string()),
        None,
        Some("2001-01-01".to_string()),
        Some("19500101".to_string()),
    ];
    let flags = young_at_election(&dobs, "2024-06-01");
    assert_eq!(
        flags,
        vec![Ternary::Yes, Ternary::Unknown, Ternary::Unknown, Ternary::No]
    );

    // Callers wanting a plain boolean column pick the coercion explicitly
    let coerced: Vec<bool> = flags.iter().map(|f| f.unwrap_or(false)).collect();
    assert_eq!(coerced, vec![true, false, false, false]);
}

#[test]
fn test_same_length_as_input() {
    let empty: [&str; 0] = [];
    assert!(young_at_election(&empty, "2024-06-01").is_empty());

    let dobs = vec!["x"; 17];
    assert_eq!(young_at_election(&dobs, "2024-06-01").len(), 17);
    assert_eq!(young_at_election(&dobs, "bad date").len(), 17);
}

#[test]
fn test_parallel_matches_sequential() {
    let config = VoterFileConfig::default();
    let mut dobs: Vec<String> = Vec::new();
    let mut day = date(1960, 1, 1);
    while day < date(2010, 1, 1) {
        dobs.push(dob(day));
        day = day + chrono::Duration::days(13);
    }
    dobs.push("garbage".to_string());

    let sequential = young_at_election_with(&dobs, "2016-11-08", &config);
    let parallel = young_at_election_par(&dobs, "2016-11-08", &config);
    assert_eq!(sequential, parallel);

    let counts = YoungVoterCounts::from_flags(&parallel);
    assert_eq!(counts.total(), dobs.len());
    assert_eq!(counts.unknown, 1);
    assert!(counts.young > 0 && counts.not_young > 0);
}

#[test]
fn test_configured_cutoff() {
    let config = VoterFileConfig {
        young_voter_years: 29,
        ..Default::default()
    };
    let flags = young_at_election_with(&["19900101", "19800101"], "2018-11-06", &config);
    assert_eq!(flags, vec![Ternary::Yes, Ternary::No]);
}
