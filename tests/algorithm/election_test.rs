use voterfile::{ElectionFilter, ElectionType, Ternary, find_election};

#[test]
fn test_matching_election() {
    let history = vec!["2020_GE".to_string(), "2018_PR".to_string()];
    assert_eq!(find_election(Some(history.as_slice()), 2020, "General"), Ternary::Yes);
    assert_eq!(find_election(Some(history.as_slice()), 2018, "PRIMARY"), Ternary::Yes);
    assert_eq!(find_election(Some(history.as_slice()), 2016, "general"), Ternary::No);
}

#[test]
fn test_type_mismatch() {
    assert_eq!(find_election(Some(&["2020_GE"][..]), 2020, "primary"), Ternary::No);
}

#[test]
fn test_no_data() {
    assert_eq!(find_election::<String>(None, 2020, "general"), Ternary::Unknown);
    assert_eq!(find_election(Some(&["2020_GE"][..]), 2020, "runoff"), Ternary::Unknown);
    // No history wins over an unknown type
    assert_eq!(find_election::<&str>(None, 2020, "runoff"), Ternary::Unknown);
}

#[test]
fn test_year_and_code_must_share_identifier() {
    let history = ["2020_PR", "2016_GE"];
    assert_eq!(find_election(Some(&history[..]), 2020, "general"), Ternary::No);
    assert_eq!(find_election(Some(&history[..]), 2016, "general"), Ternary::Yes);
}

#[test]
fn test_no_fixed_layout() {
    let history = ["GE-11/08/2016", "PR2012"];
    assert_eq!(find_election(Some(&history[..]), 2016, "general"), Ternary::Yes);
    assert_eq!(find_election(Some(&history[..]), "2012", "primary"), Ternary::Yes);
}

#[test]
fn test_filter_reuse() {
    let filter = ElectionFilter::new(2018, ElectionType::Primary);
    let voters = [vec!["2018_PR", "2016_GE"], vec!["2016_PR"], vec![]];
    let matched: Vec<bool> = voters.iter().map(|h| filter.matches_any(h.as_slice())).collect();
    assert_eq!(matched, vec![true, false, false]);
    assert_eq!(filter.year(), "2018");
    assert_eq!(filter.election_type(), ElectionType::Primary);
}
