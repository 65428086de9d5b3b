use anyhow::{Context, bail};
use log::info;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use voterfile::dates::parse_election_date;
use voterfile::utils::logging::{log_operation_complete, log_operation_start, log_record_warning};
use voterfile::{
    ProgressLine, Ternary, VoterFileConfig, YoungVoterCounts, age_at_election, init_logging,
    young_at_election_with,
};

const USAGE: &str = "usage: voterfile <ELECTION_DATE> [DOB ...]\n\
                     Birth dates are YYYYMMDD; when none are given they are read from stdin, one per line.";

fn main() -> anyhow::Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let Some(election_date) = args.next() else {
        bail!("{USAGE}");
    };
    // Fail early instead of printing a column of unknowns
    let parsed_date = parse_election_date(&election_date)
        .with_context(|| format!("cannot use '{election_date}' as the election date"))?;

    let mut dobs: Vec<String> = args.collect();
    if dobs.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read birth dates from stdin")?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                dobs.push(trimmed.to_string());
            }
        }
    }
    if dobs.is_empty() {
        bail!("{USAGE}");
    }

    let config = VoterFileConfig::default();
    let operation = format!("computing ages on {parsed_date}");
    log_operation_start(&operation, dobs.len());
    let start = Instant::now();

    let mut bar = ProgressLine::stdout(dobs.len() as u64)?.with_width(config.bar_width);
    let mut ages = Vec::with_capacity(dobs.len());
    for (i, dob) in dobs.iter().enumerate() {
        let age = age_at_election(dob.as_str(), &election_date);
        if age.is_none() {
            log_record_warning("Unusable birth date", Some(dob.as_str()));
        }
        ages.push(age);
        bar.update(i as u64 + 1, Some(dob.as_str()))?;
    }
    let mut stdout = bar.finish()?;

    let flags = young_at_election_with(&dobs, &election_date, &config);
    for ((dob, age), young) in dobs.iter().zip(&ages).zip(&flags) {
        let age = age.map_or_else(|| "unknown".to_string(), |a| a.to_string());
        writeln!(stdout, "{dob}\t{age}\t{young}")?;
    }
    stdout.flush()?;

    let counts = YoungVoterCounts::from_flags(&flags);
    info!(
        "{} young, {} not young, {} unknown",
        counts.young, counts.not_young, counts.unknown
    );
    if flags.iter().all(|flag| *flag == Ternary::Unknown) {
        log_record_warning("No birth date could be parsed", None);
    }
    log_operation_complete(&operation, dobs.len(), Some(start.elapsed()));

    Ok(())
}
