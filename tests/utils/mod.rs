use chrono::NaiveDate;
use voterfile::Result;

/// Build a date from parts
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Format a date the way voter files store birth dates
#[must_use]
pub fn dob(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Run a closure against an in-memory sink and return the frames it wrote
pub fn capture_frames<F>(func: F) -> Vec<String>
where
    F: FnOnce(&mut Vec<u8>) -> Result<()>,
{
    let mut sink = Vec::new();
    func(&mut sink).unwrap();
    String::from_utf8(sink)
        .unwrap()
        .split_terminator('\r')
        .map(str::to_string)
        .collect()
}
