//! Terminal progress reporting for long-running batches.
//!
//! A frame is a single line of the form
//! `[======------] 50.0% ...status` terminated by a carriage return, so
//! successive frames overwrite each other in place. Frames are written to an
//! injected `std::io::Write` sink; [`progress`] is the convenience form that
//! targets standard output. Writers shared between threads must be
//! serialized by the caller.

use std::io::{self, Write};

use crate::config::DEFAULT_BAR_WIDTH;
use crate::error::{Result, VoterFileError};

/// Character for the completed part of the bar
pub const FILLED_CHAR: char = '=';

/// Character for the remaining part of the bar
pub const EMPTY_CHAR: char = '-';

/// Render one progress frame without the trailing carriage return.
///
/// `filled = round(width * count / total)`, with ties rounded to even. A
/// `count` above `total` draws a full bar but keeps the real percentage.
pub fn render_bar(count: u64, total: u64, status: Option<&str>, width: usize) -> Result<String> {
    if total == 0 {
        return Err(VoterFileError::InvalidProgress(
            "total must be greater than zero".to_string(),
        ));
    }

    // Multiply before dividing so ties at one decimal fall the same way as
    // `round(100 * count / total, 1)`
    let filled =
        ((width as f64 * count as f64 / total as f64).round_ties_even() as usize).min(width);
    let percent = 100.0 * count as f64 / total as f64;

    let mut line = String::with_capacity(width + 16 + status.map_or(0, str::len));
    line.push('[');
    line.extend(std::iter::repeat_n(FILLED_CHAR, filled));
    line.extend(std::iter::repeat_n(EMPTY_CHAR, width - filled));
    line.push_str(&format!("] {percent:.1}% ...{}", status.unwrap_or_default()));
    Ok(line)
}

/// Write one frame to `writer` and flush it
pub fn write_progress<W: Write>(
    writer: &mut W,
    count: u64,
    total: u64,
    status: Option<&str>,
) -> Result<()> {
    let line = render_bar(count, total, status, DEFAULT_BAR_WIDTH)?;
    write!(writer, "{line}\r")?;
    writer.flush()?;
    Ok(())
}

/// Draw a 60-character progress bar on standard output, in place
pub fn progress(count: u64, total: u64, status: Option<&str>) -> Result<()> {
    write_progress(&mut io::stdout().lock(), count, total, status)
}

/// A progress line bound to a sink, a total and a bar width.
///
/// Each [`update`](Self::update) re-renders the whole bar; nothing about
/// earlier frames is kept.
#[derive(Debug)]
pub struct ProgressLine<W: Write> {
    writer: W,
    total: u64,
    width: usize,
}

impl ProgressLine<io::Stdout> {
    /// Progress line on standard output
    pub fn stdout(total: u64) -> Result<Self> {
        Self::new(io::stdout(), total)
    }
}

impl<W: Write> ProgressLine<W> {
    /// Create a progress line with the default bar width
    pub fn new(writer: W, total: u64) -> Result<Self> {
        if total == 0 {
            return Err(VoterFileError::InvalidProgress(
                "total must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            writer,
            total,
            width: DEFAULT_BAR_WIDTH,
        })
    }

    /// Use a different bar width
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Target count
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Draw the frame for `count`
    pub fn update(&mut self, count: u64, status: Option<&str>) -> Result<()> {
        let line = render_bar(count, self.total, status, self.width)?;
        write!(self.writer, "{line}\r")?;
        self.writer.flush()?;
        Ok(())
    }

    /// End the line so later output starts below the bar, returning the sink
    pub fn finish(mut self) -> Result<W> {
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}
