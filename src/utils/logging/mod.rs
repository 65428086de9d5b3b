//! Logging utilities for output and progress tracking

pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use self::log::{init_logging, log_operation_complete, log_operation_start, log_record_warning};
pub use self::progress::{ProgressLine, progress, render_bar, write_progress};
