//! Logging setup and standard operation messages

use std::time::Duration;

/// Initialize `env_logger` with an `info` default, overridable by `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `items` - Number of records about to be processed
pub fn log_operation_start(operation: &str, items: usize) {
    log::info!("{operation} for {items} records");
}

/// Log an operation completion with consistent format
pub fn log_operation_complete(operation: &str, items: usize, elapsed: Option<Duration>) {
    if let Some(duration) = elapsed {
        log::info!("Finished {operation} for {items} records in {duration:?}");
    } else {
        log::info!("Finished {operation} for {items} records");
    }
}

/// Log a warning about a record that could not be interpreted
pub fn log_record_warning(message: &str, record: Option<&str>) {
    if let Some(record) = record {
        log::warn!("{message}: {record:?}");
    } else {
        log::warn!("{message}");
    }
}
