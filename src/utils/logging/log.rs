//! Log lines for participant tables and datasets
//!
//! Every file the crate writes or reads is announced through these helpers
//! so exports and imports show up uniformly in the log.

use std::path::Path;
use std::time::Duration;

use crate::config::ExportFormat;

/// Announce a table about to be written
pub fn log_table_write(path: &Path, format: ExportFormat, rows: usize) {
    log::info!("Writing {rows} participants as {format} to {}", path.display());
}

/// Report a table that was written
pub fn log_table_written(path: &Path, rows: usize, elapsed: Duration) {
    log::info!(
        "Exported {rows} participants to {} in {elapsed:?}",
        path.display()
    );
}

/// Report a table or dataset that was read
pub fn log_table_read(path: &Path, rows: usize, what: &str) {
    log::debug!("Read {rows} {what} from {}", path.display());
}

/// Log a recoverable condition, naming the file involved if there is one
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{message}: {}", path.display()),
        None => log::warn!("{message}"),
    }
}
