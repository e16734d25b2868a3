//! IO utilities for participant tables
//!
//! CSV and Parquet writers/readers plus the timestamped export file naming.

pub mod csv_table;
pub mod parquet;

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::config::ExportFormat;
use crate::error::{Result, SamplingError};
use crate::models::Participant;
use crate::utils::logging::{log_table_read, log_warning};

// Re-export commonly used functions for convenience
pub use self::csv_table::{read_participants_csv, write_participants_csv};
pub use self::parquet::{read_participants_parquet, write_participants_parquet};

/// Prefix shared by every roster export file
pub const EXPORT_FILE_PREFIX: &str = "islands_two_stage_data";

/// File name of an export generated at `generated_at`
#[must_use]
pub fn export_file_name(generated_at: NaiveDateTime, format: ExportFormat) -> String {
    format!(
        "{EXPORT_FILE_PREFIX}_{}.{}",
        generated_at.format("%Y%m%d_%H%M"),
        format.extension()
    )
}

/// Path for a new export in `dir` that does not clobber an earlier one
///
/// The file name stamps the minute only, so a second export in the same
/// minute gets a `_2`, `_3`, ... suffix instead of replacing the first.
#[must_use]
pub fn export_path(dir: &Path, generated_at: NaiveDateTime, format: ExportFormat) -> PathBuf {
    let path = dir.join(export_file_name(generated_at, format));
    if !path.exists() {
        return path;
    }

    log_warning("Export file already exists, writing a numbered copy", Some(&path));
    let stem = format!(
        "{EXPORT_FILE_PREFIX}_{}",
        generated_at.format("%Y%m%d_%H%M")
    );
    (2u32..)
        .map(|n| dir.join(format!("{stem}_{n}.{}", format.extension())))
        .find(|candidate| !candidate.exists())
        .unwrap_or(path)
}

/// Write participants in the given format
pub fn write_participants(
    path: &Path,
    participants: &[Participant],
    format: ExportFormat,
) -> Result<()> {
    match format {
        ExportFormat::Csv => write_participants_csv(path, participants),
        ExportFormat::Parquet => write_participants_parquet(path, participants),
    }
}

/// Read participants, choosing the format from the file extension
pub fn read_participants(path: &Path) -> Result<Vec<Participant>> {
    let participants = match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => read_participants_csv(path)?,
        Some("parquet") => read_participants_parquet(path)?,
        _ => {
            return Err(SamplingError::invalid_parameter(format!(
                "cannot tell the table format of {}",
                path.display()
            )));
        }
    };
    log_table_read(path, participants.len(), "participants");
    Ok(participants)
}
