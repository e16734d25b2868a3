//! Export of the finalized participant roster

use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::algorithm::sampling::roster::SamplingRoster;
use crate::config::ExportFormat;
use crate::error::util::ensure_directory;
use crate::error::{Result, SamplingError};
use crate::utils::io::{export_path, write_participants};
use crate::utils::logging::{log_table_write, log_table_written};

/// Participants exported for one village
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupExportCount {
    pub group: String,
    pub participants: usize,
    pub houses_selected: usize,
}

/// What an export wrote and where
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub total: usize,
    pub per_group: Vec<GroupExportCount>,
}

impl ExportSummary {
    /// Participants exported for `group`, zero if none
    #[must_use]
    pub fn count_for(&self, group: &str) -> usize {
        self.per_group
            .iter()
            .find(|g| g.group == group)
            .map_or(0, |g| g.participants)
    }
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data exported to: {}", self.path.display())?;
        writeln!(f, "Total participants: {}", self.total)?;
        for group in &self.per_group {
            writeln!(
                f,
                "{}: {} participants from {} houses",
                group.group, group.participants, group.houses_selected
            )?;
        }
        Ok(())
    }
}

impl SamplingRoster {
    /// Write every finalized participant to a fresh timestamped file
    ///
    /// An earlier export from the same minute is kept; the new file gets a
    /// numbered name. Fails with `SamplingError::NothingToExport`, without
    /// touching the file system, while nobody has consented.
    pub fn export(&self) -> Result<ExportSummary> {
        self.export_at(Local::now().naive_local())
    }

    /// `export` with an explicit generation time for the file name
    pub fn export_at(&self, generated_at: NaiveDateTime) -> Result<ExportSummary> {
        if self.participants.is_empty() {
            return Err(SamplingError::NothingToExport);
        }

        let start = Instant::now();
        let format = self.config.export_format;
        ensure_directory(&self.config.export_dir, "roster export")?;
        let path = export_path(&self.config.export_dir, generated_at, format);

        log_table_write(&path, format, self.participants.len());
        write_participants(&path, &self.participants, format)?;
        log_table_written(&path, self.participants.len(), start.elapsed());

        let per_group = self
            .villages
            .iter()
            .map(|village| GroupExportCount {
                group: village.name().to_string(),
                participants: self
                    .participants
                    .iter()
                    .filter(|p| p.group == village.name())
                    .count(),
                houses_selected: village.selected_houses().len(),
            })
            .collect();

        Ok(ExportSummary {
            path,
            format,
            total: self.participants.len(),
            per_group,
        })
    }
}
