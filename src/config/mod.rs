//! Configuration for the sampling roster.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Result, SamplingError};

/// Villages covered by the island mobility study
pub const DEFAULT_GROUPS: [&str; 3] = ["Vardo", "Colmar", "Arcadia"];

/// Seed added to the Stage 1 seed to derive the Stage 2 seed
pub const DEFAULT_STAGE_TWO_OFFSET: u64 = 100;

/// File format used when exporting the finalized roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma separated values, one row per participant
    #[default]
    Csv,
    /// Apache Parquet, one row per participant
    Parquet,
}

impl ExportFormat {
    /// File extension (without the dot)
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Parquet => "parquet",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Configuration for a `SamplingRoster`
#[derive(Debug, Clone)]
pub struct RosterConfig {
    /// Study-wide seed every stochastic operation derives from
    pub study_seed: u64,
    /// Number of consenting participants wanted per group
    pub target_per_group: usize,
    /// Stage 1 default: how many houses to draw per group
    pub houses_per_group: usize,
    /// Offset separating the Stage 2 seed from the Stage 1 seed
    pub stage_two_offset: u64,
    /// The fixed set of group (village) names, in reporting order
    pub groups: Vec<String>,
    /// Directory export files are written to
    pub export_dir: PathBuf,
    /// Format of the export file
    pub export_format: ExportFormat,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            study_seed: 42,
            target_per_group: 20,
            houses_per_group: 15,
            stage_two_offset: DEFAULT_STAGE_TWO_OFFSET,
            groups: DEFAULT_GROUPS.iter().map(ToString::to_string).collect(),
            export_dir: PathBuf::from("."),
            export_format: ExportFormat::Csv,
        }
    }
}

impl RosterConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a roster configuration
    #[must_use]
    pub fn builder() -> RosterConfigBuilder {
        RosterConfigBuilder::new()
    }

    /// Check the configuration for values the roster cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.groups.is_empty() {
            return Err(SamplingError::invalid_parameter(
                "at least one group must be configured",
            ));
        }

        let mut seen = HashSet::new();
        for group in &self.groups {
            if group.trim().is_empty() {
                return Err(SamplingError::invalid_parameter(
                    "group names must not be blank",
                ));
            }
            if !seen.insert(group.as_str()) {
                return Err(SamplingError::invalid_parameter(format!(
                    "group '{group}' is configured twice"
                )));
            }
        }

        if self.houses_per_group == 0 {
            return Err(SamplingError::invalid_parameter(
                "houses_per_group must be at least 1",
            ));
        }

        Ok(())
    }
}

impl fmt::Display for RosterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Roster Configuration:")?;
        writeln!(f, "  Study Seed: {}", self.study_seed)?;
        writeln!(f, "  Target per Group: {}", self.target_per_group)?;
        writeln!(f, "  Houses per Group: {}", self.houses_per_group)?;
        writeln!(f, "  Stage 2 Seed Offset: {}", self.stage_two_offset)?;
        writeln!(f, "  Groups: {}", self.groups.join(", "))?;
        writeln!(f, "  Export Directory: {}", self.export_dir.display())?;
        writeln!(f, "  Export Format: {}", self.export_format)
    }
}

/// Builder for constructing a roster configuration
#[derive(Debug, Clone)]
pub struct RosterConfigBuilder {
    config: RosterConfig,
}

impl Default for RosterConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterConfigBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RosterConfig::default(),
        }
    }

    /// Set the study seed
    #[must_use]
    pub const fn study_seed(mut self, seed: u64) -> Self {
        self.config.study_seed = seed;
        self
    }

    /// Set the target number of participants per group
    #[must_use]
    pub const fn target_per_group(mut self, target: usize) -> Self {
        self.config.target_per_group = target;
        self
    }

    /// Set the default number of houses drawn in Stage 1
    #[must_use]
    pub const fn houses_per_group(mut self, houses: usize) -> Self {
        self.config.houses_per_group = houses;
        self
    }

    /// Set the Stage 2 seed offset
    #[must_use]
    pub const fn stage_two_offset(mut self, offset: u64) -> Self {
        self.config.stage_two_offset = offset;
        self
    }

    /// Replace the set of group names
    #[must_use]
    pub fn groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Set the export directory
    #[must_use]
    pub fn export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.export_dir = dir.into();
        self
    }

    /// Set the export format
    #[must_use]
    pub const fn export_format(mut self, format: ExportFormat) -> Self {
        self.config.export_format = format;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> RosterConfig {
        self.config
    }
}
