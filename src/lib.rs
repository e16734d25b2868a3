//! A Rust library for two-stage cluster sampling bookkeeping in a village
//! mobility field study, with the reporting statistics behind the study's
//! charts.

pub mod algorithm;
pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{ExportFormat, RosterConfig, RosterConfigBuilder};
pub use error::{Result, SamplingError};
pub use models::{Candidate, Participant, Village, VillageProfile};

// Sampling workflow
pub use algorithm::sampling::{ExportSummary, GroupStatus, SamplingRoster, SamplingStatus};
pub use algorithm::{
    SamplingStrategy, VillagePlan, estimate_houses_needed, generate_sampling_plan,
    generate_study_plan,
};

// Reporting
pub use analysis::{BoxSummary, LinearTrend, Observation, StudyReport, load_observations};

// Utility functions
pub use utils::io::{read_participants, write_participants};
