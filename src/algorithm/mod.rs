//! Algorithm implementations for the field study workflow
//!
//! This module contains the two-stage sampling roster, the demographic
//! sample-size estimator and the pre-fieldwork sampling plan generator.

pub mod estimate;
pub mod plan;
pub mod sampling;

// Re-export key types
pub use estimate::{DEFAULT_RESPONSE_RATE, HOUSE_BUFFER, SamplingStrategy, estimate_houses_needed};
pub use plan::{HousePlan, VillagePlan, generate_sampling_plan, generate_study_plan};
pub use sampling::{ExportSummary, GroupStatus, SamplingRoster, SamplingStatus};
