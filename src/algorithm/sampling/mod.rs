//! Two-stage cluster sampling bookkeeping
//!
//! This module implements the field workflow of the island mobility study:
//!
//! 1. Candidate registration while exploring each village
//! 2. Stage 1: reproducible random selection of houses (clusters)
//! 3. Stage 2: randomized contact order over occupants of selected houses
//! 4. Outcome recording, progress reporting and roster export

pub mod export;
pub mod roster;
pub mod seed;
pub mod status;

// Re-export key types
pub use export::{ExportSummary, GroupExportCount};
pub use roster::SamplingRoster;
pub use seed::{group_hash, stage_one_seed, stage_two_seed};
pub use status::{GroupStatus, SamplingStatus};
