//! Domain models for the island mobility study
//!
//! Candidates discovered in the field, the villages that own them, the
//! finalized participant snapshots and the published village demographics.

pub mod candidate;
pub mod participant;
pub mod profile;
pub mod village;

// Re-export commonly used types
pub use candidate::Candidate;
pub use participant::Participant;
pub use profile::{VILLAGE_PROFILES, VillageProfile, village_profile};
pub use village::Village;
