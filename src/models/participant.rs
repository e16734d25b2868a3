//! Participant entity model
//!
//! A participant is the at-point-of-consent snapshot of a candidate. It is
//! the row type of the exported roster.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::candidate::Candidate;

/// Snapshot of a consenting candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Village the participant lives in
    pub group: String,
    /// Display name
    pub name: String,
    /// House identifier
    pub house: String,
    /// Age in years, when known
    pub age: Option<u32>,
    /// Consent flag (always true for a finalized participant)
    pub consented: bool,
    /// Timed-up-and-go measurement in seconds
    pub tug_time: Option<f64>,
    /// When consent was recorded
    pub timestamp: Option<NaiveDateTime>,
    /// Lived in a Stage 1 selected house at consent time
    pub selected_stage1: bool,
    /// Was in the Stage 2 contact order at consent time
    pub selected_stage2: bool,
}

impl Participant {
    /// Whether this snapshot belongs to the given candidate
    #[must_use]
    pub fn is_snapshot_of(&self, candidate: &Candidate) -> bool {
        self.group == candidate.group()
            && self.house == candidate.house()
            && self.name == candidate.name()
    }
}

impl From<&Candidate> for Participant {
    fn from(candidate: &Candidate) -> Self {
        Self {
            group: candidate.group().to_string(),
            name: candidate.name().to_string(),
            house: candidate.house().to_string(),
            age: candidate.age(),
            consented: candidate.consented().unwrap_or(false),
            tug_time: candidate.tug_time(),
            timestamp: candidate.timestamp(),
            selected_stage1: candidate.selected_stage1(),
            selected_stage2: candidate.selected_stage2(),
        }
    }
}
