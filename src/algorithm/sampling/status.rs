//! Progress reporting for the sampling roster

use std::fmt;

use serde::Serialize;

use crate::models::{Participant, Village};

/// Progress of one village
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStatus {
    /// Village name
    pub group: String,
    /// Participants wanted
    pub target: usize,
    /// Finalized participants so far
    pub completed: usize,
    /// `max(0, target - completed)`
    pub remaining: usize,
    /// Houses picked by Stage 1
    pub houses_selected: usize,
    /// Houses discovered
    pub houses_registered: usize,
    /// Candidates living in a selected house
    pub stage_two_eligible: usize,
    /// Candidates contacted so far
    pub contacted: usize,
    /// `contacted / stage_two_eligible`, undefined without eligible candidates
    pub response_rate: Option<f64>,
}

impl GroupStatus {
    /// Aggregate the progress of `village`
    #[must_use]
    pub fn from_village(village: &Village, participants: &[Participant], target: usize) -> Self {
        let completed = participants
            .iter()
            .filter(|p| p.group == village.name())
            .count();
        let contacted = village.contacted_count();
        let stage_two_eligible = village.stage_one_eligible_count();

        let response_rate = if stage_two_eligible > 0 {
            Some(contacted as f64 / stage_two_eligible as f64)
        } else {
            None
        };

        Self {
            group: village.name().to_string(),
            target,
            completed,
            remaining: target.saturating_sub(completed),
            houses_selected: village.selected_houses().len(),
            houses_registered: village.house_registry().len(),
            stage_two_eligible,
            contacted,
            response_rate,
        }
    }

    /// Whether the village has reached its target
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

/// Progress of the whole study, in configured group order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplingStatus {
    /// Per-village progress
    pub groups: Vec<GroupStatus>,
}

impl SamplingStatus {
    /// Total finalized participants across villages
    #[must_use]
    pub fn total_completed(&self) -> usize {
        self.groups.iter().map(|g| g.completed).sum()
    }

    /// Progress of one village
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&GroupStatus> {
        self.groups.iter().find(|g| g.group == name)
    }
}

impl fmt::Display for SamplingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Two-Stage Cluster Sampling Progress:")?;
        for status in &self.groups {
            writeln!(f, "\n{}:", status.group)?;
            writeln!(f, "  Target participants: {}", status.target)?;
            writeln!(f, "  Completed: {}", status.completed)?;
            writeln!(f, "  Still needed: {}", status.remaining)?;
            writeln!(
                f,
                "  Stage 1 - Houses: {}/{} selected",
                status.houses_selected, status.houses_registered
            )?;
            writeln!(
                f,
                "  Stage 2 - Eligible: {} participants in selected houses",
                status.stage_two_eligible
            )?;
            match status.response_rate {
                Some(rate) => writeln!(
                    f,
                    "  Response rate: {}/{} contacted ({:.1}%)",
                    status.contacted,
                    status.stage_two_eligible,
                    rate * 100.0
                )?,
                None => writeln!(f, "  Response rate: N/A")?,
            }
        }
        write!(f, "\nTotal participants: {}", self.total_completed())
    }
}
