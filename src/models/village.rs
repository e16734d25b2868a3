//! Village (sampling group) model
//!
//! A village owns its candidates and the house frame used for Stage 1.

use std::collections::BTreeSet;

use crate::models::candidate::Candidate;

/// A fixed top-level population partition sampled independently
#[derive(Debug, Clone, Default)]
pub struct Village {
    name: String,
    candidates: Vec<Candidate>,
    house_registry: BTreeSet<String>,
    selected_houses: BTreeSet<String>,
}

impl Village {
    /// Create an empty village
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Candidates in registration order
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Distinct houses discovered so far
    #[must_use]
    pub const fn house_registry(&self) -> &BTreeSet<String> {
        &self.house_registry
    }

    /// Houses chosen by Stage 1 (empty until selection runs)
    #[must_use]
    pub const fn selected_houses(&self) -> &BTreeSet<String> {
        &self.selected_houses
    }

    /// Number of candidates already contacted
    #[must_use]
    pub fn contacted_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.contacted()).count()
    }

    /// Number of candidates living in a Stage 1 selected house
    #[must_use]
    pub fn stage_one_eligible_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.selected_stage1()).count()
    }

    pub(crate) fn register(&mut self, candidate: Candidate) {
        self.house_registry.insert(candidate.house().to_string());
        self.candidates.push(candidate);
    }

    pub(crate) fn set_selected_houses(&mut self, houses: BTreeSet<String>) {
        debug_assert!(houses.is_subset(&self.house_registry));
        self.selected_houses = houses;
    }

    pub(crate) fn candidates_mut(&mut self) -> &mut [Candidate] {
        &mut self.candidates
    }
}
