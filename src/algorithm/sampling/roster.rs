//! Two-stage cluster sampling roster
//!
//! Stage 1 draws houses (clusters) from each village's house frame. Stage 2
//! puts every discovered occupant of a drawn house into a randomized contact
//! order. Outcomes are recorded against candidates and consenting candidates
//! are snapshotted into the finalized participant list.

use std::collections::BTreeSet;

use chrono::{Local, NaiveDateTime};
use itertools::Itertools;
use log::{debug, info, warn};
use rand::prelude::*;
use rand::seq::SliceRandom;

use crate::algorithm::sampling::seed::{stage_one_seed, stage_rng, stage_two_seed};
use crate::algorithm::sampling::status::{GroupStatus, SamplingStatus};
use crate::config::RosterConfig;
use crate::error::{Result, SamplingError};
use crate::models::{Candidate, Participant, Village};

/// Bookkeeping for one study run
///
/// Owns the candidates and house frames of a fixed set of villages plus the
/// finalized participants. Single-writer: wrap the whole roster in one mutex
/// if it ever needs to be shared.
#[derive(Debug, Clone)]
pub struct SamplingRoster {
    pub(crate) config: RosterConfig,
    pub(crate) villages: Vec<Village>,
    pub(crate) participants: Vec<Participant>,
}

impl Default for SamplingRoster {
    fn default() -> Self {
        let config = RosterConfig::default();
        let villages = config.groups.iter().map(Village::new).collect();
        Self {
            config,
            villages,
            participants: Vec::new(),
        }
    }
}

impl SamplingRoster {
    /// Create a roster for the configured villages
    pub fn new(config: RosterConfig) -> Result<Self> {
        config.validate()?;
        let villages = config.groups.iter().map(Village::new).collect();
        info!(
            "Sampling roster created for {} (seed {}, target {} per group)",
            config.groups.join(", "),
            config.study_seed,
            config.target_per_group
        );
        Ok(Self {
            config,
            villages,
            participants: Vec::new(),
        })
    }

    #[must_use]
    pub const fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Configured group names
    #[must_use]
    pub fn groups(&self) -> &[String] {
        &self.config.groups
    }

    /// Villages in configured order
    #[must_use]
    pub fn villages(&self) -> &[Village] {
        &self.villages
    }

    /// Look up a village by name
    pub fn village(&self, group: &str) -> Result<&Village> {
        Ok(&self.villages[self.village_index(group)?])
    }

    /// Finalized participants in consent order
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Stage 1 selection of `group`, ordered by house identifier
    pub fn selected_houses(&self, group: &str) -> Result<Vec<String>> {
        Ok(self.village(group)?.selected_houses().iter().cloned().collect())
    }

    /// Every house discovered in `group`, ordered by identifier
    pub fn house_registry(&self, group: &str) -> Result<Vec<String>> {
        Ok(self.village(group)?.house_registry().iter().cloned().collect())
    }

    fn village_index(&self, group: &str) -> Result<usize> {
        self.villages
            .iter()
            .position(|v| v.name() == group)
            .ok_or_else(|| SamplingError::UnknownGroup {
                group: group.to_string(),
            })
    }

    /// Add a person discovered during exploration
    ///
    /// The house joins the village's frame if it is new.
    pub fn register_candidate(
        &mut self,
        group: &str,
        name: &str,
        house: &str,
        age: Option<u32>,
    ) -> Result<&Candidate> {
        let idx = self.village_index(group)?;
        let village = &mut self.villages[idx];
        village.register(Candidate::new(group, name, house, age));
        debug!(
            "Registered {name} in {group}, house {house} (houses known: {})",
            village.house_registry().len()
        );

        let candidates = self.villages[idx].candidates();
        Ok(&candidates[candidates.len() - 1])
    }

    /// Stage 1: draw up to `houses_per_group` distinct houses from the frame
    ///
    /// The draw depends only on the study seed, the group name and the frame,
    /// so it is reproducible. An empty frame yields
    /// `SamplingError::NoHousesRegistered` and leaves the selection empty.
    pub fn select_houses(&mut self, group: &str, houses_per_group: usize) -> Result<Vec<String>> {
        let idx = self.village_index(group)?;
        let village = &mut self.villages[idx];

        if village.house_registry().is_empty() {
            warn!("No houses registered for {group}; run exploration first");
            return Err(SamplingError::NoHousesRegistered {
                group: group.to_string(),
            });
        }

        let frame: Vec<&String> = village.house_registry().iter().collect();
        let amount = houses_per_group.min(frame.len());

        let mut rng = stage_rng(stage_one_seed(self.config.study_seed, group));
        let selected: BTreeSet<String> = frame
            .choose_multiple(&mut rng, amount)
            .map(|house| (*house).clone())
            .collect();

        info!(
            "Stage 1 for {group}: selected {} of {} houses",
            selected.len(),
            frame.len()
        );

        let ordered = selected.iter().cloned().collect();
        village.set_selected_houses(selected);
        Ok(ordered)
    }

    /// Stage 2: contact order over every occupant of the selected houses
    ///
    /// Runs Stage 1 with the configured `houses_per_group` first if nothing is
    /// selected yet. Occupants are shuffled within their house, houses are
    /// concatenated in discovery order and the whole list is shuffled once
    /// more. The order is re-derived on every call; an empty house frame
    /// gives an empty order.
    pub fn build_contact_order(&mut self, group: &str) -> Result<Vec<&Candidate>> {
        let idx = self.village_index(group)?;
        let order = self.contact_order_indices(idx)?;
        let candidates = self.villages[idx].candidates();
        Ok(order.into_iter().map(|i| &candidates[i]).collect())
    }

    fn contact_order_indices(&mut self, idx: usize) -> Result<Vec<usize>> {
        let group = self.villages[idx].name().to_string();

        if self.villages[idx].selected_houses().is_empty() {
            match self.select_houses(&group, self.config.houses_per_group) {
                Ok(_) => {}
                Err(e) if e.is_warning() => return Ok(Vec::new()),
                Err(e) => return Err(e),
            }
        }

        let village = &mut self.villages[idx];
        let selected = village.selected_houses().clone();
        for candidate in village.candidates_mut() {
            let in_selected = selected.contains(candidate.house());
            candidate.mark_stage1(in_selected);
            candidate.mark_stage2(in_selected);
        }

        let candidates = village.candidates();
        let eligible: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.selected_stage1())
            .map(|(i, _)| i)
            .collect();

        let mut rng = stage_rng(stage_two_seed(
            self.config.study_seed,
            &group,
            self.config.stage_two_offset,
        ));

        let mut order = Vec::with_capacity(eligible.len());
        for house in eligible.iter().map(|&i| candidates[i].house()).unique() {
            let mut occupants: Vec<usize> = eligible
                .iter()
                .copied()
                .filter(|&i| candidates[i].house() == house)
                .collect();
            if occupants.len() > 1 {
                occupants.shuffle(&mut rng);
            }
            order.extend(occupants);
        }
        order.shuffle(&mut rng);

        debug!(
            "Stage 2 for {group}: {} candidates across {} houses",
            order.len(),
            selected.len()
        );
        Ok(order)
    }

    /// The first `n` uncontacted candidates of the current contact order
    ///
    /// Asking for more than remain returns all that remain.
    pub fn get_next_to_contact(&mut self, group: &str, n: usize) -> Result<Vec<&Candidate>> {
        Ok(self
            .build_contact_order(group)?
            .into_iter()
            .filter(|c| !c.contacted())
            .take(n)
            .collect())
    }

    /// Record a contact outcome for the first candidate named `name`
    ///
    /// Re-recording overwrites the candidate's outcome fields. A finalized
    /// participant is never withdrawn: a later refusal leaves it in place and
    /// a later consent replaces it with a fresh snapshot.
    pub fn record_outcome(
        &mut self,
        group: &str,
        name: &str,
        consented: bool,
        age: Option<u32>,
        tug_time: Option<f64>,
    ) -> Result<&Candidate> {
        let idx = self.village_index(group)?;
        let position = self.villages[idx]
            .candidates()
            .iter()
            .position(|c| c.name() == name)
            .ok_or_else(|| SamplingError::CandidateNotFound {
                group: group.to_string(),
                name: name.to_string(),
            })?;
        let at = Local::now().naive_local();
        Ok(self.apply_outcome(idx, position, consented, age, tug_time, at))
    }

    /// Like `record_outcome`, keyed on `(group, house, name)`
    ///
    /// Use this when the same name occurs in more than one house.
    pub fn record_outcome_in_house(
        &mut self,
        group: &str,
        house: &str,
        name: &str,
        consented: bool,
        age: Option<u32>,
        tug_time: Option<f64>,
    ) -> Result<&Candidate> {
        let idx = self.village_index(group)?;
        let position = self.villages[idx]
            .candidates()
            .iter()
            .position(|c| c.house() == house && c.name() == name)
            .ok_or_else(|| SamplingError::CandidateNotFound {
                group: group.to_string(),
                name: format!("{name} ({house})"),
            })?;
        let at = Local::now().naive_local();
        Ok(self.apply_outcome(idx, position, consented, age, tug_time, at))
    }

    fn apply_outcome(
        &mut self,
        idx: usize,
        position: usize,
        consented: bool,
        age: Option<u32>,
        tug_time: Option<f64>,
        at: NaiveDateTime,
    ) -> &Candidate {
        let candidate = &mut self.villages[idx].candidates_mut()[position];
        candidate.record_contact(consented, age, tug_time, at);
        let candidate: &Candidate = candidate;

        if consented {
            let snapshot = Participant::from(candidate);
            match self.participants.iter_mut().find(|p| p.is_snapshot_of(candidate)) {
                Some(existing) => *existing = snapshot,
                None => self.participants.push(snapshot),
            }
            info!(
                "{} consented in {} (age: {:?}, TUG: {:?}s)",
                candidate.name(),
                candidate.group(),
                candidate.age(),
                candidate.tug_time()
            );
        } else {
            info!("{} declined consent in {}", candidate.name(), candidate.group());
        }

        &self.villages[idx].candidates()[position]
    }

    /// Progress of every village; does not touch roster state
    #[must_use]
    pub fn get_status(&self) -> SamplingStatus {
        SamplingStatus {
            groups: self
                .villages
                .iter()
                .map(|v| {
                    GroupStatus::from_village(v, &self.participants, self.config.target_per_group)
                })
                .collect(),
        }
    }
}
