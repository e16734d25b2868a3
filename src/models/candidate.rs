//! Candidate entity model
//!
//! A candidate is a person discovered while exploring a village. Candidates
//! are never deleted; contact outcomes are recorded on them in place.

use chrono::NaiveDateTime;

/// A discovered person not yet confirmed as a data-bearing participant
///
/// Outcome fields (`consented`, `tug_time`, `timestamp`) stay unset until the
/// candidate has been contacted, and `tug_time` is only ever set alongside a
/// positive consent. Fields are private so the roster is the only writer.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    group: String,
    name: String,
    house: String,
    age: Option<u32>,
    contacted: bool,
    consented: Option<bool>,
    tug_time: Option<f64>,
    timestamp: Option<NaiveDateTime>,
    selected_stage1: bool,
    selected_stage2: bool,
}

impl Candidate {
    /// Create a freshly registered, uncontacted candidate
    #[must_use]
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        house: impl Into<String>,
        age: Option<u32>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            house: house.into(),
            age,
            contacted: false,
            consented: None,
            tug_time: None,
            timestamp: None,
            selected_stage1: false,
            selected_stage2: false,
        }
    }

    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn house(&self) -> &str {
        &self.house
    }

    #[must_use]
    pub const fn age(&self) -> Option<u32> {
        self.age
    }

    #[must_use]
    pub const fn contacted(&self) -> bool {
        self.contacted
    }

    #[must_use]
    pub const fn consented(&self) -> Option<bool> {
        self.consented
    }

    /// Timed-up-and-go measurement in seconds
    #[must_use]
    pub const fn tug_time(&self) -> Option<f64> {
        self.tug_time
    }

    /// When the most recent contact was recorded
    #[must_use]
    pub const fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    /// Whether the candidate lives in a Stage 1 selected house
    #[must_use]
    pub const fn selected_stage1(&self) -> bool {
        self.selected_stage1
    }

    /// Whether the candidate was placed in the Stage 2 contact order
    #[must_use]
    pub const fn selected_stage2(&self) -> bool {
        self.selected_stage2
    }

    pub(crate) fn mark_stage1(&mut self, selected: bool) {
        self.selected_stage1 = selected;
    }

    pub(crate) fn mark_stage2(&mut self, selected: bool) {
        self.selected_stage2 = selected;
    }

    /// Record a contact outcome, overwriting any earlier one
    ///
    /// A supplied `age` replaces the registered one; a missing `age` keeps it.
    /// A refusal clears any measurement left from an earlier consent.
    pub(crate) fn record_contact(
        &mut self,
        consented: bool,
        age: Option<u32>,
        tug_time: Option<f64>,
        at: NaiveDateTime,
    ) {
        self.contacted = true;
        self.consented = Some(consented);
        self.timestamp = Some(at);

        if consented {
            if age.is_some() {
                self.age = age;
            }
            self.tug_time = tug_time;
        } else {
            self.tug_time = None;
        }
    }
}
