//! Seed derivation for the two sampling stages
//!
//! Every stochastic step builds its own generator from the study seed, the
//! group name and a stage constant. No generator state is shared between
//! calls, so repeating a call with unchanged inputs repeats its draw.

use std::hash::{Hash, Hasher};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHasher;

/// Stable hash of a group name
///
/// `FxHasher` carries no per-process random state, unlike the std hasher.
#[must_use]
pub fn group_hash(group: &str) -> u64 {
    let mut hasher = FxHasher::default();
    group.hash(&mut hasher);
    hasher.finish()
}

/// Seed for Stage 1 (house selection) in `group`
#[must_use]
pub fn stage_one_seed(study_seed: u64, group: &str) -> u64 {
    study_seed.wrapping_add(group_hash(group))
}

/// Seed for Stage 2 (contact ordering) in `group`
#[must_use]
pub fn stage_two_seed(study_seed: u64, group: &str, stage_two_offset: u64) -> u64 {
    stage_one_seed(study_seed, group).wrapping_add(stage_two_offset)
}

/// Fresh generator for one stage
#[must_use]
pub fn stage_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
