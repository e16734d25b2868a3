//! Demographically informed sampling plans
//!
//! Before fieldwork starts, each village gets a reproducible list of house
//! numbers drawn from its full housing stock, with a randomized adult contact
//! order per house sized from the village's average occupancy.

use std::fmt;

use itertools::Itertools;
use log::info;
use rand::prelude::*;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::algorithm::estimate::{SamplingStrategy, estimate_houses_needed};
use crate::algorithm::sampling::seed::{stage_one_seed, stage_rng};
use crate::config::RosterConfig;
use crate::error::{Result, SamplingError};
use crate::models::{VILLAGE_PROFILES, VillageProfile};

/// Adult-count weights for villages averaging under two residents per house
static SPARSE_OCCUPANCY: [(u32, u32); 3] = [(1, 50), (2, 35), (3, 15)];
/// Adult-count weights for villages averaging two to three residents
static MODERATE_OCCUPANCY: [(u32, u32); 4] = [(1, 20), (2, 40), (3, 30), (4, 10)];
/// Adult-count weights for villages averaging three or more residents
static DENSE_OCCUPANCY: [(u32, u32); 4] = [(2, 30), (3, 35), (4, 25), (5, 10)];

/// Planned visit to one house
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HousePlan {
    /// House number in `1..=houses`
    pub house_number: u32,
    /// Adults to approach, in contact order
    pub adult_order: Vec<u32>,
}

/// Sampling plan for one village
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VillagePlan {
    pub profile: VillageProfile,
    pub strategy: SamplingStrategy,
    pub target: usize,
    pub response_rate: f64,
    /// Houses in ascending house-number order
    pub houses: Vec<HousePlan>,
}

fn occupancy_weights(avg_per_house: f64) -> &'static [(u32, u32)] {
    if avg_per_house < 2.0 {
        &SPARSE_OCCUPANCY
    } else if avg_per_house < 3.0 {
        &MODERATE_OCCUPANCY
    } else {
        &DENSE_OCCUPANCY
    }
}

/// Generate the sampling plan for one village
///
/// The draw is seeded from `seed` and the village name, so the same inputs
/// always give the same plan.
pub fn generate_sampling_plan(
    profile: &VillageProfile,
    seed: u64,
    target: usize,
    response_rate: f64,
) -> Result<VillagePlan> {
    let strategy =
        estimate_houses_needed(profile.houses, profile.population, target, response_rate)?;
    let stock = profile.houses as usize;
    let amount = strategy.houses_needed.min(stock);

    let mut rng = stage_rng(stage_one_seed(seed, profile.name));
    let mut house_numbers: Vec<u32> = rand::seq::index::sample(&mut rng, stock, amount)
        .into_iter()
        .map(|i| i as u32 + 1)
        .collect();
    house_numbers.sort_unstable();

    let weights = occupancy_weights(strategy.avg_per_house);
    let mut houses = Vec::with_capacity(house_numbers.len());
    for house_number in house_numbers {
        let &(adults, _) = weights
            .choose_weighted(&mut rng, |&(_, weight)| weight)
            .map_err(|e| SamplingError::invalid_parameter(format!("adult weights: {e}")))?;
        let mut adult_order: Vec<u32> = (1..=adults).collect();
        adult_order.shuffle(&mut rng);
        houses.push(HousePlan {
            house_number,
            adult_order,
        });
    }

    info!(
        "Sampling plan for {}: {} of {} houses",
        profile.name,
        houses.len(),
        profile.houses
    );

    Ok(VillagePlan {
        profile: *profile,
        strategy,
        target,
        response_rate,
        houses,
    })
}

/// Generate plans for every configured village with published demographics
///
/// Configured groups without a built-in profile are skipped.
pub fn generate_study_plan(config: &RosterConfig, response_rate: f64) -> Result<Vec<VillagePlan>> {
    config
        .groups
        .iter()
        .filter_map(|group| VILLAGE_PROFILES.iter().find(|p| p.name == group.as_str()))
        .map(|profile| {
            generate_sampling_plan(
                profile,
                config.study_seed,
                config.target_per_group,
                response_rate,
            )
        })
        .collect()
}

impl fmt::Display for VillagePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Two-stage random sampling for {}", self.profile.name.to_uppercase())?;
        writeln!(
            f,
            "Village stats: {} houses, {} people",
            self.profile.houses, self.profile.population
        )?;
        writeln!(f, "Average adults per house: {:.1}", self.strategy.avg_per_house)?;
        writeln!(
            f,
            "Houses to sample: {} (for {} participants at {:.0}% response rate)",
            self.strategy.houses_needed,
            self.target,
            self.response_rate * 100.0
        )?;
        writeln!(
            f,
            "Stage 1 - houses: {}",
            self.houses.iter().map(|h| h.house_number).join(", ")
        )?;
        writeln!(f, "Stage 2 - adult contact order per house:")?;
        for house in &self.houses {
            writeln!(
                f,
                "  House {}: adults [{}]",
                house.house_number,
                house.adult_order.iter().join(", ")
            )?;
        }
        Ok(())
    }
}
