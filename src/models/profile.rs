//! Published village demographics
//!
//! House and population counts used to size the Stage 1 draw before any
//! fieldwork happens.

use serde::Serialize;

/// Published housing stock and population of a village
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VillageProfile {
    /// Village name
    pub name: &'static str,
    /// Total number of houses
    pub houses: u32,
    /// Total population
    pub population: u32,
}

impl VillageProfile {
    /// Average number of residents per house
    #[must_use]
    pub fn average_per_house(&self) -> f64 {
        if self.houses == 0 {
            return 0.0;
        }
        f64::from(self.population) / f64::from(self.houses)
    }
}

/// Demographics of the three study villages
pub static VILLAGE_PROFILES: [VillageProfile; 3] = [
    VillageProfile {
        name: "Vardo",
        houses: 762,
        population: 1790,
    },
    VillageProfile {
        name: "Colmar",
        houses: 2299,
        population: 5650,
    },
    VillageProfile {
        name: "Arcadia",
        houses: 2101,
        population: 5308,
    },
];

/// Look up a built-in profile by village name
#[must_use]
pub fn village_profile(name: &str) -> Option<&'static VillageProfile> {
    VILLAGE_PROFILES.iter().find(|p| p.name == name)
}
