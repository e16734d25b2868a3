use std::path::Path;

use islands_sampling::{ExportFormat, RosterConfig, SamplingRoster};

/// Roster with the default villages and the given Stage 1 size
#[must_use]
pub fn roster_with_houses(houses_per_group: usize) -> SamplingRoster {
    SamplingRoster::new(
        RosterConfig::builder()
            .houses_per_group(houses_per_group)
            .build(),
    )
    .unwrap()
}

/// Roster exporting into `dir`
#[must_use]
pub fn exporting_roster(dir: &Path, format: ExportFormat) -> SamplingRoster {
    SamplingRoster::new(
        RosterConfig::builder()
            .houses_per_group(10)
            .export_dir(dir)
            .export_format(format)
            .build(),
    )
    .unwrap()
}

/// Register `per_house` people in each of `houses` houses of `group`
///
/// Names are `<group>-<house>-<n>`, houses are `H<house>`.
pub fn populate(roster: &mut SamplingRoster, group: &str, houses: usize, per_house: usize) {
    for house in 1..=houses {
        for n in 1..=per_house {
            roster
                .register_candidate(
                    group,
                    &format!("{group}-{house}-{n}"),
                    &format!("H{house}"),
                    Some(30 + (house * 7 + n * 3) as u32 % 60),
                )
                .unwrap();
        }
    }
}

/// Names of a contact order, for comparisons
#[must_use]
pub fn names<'a>(order: impl IntoIterator<Item = &'a islands_sampling::Candidate>) -> Vec<String> {
    order.into_iter().map(|c| c.name().to_string()).collect()
}
