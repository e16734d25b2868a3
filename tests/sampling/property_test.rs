//! Property tests for Stage 1 and Stage 2

use std::collections::{BTreeSet, HashSet};

use islands_sampling::{RosterConfig, SamplingRoster};
use proptest::prelude::*;

fn roster_from(seed: u64, houses: &[(u8, u8)]) -> SamplingRoster {
    let mut roster =
        SamplingRoster::new(RosterConfig::builder().study_seed(seed).build()).unwrap();
    for (i, &(house, _)) in houses.iter().enumerate() {
        roster
            .register_candidate("Colmar", &format!("person-{i}"), &format!("H{house}"), None)
            .unwrap();
    }
    roster
}

proptest! {
    #[test]
    fn selection_size_is_bounded_by_frame(
        seed in any::<u64>(),
        houses in prop::collection::vec((0u8..30, any::<u8>()), 1..60),
        k in 0usize..40,
    ) {
        let mut roster = roster_from(seed, &houses);
        let frame: BTreeSet<String> = roster.house_registry("Colmar").unwrap().into_iter().collect();

        let selected = roster.select_houses("Colmar", k).unwrap();
        prop_assert_eq!(selected.len(), k.min(frame.len()));
        prop_assert!(selected.iter().all(|h| frame.contains(h)));
        prop_assert_eq!(selected.iter().collect::<HashSet<_>>().len(), selected.len());
    }

    #[test]
    fn contact_order_is_a_deterministic_permutation(
        seed in any::<u64>(),
        houses in prop::collection::vec((0u8..12, any::<u8>()), 1..40),
    ) {
        let mut a = roster_from(seed, &houses);
        let mut b = roster_from(seed, &houses);

        let order_a: Vec<String> =
            a.build_contact_order("Colmar").unwrap().iter().map(|c| c.name().to_string()).collect();
        let order_b: Vec<String> =
            b.build_contact_order("Colmar").unwrap().iter().map(|c| c.name().to_string()).collect();
        prop_assert_eq!(&order_a, &order_b);

        let selected: HashSet<String> = a.selected_houses("Colmar").unwrap().into_iter().collect();
        let expected = a
            .village("Colmar")
            .unwrap()
            .candidates()
            .iter()
            .filter(|c| selected.contains(c.house()))
            .count();
        prop_assert_eq!(order_a.len(), expected);
        prop_assert_eq!(order_a.iter().collect::<HashSet<_>>().len(), order_a.len());
    }
}
