//! Tests for the two-stage sampling roster

use std::collections::HashSet;

use islands_sampling::{RosterConfig, SamplingError, SamplingRoster};

use crate::utils::{names, populate, roster_with_houses};

#[test]
fn test_vardo_three_candidates_two_houses() {
    let mut roster = roster_with_houses(15);
    roster.register_candidate("Vardo", "Anna", "H1", None).unwrap();
    roster.register_candidate("Vardo", "Bjorn", "H1", None).unwrap();
    roster.register_candidate("Vardo", "Cato", "H2", None).unwrap();

    let selected = roster.select_houses("Vardo", 2).unwrap();
    assert_eq!(selected, vec!["H1".to_string(), "H2".to_string()]);

    let order = names(roster.build_contact_order("Vardo").unwrap());
    assert_eq!(order.len(), 3);
    let distinct: HashSet<&str> = order.iter().map(String::as_str).collect();
    assert_eq!(distinct, HashSet::from(["Anna", "Bjorn", "Cato"]));
}

#[test]
fn test_selection_is_subset_of_registry_with_expected_size() {
    let mut roster = roster_with_houses(15);
    populate(&mut roster, "Colmar", 12, 2);

    for k in [0, 1, 5, 12, 40] {
        let selected = roster.select_houses("Colmar", k).unwrap();
        let registry: HashSet<String> = roster.house_registry("Colmar").unwrap().into_iter().collect();
        assert_eq!(selected.len(), k.min(12));
        assert!(selected.iter().all(|h| registry.contains(h)));
        let mut sorted = selected.clone();
        sorted.sort();
        assert_eq!(selected, sorted);
    }
}

#[test]
fn test_identical_rosters_reproduce_selections() {
    let mut a = roster_with_houses(4);
    let mut b = roster_with_houses(4);
    for roster in [&mut a, &mut b] {
        populate(roster, "Vardo", 9, 2);
        populate(roster, "Arcadia", 7, 3);
    }

    for group in ["Vardo", "Arcadia"] {
        assert_eq!(
            a.select_houses(group, 4).unwrap(),
            b.select_houses(group, 4).unwrap()
        );
        assert_eq!(
            names(a.build_contact_order(group).unwrap()),
            names(b.build_contact_order(group).unwrap())
        );
    }
}

#[test]
fn test_repeated_contact_order_is_stable() {
    let mut roster = roster_with_houses(5);
    populate(&mut roster, "Arcadia", 8, 3);

    let first = names(roster.build_contact_order("Arcadia").unwrap());
    let second = names(roster.build_contact_order("Arcadia").unwrap());
    assert_eq!(first, second);
    assert_eq!(first.len(), 15);
}

#[test]
fn test_stage_two_offset_changes_order_but_not_houses() {
    let build = |offset: u64| {
        let mut roster = SamplingRoster::new(
            RosterConfig::builder()
                .houses_per_group(6)
                .stage_two_offset(offset)
                .build(),
        )
        .unwrap();
        populate(&mut roster, "Vardo", 10, 3);
        let order = names(roster.build_contact_order("Vardo").unwrap());
        (roster.selected_houses("Vardo").unwrap(), order)
    };

    let (houses_a, order_a) = build(100);
    let (houses_b, order_b) = build(7_919);
    assert_eq!(houses_a, houses_b);
    assert_ne!(order_a, order_b);

    let set_a: HashSet<&String> = order_a.iter().collect();
    let set_b: HashSet<&String> = order_b.iter().collect();
    assert_eq!(set_a, set_b);
}

#[test]
fn test_groups_are_sampled_independently() {
    let mut roster = roster_with_houses(3);
    populate(&mut roster, "Vardo", 6, 1);
    let vardo_alone = roster.select_houses("Vardo", 3).unwrap();

    populate(&mut roster, "Colmar", 6, 1);
    roster.select_houses("Colmar", 3).unwrap();
    assert_eq!(roster.select_houses("Vardo", 3).unwrap(), vardo_alone);
}

#[test]
fn test_record_outcome_counts() {
    let mut roster = roster_with_houses(15);
    populate(&mut roster, "Vardo", 2, 2);

    let candidate = roster
        .record_outcome("Vardo", "Vardo-1-1", true, Some(72), Some(9.8))
        .unwrap();
    assert!(candidate.contacted());
    assert_eq!(candidate.age(), Some(72));
    assert!(candidate.timestamp().is_some());
    assert_eq!(roster.participants().len(), 1);

    let candidate = roster
        .record_outcome("Vardo", "Vardo-1-2", false, None, Some(10.0))
        .unwrap();
    assert!(candidate.contacted());
    assert_eq!(candidate.consented(), Some(false));
    assert_eq!(candidate.tug_time(), None);
    assert_eq!(roster.participants().len(), 1);

    let participant = &roster.participants()[0];
    assert_eq!(participant.name, "Vardo-1-1");
    assert_eq!(participant.tug_time, Some(9.8));
}

#[test]
fn test_rerecorded_outcomes_keep_finalized_count() {
    let mut roster = roster_with_houses(15);
    populate(&mut roster, "Vardo", 2, 2);

    // consent, consent again, then refuse
    let steps = [(true, Some(8.8), 1), (true, Some(8.1), 1), (false, None, 1)];
    for (consented, tug_time, expected) in steps {
        roster
            .record_outcome("Vardo", "Vardo-1-1", consented, None, tug_time)
            .unwrap();
        assert_eq!(roster.participants().len(), expected);
    }
    assert_eq!(roster.participants()[0].tug_time, Some(8.1));

    // refuse first, then consent, then refuse again
    let steps = [(false, None, 1), (true, Some(12.4), 2), (false, None, 2)];
    for (consented, tug_time, expected) in steps {
        roster
            .record_outcome("Vardo", "Vardo-2-1", consented, None, tug_time)
            .unwrap();
        assert_eq!(roster.participants().len(), expected);
    }

    let status = roster.get_status();
    let vardo = status.group("Vardo").unwrap();
    assert_eq!(vardo.completed, 2);
    assert_eq!(vardo.contacted, 2);
}

#[test]
fn test_unknown_candidate_leaves_state_untouched() {
    let mut roster = roster_with_houses(15);
    populate(&mut roster, "Colmar", 2, 1);
    let before = roster.get_status();

    let err = roster
        .record_outcome("Colmar", "Nobody", true, None, Some(8.0))
        .unwrap_err();
    assert!(matches!(err, SamplingError::CandidateNotFound { .. }));

    let err = roster
        .record_outcome("Atlantis", "Colmar-1-1", true, None, Some(8.0))
        .unwrap_err();
    assert!(matches!(err, SamplingError::UnknownGroup { .. }));

    assert_eq!(roster.get_status(), before);
    assert!(roster.participants().is_empty());
}

#[test]
fn test_first_name_match_wins() {
    let mut roster = roster_with_houses(15);
    roster.register_candidate("Arcadia", "Kim", "7", None).unwrap();
    roster.register_candidate("Arcadia", "Kim", "9", None).unwrap();

    let candidate = roster
        .record_outcome("Arcadia", "Kim", true, Some(50), Some(7.5))
        .unwrap();
    assert_eq!(candidate.house(), "7");
    assert!(!roster.village("Arcadia").unwrap().candidates()[1].contacted());
}

#[test]
fn test_next_to_contact_boundaries() {
    let mut roster = roster_with_houses(15);
    populate(&mut roster, "Vardo", 3, 2);

    assert!(roster.get_next_to_contact("Vardo", 0).unwrap().is_empty());

    let first_two = names(roster.get_next_to_contact("Vardo", 2).unwrap());
    assert_eq!(first_two.len(), 2);
    roster
        .record_outcome("Vardo", &first_two[0], true, None, Some(8.1))
        .unwrap();

    let remaining = names(roster.get_next_to_contact("Vardo", 100).unwrap());
    assert_eq!(remaining.len(), 5);
    assert!(!remaining.contains(&first_two[0]));
    assert_eq!(remaining[0], first_two[1]);
}

#[test]
fn test_status_reflects_progress_and_is_idempotent() {
    let mut roster = roster_with_houses(2);
    populate(&mut roster, "Vardo", 4, 2);

    let status = roster.get_status();
    let vardo = status.group("Vardo").unwrap();
    assert_eq!(vardo.target, 20);
    assert_eq!(vardo.houses_registered, 4);
    assert_eq!(vardo.houses_selected, 0);
    assert_eq!(vardo.response_rate, None);

    let order = names(roster.build_contact_order("Vardo").unwrap());
    roster.record_outcome("Vardo", &order[0], true, None, Some(9.0)).unwrap();

    let status = roster.get_status();
    assert_eq!(status, roster.get_status());

    let vardo = status.group("Vardo").unwrap();
    assert_eq!(vardo.completed, 1);
    assert_eq!(vardo.remaining, 19);
    assert_eq!(vardo.houses_selected, 2);
    assert_eq!(vardo.stage_two_eligible, 4);
    assert_eq!(vardo.contacted, 1);
    assert_eq!(vardo.response_rate, Some(0.25));
    assert_eq!(status.total_completed(), 1);

    let text = status.to_string();
    assert!(text.contains("Stage 1 - Houses: 2/4 selected"));
    assert!(text.contains("Response rate: N/A"));
}

#[test]
fn test_remaining_never_negative() {
    let mut roster =
        SamplingRoster::new(RosterConfig::builder().target_per_group(1).build()).unwrap();
    populate(&mut roster, "Colmar", 1, 3);
    for n in 1..=3 {
        roster
            .record_outcome("Colmar", &format!("Colmar-1-{n}"), true, None, Some(7.0))
            .unwrap();
    }

    let status = roster.get_status();
    let colmar = status.group("Colmar").unwrap();
    assert_eq!(colmar.completed, 3);
    assert_eq!(colmar.remaining, 0);
    assert!(colmar.is_complete());
}
