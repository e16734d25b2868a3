//! End-to-end tests from fieldwork to chart statistics

use std::fs;

use islands_sampling::analysis::observations_from_participants;
use islands_sampling::{ExportFormat, RosterConfig, StudyReport, load_observations};

use crate::utils::{exporting_roster, populate};

#[test]
fn test_exported_roster_feeds_report() {
    let tmp = tempfile::tempdir().unwrap();
    let mut roster = exporting_roster(tmp.path(), ExportFormat::Csv);
    populate(&mut roster, "Vardo", 4, 2);
    populate(&mut roster, "Colmar", 4, 2);

    for group in ["Vardo", "Colmar"] {
        let next: Vec<String> = roster
            .get_next_to_contact(group, 4)
            .unwrap()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        for (i, name) in next.iter().enumerate() {
            let age = 40 + 10 * i as u32;
            roster
                .record_outcome(group, name, true, Some(age), Some(6.0 + 0.1 * f64::from(age)))
                .unwrap();
        }
    }

    let summary = roster.export().unwrap();
    assert_eq!(summary.total, 8);

    let observations = load_observations(&summary.path).unwrap();
    assert_eq!(observations, observations_from_participants(roster.participants()));

    let report = StudyReport::build(&observations, roster.groups());
    assert_eq!(report.n, 8);
    let trend = report.trend.as_ref().unwrap();
    assert!((trend.slope - 0.1).abs() < 1e-9);
    assert!((trend.r - 1.0).abs() < 1e-9);
    assert!(trend.is_significant(0.05));

    let vardo = report.distribution("Vardo").unwrap();
    assert_eq!(vardo.n, 4);
    assert!(report.distribution("Arcadia").is_none());
}

#[test]
fn test_field_dataset_report() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("Islands_dataset.csv");
    fs::write(
        &path,
        "\u{feff}Village,Age (years),Timed up and go test (seconds)\n\
         Vardo,68,8.9\nVardo,74,10.2\nVardo,81,12.6\nVardo,59,7.8\n\
         Colmar,45,6.9\nColmar,52,7.1\nColmar,63,7.6\nColmar,70,8.3\nColmar,77,19.5\n\
         Arcadia,38,6.2\nArcadia,,7.0\nArcadia,55,7.4\n",
    )
    .unwrap();

    let observations = load_observations(&path).unwrap();
    assert_eq!(observations.len(), 11);

    let report = StudyReport::build(&observations, &RosterConfig::default().groups);
    let names: Vec<&str> = report.distributions.iter().map(|d| d.group.as_str()).collect();
    assert_eq!(names, vec!["Vardo", "Colmar", "Arcadia"]);

    let colmar = report.distribution("Colmar").unwrap();
    assert_eq!(colmar.median, 7.6);
    assert_eq!(colmar.outliers, vec![19.5]);

    let trend = report.trend.as_ref().unwrap();
    assert!(trend.slope > 0.0);
    assert!(trend.p_value > 0.0 && trend.p_value < 1.0);

    let text = report.to_string();
    assert!(text.contains("Age vs. Timed Up and Go (N=11)"));
    assert!(text.contains("Colmar: 1 outlier(s) - [19.5]"));
}
