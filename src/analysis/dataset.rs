//! Measurement datasets for the reporting charts
//!
//! Both the roster export and the hand-assembled field dataset can be read.
//! The field dataset uses descriptive headers and is often saved with a
//! UTF-8 byte order mark.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::error::util::open_file;
use crate::models::Participant;
use crate::utils::logging::{log_table_read, log_warning};

/// One measured participant as seen by the charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    /// Village
    pub group: String,
    /// Age in years
    pub age: f64,
    /// Timed-up-and-go time in seconds
    pub tug_time: f64,
}

#[derive(Debug, Deserialize)]
struct ObservationRow {
    #[serde(alias = "Village")]
    group: String,
    #[serde(alias = "Age (years)")]
    age: Option<f64>,
    #[serde(alias = "Timed up and go test (seconds)")]
    tug_time: Option<f64>,
}

/// Read observations from a CSV dataset
///
/// Rows without an age or a measurement are skipped.
pub fn load_observations(path: &Path) -> Result<Vec<Observation>> {
    let mut text = String::new();
    open_file(path, "chart dataset")?.read_to_string(&mut text)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut observations = Vec::new();
    let mut skipped = 0usize;
    for row in reader.deserialize::<ObservationRow>() {
        let row = row?;
        match (row.age, row.tug_time) {
            (Some(age), Some(tug_time)) => observations.push(Observation {
                group: row.group,
                age,
                tug_time,
            }),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        log_warning(
            &format!("Skipped {skipped} rows without age or measurement"),
            Some(path),
        );
    }
    log_table_read(path, observations.len(), "observations");
    Ok(observations)
}

/// Observations from finalized participants that carry age and measurement
#[must_use]
pub fn observations_from_participants(participants: &[Participant]) -> Vec<Observation> {
    participants
        .iter()
        .filter_map(|p| {
            Some(Observation {
                group: p.group.clone(),
                age: f64::from(p.age?),
                tug_time: p.tug_time?,
            })
        })
        .collect()
}
