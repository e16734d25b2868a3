//! Participant tables as CSV
//!
//! One row per participant, header row first, columns in `Participant`
//! field order.

use std::path::Path;

use crate::error::Result;
use crate::error::util::{create_file, open_file};
use crate::models::Participant;

/// Write `participants` to a CSV file, replacing any existing file
pub fn write_participants_csv(path: &Path, participants: &[Participant]) -> Result<()> {
    let file = create_file(path, "participant export")?;
    let mut writer = csv::Writer::from_writer(file);
    for participant in participants {
        writer.serialize(participant)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read participants back from a CSV file written by `write_participants_csv`
pub fn read_participants_csv(path: &Path) -> Result<Vec<Participant>> {
    let file = open_file(path, "participant import")?;
    let mut reader = csv::Reader::from_reader(file);
    let mut participants = Vec::new();
    for row in reader.deserialize() {
        participants.push(row?);
    }
    Ok(participants)
}
