//! Participant tables as Parquet
//!
//! Rows go through `serde_arrow` into a single Arrow record batch, which is
//! written with the Arrow-aware Parquet writer.

use std::path::Path;
use std::sync::Arc;

use arrow::datatypes::{DataType, Field, FieldRef};
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::Result;
use crate::error::util::{create_file, open_file};
use crate::models::Participant;

/// Arrow schema of a participant row
///
/// Declared rather than traced: `NaiveDateTime` is not self-describing, and
/// a column that is null in every row would otherwise lose its type.
/// Timestamps are stored as ISO 8601 text, the same text the CSV table holds.
#[must_use]
pub fn participant_fields() -> Vec<FieldRef> {
    vec![
        Arc::new(Field::new("group", DataType::Utf8, false)),
        Arc::new(Field::new("name", DataType::Utf8, false)),
        Arc::new(Field::new("house", DataType::Utf8, false)),
        Arc::new(Field::new("age", DataType::UInt32, true)),
        Arc::new(Field::new("consented", DataType::Boolean, false)),
        Arc::new(Field::new("tug_time", DataType::Float64, true)),
        Arc::new(Field::new("timestamp", DataType::Utf8, true)),
        Arc::new(Field::new("selected_stage1", DataType::Boolean, false)),
        Arc::new(Field::new("selected_stage2", DataType::Boolean, false)),
    ]
}

/// Write `participants` to a Parquet file, replacing any existing file
pub fn write_participants_parquet(path: &Path, participants: &[Participant]) -> Result<()> {
    let batch = serde_arrow::to_record_batch(&participant_fields(), &participants)?;

    let file = create_file(path, "participant export")?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

/// Read participants back from a Parquet file
pub fn read_participants_parquet(path: &Path) -> Result<Vec<Participant>> {
    let file = open_file(path, "participant import")?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut participants = Vec::new();
    for batch in reader {
        let batch = batch?;
        participants.extend(serde_arrow::from_record_batch::<Vec<Participant>>(&batch)?);
    }
    Ok(participants)
}
