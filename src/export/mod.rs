use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::models::ReinterpretedExpense;

const HEADER: [&str; 8] = ["id", "date", "time", "major", "minor", "cost", "tag", "memo"];

/// Write reinterpreted expenses as CSV with a header row. Returns the number of records written.
pub(crate) fn write_csv<W: Write>(writer: W, records: &[ReinterpretedExpense]) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for r in records {
        wtr.write_record([
            r.record.id.map(|id| id.to_string()).unwrap_or_default(),
            r.record.date.format("%Y-%m-%d").to_string(),
            r.record.time.map(|t| t.to_string()).unwrap_or_default(),
            r.record.major.clone(),
            r.record.minor.clone(),
            r.cost().to_string(),
            r.tag.as_str().to_string(),
            r.record.memo.clone(),
        ])?;
    }
    wtr.flush().context("Failed to flush CSV output")?;
    Ok(records.len())
}

pub(crate) fn export_to_path(path: &Path, records: &[ReinterpretedExpense]) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    let count = write_csv(file, records)?;
    tracing::info!(path = %path.display(), count, "exported records");
    Ok(count)
}
