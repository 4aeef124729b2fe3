use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Writes a headed CSV file. The header row is written up front so an
/// empty dataset still produces a valid, re-importable file.
pub fn write_rows<T: Serialize>(path: &Path, columns: &[&str], rows: &[T]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
