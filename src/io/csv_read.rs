use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Reads every row of a headed CSV file, mapping cells to record fields by
/// column name rather than position.
pub fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}
