use std::path::Path;

use tracing::{info, instrument};

use crate::error::{Result, ToolError};
use crate::flatten::{self, FOOD_COLUMNS, MASTER_COLUMNS, SWAP_COLUMNS};
use crate::io::{csv_read, csv_write, json_store};
use crate::model::Dataset;

/// Record counts reported by the pipelines for operator summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordCounts {
    pub foods: usize,
    pub swaps: usize,
}

/// Exports the canonical store into the two per-entity CSV files.
#[instrument(
    level = "info",
    skip_all,
    fields(store = %store.display(), foods = %foods_csv.display(), swaps = %swaps_csv.display())
)]
pub fn export_entities(store: &Path, foods_csv: &Path, swaps_csv: &Path) -> Result<RecordCounts> {
    let dataset = json_store::read_store(store)?;
    info!(
        food_count = dataset.bad_foods.len(),
        swap_count = dataset.swaps.len(),
        "loaded canonical store"
    );

    let food_rows = flatten::flatten_foods(&dataset.bad_foods);
    csv_write::write_rows(foods_csv, &FOOD_COLUMNS, &food_rows)?;
    let swap_rows = flatten::flatten_swaps(&dataset.swaps);
    csv_write::write_rows(swaps_csv, &SWAP_COLUMNS, &swap_rows)?;

    Ok(RecordCounts {
        foods: food_rows.len(),
        swaps: swap_rows.len(),
    })
}

/// Exports the canonical store into the single denormalised master CSV,
/// one row per swap with the target food's attributes inlined.
#[instrument(
    level = "info",
    skip_all,
    fields(store = %store.display(), master = %master_csv.display())
)]
pub fn export_master(store: &Path, master_csv: &Path) -> Result<usize> {
    let dataset = json_store::read_store(store)?;
    let rows = flatten::build_master_rows(&dataset)?;
    info!(row_count = rows.len(), "built master rows");
    csv_write::write_rows(master_csv, &MASTER_COLUMNS, &rows)?;
    Ok(rows.len())
}

/// Rebuilds the canonical store from the two per-entity CSV files,
/// preserving CSV row order.
///
/// Both files must exist before anything is read; a missing file aborts
/// the run and leaves the store untouched.
#[instrument(
    level = "info",
    skip_all,
    fields(foods = %foods_csv.display(), swaps = %swaps_csv.display(), store = %store.display())
)]
pub fn import_entities(foods_csv: &Path, swaps_csv: &Path, store: &Path) -> Result<RecordCounts> {
    require_csv(foods_csv, "export")?;
    require_csv(swaps_csv, "export")?;

    let food_rows = csv_read::read_rows(foods_csv)?;
    let bad_foods = flatten::collect_foods(food_rows)?;
    let swap_rows = csv_read::read_rows(swaps_csv)?;
    let swaps = flatten::collect_swaps(swap_rows);
    info!(
        food_count = bad_foods.len(),
        swap_count = swaps.len(),
        "collected rows from CSV"
    );

    let counts = RecordCounts {
        foods: bad_foods.len(),
        swaps: swaps.len(),
    };
    json_store::write_store(store, &Dataset { bad_foods, swaps })?;
    Ok(counts)
}

/// Rebuilds the canonical store from the master CSV, de-duplicating
/// targets by id and sorting them by priority.
#[instrument(
    level = "info",
    skip_all,
    fields(master = %master_csv.display(), store = %store.display())
)]
pub fn import_master(master_csv: &Path, store: &Path) -> Result<RecordCounts> {
    require_csv(master_csv, "export-master")?;

    let rows = csv_read::read_rows(master_csv)?;
    let dataset = flatten::collect_master_rows(rows)?;
    info!(
        food_count = dataset.bad_foods.len(),
        swap_count = dataset.swaps.len(),
        "collected unique targets and swaps"
    );

    let counts = RecordCounts {
        foods: dataset.bad_foods.len(),
        swaps: dataset.swaps.len(),
    };
    json_store::write_store(store, &dataset)?;
    Ok(counts)
}

fn require_csv(path: &Path, producer: &'static str) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(ToolError::MissingCsv {
            path: path.to_path_buf(),
            producer,
        })
    }
}
