use std::path::PathBuf;

use directories::UserDirs;

/// File name of the canonical JSON store.
pub const STORE_FILE: &str = "foodswap_data.json";
/// File name of the exported foods CSV.
pub const FOODS_CSV: &str = "bad_foods.csv";
/// File name of the exported swaps CSV.
pub const SWAPS_CSV: &str = "swaps.csv";
/// File name of the denormalised master CSV.
pub const MASTER_CSV: &str = "foodswap_master.csv";

/// Default location of the canonical store, relative to the working
/// directory.
pub fn default_store_path() -> PathBuf {
    PathBuf::from("data").join(STORE_FILE)
}

/// Directory where CSV files are exchanged with the spreadsheet user.
/// Resolves to the user's desktop directory when one is known, otherwise
/// the working directory.
pub fn default_csv_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.desktop_dir().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}
