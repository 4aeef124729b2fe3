use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::Dataset;

/// Reads the canonical JSON store.
pub fn read_store(path: &Path) -> Result<Dataset> {
    let source = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&source)?)
}

/// Overwrites the canonical JSON store with a pretty-printed (2-space
/// indented) document.
pub fn write_store(path: &Path, dataset: &Dataset) -> Result<()> {
    let json = serde_json::to_string_pretty(dataset)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FoodItem, Swap};
    use tempfile::tempdir;

    #[test]
    fn store_roundtrip_preserves_dataset_and_key_names() {
        let dataset = Dataset {
            bad_foods: vec![FoodItem {
                id: "f1".to_string(),
                name: "Soda".to_string(),
                category: "Drink".to_string(),
                keywords: vec!["sugar".to_string(), "cola".to_string()],
                avg_calories: 150,
                priority: 1,
            }],
            swaps: vec![Swap {
                target_food_id: "f1".to_string(),
                title: "Try sparkling water".to_string(),
                description: "Low sugar".to_string(),
                foods: vec!["Sparkling water".to_string()],
            }],
        };

        let temp_dir = tempdir().expect("temporary directory");
        let path = temp_dir.path().join("foodswap_data.json");
        write_store(&path, &dataset).expect("store written");

        let written = fs::read_to_string(&path).expect("store file read");
        assert!(written.contains("\"badFoods\""));
        assert!(written.contains("\"avgCalories\": 150"));
        assert!(written.contains("\"targetFoodId\": \"f1\""));

        let restored = read_store(&path).expect("store read");
        assert_eq!(restored, dataset);
    }
}
