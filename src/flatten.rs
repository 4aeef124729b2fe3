use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ToolError};
use crate::model::{Dataset, FoodItem, Swap, join_list, split_list};

/// Column order of the foods CSV.
pub const FOOD_COLUMNS: [&str; 6] = [
    "id",
    "name",
    "category",
    "keywords",
    "avgCalories",
    "priority",
];

/// Column order of the swaps CSV.
pub const SWAP_COLUMNS: [&str; 4] = ["targetFoodId", "title", "description", "foods"];

/// Column order of the denormalised master CSV.
pub const MASTER_COLUMNS: [&str; 9] = [
    "target_id",
    "target_name",
    "target_category",
    "target_keywords",
    "target_calories",
    "target_priority",
    "swap_title",
    "swap_description",
    "swap_foods",
];

/// One row of the foods CSV. Cells are kept as plain strings; typed values
/// are rebuilt when rows are collected back into the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub keywords: String,
    #[serde(rename = "avgCalories")]
    pub avg_calories: String,
    pub priority: String,
}

/// One row of the swaps CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRow {
    #[serde(rename = "targetFoodId")]
    pub target_food_id: String,
    pub title: String,
    pub description: String,
    pub foods: String,
}

/// One row of the master CSV: a swap with its target food's attributes
/// inlined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterRow {
    pub target_id: String,
    pub target_name: String,
    pub target_category: String,
    pub target_keywords: String,
    pub target_calories: String,
    pub target_priority: String,
    pub swap_title: String,
    pub swap_description: String,
    pub swap_foods: String,
}

/// Flattens food items into per-entity CSV rows.
pub fn flatten_foods(items: &[FoodItem]) -> Vec<FoodRow> {
    items
        .iter()
        .map(|item| FoodRow {
            id: item.id.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            keywords: join_list(&item.keywords),
            avg_calories: item.avg_calories.to_string(),
            priority: item.priority.to_string(),
        })
        .collect()
}

/// Flattens swaps into per-entity CSV rows.
pub fn flatten_swaps(swaps: &[Swap]) -> Vec<SwapRow> {
    swaps
        .iter()
        .map(|swap| SwapRow {
            target_food_id: swap.target_food_id.clone(),
            title: swap.title.clone(),
            description: swap.description.clone(),
            foods: join_list(&swap.foods),
        })
        .collect()
}

/// Rebuilds food items from per-entity CSV rows, preserving row order.
pub fn collect_foods(rows: Vec<FoodRow>) -> Result<Vec<FoodItem>> {
    rows.into_iter()
        .map(|row| {
            Ok(FoodItem {
                id: row.id,
                name: row.name,
                category: row.category,
                keywords: split_list(&row.keywords),
                avg_calories: parse_integer("avgCalories", &row.avg_calories)?,
                priority: parse_integer("priority", &row.priority)?,
            })
        })
        .collect()
}

/// Rebuilds swaps from per-entity CSV rows, preserving row order.
pub fn collect_swaps(rows: Vec<SwapRow>) -> Vec<Swap> {
    rows.into_iter()
        .map(|row| Swap {
            target_food_id: row.target_food_id,
            title: row.title,
            description: row.description,
            foods: split_list(&row.foods),
        })
        .collect()
}

/// Builds the denormalised master rows, one per swap, with the target
/// food's attributes inlined. A swap whose target id is absent from the
/// store is a fatal error.
pub fn build_master_rows(dataset: &Dataset) -> Result<Vec<MasterRow>> {
    let foods_by_id: HashMap<&str, &FoodItem> = dataset
        .bad_foods
        .iter()
        .map(|item| (item.id.as_str(), item))
        .collect();

    dataset
        .swaps
        .iter()
        .map(|swap| {
            let target = foods_by_id
                .get(swap.target_food_id.as_str())
                .ok_or_else(|| ToolError::MissingTarget(swap.target_food_id.clone()))?;
            Ok(MasterRow {
                target_id: target.id.clone(),
                target_name: target.name.clone(),
                target_category: target.category.clone(),
                target_keywords: join_list(&target.keywords),
                target_calories: target.avg_calories.to_string(),
                target_priority: target.priority.to_string(),
                swap_title: swap.title.clone(),
                swap_description: swap.description.clone(),
                swap_foods: join_list(&swap.foods),
            })
        })
        .collect()
}

/// Rebuilds the canonical store from master rows.
///
/// Target attributes are taken from the first row seen for each
/// `target_id`; later rows with the same id contribute only their swap,
/// and their target columns are never parsed. Every row appends exactly
/// one swap. The rebuilt food list is sorted ascending by priority with a
/// stable sort, so equal priorities keep first-encounter order.
///
/// The master layout cannot represent a food item with zero referencing
/// swaps, so such items are absent from a store rebuilt through this
/// path.
pub fn collect_master_rows(rows: Vec<MasterRow>) -> Result<Dataset> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut bad_foods: Vec<FoodItem> = Vec::new();
    let mut swaps: Vec<Swap> = Vec::with_capacity(rows.len());

    for row in rows {
        if seen.insert(row.target_id.clone()) {
            bad_foods.push(FoodItem {
                id: row.target_id.clone(),
                name: row.target_name,
                category: row.target_category,
                keywords: split_list(&row.target_keywords),
                avg_calories: parse_integer("target_calories", &row.target_calories)?,
                priority: parse_integer("target_priority", &row.target_priority)?,
            });
        }
        swaps.push(Swap {
            target_food_id: row.target_id,
            title: row.swap_title,
            description: row.swap_description,
            foods: split_list(&row.swap_foods),
        });
    }

    bad_foods.sort_by_key(|item| item.priority);
    Ok(Dataset { bad_foods, swaps })
}

fn parse_integer(column: &str, value: &str) -> Result<i64> {
    value.parse().map_err(|_| ToolError::InvalidLiteral {
        column: column.to_string(),
        value: value.to_string(),
    })
}
