use serde::{Deserialize, Serialize};

/// Separator used when a list-valued field is flattened into a single CSV
/// cell. Keywords and substitute names must not contain this character; the
/// constraint is not validated.
pub const LIST_SEPARATOR: &str = "|";

/// A food item the dataset recommends replacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Identifier, unique within the store.
    pub id: String,
    pub name: String,
    pub category: String,
    /// Search keywords, ordered.
    pub keywords: Vec<String>,
    #[serde(rename = "avgCalories")]
    pub avg_calories: i64,
    /// Sort key used when rebuilding the store from the master CSV.
    pub priority: i64,
}

/// A substitution suggestion pointing at one [`FoodItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swap {
    /// Id of the food this swap replaces. Referential integrity is assumed,
    /// not enforced.
    #[serde(rename = "targetFoodId")]
    pub target_food_id: String,
    pub title: String,
    pub description: String,
    /// Names of suggested substitute items, ordered.
    pub foods: Vec<String>,
}

/// The canonical store: the JSON document that is the authoritative source
/// of truth for the dataset. Field order matches the key order of the
/// historical store files.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "badFoods")]
    pub bad_foods: Vec<FoodItem>,
    pub swaps: Vec<Swap>,
}

/// Joins a list-valued field into its single-cell CSV representation.
pub fn join_list(items: &[String]) -> String {
    items.join(LIST_SEPARATOR)
}

/// Splits a single-cell CSV value back into a list.
///
/// An empty cell yields a list containing one empty string, not an empty
/// list, so the two helpers are inverses only for non-empty lists.
pub fn split_list(value: &str) -> Vec<String> {
    value.split(LIST_SEPARATOR).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_then_split_reproduces_lists_without_separator() {
        let items = vec!["sugar".to_string(), "cola".to_string()];
        assert_eq!(join_list(&items), "sugar|cola");
        assert_eq!(split_list(&join_list(&items)), items);

        let single = vec!["Sparkling water".to_string()];
        assert_eq!(split_list(&join_list(&single)), single);
    }

    #[test]
    fn empty_list_joins_to_empty_cell_but_splits_to_one_empty_string() {
        assert_eq!(join_list(&[]), "");
        assert_eq!(split_list(""), vec![String::new()]);
    }
}
