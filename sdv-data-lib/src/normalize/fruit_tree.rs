//! FruitTrees → [`FruitTree`].

use sdv_data_model::FruitTree;
use sdv_data_model::raw::RawFruitTree;

use super::crop::lowercase_seasons;

/// Normalize a fruit tree. Returns `None` when the tree lists no fruit.
pub fn normalize_fruit_tree(id: &str, raw: &RawFruitTree) -> Option<FruitTree> {
    let fruit = raw.fruit.first()?;
    Some(FruitTree {
        id: id.to_string(),
        seasons: lowercase_seasons(&raw.seasons),
        fruit_id: unqualified_item_id(&fruit.item_id).to_string(),
    })
}

/// Drop a leading type qualifier: `(O)296` → `296`.
pub fn unqualified_item_id(item_id: &str) -> &str {
    item_id.rsplit(')').next().unwrap_or(item_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unqualified_item_id() {
        assert_eq!(unqualified_item_id("(O)296"), "296");
        assert_eq!(unqualified_item_id("296"), "296");
        assert_eq!(unqualified_item_id(""), "");
    }

    #[test]
    fn test_first_fruit_wins() {
        let raw: RawFruitTree = serde_json::from_value(json!({
            "Seasons": ["Spring"],
            "Fruit": [{ "ItemId": "(O)634" }, { "ItemId": "(O)635" }],
        }))
        .unwrap();
        let tree = normalize_fruit_tree("628", &raw).unwrap();
        assert_eq!(tree.fruit_id, "634");
        assert_eq!(tree.seasons, ["spring"]);
    }

    #[test]
    fn test_no_fruit() {
        let raw: RawFruitTree = serde_json::from_value(json!({
            "Seasons": ["Winter"],
            "Fruit": [],
        }))
        .unwrap();
        assert!(normalize_fruit_tree("999", &raw).is_none());
    }
}
