//! CookingRecipes → [`CookingRecipe`].
//!
//! A recipe string has four slash-delimited fields:
//! `<ingredients>/<unused>/<yield id>/<unlock source>`. Ingredients alternate
//! `<item id or category> <quantity>`, space-delimited.

use indexmap::IndexMap;
use sdv_data_model::CookingRecipe;

/// Parse a raw recipe string into a recipe keyed by `name`.
pub fn parse_recipe(name: &str, recipe: &str) -> CookingRecipe {
    let fields: Vec<&str> = recipe.split('/').collect();

    let ingredients = parse_ingredients(name, fields.first().copied().unwrap_or_default());
    let recipe_yield = fields.get(2).copied().unwrap_or_default().to_string();
    let unlock_sources = fields
        .get(3)
        .copied()
        .filter(|source| is_initial_unlock_source(source))
        .map(|source| vec![source.to_string()])
        .unwrap_or_default();

    CookingRecipe {
        name: name.to_string(),
        ingredients,
        recipe_yield,
        unlock_sources,
    }
}

fn parse_ingredients(name: &str, field: &str) -> IndexMap<String, u32> {
    let tokens: Vec<&str> = field.split(' ').collect();
    let mut ingredients = IndexMap::new();
    for pair in tokens.chunks_exact(2) {
        match pair[1].parse::<u32>() {
            Ok(quantity) => {
                ingredients.insert(pair[0].to_string(), quantity);
            }
            Err(_) => log::warn!(
                "Recipe {name}: skipping ingredient {} with quantity {:?}",
                pair[0],
                pair[1]
            ),
        }
    }
    ingredients
}

/// Whether a recipe's own source field is kept at parse time.
///
/// Kept: `default`, friendship unlocks (`f <npc> <hearts>`) and skill unlocks
/// (`s <skill> <level>`) except Luck, which cannot be leveled. Every other
/// encoding is filled in later from the TV schedule and special sources.
pub fn is_initial_unlock_source(source: &str) -> bool {
    if source == "default" || source.starts_with('f') {
        return true;
    }
    source.starts_with('s') && source.split(' ').nth(1) != Some("Luck")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_omelet() {
        let recipe = parse_recipe("Omelet", "-5 1 -6 1/1 10/195/l 33");
        assert_eq!(recipe.name, "Omelet");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients["-5"], 1);
        assert_eq!(recipe.ingredients["-6"], 1);
        assert_eq!(recipe.recipe_yield, "195");
        // Deferred to the TV enricher.
        assert!(recipe.unlock_sources.is_empty());
    }

    #[test]
    fn test_ingredient_order_is_kept() {
        let recipe = parse_recipe("Salad", "20 1 22 1 419 1/25 5/196/f Emily 3");
        let keys: Vec<_> = recipe.ingredients.keys().map(String::as_str).collect();
        assert_eq!(keys, ["20", "22", "419"]);
        assert_eq!(recipe.unlock_sources, ["f Emily 3"]);
    }

    #[test]
    fn test_unpaired_and_bad_quantities_are_skipped() {
        let recipe = parse_recipe("Odd", "24 x 188 2 999/1 1/200/default");
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients["188"], 2);
    }

    #[test]
    fn test_short_recipe_string() {
        let recipe = parse_recipe("Stub", "24 1");
        assert_eq!(recipe.recipe_yield, "");
        assert!(recipe.unlock_sources.is_empty());
    }

    #[test]
    fn test_source_classification() {
        assert!(is_initial_unlock_source("default"));
        assert!(is_initial_unlock_source("f Abigail 7"));
        assert!(is_initial_unlock_source("s Farming 5"));
        assert!(is_initial_unlock_source("s Fishing 3"));
        assert!(!is_initial_unlock_source("s Luck 3"));
        assert!(!is_initial_unlock_source("l 33"));
        assert!(!is_initial_unlock_source("none"));
        assert!(!is_initial_unlock_source(""));
    }
}
