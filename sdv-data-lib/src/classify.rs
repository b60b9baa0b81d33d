//! Category classifier: rewrites legacy signed category codes into the fixed
//! primary taxonomy and attaches sub-category tags.
//!
//! Rules live in two static tables. [`ITEM_OVERRIDES`] names individual items
//! that do not belong with the rest of their legacy bucket; [`LEGACY_RULES`]
//! covers everything else. Tree fruit is told apart from ground fruit by the
//! fruit tree collection.
//!
//! Reclassified items carry a primary code in `1..=9`, which no rule matches,
//! so running the classifier twice is a no-op.

use std::collections::{BTreeSet, HashSet};

use indexmap::IndexMap;
use sdv_data_model::{
    FruitTree, Item, LegacyCategory, LegacyCategory as L, PrimaryCategory, PrimaryCategory as P,
    SubCategory, SubCategory as S,
};

/// Default routing for one legacy category code.
#[derive(Debug, Clone, Copy)]
pub struct LegacyRule {
    pub legacy: LegacyCategory,
    pub primary: PrimaryCategory,
    pub tags: &'static [SubCategory],
}

/// Routing for specific items, taking precedence over their legacy rule.
#[derive(Debug, Clone, Copy)]
pub struct ItemOverride {
    pub legacy: LegacyCategory,
    pub item_ids: &'static [&'static str],
    pub primary: PrimaryCategory,
    pub tags: &'static [SubCategory],
}

const FRUIT_TAGS: &[SubCategory] = &[S::Tiller, S::Wine, S::Dehydrator];
const FORAGE_TAGS: &[SubCategory] = &[S::Gatherer, S::Botanist];

/// Primary and tags for fruit that grows on a fruit tree.
pub const TREE_FRUIT: (PrimaryCategory, &[SubCategory]) = (P::TreeFruit, FRUIT_TAGS);

pub static LEGACY_RULES: &[LegacyRule] = &[
    LegacyRule {
        legacy: L::Vegetable,
        primary: P::Crops,
        tags: &[S::Tiller, S::Juice],
    },
    LegacyRule {
        legacy: L::Fruit,
        primary: P::Crops,
        tags: FRUIT_TAGS,
    },
    LegacyRule {
        legacy: L::SellAtPierres,
        primary: P::Misc,
        tags: &[],
    },
    LegacyRule {
        legacy: L::Flower,
        primary: P::Flowers,
        tags: &[S::Tiller, S::Honey],
    },
    LegacyRule {
        legacy: L::SellAtFishShop,
        primary: P::Misc,
        tags: &[],
    },
    LegacyRule {
        legacy: L::Greens,
        primary: P::Forage,
        tags: FORAGE_TAGS,
    },
    LegacyRule {
        legacy: L::Syrup,
        primary: P::TapperProducts,
        tags: &[S::Tapper],
    },
    LegacyRule {
        legacy: L::Egg,
        primary: P::AnimalProducts,
        tags: &[S::Rancher, S::Mayonnaise],
    },
    LegacyRule {
        legacy: L::Milk,
        primary: P::AnimalProducts,
        tags: &[S::Rancher, S::Cheese],
    },
    LegacyRule {
        legacy: L::SellAtPierresAndMarnies,
        primary: P::AnimalProducts,
        tags: &[S::Rancher],
    },
    LegacyRule {
        legacy: L::Fish,
        primary: P::Fish,
        tags: &[S::Fisher, S::Angler, S::Smoker],
    },
    LegacyRule {
        legacy: L::ArtisanGoods,
        primary: P::ArtisanGoods,
        tags: &[S::Artisan],
    },
];

pub static ITEM_OVERRIDES: &[ItemOverride] = &[
    // Vegetables
    ItemOverride {
        legacy: L::Vegetable,
        item_ids: &["259"], // fiddlehead fern
        primary: P::Forage,
        tags: &[S::Gatherer, S::Botanist, S::Juice],
    },
    ItemOverride {
        legacy: L::Vegetable,
        item_ids: &["262"], // wheat
        primary: P::Crops,
        tags: &[S::Tiller, S::Mill],
    },
    ItemOverride {
        legacy: L::Vegetable,
        item_ids: &["284", "271"], // beet, unmilled rice
        primary: P::Crops,
        tags: &[S::Tiller, S::Juice, S::Mill],
    },
    ItemOverride {
        legacy: L::Vegetable,
        item_ids: &["304", "815"], // hops, tea leaves
        primary: P::Crops,
        tags: &[S::Tiller],
    },
    // Fruits
    ItemOverride {
        legacy: L::Fruit,
        item_ids: &["398"], // grape
        primary: P::Crops,
        tags: &[S::Tiller, S::Wine, S::Raisins],
    },
    ItemOverride {
        legacy: L::Fruit,
        // salmonberry, blackberry, wild plum, crystal fruit, coconut
        item_ids: &["296", "410", "406", "414", "88"],
        primary: P::Forage,
        tags: &[S::Gatherer, S::Botanist, S::Wine, S::Dehydrator],
    },
    // Sold at Pierre's
    ItemOverride {
        legacy: L::SellAtPierres,
        item_ids: &["417"], // sweet gem berry
        primary: P::Crops,
        tags: &[],
    },
    ItemOverride {
        legacy: L::SellAtPierres,
        item_ids: &["430"], // truffle
        primary: P::AnimalProducts,
        tags: FORAGE_TAGS,
    },
    // Flowers
    ItemOverride {
        legacy: L::Flower,
        item_ids: &["402", "418"], // sweet pea, crocus
        primary: P::Forage,
        tags: &[S::Gatherer, S::Botanist, S::Honey],
    },
    // Sold at the fish shop
    ItemOverride {
        legacy: L::SellAtFishShop,
        // nautilus shell, coral, rainbow shell, sea urchin
        item_ids: &["392", "393", "394", "397"],
        primary: P::Forage,
        tags: FORAGE_TAGS,
    },
    ItemOverride {
        legacy: L::SellAtFishShop,
        // seaweed, green algae, white algae, roe
        item_ids: &["152", "153", "157", "812"],
        primary: P::Fish,
        tags: &[],
    },
    // Greens
    ItemOverride {
        legacy: L::Greens,
        // common, red and purple mushrooms, morel, chanterelle, magma cap
        item_ids: &["404", "420", "422", "257", "281", "851"],
        primary: P::Forage,
        tags: &[S::Gatherer, S::Botanist, S::Dehydrator],
    },
];

/// Counts from one classifier pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyStats {
    pub reclassified: u64,
    pub untouched: u64,
}

/// Ids of every item some fruit tree bears.
pub fn tree_fruit_ids<'a>(trees: impl IntoIterator<Item = &'a FruitTree>) -> HashSet<&'a str> {
    trees.into_iter().map(|t| t.fruit_id.as_str()).collect()
}

/// Find the primary category and tags for an item, if its current code is a
/// classified legacy code.
pub fn classify(
    item_id: &str,
    code: i32,
    tree_fruit: &HashSet<&str>,
) -> Option<(PrimaryCategory, &'static [SubCategory])> {
    let legacy = LegacyCategory::from_code(code)?;

    if let Some(o) = ITEM_OVERRIDES
        .iter()
        .find(|o| o.legacy == legacy && o.item_ids.iter().any(|id| *id == item_id))
    {
        return Some((o.primary, o.tags));
    }
    if legacy == L::Fruit && tree_fruit.contains(item_id) {
        return Some(TREE_FRUIT);
    }
    LEGACY_RULES
        .iter()
        .find(|r| r.legacy == legacy)
        .map(|r| (r.primary, r.tags))
}

/// Rewrite every item's category in place.
pub fn classify_items(
    items: &mut IndexMap<String, Item>,
    trees: &IndexMap<String, FruitTree>,
) -> ClassifyStats {
    let tree_fruit = tree_fruit_ids(trees.values());
    let mut stats = ClassifyStats::default();

    for item in items.values_mut() {
        let Some((primary, tags)) = classify(&item.id, item.category, &tree_fruit) else {
            stats.untouched += 1;
            continue;
        };
        log::debug!(
            "Classified {} ({}): {} -> {}",
            item.id,
            item.internal_name,
            item.category,
            primary.name()
        );
        item.category = primary.code();
        if !tags.is_empty() {
            item.sub_categories
                .get_or_insert_with(BTreeSet::new)
                .extend(tags.iter().copied());
        }
        stats.reclassified += 1;
    }

    stats
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod tests;
