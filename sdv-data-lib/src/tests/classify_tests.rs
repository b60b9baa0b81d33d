use super::*;
use sdv_data_model::DEFAULT_TEXTURE;

fn item(id: &str, category: i32) -> Item {
    Item {
        id: id.to_string(),
        internal_name: format!("Item {id}"),
        display_name: None,
        description: None,
        item_type: "basic".to_string(),
        category,
        sub_categories: None,
        sprite_index: 0,
        texture: DEFAULT_TEXTURE.to_string(),
        price: 0,
        on_consume: None,
        production_time: None,
    }
}

fn items(entries: &[(&str, i32)]) -> IndexMap<String, Item> {
    entries
        .iter()
        .map(|(id, code)| (id.to_string(), item(id, *code)))
        .collect()
}

fn trees(fruit: &[&str]) -> IndexMap<String, FruitTree> {
    fruit
        .iter()
        .enumerate()
        .map(|(i, fruit_id)| {
            let id = (628 + i).to_string();
            let tree = FruitTree {
                id: id.clone(),
                seasons: vec!["summer".to_string()],
                fruit_id: fruit_id.to_string(),
            };
            (id, tree)
        })
        .collect()
}

fn tags(item: &Item) -> Vec<SubCategory> {
    item.sub_categories
        .as_ref()
        .map(|s| s.iter().copied().collect())
        .unwrap_or_default()
}

#[test]
fn test_wheat_is_a_milled_crop() {
    let mut items = items(&[("262", -75)]);
    classify_items(&mut items, &IndexMap::new());
    let wheat = &items["262"];
    assert_eq!(wheat.category, 1);
    assert_eq!(tags(wheat), [S::Tiller, S::Mill]);
}

#[test]
fn test_plain_vegetable() {
    let mut items = items(&[("24", -75)]);
    classify_items(&mut items, &IndexMap::new());
    assert_eq!(items["24"].category, P::Crops.code());
    assert_eq!(tags(&items["24"]), [S::Tiller, S::Juice]);
}

#[test]
fn test_fiddlehead_is_forage() {
    let mut items = items(&[("259", -75)]);
    classify_items(&mut items, &IndexMap::new());
    assert_eq!(items["259"].category, P::Forage.code());
    assert_eq!(tags(&items["259"]), [S::Gatherer, S::Botanist, S::Juice]);
}

#[test]
fn test_grape_gets_raisins() {
    let mut items = items(&[("398", -79)]);
    classify_items(&mut items, &IndexMap::new());
    assert_eq!(items["398"].category, P::Crops.code());
    assert_eq!(tags(&items["398"]), [S::Tiller, S::Wine, S::Raisins]);
}

#[test]
fn test_tree_fruit_uses_fruit_tree_membership() {
    let mut items = items(&[("634", -79), ("254", -79)]);
    classify_items(&mut items, &trees(&["634"]));
    assert_eq!(items["634"].category, P::TreeFruit.code());
    assert_eq!(items["254"].category, P::Crops.code());
    assert_eq!(tags(&items["634"]), tags(&items["254"]));
}

#[test]
fn test_override_beats_tree_fruit() {
    // Coconut comes from palm trees but is still forage.
    let mut items = items(&[("88", -79)]);
    classify_items(&mut items, &trees(&["88"]));
    assert_eq!(items["88"].category, P::Forage.code());
}

#[test]
fn test_sweet_gem_berry_and_truffle() {
    let mut items = items(&[("417", -17), ("430", -17), ("340", -17)]);
    classify_items(&mut items, &IndexMap::new());

    assert_eq!(items["417"].category, P::Crops.code());
    assert!(items["417"].sub_categories.is_none());

    assert_eq!(items["430"].category, P::AnimalProducts.code());
    assert_eq!(tags(&items["430"]), [S::Gatherer, S::Botanist]);

    assert_eq!(items["340"].category, P::Misc.code());
    assert!(items["340"].sub_categories.is_none());
}

#[test]
fn test_override_requires_matching_legacy_code() {
    // Truffle filed under greens takes the greens rule, not its override.
    let mut items = items(&[("430", -81)]);
    classify_items(&mut items, &IndexMap::new());
    assert_eq!(items["430"].category, P::Forage.code());
}

#[test]
fn test_fish_and_fish_shop_goods() {
    let mut items = items(&[("128", -4), ("152", -23), ("393", -23), ("168", -23)]);
    classify_items(&mut items, &IndexMap::new());
    assert_eq!(tags(&items["128"]), [S::Fisher, S::Angler, S::Smoker]);
    assert_eq!(items["152"].category, P::Fish.code());
    assert!(items["152"].sub_categories.is_none());
    assert_eq!(items["393"].category, P::Forage.code());
    assert_eq!(items["168"].category, P::Misc.code());
}

#[test]
fn test_animal_products() {
    let mut items = items(&[("176", -5), ("184", -6), ("440", -18), ("724", -27), ("348", -26)]);
    classify_items(&mut items, &IndexMap::new());
    assert_eq!(tags(&items["176"]), [S::Rancher, S::Mayonnaise]);
    assert_eq!(tags(&items["184"]), [S::Rancher, S::Cheese]);
    assert_eq!(items["440"].category, P::AnimalProducts.code());
    assert_eq!(items["724"].category, P::TapperProducts.code());
    assert_eq!(items["348"].category, P::ArtisanGoods.code());
}

#[test]
fn test_unmatched_codes_are_untouched() {
    let mut items = items(&[("388", -16), ("60", -2), ("999", 0)]);
    let before = items.clone();
    let stats = classify_items(&mut items, &IndexMap::new());
    assert_eq!(items, before);
    assert_eq!(stats, ClassifyStats { reclassified: 0, untouched: 3 });
}

#[test]
fn test_second_pass_is_a_no_op() {
    let mut items = items(&[
        ("262", -75),
        ("634", -79),
        ("417", -17),
        ("591", -80),
        ("402", -80),
        ("128", -4),
        ("388", -16),
    ]);
    let trees = trees(&["634"]);

    let first = classify_items(&mut items, &trees);
    assert_eq!(first.reclassified, 6);
    let after_first = items.clone();

    let second = classify_items(&mut items, &trees);
    assert_eq!(items, after_first);
    assert_eq!(second.reclassified, 0);
}

#[test]
fn test_primary_codes_match_no_rule() {
    let none = HashSet::new();
    for primary in PrimaryCategory::ALL {
        assert!(classify("262", primary.code(), &none).is_none());
    }
}

#[test]
fn test_every_rule_has_a_distinct_legacy_code() {
    let codes: HashSet<_> = LEGACY_RULES.iter().map(|r| r.legacy).collect();
    assert_eq!(codes.len(), LEGACY_RULES.len());
}

#[test]
fn test_overrides_do_not_overlap() {
    let mut seen = HashSet::new();
    for o in ITEM_OVERRIDES {
        assert!(LEGACY_RULES.iter().any(|r| r.legacy == o.legacy));
        for id in o.item_ids {
            assert!(seen.insert((o.legacy, *id)), "duplicate override for {id}");
        }
    }
}
