use super::*;
use crate::strings::StringTable;
use sdv_data_model::raw::RawObjectBuff;
use sdv_data_model::{ProductionSourceTag, ProductionUnit};
use serde_json::{Value, json};

fn strings() -> StringTables {
    let mut tables = StringTables::default();
    let Value::Object(objects) = json!({
        "Parsnip_Name": "Parsnip",
        "Parsnip_Description": "A spring tuber closely related to the carrot.",
        "Wool_Name": "Wool",
        "Wool_Description": "Soft, fluffy wool.",
    }) else {
        unreachable!()
    };
    tables.insert(StringTable::Objects, objects);
    tables
}

fn raw(name: &str, category: i32) -> RawObject {
    RawObject {
        name: name.to_string(),
        display_name: format!(r"[LocalizedText Strings\Objects:{name}_Name]"),
        description: format!(r"[LocalizedText Strings\Objects:{name}_Description]"),
        object_type: "Basic".to_string(),
        category,
        sprite_index: 24,
        price: None,
        texture: None,
        edibility: None,
        buffs: None,
    }
}

#[test]
fn test_basic_fields() {
    let mut parsnip = raw("Parsnip", -75);
    parsnip.price = Some(35);
    let NormalizedItem { item, buffs } = normalize_item("24", &parsnip, &strings());

    assert_eq!(item.id, "24");
    assert_eq!(item.internal_name, "Parsnip");
    assert_eq!(item.display_name.as_deref(), Some("Parsnip"));
    assert_eq!(
        item.description.as_deref(),
        Some("A spring tuber closely related to the carrot.")
    );
    assert_eq!(item.item_type, "basic");
    assert_eq!(item.category, -75);
    assert_eq!(item.price, 35);
    assert_eq!(item.texture, DEFAULT_TEXTURE);
    assert!(item.on_consume.is_none());
    assert!(item.production_time.is_none());
    assert!(buffs.is_empty());
}

#[test]
fn test_price_defaults_to_zero() {
    let item = normalize_item("24", &raw("Parsnip", -75), &strings()).item;
    assert_eq!(item.price, 0);
}

#[test]
fn test_texture_is_stripped_to_file_name() {
    let mut obj = raw("Parsnip", -75);
    obj.texture = Some(r"TileSheets\Objects_2".to_string());
    let item = normalize_item("24", &obj, &strings()).item;
    assert_eq!(item.texture, "Objects_2");

    obj.texture = Some("Objects_2".to_string());
    let item = normalize_item("24", &obj, &strings()).item;
    assert_eq!(item.texture, "Objects_2");
}

#[test]
fn test_edible_item_effects() {
    let mut obj = raw("Parsnip", -75);
    obj.edibility = Some(10.0);
    let effects = normalize_item("24", &obj, &strings()).item.on_consume.unwrap();
    assert_eq!(effects.energy, 25);
    assert_eq!(effects.health, 11);
    assert!(effects.buffs.is_none());
}

#[test]
fn test_negative_edibility() {
    let mut obj = raw("Parsnip", -75);
    obj.edibility = Some(-20.0);
    let effects = normalize_item("24", &obj, &strings()).item.on_consume.unwrap();
    assert_eq!(effects.energy, -50);
    assert_eq!(effects.health, 0);
}

#[test]
fn test_referenced_buff() {
    let mut obj = raw("Parsnip", -7);
    obj.edibility = Some(30.0);
    obj.buffs = Some(vec![RawObjectBuff {
        buff_id: Some("drink".to_string()),
        ..Default::default()
    }]);

    let NormalizedItem { item, buffs } = normalize_item("24", &obj, &strings());
    assert_eq!(
        item.on_consume.unwrap().buffs,
        Some(vec!["drink".to_string()])
    );
    assert!(buffs.is_empty());
}

#[test]
fn test_custom_buff_is_manufactured() {
    let mut obj = raw("Parsnip", -7);
    obj.edibility = Some(30.0);
    obj.buffs = Some(vec![RawObjectBuff {
        buff_id: None,
        duration: 600,
        custom_attributes: Some(json!({ "FarmingLevel": 1.0, "Speed": 1.0 })),
    }]);

    let NormalizedItem { item, buffs } = normalize_item("24", &obj, &strings());
    assert_eq!(
        item.on_consume.unwrap().buffs,
        Some(vec!["Food_24".to_string()])
    );
    assert_eq!(buffs.len(), 1);
    let buff = &buffs[0];
    assert_eq!(buff.id, "Food_24");
    assert_eq!(buff.name.as_deref(), Some("Parsnip Effects"));
    assert_eq!(buff.duration, 600);
    assert_eq!(buff.sprite_index, 0);
    assert!(!buff.is_debuff);
    assert_eq!(buff.effects.get("FarmingLevel"), Some(&json!(1.0)));
    assert_eq!(buff.effects.len(), 2);
}

#[test]
fn test_empty_buff_list_is_kept() {
    let mut obj = raw("Parsnip", -7);
    obj.edibility = Some(5.0);
    obj.buffs = Some(Vec::new());
    let effects = normalize_item("24", &obj, &strings()).item.on_consume.unwrap();
    assert_eq!(effects.buffs, Some(Vec::new()));
}

#[test]
fn test_buffs_ignored_when_not_edible() {
    let mut obj = raw("Parsnip", -7);
    obj.buffs = Some(vec![RawObjectBuff::default()]);
    let NormalizedItem { item, buffs } = normalize_item("24", &obj, &strings());
    assert!(item.on_consume.is_none());
    assert!(buffs.is_empty());
}

#[test]
fn test_wool_lists_both_production_sources() {
    let item = normalize_item("440", &raw("Wool", -18), &strings()).item;
    let sources = item.production_time.unwrap();
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].source, ProductionSourceTag::Sheep);
    assert_eq!(sources[1].source, ProductionSourceTag::Rabbit);
    assert!(sources.iter().all(|s| s.unit == ProductionUnit::Day));
}

#[test]
fn test_unresolved_name_falls_back_for_buff() {
    let mut obj = raw("Mystery", -7);
    obj.edibility = Some(1.0);
    obj.buffs = Some(vec![RawObjectBuff::default()]);
    let NormalizedItem { item, buffs } = normalize_item("900", &obj, &strings());
    assert!(item.display_name.is_none());
    assert_eq!(buffs[0].name.as_deref(), Some("Mystery Effects"));
}

#[test]
fn test_several_custom_buffs_share_one_id() {
    let mut obj = raw("Parsnip", -7);
    obj.edibility = Some(30.0);
    obj.buffs = Some(vec![
        RawObjectBuff {
            buff_id: None,
            duration: 600,
            custom_attributes: Some(json!({ "Speed": 1 })),
        },
        RawObjectBuff {
            buff_id: Some(String::new()),
            duration: 900,
            custom_attributes: Some(json!({ "Luck": 2 })),
        },
    ]);

    let NormalizedItem { item, buffs } = normalize_item("24", &obj, &strings());
    assert_eq!(
        item.on_consume.unwrap().buffs,
        Some(vec!["Food_24".to_string(), "Food_24".to_string()])
    );
    // Both are returned in order; the caller keeps the last.
    assert_eq!(buffs.len(), 2);
    assert!(buffs.iter().all(|b| b.id == "Food_24"));
    assert_eq!(buffs[1].duration, 900);
    assert_eq!(buffs[1].effects.get("Luck"), Some(&json!(2)));
}
