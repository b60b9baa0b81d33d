//! Objects → [`Item`], plus the synthetic buffs edible items declare inline.

use sdv_data_model::raw::RawObject;
use sdv_data_model::{Buff, ConsumptionEffects, DEFAULT_TEXTURE, Item};
use serde_json::Value;

use crate::production::production_sources;
use crate::strings::StringTables;

/// A normalized item and any buffs it manufactured.
///
/// The buffs are returned rather than inserted anywhere; the caller merges
/// them into the buff collection.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedItem {
    pub item: Item,
    pub buffs: Vec<Buff>,
}

/// Id of the buff manufactured from an item's inline buff definition.
pub fn food_buff_id(item_id: &str) -> String {
    format!("Food_{item_id}")
}

pub fn normalize_item(id: &str, raw: &RawObject, strings: &StringTables) -> NormalizedItem {
    let display_name = strings.resolve(&raw.display_name);
    let mut buffs = Vec::new();

    let on_consume = raw.edibility.map(|edibility| {
        let mut effects = ConsumptionEffects::from_edibility(edibility);
        if let Some(raw_buffs) = &raw.buffs {
            let mut ids = Vec::with_capacity(raw_buffs.len());
            for raw_buff in raw_buffs {
                if let Some(reference) = raw_buff.reference() {
                    ids.push(reference.to_string());
                    continue;
                }

                let mut buff = Buff::new(
                    food_buff_id(id),
                    Some(format!("{} Effects", display_name.as_deref().unwrap_or(&raw.name))),
                    raw_buff.duration,
                    0,
                );
                let attrs = raw_buff.custom_attributes.as_ref().and_then(Value::as_object);
                if let Some(attrs) = attrs {
                    buff.effects = attrs.clone();
                }
                log::debug!("Built custom buff {} for item {id}", buff.id);
                ids.push(buff.id.clone());
                buffs.push(buff);
            }
            effects.buffs = Some(ids);
        }
        effects
    });

    let texture = raw
        .texture
        .as_deref()
        .map(texture_file_name)
        .unwrap_or(DEFAULT_TEXTURE);

    let item = Item {
        id: id.to_string(),
        internal_name: raw.name.clone(),
        display_name,
        description: strings.resolve(&raw.description),
        item_type: raw.object_type.to_lowercase(),
        category: raw.category,
        sub_categories: None,
        sprite_index: raw.sprite_index,
        texture: texture.to_string(),
        price: raw.price.unwrap_or(0),
        on_consume,
        production_time: production_sources(id).map(<[_]>::to_vec),
    };

    NormalizedItem { item, buffs }
}

/// `TileSheets\Objects_2` → `Objects_2`.
fn texture_file_name(texture: &str) -> &str {
    texture.rsplit('\\').next().unwrap_or(texture)
}

#[cfg(test)]
#[path = "tests/item_tests.rs"]
mod tests;
