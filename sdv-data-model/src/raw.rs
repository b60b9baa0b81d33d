//! Raw record shapes as exported from the game's data files.
//!
//! Only the fields the normalizers read are declared; everything else in a
//! record is ignored. Field names follow the export's PascalCase.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Deserialize helper for keys whose presence alone carries meaning.
///
/// serde only calls this when the key exists, so an explicit `null` still
/// counts as present.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// One entry of `Data/Objects`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawObject {
    pub name: String,
    /// Localization placeholder, e.g. `[LocalizedText Strings\Objects:Parsnip_Name]`.
    pub display_name: String,
    pub description: String,
    #[serde(rename = "Type")]
    pub object_type: String,
    pub category: i32,
    pub sprite_index: i32,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub texture: Option<String>,
    #[serde(default)]
    pub edibility: Option<f64>,
    #[serde(default)]
    pub buffs: Option<Vec<RawObjectBuff>>,
}

/// A buff attached to an edible object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawObjectBuff {
    /// Points at a standalone buff when set and non-empty.
    #[serde(default)]
    pub buff_id: Option<String>,
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub custom_attributes: Option<Value>,
}

impl RawObjectBuff {
    /// The referenced standalone buff id, if this entry is a reference.
    pub fn reference(&self) -> Option<&str> {
        self.buff_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// One entry of `Data/Buffs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawBuff {
    pub display_name: String,
    pub duration: i64,
    pub icon_sprite_index: i32,
    #[serde(default)]
    pub is_debuff: Option<bool>,
    #[serde(default)]
    pub effects: Option<Map<String, Value>>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One entry of `Data/Crops`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawCrop {
    pub seasons: Vec<String>,
    pub days_in_phase: Vec<i64>,
    pub harvest_item_id: String,
    pub sprite_index: i32,
    /// Only exported when true.
    #[serde(default, deserialize_with = "present")]
    pub is_raised: Option<Value>,
    /// Only exported when true.
    #[serde(default, deserialize_with = "present")]
    pub is_paddy_crop: Option<Value>,
    #[serde(default)]
    pub regrow_days: Option<i64>,
    #[serde(default)]
    pub extra_harvest_chance: Option<f64>,
    #[serde(default)]
    pub harvest_min_stack: Option<i64>,
    #[serde(default)]
    pub harvest_max_stack: Option<i64>,
    /// Only exported when false.
    #[serde(default, deserialize_with = "present")]
    pub needs_watering: Option<Value>,
    /// Only exported when `"Scythe"`.
    #[serde(default, deserialize_with = "present")]
    pub harvest_method: Option<Value>,
}

/// One entry of `Data/FruitTrees`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawFruitTree {
    pub seasons: Vec<String>,
    pub fruit: Vec<RawFruitEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawFruitEntry {
    /// Qualified or bare item id, e.g. `(O)634` or `634`.
    pub item_id: String,
}
