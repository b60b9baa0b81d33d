//! Normalized output types.
//!
//! These are the records written to the output dataset. Field names are
//! serialized in camelCase; optional fields are omitted when absent rather than
//! written as `null`.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::categories::SubCategory;

/// Sprite sheet used by items whose source record does not name a texture.
pub const DEFAULT_TEXTURE: &str = "springobjects";

// ── Item ────────────────────────────────────────────────────────────────────

/// A consumable or placeable game object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub internal_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub item_type: String,
    /// Legacy signed code until the classifier rewrites it into 1..=9.
    pub category: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_categories: Option<BTreeSet<SubCategory>>,
    pub sprite_index: i32,
    pub texture: String,
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_consume: Option<ConsumptionEffects>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_time: Option<Vec<ProductionSource>>,
}

/// What eating an item does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionEffects {
    pub energy: i64,
    pub health: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffs: Option<Vec<String>>,
}

impl ConsumptionEffects {
    /// Derive energy and health from a raw edibility value.
    ///
    /// Negative edibility rounds energy toward zero and never restores or
    /// removes health.
    pub fn from_edibility(edibility: f64) -> Self {
        let (energy, health) = if edibility >= 0.0 {
            ((edibility * 2.5).floor(), (edibility * 1.125).floor())
        } else {
            ((edibility * 2.5).ceil(), 0.0)
        };
        Self {
            energy: energy as i64,
            health: health as i64,
            buffs: None,
        }
    }
}

// ── Production ──────────────────────────────────────────────────────────────

/// Where an item comes from and how long it takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductionSource {
    pub source: ProductionSourceTag,
    pub time: u32,
    pub unit: ProductionUnit,
}

/// An appliance, crop input or farm animal that produces an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProductionSourceTag {
    #[serde(rename = "preserves jar")]
    PreservesJar,
    #[serde(rename = "keg")]
    Keg,
    #[serde(rename = "mayonnaise machine")]
    MayonnaiseMachine,
    #[serde(rename = "cheese press")]
    CheesePress,
    #[serde(rename = "oil maker")]
    OilMaker,
    #[serde(rename = "loom")]
    Loom,
    #[serde(rename = "bee house")]
    BeeHouse,
    #[serde(rename = "fish smoker")]
    FishSmoker,
    #[serde(rename = "dehydrator")]
    Dehydrator,
    /// Oil maker fed with corn.
    #[serde(rename = "270")]
    Corn,
    /// Oil maker fed with sunflower seeds.
    #[serde(rename = "431")]
    SunflowerSeeds,
    /// Oil maker fed with sunflowers.
    #[serde(rename = "421")]
    Sunflower,
    #[serde(rename = "white chicken")]
    WhiteChicken,
    #[serde(rename = "brown chicken")]
    BrownChicken,
    #[serde(rename = "golden chicken")]
    GoldenChicken,
    #[serde(rename = "void chicken")]
    VoidChicken,
    #[serde(rename = "duck")]
    Duck,
    #[serde(rename = "rabbit")]
    Rabbit,
    #[serde(rename = "dinosaur")]
    Dinosaur,
    #[serde(rename = "cow")]
    Cow,
    #[serde(rename = "pig")]
    Pig,
    #[serde(rename = "goat")]
    Goat,
    #[serde(rename = "sheep")]
    Sheep,
    #[serde(rename = "ostrich")]
    Ostrich,
}

/// Unit of a production duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductionUnit {
    Minute,
    Night,
    Day,
}

impl ProductionSource {
    pub const fn new(source: ProductionSourceTag, time: u32, unit: ProductionUnit) -> Self {
        Self { source, time, unit }
    }
}

// ── Buff ────────────────────────────────────────────────────────────────────

/// A timed status effect, either from the Buffs file or built from an item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Buff {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub duration: i64,
    pub sprite_index: i32,
    pub is_debuff: bool,
    pub effects: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Buff {
    pub fn new(
        id: impl Into<String>,
        name: Option<String>,
        duration: i64,
        sprite_index: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            duration,
            sprite_index,
            is_debuff: false,
            effects: Map::new(),
            description: None,
        }
    }
}

// ── Crop / FruitTree ────────────────────────────────────────────────────────

/// A plantable seasonal crop.
///
/// Every optional field is present only when its raw key was present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    pub id: String,
    pub seasons: Vec<String>,
    pub growth_days: i64,
    pub harvest_item_id: String,
    pub sprite_index: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_trellis: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paddy_crop: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regrowth_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_harvest_chance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_harvest: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_harvest: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_water: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scythe_harvest: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FruitTree {
    pub id: String,
    pub seasons: Vec<String>,
    pub fruit_id: String,
}

// ── Cooking ─────────────────────────────────────────────────────────────────

/// A cooking recipe, keyed by its internal name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookingRecipe {
    pub name: String,
    /// Item id or legacy category code (e.g. `-4`) mapped to quantity.
    pub ingredients: IndexMap<String, u32>,
    pub recipe_yield: String,
    pub unlock_sources: Vec<String>,
}

// ── Category ────────────────────────────────────────────────────────────────

/// One entry of the fixed category taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u8,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_path: Option<String>,
}
