//! The fixed category taxonomy.
//!
//! Primary categories replace the legacy signed codes on classified items.
//! Secondary categories are tags: the first eight link an item to a skill
//! profession that changes its value, the rest name a machine it feeds.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::types::Category;

// ── Primary ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimaryCategory {
    Crops = 1,
    TreeFruit = 2,
    Flowers = 3,
    Forage = 4,
    AnimalProducts = 5,
    ArtisanGoods = 6,
    TapperProducts = 7,
    Fish = 8,
    Misc = 9,
}

impl PrimaryCategory {
    pub const ALL: [PrimaryCategory; 9] = [
        Self::Crops,
        Self::TreeFruit,
        Self::Flowers,
        Self::Forage,
        Self::AnimalProducts,
        Self::ArtisanGoods,
        Self::TapperProducts,
        Self::Fish,
        Self::Misc,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    /// The value written into `Item::category`.
    pub fn code(self) -> i32 {
        i32::from(self.id())
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Crops => "crops",
            Self::TreeFruit => "treeFruit",
            Self::Flowers => "flowers",
            Self::Forage => "forage",
            Self::AnimalProducts => "animalProducts",
            Self::ArtisanGoods => "artisanGoods",
            Self::TapperProducts => "tapperProducts",
            Self::Fish => "fish",
            Self::Misc => "misc",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Crops => "Crops",
            Self::TreeFruit => "Tree Fruit",
            Self::Flowers => "Flowers",
            Self::Forage => "Forage",
            Self::AnimalProducts => "Animal Products",
            Self::ArtisanGoods => "Artisan Goods",
            Self::TapperProducts => "Tapper Products",
            Self::Fish => "Fish",
            Self::Misc => "Miscellaneous",
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn to_category(self) -> Category {
        Category {
            id: self.id(),
            name: self.name(),
            display_name: Some(self.display_name()),
            icon_path: None,
        }
    }
}

// ── Secondary ───────────────────────────────────────────────────────────────

/// A sub-category tag. Serialized as its numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubCategory {
    // Profession synergies
    Tiller = 1,
    Rancher = 2,
    Artisan = 3,
    Gatherer = 4,
    Botanist = 5,
    Tapper = 6,
    Fisher = 7,
    Angler = 8,
    // Machines
    Juice = 9,
    Wine = 10,
    Dehydrator = 11,
    Raisins = 12,
    Mill = 13,
    Honey = 14,
    Mayonnaise = 15,
    Cheese = 16,
    Smoker = 17,
}

impl SubCategory {
    pub const ALL: [SubCategory; 17] = [
        Self::Tiller,
        Self::Rancher,
        Self::Artisan,
        Self::Gatherer,
        Self::Botanist,
        Self::Tapper,
        Self::Fisher,
        Self::Angler,
        Self::Juice,
        Self::Wine,
        Self::Dehydrator,
        Self::Raisins,
        Self::Mill,
        Self::Honey,
        Self::Mayonnaise,
        Self::Cheese,
        Self::Smoker,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Tiller => "tiller",
            Self::Rancher => "rancher",
            Self::Artisan => "artisan",
            Self::Gatherer => "gatherer",
            Self::Botanist => "botanist",
            Self::Tapper => "tapper",
            Self::Fisher => "fisher",
            Self::Angler => "angler",
            Self::Juice => "juice",
            Self::Wine => "wine",
            Self::Dehydrator => "dehydrator",
            Self::Raisins => "raisins",
            Self::Mill => "mill",
            Self::Honey => "honey",
            Self::Mayonnaise => "mayonnaise",
            Self::Cheese => "cheese",
            Self::Smoker => "smoker",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Tiller => "Tiller",
            Self::Rancher => "Rancher",
            Self::Artisan => "Artisan",
            Self::Gatherer => "Gatherer",
            Self::Botanist => "Botanist",
            Self::Tapper => "Tapper",
            Self::Fisher => "Fisher",
            Self::Angler => "Angler",
            Self::Juice => "Juice & Pickles",
            Self::Wine => "Wine & Jelly",
            Self::Dehydrator => "Dehydrator",
            Self::Raisins => "Raisins",
            Self::Mill => "Mill",
            Self::Honey => "Honey Flavor",
            Self::Mayonnaise => "Mayonnaise",
            Self::Cheese => "Cheese",
            Self::Smoker => "Fish Smoker",
        }
    }

    /// Whether this tag stands for a skill profession bonus.
    pub fn is_perk(self) -> bool {
        self.id() <= Self::Angler.id()
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn to_category(self) -> Category {
        Category {
            id: self.id(),
            name: self.name(),
            display_name: Some(self.display_name()),
            icon_path: self
                .is_perk()
                .then(|| format!("professions/{}.png", self.name())),
        }
    }
}

impl Serialize for SubCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.id())
    }
}

// ── Groups ──────────────────────────────────────────────────────────────────

/// The contents of `categories.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroups {
    pub primary: IndexMap<String, Category>,
    pub secondary: IndexMap<String, Category>,
}

/// Build both fixed category groups, keyed by stringified id.
pub fn category_groups() -> CategoryGroups {
    CategoryGroups {
        primary: PrimaryCategory::ALL
            .into_iter()
            .map(|c| (c.id().to_string(), c.to_category()))
            .collect(),
        secondary: SubCategory::ALL
            .into_iter()
            .map(|c| (c.id().to_string(), c.to_category()))
            .collect(),
    }
}
