//! Legacy signed category codes carried by raw object records.

/// A raw `Category` value as found in the Objects data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum LegacyCategory {
    Gem = -2,
    Fish = -4,
    Egg = -5,
    Milk = -6,
    Cooking = -7,
    Crafting = -8,
    Mineral = -12,
    Metal = -15,
    Building = -16,
    SellAtPierres = -17,
    SellAtPierresAndMarnies = -18,
    Fertilizer = -19,
    Junk = -20,
    Bait = -21,
    Tackle = -22,
    SellAtFishShop = -23,
    ArtisanGoods = -26,
    Syrup = -27,
    MonsterLoot = -28,
    Seed = -74,
    Vegetable = -75,
    Fruit = -79,
    Flower = -80,
    Greens = -81,
}

impl LegacyCategory {
    const ALL: [LegacyCategory; 24] = [
        Self::Gem,
        Self::Fish,
        Self::Egg,
        Self::Milk,
        Self::Cooking,
        Self::Crafting,
        Self::Mineral,
        Self::Metal,
        Self::Building,
        Self::SellAtPierres,
        Self::SellAtPierresAndMarnies,
        Self::Fertilizer,
        Self::Junk,
        Self::Bait,
        Self::Tackle,
        Self::SellAtFishShop,
        Self::ArtisanGoods,
        Self::Syrup,
        Self::MonsterLoot,
        Self::Seed,
        Self::Vegetable,
        Self::Fruit,
        Self::Flower,
        Self::Greens,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Map a raw code to a known legacy category. Positive codes and `0`
    /// are never legacy categories.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}
