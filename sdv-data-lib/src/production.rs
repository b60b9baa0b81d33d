//! Hand-curated production times.
//!
//! These are game balance values, not derived from the data export. An item
//! may have several legitimate sources (oil, wool); all of them are listed.

use sdv_data_model::{ProductionSource, ProductionSourceTag as Src, ProductionUnit};

const fn minutes(source: Src, time: u32) -> ProductionSource {
    ProductionSource::new(source, time, ProductionUnit::Minute)
}

const fn nights(source: Src, time: u32) -> ProductionSource {
    ProductionSource::new(source, time, ProductionUnit::Night)
}

const fn days(source: Src, time: u32) -> ProductionSource {
    ProductionSource::new(source, time, ProductionUnit::Day)
}

/// Production sources of a single item.
#[derive(Debug, Clone, Copy)]
pub struct ProductionEntry {
    /// Item id as used in the Objects data file
    pub item_id: &'static str,
    pub sources: &'static [ProductionSource],
}

const JAR_STANDARD: &[ProductionSource] = &[minutes(Src::PreservesJar, 4000)];
const KEG_VINEGAR_MEAD: &[ProductionSource] = &[minutes(Src::Keg, 600)];
const MAYONNAISE: &[ProductionSource] = &[minutes(Src::MayonnaiseMachine, 180)];
const CHEESE: &[ProductionSource] = &[minutes(Src::CheesePress, 200)];
const DEHYDRATOR: &[ProductionSource] = &[days(Src::Dehydrator, 1)];
const WHITE_CHICKEN: &[ProductionSource] = &[days(Src::WhiteChicken, 1)];
const BROWN_CHICKEN: &[ProductionSource] = &[days(Src::BrownChicken, 1)];
const DUCK: &[ProductionSource] = &[days(Src::Duck, 2)];
const COW: &[ProductionSource] = &[days(Src::Cow, 1)];
const GOAT: &[ProductionSource] = &[days(Src::Goat, 2)];

/// Every item with a known production time.
pub static PRODUCTION_TABLE: &[ProductionEntry] = &[
    // Preserves jar: pickles, jelly, aged roe, caviar
    ProductionEntry {
        item_id: "342",
        sources: JAR_STANDARD,
    },
    ProductionEntry {
        item_id: "344",
        sources: JAR_STANDARD,
    },
    ProductionEntry {
        item_id: "447",
        sources: JAR_STANDARD,
    },
    ProductionEntry {
        item_id: "445",
        sources: &[minutes(Src::PreservesJar, 6000)],
    },
    // Keg
    ProductionEntry {
        item_id: "346", // beer
        sources: &[minutes(Src::Keg, 1750)],
    },
    ProductionEntry {
        item_id: "419",
        sources: KEG_VINEGAR_MEAD,
    },
    ProductionEntry {
        item_id: "459",
        sources: KEG_VINEGAR_MEAD,
    },
    ProductionEntry {
        item_id: "395", // coffee
        sources: &[minutes(Src::Keg, 120)],
    },
    ProductionEntry {
        item_id: "614", // green tea
        sources: &[minutes(Src::Keg, 180)],
    },
    ProductionEntry {
        item_id: "350", // juice
        sources: &[minutes(Src::Keg, 6000)],
    },
    ProductionEntry {
        item_id: "303", // pale ale
        sources: &[minutes(Src::Keg, 2250)],
    },
    ProductionEntry {
        item_id: "348", // wine
        sources: &[minutes(Src::Keg, 10000)],
    },
    // Mayonnaise machine: mayonnaise, duck, void, dinosaur
    ProductionEntry {
        item_id: "306",
        sources: MAYONNAISE,
    },
    ProductionEntry {
        item_id: "307",
        sources: MAYONNAISE,
    },
    ProductionEntry {
        item_id: "308",
        sources: MAYONNAISE,
    },
    ProductionEntry {
        item_id: "807",
        sources: MAYONNAISE,
    },
    // Cheese press: cheese, goat cheese
    ProductionEntry {
        item_id: "424",
        sources: CHEESE,
    },
    ProductionEntry {
        item_id: "426",
        sources: CHEESE,
    },
    // Oil maker
    ProductionEntry {
        item_id: "432", // truffle oil
        sources: &[minutes(Src::OilMaker, 360)],
    },
    ProductionEntry {
        item_id: "247",
        sources: &[
            minutes(Src::Corn, 1000),
            minutes(Src::SunflowerSeeds, 3200),
            minutes(Src::Sunflower, 60),
        ],
    },
    // Loom
    ProductionEntry {
        item_id: "428",
        sources: &[minutes(Src::Loom, 240)],
    },
    // Bee house
    ProductionEntry {
        item_id: "340",
        sources: &[nights(Src::BeeHouse, 4)],
    },
    // Fish smoker
    ProductionEntry {
        item_id: "SmokedFish",
        sources: &[minutes(Src::FishSmoker, 50)],
    },
    // Dehydrator
    ProductionEntry {
        item_id: "DriedMushrooms",
        sources: DEHYDRATOR,
    },
    ProductionEntry {
        item_id: "DriedFruit",
        sources: DEHYDRATOR,
    },
    ProductionEntry {
        item_id: "Raisins",
        sources: DEHYDRATOR,
    },
    // Coop: white and brown eggs (large and small), golden, void
    ProductionEntry {
        item_id: "176",
        sources: WHITE_CHICKEN,
    },
    ProductionEntry {
        item_id: "174",
        sources: WHITE_CHICKEN,
    },
    ProductionEntry {
        item_id: "180",
        sources: BROWN_CHICKEN,
    },
    ProductionEntry {
        item_id: "182",
        sources: BROWN_CHICKEN,
    },
    ProductionEntry {
        item_id: "928",
        sources: &[days(Src::GoldenChicken, 1)],
    },
    ProductionEntry {
        item_id: "305",
        sources: &[days(Src::VoidChicken, 1)],
    },
    ProductionEntry {
        item_id: "442", // duck egg
        sources: DUCK,
    },
    ProductionEntry {
        item_id: "444", // duck feather
        sources: DUCK,
    },
    ProductionEntry {
        item_id: "446", // rabbit's foot
        sources: &[days(Src::Rabbit, 4)],
    },
    ProductionEntry {
        item_id: "107",
        sources: &[days(Src::Dinosaur, 7)],
    },
    // Barn: milk, large milk, truffle, goat milk, wool, ostrich egg
    ProductionEntry {
        item_id: "184",
        sources: COW,
    },
    ProductionEntry {
        item_id: "186",
        sources: COW,
    },
    ProductionEntry {
        item_id: "430",
        sources: &[days(Src::Pig, 1)],
    },
    ProductionEntry {
        item_id: "436",
        sources: GOAT,
    },
    ProductionEntry {
        item_id: "438",
        sources: GOAT,
    },
    ProductionEntry {
        item_id: "440",
        sources: &[days(Src::Sheep, 3), days(Src::Rabbit, 4)],
    },
    ProductionEntry {
        item_id: "289",
        sources: &[days(Src::Ostrich, 7)],
    },
];

/// Look up the production sources of an item.
pub fn production_sources(item_id: &str) -> Option<&'static [ProductionSource]> {
    PRODUCTION_TABLE
        .iter()
        .find(|e| e.item_id == item_id)
        .map(|e| e.sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_item_ids_are_unique() {
        let mut seen = HashSet::new();
        for e in PRODUCTION_TABLE {
            assert!(seen.insert(e.item_id), "duplicate entry for {}", e.item_id);
            assert!(!e.sources.is_empty());
        }
        assert_eq!(PRODUCTION_TABLE.len(), 43);
    }

    #[test]
    fn test_wool_has_both_animals() {
        let wool = production_sources("440").unwrap();
        assert_eq!(
            wool,
            [days(Src::Sheep, 3), days(Src::Rabbit, 4)].as_slice()
        );
    }

    #[test]
    fn test_oil_has_three_inputs() {
        let oil = production_sources("247").unwrap();
        let inputs: Vec<_> = oil.iter().map(|s| s.source).collect();
        assert_eq!(inputs, [Src::Corn, Src::SunflowerSeeds, Src::Sunflower]);
        assert!(oil.iter().all(|s| s.unit == ProductionUnit::Minute));
    }

    #[test]
    fn test_honey_is_measured_in_nights() {
        assert_eq!(production_sources("340").unwrap(), [nights(Src::BeeHouse, 4)].as_slice());
    }

    #[test]
    fn test_string_ids() {
        assert_eq!(
            production_sources("SmokedFish").unwrap(),
            [minutes(Src::FishSmoker, 50)].as_slice()
        );
        assert_eq!(production_sources("Raisins").unwrap()[0].unit, ProductionUnit::Day);
    }

    #[test]
    fn test_unknown_item() {
        assert!(production_sources("24").is_none());
    }
}
