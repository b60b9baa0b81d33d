//! Pipeline driver: load every raw input, normalize, enrich, classify, write.
//!
//! The run is single-threaded and best-effort. A missing or unreadable input
//! contributes zero records; a failed write is logged and reported but the
//! remaining outputs are still written.

use indexmap::IndexMap;
use sdv_data_model::raw::{RawBuff, RawCrop, RawFruitTree, RawObject};
use sdv_data_model::{Buff, Crop, FruitTree, Item, category_groups};

use crate::census::PropertyCensus;
use crate::classify::{ClassifyStats, classify_items};
use crate::normalize::unlock::Recipes;
use crate::normalize::{
    Enrichment, TvAirDate, apply_special_sources, apply_tv_episode, for_each_record,
    for_each_string, normalize_buff, normalize_crop, normalize_fruit_tree, normalize_item,
    parse_recipe, tv_recipe_name,
};
use crate::settings::Settings;
use crate::store::{JsonStore, RawRecords};
use crate::strings::StringTables;

// ── Input and output names ──────────────────────────────────────────────────

pub const OBJECTS_INPUT: &str = "Objects";
pub const BUFFS_INPUT: &str = "Buffs";
pub const CROPS_INPUT: &str = "Crops";
pub const FRUIT_TREES_INPUT: &str = "FruitTrees";
pub const COOKING_RECIPES_INPUT: &str = "CookingRecipes";
pub const COOKING_CHANNEL_INPUT: &str = "TV/CookingChannel";
pub const SPECIAL_SOURCES_INPUT: &str = "SpecialRecipeSources";

pub const OBJECTS_OUTPUT: &str = "objects";
pub const BUFFS_OUTPUT: &str = "buffs";
pub const CROPS_OUTPUT: &str = "crops";
pub const FRUIT_TREES_OUTPUT: &str = "fruitTrees";
pub const COOKING_RECIPES_OUTPUT: &str = "cookingRecipes";
pub const CATEGORIES_OUTPUT: &str = "categories";

// ── Results ─────────────────────────────────────────────────────────────────

/// Every normalized collection, keyed and ordered as in the source files.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub objects: IndexMap<String, Item>,
    pub buffs: IndexMap<String, Buff>,
    pub crops: IndexMap<String, Crop>,
    pub fruit_trees: IndexMap<String, FruitTree>,
    /// Keyed by internal recipe name
    pub cooking_recipes: Recipes,
}

/// Outcome counts for one unlock-source enricher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichStats {
    pub applied: u64,
    /// Target recipe not found
    pub dangling: u64,
    /// Entry could not be decoded at all
    pub invalid: u64,
}

impl EnrichStats {
    fn record(&mut self, outcome: Enrichment) {
        match outcome {
            Enrichment::Applied => self.applied += 1,
            Enrichment::Dangling => self.dangling += 1,
        }
    }
}

/// Summary of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub objects: usize,
    pub buffs: usize,
    /// Distinct buffs manufactured from edible items' inline definitions that
    /// are still in the output after the standalone buffs are merged
    pub synthetic_buffs: usize,
    pub crops: usize,
    pub fruit_trees: usize,
    pub cooking_recipes: usize,
    /// Raw records that could not be normalized, per input file
    pub skipped: IndexMap<&'static str, u64>,
    pub tv_unlocks: EnrichStats,
    pub special_unlocks: EnrichStats,
    pub classify: ClassifyStats,
    /// Outputs written successfully
    pub written: Vec<&'static str>,
    /// Outputs that failed to write
    pub failed: Vec<&'static str>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total_skipped(&self) -> u64 {
        self.skipped.values().sum()
    }

    fn skip(&mut self, input: &'static str, count: u64) {
        *self.skipped.entry(input).or_default() += count;
    }
}

// ── Driver ──────────────────────────────────────────────────────────────────

pub struct Pipeline {
    store: JsonStore,
}

impl Pipeline {
    pub fn new(settings: Settings) -> Self {
        Self {
            store: JsonStore::new(settings),
        }
    }

    pub fn settings(&self) -> &Settings {
        self.store.settings()
    }

    /// Run the whole pipeline once and write all six outputs.
    pub fn run(&self) -> RunReport {
        let (dataset, mut report) = self.build();
        self.write_all(&dataset, &mut report);
        report
    }

    /// Load and normalize every input without writing anything.
    pub fn build(&self) -> (Dataset, RunReport) {
        let strings = StringTables::load(&self.store);
        let mut data = Dataset::default();
        let mut report = RunReport::default();

        self.normalize_objects(&strings, &mut data, &mut report);
        self.normalize_buffs(&strings, &mut data, &mut report);
        self.normalize_crops(&mut data, &mut report);
        self.normalize_fruit_trees(&mut data, &mut report);
        self.parse_recipes(&mut data, &mut report);
        self.apply_cooking_channel(&mut data, &mut report);
        self.merge_special_sources(&mut data, &mut report);

        report.classify = classify_items(&mut data.objects, &data.fruit_trees);
        log::info!(
            "Classified {} items ({} left with legacy codes)",
            report.classify.reclassified,
            report.classify.untouched
        );

        report.objects = data.objects.len();
        report.buffs = data.buffs.len();
        report.crops = data.crops.len();
        report.fruit_trees = data.fruit_trees.len();
        report.cooking_recipes = data.cooking_recipes.len();
        (data, report)
    }

    fn load_data(&self, name: &str) -> RawRecords {
        let settings = self.store.settings();
        let records = self.store.load_or_empty(&settings.data_dir, name);
        if settings.debug {
            if let Some(census) = PropertyCensus::from_records(&records) {
                census.log(name);
            }
        }
        records
    }

    fn debug_records(&self) -> bool {
        self.store.settings().debug
    }

    fn normalize_objects(
        &self,
        strings: &StringTables,
        data: &mut Dataset,
        report: &mut RunReport,
    ) {
        let raw = self.load_data(OBJECTS_INPUT);
        let debug = self.debug_records();
        let mut synthetic = Vec::new();

        let skipped = for_each_record(&raw, OBJECTS_INPUT, |id, record: RawObject| {
            let normalized = normalize_item(id, &record, strings);
            if debug {
                log::debug!("{:?}", normalized.item);
            }
            synthetic.extend(normalized.buffs);
            data.objects.insert(id.to_string(), normalized.item);
        });
        report.skip(OBJECTS_INPUT, skipped);

        // Several custom buffs on one item share an id; the last one wins.
        for buff in synthetic {
            data.buffs.insert(buff.id.clone(), buff);
        }
        report.synthetic_buffs = data.buffs.len();
        log::info!("Normalized {} objects", data.objects.len());
    }

    fn normalize_buffs(
        &self,
        strings: &StringTables,
        data: &mut Dataset,
        report: &mut RunReport,
    ) {
        let raw = self.load_data(BUFFS_INPUT);
        let debug = self.debug_records();
        let mut replaced = 0;

        let skipped = for_each_record(&raw, BUFFS_INPUT, |id, record: RawBuff| {
            let buff = normalize_buff(id, &record, strings);
            if debug {
                log::debug!("{buff:?}");
            }
            // Replaces a synthetic buff with the same id in place.
            if data.buffs.insert(id.to_string(), buff).is_some() {
                log::debug!("Standalone buff {id} replaces the synthetic one");
                replaced += 1;
            }
        });
        report.skip(BUFFS_INPUT, skipped);
        report.synthetic_buffs = report.synthetic_buffs.saturating_sub(replaced);
        log::info!("Normalized {} buffs", data.buffs.len());
    }

    fn normalize_crops(&self, data: &mut Dataset, report: &mut RunReport) {
        let raw = self.load_data(CROPS_INPUT);
        let debug = self.debug_records();

        let skipped = for_each_record(&raw, CROPS_INPUT, |id, record: RawCrop| {
            let crop = normalize_crop(id, &record);
            if debug {
                log::debug!("{crop:?}");
            }
            data.crops.insert(id.to_string(), crop);
        });
        report.skip(CROPS_INPUT, skipped);
        log::info!("Normalized {} crops", data.crops.len());
    }

    fn normalize_fruit_trees(&self, data: &mut Dataset, report: &mut RunReport) {
        let raw = self.load_data(FRUIT_TREES_INPUT);
        let debug = self.debug_records();
        let mut fruitless = 0;

        let skipped = for_each_record(&raw, FRUIT_TREES_INPUT, |id, record: RawFruitTree| {
            let Some(tree) = normalize_fruit_tree(id, &record) else {
                log::warn!("{FRUIT_TREES_INPUT}: skipping record {id}: no fruit listed");
                fruitless += 1;
                return;
            };
            if debug {
                log::debug!("{tree:?}");
            }
            data.fruit_trees.insert(id.to_string(), tree);
        });
        report.skip(FRUIT_TREES_INPUT, skipped + fruitless);
        log::info!("Normalized {} fruit trees", data.fruit_trees.len());
    }

    fn parse_recipes(&self, data: &mut Dataset, report: &mut RunReport) {
        let raw = self.load_data(COOKING_RECIPES_INPUT);
        let debug = self.debug_records();

        let skipped = for_each_string(&raw, COOKING_RECIPES_INPUT, |name, recipe| {
            let recipe = parse_recipe(name, recipe);
            if debug {
                log::debug!("{recipe:?}");
            }
            data.cooking_recipes.insert(name.to_string(), recipe);
        });
        report.skip(COOKING_RECIPES_INPUT, skipped);
        log::info!("Parsed {} cooking recipes", data.cooking_recipes.len());
    }

    fn apply_cooking_channel(&self, data: &mut Dataset, report: &mut RunReport) {
        let raw = self.load_data(COOKING_CHANNEL_INPUT);
        let mut stats = EnrichStats::default();

        let skipped = for_each_string(&raw, COOKING_CHANNEL_INPUT, |key, show_info| {
            let Some(date) = key.parse::<u32>().ok().and_then(TvAirDate::from_episode) else {
                log::warn!("{COOKING_CHANNEL_INPUT}: cannot decode episode id {key:?}");
                stats.invalid += 1;
                return;
            };
            let recipe = tv_recipe_name(show_info);
            stats.record(apply_tv_episode(&mut data.cooking_recipes, date, recipe));
        });
        report.skip(COOKING_CHANNEL_INPUT, skipped + stats.invalid);
        report.tv_unlocks = stats;
        log::info!(
            "Applied {} TV unlocks ({} dangling)",
            stats.applied,
            stats.dangling
        );
    }

    fn merge_special_sources(&self, data: &mut Dataset, report: &mut RunReport) {
        let raw = self.load_data(SPECIAL_SOURCES_INPUT);
        let mut stats = EnrichStats::default();

        let skipped = for_each_record(&raw, SPECIAL_SOURCES_INPUT, |name, sources: Vec<String>| {
            stats.record(apply_special_sources(&mut data.cooking_recipes, name, &sources));
        });
        report.skip(SPECIAL_SOURCES_INPUT, skipped);
        report.special_unlocks = stats;
        log::info!(
            "Applied {} special recipe sources ({} dangling)",
            stats.applied,
            stats.dangling
        );
    }

    fn write_all(&self, data: &Dataset, report: &mut RunReport) {
        let groups = category_groups();
        self.write_output(OBJECTS_OUTPUT, &data.objects, report);
        self.write_output(BUFFS_OUTPUT, &data.buffs, report);
        self.write_output(CROPS_OUTPUT, &data.crops, report);
        self.write_output(FRUIT_TREES_OUTPUT, &data.fruit_trees, report);
        self.write_output(COOKING_RECIPES_OUTPUT, &data.cooking_recipes, report);
        self.write_output(CATEGORIES_OUTPUT, &groups, report);
    }

    fn write_output<T: serde::Serialize + ?Sized>(
        &self,
        name: &'static str,
        value: &T,
        report: &mut RunReport,
    ) {
        match self.store.write(name, value) {
            Ok(path) => {
                log::info!("Wrote {}", path.display());
                report.written.push(name);
            }
            Err(e) => {
                log::error!("Failed to write {name}: {e}");
                report.failed.push(name);
            }
        }
    }
}
