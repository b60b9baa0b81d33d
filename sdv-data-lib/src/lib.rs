//! Normalization pipeline for the farm game's data export.
//!
//! Reads the raw JSON export (objects, buffs, crops, fruit trees, cooking
//! recipes and their unlock sources), resolves localization placeholders,
//! reshapes every record into the normalized model from `sdv-data-model`,
//! reclassifies items into the fixed category taxonomy and writes one JSON
//! file per collection.

pub mod census;
pub mod classify;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod production;
pub mod settings;
pub mod store;
pub mod strings;

pub use classify::{ClassifyStats, classify_items};
pub use error::DataError;
pub use pipeline::{Dataset, EnrichStats, Pipeline, RunReport};
pub use settings::{Settings, SettingsError, load_settings, load_settings_from, settings_path};
pub use store::{JsonStore, RawRecords};
pub use strings::{Resolved, StringTable, StringTables};
