//! Entity normalizers: one pure transformation per raw record kind.
//!
//! Normalizers never touch the filesystem and never fail; they trust the raw
//! export to be well-formed once it has deserialized into a `Raw*` record.

pub mod buff;
pub mod crop;
pub mod fruit_tree;
pub mod item;
pub mod recipe;
pub mod unlock;

pub use buff::normalize_buff;
pub use crop::normalize_crop;
pub use fruit_tree::{normalize_fruit_tree, unqualified_item_id};
pub use item::{NormalizedItem, food_buff_id, normalize_item};
pub use recipe::{is_initial_unlock_source, parse_recipe};
pub use unlock::{
    Enrichment, SEASONS, TvAirDate, apply_special_sources, apply_tv_episode, tv_recipe_name,
};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::store::RawRecords;

/// Deserialize every record of a data file and hand it to `f` with its key.
///
/// A record that does not match `T` is logged and skipped. Returns the number
/// of skipped records.
pub fn for_each_record<T, F>(records: &RawRecords, file: &str, mut f: F) -> u64
where
    T: DeserializeOwned,
    F: FnMut(&str, T),
{
    let mut skipped = 0;
    for (key, value) in records {
        match T::deserialize(value) {
            Ok(record) => f(key.as_str(), record),
            Err(e) => {
                log::warn!("{file}: skipping record {key}: {e}");
                skipped += 1;
            }
        }
    }
    skipped
}

/// Like [`for_each_record`], for files whose records are plain strings.
pub fn for_each_string(records: &RawRecords, file: &str, mut f: impl FnMut(&str, &str)) -> u64 {
    let mut skipped = 0;
    for (key, value) in records {
        match value {
            Value::String(s) => f(key.as_str(), s.as_str()),
            other => {
                log::warn!("{file}: skipping record {key}: expected a string, found {other}");
                skipped += 1;
            }
        }
    }
    skipped
}
