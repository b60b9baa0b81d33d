//! Unlock-source enrichment applied after all recipes are parsed.
//!
//! Two sources add unlock tokens to existing recipes: the Queen of Sauce TV
//! schedule and the special recipe source list. A target recipe that does not
//! exist is skipped and reported, never an error.

use std::fmt;

use indexmap::IndexMap;
use sdv_data_model::CookingRecipe;

/// Season names in calendar order.
pub const SEASONS: [&str; 4] = ["spring", "summer", "fall", "winter"];

/// Recipes keyed by internal name.
pub type Recipes = IndexMap<String, CookingRecipe>;

/// Whether an enrichment found its recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enrichment {
    Applied,
    /// The named recipe is not in the collection.
    Dangling,
}

/// The Sunday a cooking show episode airs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TvAirDate {
    pub day: u32,
    pub season: &'static str,
    pub year: u32,
}

impl TvAirDate {
    /// Decode a 1-based episode id. Four episodes air per season, sixteen per
    /// year; the year wraps after sixteen years. Episode `0` does not exist.
    pub fn from_episode(id: u32) -> Option<Self> {
        let index = id.checked_sub(1)?;
        let sunday = index % 4 + 1;
        let season_bucket = index / 4;
        let year_bucket = index / 16;
        Some(Self {
            day: sunday * 7,
            season: SEASONS[(season_bucket % 4) as usize],
            year: year_bucket % 16 + 1,
        })
    }
}

impl fmt::Display for TvAirDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q {} {} {}", self.day, self.season, self.year)
    }
}

/// The recipe an episode teaches: the first slash-delimited field of its show info.
pub fn tv_recipe_name(show_info: &str) -> &str {
    show_info.split('/').next().unwrap_or_default()
}

/// Append the episode's air date to the recipe it teaches.
pub fn apply_tv_episode(recipes: &mut Recipes, date: TvAirDate, recipe_name: &str) -> Enrichment {
    let unlock = date.to_string();
    log::debug!("Setting {unlock} into recipe {recipe_name}");
    append_sources(recipes, recipe_name, std::iter::once(unlock))
}

/// Append every special source to the named recipe, in order.
pub fn apply_special_sources(recipes: &mut Recipes, name: &str, sources: &[String]) -> Enrichment {
    log::debug!("Setting {sources:?} into recipe {name}");
    append_sources(recipes, name, sources.iter().cloned())
}

fn append_sources(
    recipes: &mut Recipes,
    name: &str,
    sources: impl IntoIterator<Item = String>,
) -> Enrichment {
    match recipes.get_mut(name) {
        Some(recipe) => {
            recipe.unlock_sources.extend(sources);
            Enrichment::Applied
        }
        None => {
            log::warn!("No cooking recipe named {name:?}; skipping unlock source");
            Enrichment::Dangling
        }
    }
}

#[cfg(test)]
#[path = "tests/unlock_tests.rs"]
mod tests;
