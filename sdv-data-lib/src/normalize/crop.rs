//! Crops → [`Crop`].

use sdv_data_model::Crop;
use sdv_data_model::raw::RawCrop;

pub fn normalize_crop(id: &str, raw: &RawCrop) -> Crop {
    Crop {
        id: id.to_string(),
        seasons: lowercase_seasons(&raw.seasons),
        growth_days: raw.days_in_phase.iter().sum(),
        harvest_item_id: raw.harvest_item_id.clone(),
        sprite_index: raw.sprite_index,
        // The export writes these keys only for non-default values, so the
        // key alone decides the flag.
        on_trellis: raw.is_raised.as_ref().map(|_| true),
        paddy_crop: raw.is_paddy_crop.as_ref().map(|_| true),
        regrowth_days: raw.regrow_days,
        extra_harvest_chance: raw.extra_harvest_chance,
        min_harvest: raw.harvest_min_stack,
        max_harvest: raw.harvest_max_stack,
        no_water: raw.needs_watering.as_ref().map(|_| true),
        scythe_harvest: raw.harvest_method.as_ref().map(|_| true),
    }
}

pub(crate) fn lowercase_seasons(seasons: &[String]) -> Vec<String> {
    seasons.iter().map(|s| s.to_lowercase()).collect()
}
