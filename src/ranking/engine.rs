use crate::model::{Dataset, FilterState, Restaurant, Value};
use crate::normalizer::price_level_to_string;
use tracing::debug;

/// Which snapshot a query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetHandle {
    Homepage,
    Catalog,
}

/// The curated homepage set is only shown while no filter is active.
pub fn select_dataset(filters: &FilterState) -> DatasetHandle {
    if filters.is_empty() {
        DatasetHandle::Homepage
    } else {
        DatasetHandle::Catalog
    }
}

/// District uses substring containment ("8" also matches "18th");
/// price compares the rendered symbol exactly.
pub fn matches_filters(restaurant: &Restaurant, filters: &FilterState) -> bool {
    let district_match = filters.district.is_empty()
        || restaurant
            .arrondissement
            .as_deref()
            .is_some_and(|a| a.contains(filters.district.as_str()));
    let price_match = filters.price_range.is_empty()
        || price_level_to_string(restaurant.price.as_ref()) == filters.price_range;
    district_match && price_match
}

/// Eligible, filtered records ordered by descending score, at most `limit`.
/// Equal scores keep their source order.
pub fn rank_listings<'a>(
    homepage: &'a Dataset,
    catalog: &'a Dataset,
    filters: &FilterState,
    limit: usize,
) -> Vec<&'a Restaurant> {
    let handle = select_dataset(filters);
    let dataset = match handle {
        DatasetHandle::Homepage => homepage,
        DatasetHandle::Catalog => catalog,
    };

    let mut ranked: Vec<&Restaurant> = dataset
        .records
        .iter()
        .filter(|r| r.is_eligible())
        .filter(|r| handle == DatasetHandle::Homepage || matches_filters(r, filters))
        .collect();

    // `sort_by` is stable
    ranked.sort_by(|a, b| score_of(b).total_cmp(&score_of(a)));
    ranked.truncate(limit);

    debug!(
        "Ranked {} of {} {} records (limit {})",
        ranked.len(),
        dataset.len(),
        dataset.kind,
        limit
    );
    ranked
}

/// A score that is present but not a number sorts after every numeric one.
fn score_of(r: &Restaurant) -> f64 {
    r.score.as_ref().and_then(Value::as_number).unwrap_or(f64::NEG_INFINITY)
}
