// Ranking module: pure filter/rank over the dataset snapshots.

pub mod engine;

pub use engine::{matches_filters, rank_listings, select_dataset, DatasetHandle};
