// Loader module: fetches the two datasets and publishes immutable snapshots.

pub mod csv;
pub mod source;

pub use source::{source_from_config, DatasetSource, FileSource, HttpSource};

use crate::app::WidgetEvent;
use crate::model::{Dataset, DatasetKind};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Fetches and parses one dataset. Any failure degrades to the empty snapshot.
pub async fn load_dataset(source: &dyn DatasetSource, kind: DatasetKind) -> Dataset {
    let text = match source.fetch(kind).await {
        Ok(text) => text,
        Err(e) => {
            warn!("❌ Failed to fetch {} dataset: {}", kind, e);
            return Dataset::empty(kind);
        }
    };

    match csv::parse_restaurants(&text) {
        Ok(records) => {
            info!("📦 Loaded {} {} records", records.len(), kind);
            Dataset::new(kind, records)
        }
        Err(e) => {
            warn!("❌ Failed to parse {} dataset: {}", kind, e);
            Dataset::empty(kind)
        }
    }
}

/// Starts both loads. Each publishes its snapshot on `events` when done;
/// completion order is not defined.
pub fn spawn_loads(
    source: Arc<dyn DatasetSource>,
    events: UnboundedSender<WidgetEvent>,
) -> Vec<JoinHandle<()>> {
    [DatasetKind::Homepage, DatasetKind::Catalog]
        .into_iter()
        .map(|kind| {
            let source = source.clone();
            let events = events.clone();
            tokio::spawn(async move {
                let dataset = load_dataset(source.as_ref(), kind).await;
                if events.send(WidgetEvent::DatasetLoaded(Arc::new(dataset))).is_err() {
                    warn!("Widget closed before the {} dataset arrived", kind);
                }
            })
        })
        .collect()
}
