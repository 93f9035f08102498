//! The widget: owns both snapshots, the filter controls and the container,
//! and applies events one at a time in arrival order.

pub mod controls;

use crate::config::AppConfig;
use crate::model::{Dataset, DatasetKind, FilterState};
use crate::ranking::rank_listings;
use crate::render::{render_listings, render_page, Display, ListingContainer, PageView};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlChange {
    District(String),
    PriceRange(String),
    Clear,
}

#[derive(Debug)]
pub enum WidgetEvent {
    DatasetLoaded(Arc<Dataset>),
    ControlChanged(ControlChange),
    Shutdown,
}

pub struct Widget<D: Display> {
    homepage: Arc<Dataset>,
    catalog: Arc<Dataset>,
    filters: FilterState,
    container: ListingContainer,
    display: D,
    initial_display_count: usize,
    default_display_count: usize,
    fallback_image_url: String,
}

impl<D: Display> Widget<D> {
    pub fn new(config: &AppConfig, display: D) -> Self {
        Self {
            homepage: Arc::new(Dataset::empty(DatasetKind::Homepage)),
            catalog: Arc::new(Dataset::empty(DatasetKind::Catalog)),
            filters: FilterState::default(),
            container: ListingContainer::new(),
            display,
            initial_display_count: config.initial_display_count,
            default_display_count: config.default_display_count,
            fallback_image_url: config.fallback_image_url.clone(),
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn container(&self) -> &ListingContainer {
        &self.container
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Applies one event. Returns `false` once the widget should stop.
    pub async fn handle_event(&mut self, event: WidgetEvent) -> bool {
        match event {
            WidgetEvent::DatasetLoaded(dataset) => match dataset.kind {
                DatasetKind::Homepage => {
                    info!("Homepage dataset ready ({} records)", dataset.len());
                    self.homepage = dataset;
                    self.update_listings(self.initial_display_count).await;
                }
                DatasetKind::Catalog => {
                    info!("Catalog dataset ready ({} records)", dataset.len());
                    self.catalog = dataset;
                }
            },
            WidgetEvent::ControlChanged(change) => {
                self.apply_change(change);
                self.update_listings(self.default_display_count).await;
            }
            WidgetEvent::Shutdown => {
                info!("Shutdown requested");
                return false;
            }
        }
        true
    }

    fn apply_change(&mut self, change: ControlChange) {
        match change {
            ControlChange::District(value) => self.filters.district = value,
            ControlChange::PriceRange(value) => self.filters.price_range = value,
            ControlChange::Clear => self.filters = FilterState::default(),
        }
        debug!("Filters now {:?}", self.filters);
    }

    /// Ranks, refills the container and paints the page.
    pub async fn update_listings(&mut self, limit: usize) {
        let ranked = rank_listings(&self.homepage, &self.catalog, &self.filters, limit);
        render_listings(&mut self.container, &ranked, &self.fallback_image_url);
        info!(
            "Showing {} restaurants (district {:?}, price {:?})",
            self.container.len(),
            self.filters.district,
            self.filters.price_range
        );

        let html = render_page(&PageView {
            filters: &self.filters,
            homepage: &self.homepage,
            catalog: &self.catalog,
            container: &self.container,
        });
        if let Err(e) = self.display.paint(&html).await {
            warn!("❌ Paint failed: {}", e);
        }
    }

    /// Processes events until shutdown or until every sender is gone.
    pub async fn run(&mut self, mut events: UnboundedReceiver<WidgetEvent>) {
        while let Some(event) = events.recv().await {
            if !self.handle_event(event).await {
                break;
            }
        }
    }
}
