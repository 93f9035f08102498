use crate::model::{ConfigError, DatasetKind};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const FALLBACK_IMAGE_URL: &str =
    "https://a.storyblok.com/f/123939/2240x1260/ceebc9c756/emplacement-restaurant.png";

/// Where the two CSV resources are read from.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    Http { base_url: String },
    File { dir: PathBuf },
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::File { dir: PathBuf::from(".") }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub homepage_file: String,
    pub catalog_file: String,
    pub initial_display_count: usize,
    pub default_display_count: usize,
    pub fallback_image_url: String,
    pub output_path: PathBuf,
    pub http_timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            homepage_file: "best_all_homepage.csv".into(),
            catalog_file: "corrected_restaurants.csv".into(),
            initial_display_count: 4,
            default_display_count: 8,
            fallback_image_url: FALLBACK_IMAGE_URL.into(),
            output_path: PathBuf::from("index.html"),
            http_timeout_seconds: 30,
            user_agent: concat!("restaurant-listings/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl AppConfig {
    pub fn file_name(&self, kind: DatasetKind) -> &str {
        match kind {
            DatasetKind::Homepage => &self.homepage_file,
            DatasetKind::Catalog => &self.catalog_file,
        }
    }
}

/// Reads the JSON config. A missing file yields the defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
