// loader/source.rs

use crate::config::{AppConfig, SourceConfig};
use crate::model::{DatasetKind, LoaderError};
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Retrieves the raw delimited text of one dataset.
#[async_trait::async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self, kind: DatasetKind) -> Result<String, LoaderError>;
}

/// Static files served over HTTP.
pub struct HttpSource {
    client: Client,
    base_url: String,
    homepage_file: String,
    catalog_file: String,
}

impl HttpSource {
    pub fn new(base_url: &str, config: &AppConfig) -> Result<Self, LoaderError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            homepage_file: config.homepage_file.clone(),
            catalog_file: config.catalog_file.clone(),
        })
    }

    pub fn build_url(&self, kind: DatasetKind) -> String {
        let file = match kind {
            DatasetKind::Homepage => &self.homepage_file,
            DatasetKind::Catalog => &self.catalog_file,
        };
        format!("{}/{}", self.base_url, file)
    }
}

#[async_trait::async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self, kind: DatasetKind) -> Result<String, LoaderError> {
        let url = self.build_url(kind);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                LoaderError::Timeout
            } else {
                LoaderError::Http(e)
            }
        })?;

        if !response.status().is_success() {
            return Err(LoaderError::InvalidResponse(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }
}

/// Files in a local directory.
pub struct FileSource {
    dir: PathBuf,
    homepage_file: String,
    catalog_file: String,
}

impl FileSource {
    pub fn new(dir: impl Into<PathBuf>, config: &AppConfig) -> Self {
        Self {
            dir: dir.into(),
            homepage_file: config.homepage_file.clone(),
            catalog_file: config.catalog_file.clone(),
        }
    }

    fn path(&self, kind: DatasetKind) -> PathBuf {
        match kind {
            DatasetKind::Homepage => self.dir.join(&self.homepage_file),
            DatasetKind::Catalog => self.dir.join(&self.catalog_file),
        }
    }
}

#[async_trait::async_trait]
impl DatasetSource for FileSource {
    async fn fetch(&self, kind: DatasetKind) -> Result<String, LoaderError> {
        let path = self.path(kind);
        debug!("Reading {}", path.display());
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

/// Builds the source named in the config.
pub fn source_from_config(config: &AppConfig) -> Result<Box<dyn DatasetSource>, LoaderError> {
    Ok(match &config.source {
        SourceConfig::Http { base_url } => Box::new(HttpSource::new(base_url, config)?),
        SourceConfig::File { dir } => Box::new(FileSource::new(dir.clone(), config)),
    })
}
