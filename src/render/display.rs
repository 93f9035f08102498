// render/display.rs

use crate::model::RenderError;
use std::path::PathBuf;
use tracing::info;

/// Where painted pages end up.
#[async_trait::async_trait]
pub trait Display: Send {
    async fn paint(&mut self, html: &str) -> Result<(), RenderError>;
}

/// Rewrites one HTML file on every paint.
pub struct HtmlFileDisplay {
    path: PathBuf,
}

impl HtmlFileDisplay {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl Display for HtmlFileDisplay {
    async fn paint(&mut self, html: &str) -> Result<(), RenderError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, html).await?;
        info!("🖼 Painted {}", self.path.display());
        Ok(())
    }
}

/// Keeps every painted page in memory.
#[derive(Debug, Default)]
pub struct MemoryDisplay {
    pub pages: Vec<String>,
}

impl MemoryDisplay {
    pub fn last(&self) -> Option<&str> {
        self.pages.last().map(String::as_str)
    }
}

#[async_trait::async_trait]
impl Display for MemoryDisplay {
    async fn paint(&mut self, html: &str) -> Result<(), RenderError> {
        self.pages.push(html.to_string());
        Ok(())
    }
}
