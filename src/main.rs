use restaurant_listings::app::{controls, Widget};
use restaurant_listings::config::{load_config, AppConfig};
use restaurant_listings::loader::{source_from_config, spawn_loads, DatasetSource};
use restaurant_listings::render::HtmlFileDisplay;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".into());
    let config: AppConfig = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let source: Arc<dyn DatasetSource> = match source_from_config(&config) {
        Ok(s) => Arc::from(s),
        Err(e) => {
            error!("Failed to initialize dataset source: {}", e);
            return;
        }
    };

    let (events_tx, events_rx) = mpsc::unbounded_channel();

    info!("🚀 Loading datasets...");
    spawn_loads(source, events_tx.clone());

    info!("{}", controls::HELP);
    tokio::spawn(controls::listen_for_commands(
        BufReader::new(tokio::io::stdin()),
        events_tx,
    ));

    let mut widget = Widget::new(&config, HtmlFileDisplay::new(&config.output_path));
    widget.run(events_rx).await;
    info!("Widget stopped.");
}
