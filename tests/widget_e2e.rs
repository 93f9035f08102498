// tests/widget_e2e.rs
use std::fs;
use std::sync::Arc;

use futures::future::join_all;
use restaurant_listings::app::{ControlChange, Widget, WidgetEvent};
use restaurant_listings::config::AppConfig;
use restaurant_listings::loader::{spawn_loads, DatasetSource, FileSource};
use restaurant_listings::render::MemoryDisplay;
use scraper::{Html, Selector};
use tokio::sync::mpsc;

const HEADER: &str =
    "Name,Address,Arrondissement,Price,Rating,Score,NumberReviews,GoogleMapsPlaceID,ImageURL\n";

fn write_datasets(dir: &std::path::Path) {
    let homepage = [
        "Alpha,1 Rue A,1st,1,4.6,10,120,p-alpha,https://img/a.png",
        "Bravo,,2nd,2,3.2,40,15,p-bravo,",
        "Charlie,3 Rue C,3rd,3,4.9,30,300,p-charlie,",
        "Delta,4 Rue D,4th,4,2.0,20,8,p-delta,",
        "Echo,5 Rue E,5th,2,5.0,50,999,p-echo,",
        "NoScore,6 Rue F,6th,2,4.0,,10,p-noscore,",
    ];
    let catalog = [
        "Abc,,8th,2,4.2,50,100,abc,",
        "Def,,9th,2,3.9,80,40,def,",
        "Ghi,,18th,1,4.4,70,12,ghi,",
        "Jkl,,8th,4,4.8,90,75,jkl,",
    ];
    fs::write(dir.join("best_all_homepage.csv"), format!("{}{}\n", HEADER, homepage.join("\n"))).unwrap();
    fs::write(dir.join("corrected_restaurants.csv"), format!("{}{}\n", HEADER, catalog.join("\n"))).unwrap();
}

fn card_names(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse("#restaurants div.restaurant h2").unwrap();
    doc.select(&sel).map(|e| e.text().collect()).collect()
}

async fn run_with(changes: Vec<ControlChange>) -> MemoryDisplay {
    let dir = tempfile::tempdir().unwrap();
    write_datasets(dir.path());
    let config = AppConfig::default();
    let source: Arc<dyn DatasetSource> = Arc::new(FileSource::new(dir.path(), &config));

    let (tx, rx) = mpsc::unbounded_channel();
    join_all(spawn_loads(source, tx.clone())).await;
    for change in changes {
        tx.send(WidgetEvent::ControlChanged(change)).unwrap();
    }
    drop(tx);

    let mut widget = Widget::new(&config, MemoryDisplay::default());
    widget.run(rx).await;
    widget.into_display()
}

#[tokio::test]
async fn initial_paint_shows_top_four_homepage_records() {
    let display = run_with(vec![]).await;
    assert_eq!(display.pages.len(), 1);
    assert_eq!(card_names(display.last().unwrap()), ["Echo", "Bravo", "Charlie", "Delta"]);
}

#[tokio::test]
async fn price_filter_ranks_catalog() {
    let display = run_with(vec![ControlChange::PriceRange("$$".into())]).await;
    assert_eq!(display.pages.len(), 2);
    assert_eq!(card_names(display.last().unwrap()), ["Def", "Abc"]);
}

#[tokio::test]
async fn district_filter_is_substring() {
    let display = run_with(vec![ControlChange::District("8".into())]).await;
    assert_eq!(card_names(display.last().unwrap()), ["Jkl", "Ghi", "Abc"]);
}

#[tokio::test]
async fn clearing_filters_shows_homepage_with_default_count() {
    let display = run_with(vec![
        ControlChange::District("9".into()),
        ControlChange::Clear,
    ])
    .await;
    assert_eq!(display.pages.len(), 3);
    assert_eq!(
        card_names(display.last().unwrap()),
        ["Echo", "Bravo", "Charlie", "Delta", "Alpha"]
    );
}

#[tokio::test]
async fn missing_files_degrade_to_empty_listing() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::default();
    let source: Arc<dyn DatasetSource> = Arc::new(FileSource::new(dir.path(), &config));

    let (tx, rx) = mpsc::unbounded_channel();
    join_all(spawn_loads(source, tx)).await;

    let mut widget = Widget::new(&config, MemoryDisplay::default());
    widget.run(rx).await;
    assert_eq!(widget.display().pages.len(), 1);
    assert!(card_names(widget.display().last().unwrap()).is_empty());
}

#[tokio::test]
async fn non_numeric_cells_still_render() {
    let dir = tempfile::tempdir().unwrap();
    write_datasets(dir.path());
    let catalog = [
        "Grouped,,8th,2,4.1,30,\"1,234\",grouped,",
        "Cheap,,8th,cheap,3.8,20,50,cheap,",
        "Half,,8th,1,4.0,10,12.5,half,",
    ];
    fs::write(dir.path().join("corrected_restaurants.csv"), format!("{}{}\n", HEADER, catalog.join("\n"))).unwrap();

    let config = AppConfig::default();
    let source: Arc<dyn DatasetSource> = Arc::new(FileSource::new(dir.path(), &config));
    let (tx, rx) = mpsc::unbounded_channel();
    join_all(spawn_loads(source, tx.clone())).await;
    tx.send(WidgetEvent::ControlChanged(ControlChange::District("8".into()))).unwrap();
    drop(tx);

    let mut widget = Widget::new(&config, MemoryDisplay::default());
    widget.run(rx).await;
    let html = widget.display().last().unwrap().to_string();
    assert_eq!(card_names(&html), ["Grouped", "Cheap", "Half"]);
    assert!(html.contains("from 1,234 reviews"));
    assert!(html.contains("from 12.5 reviews"));
    assert!(html.contains("Price Range: N/A"));
}
