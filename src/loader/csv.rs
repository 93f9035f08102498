//! CSV parsing for the restaurant datasets.
//!
//! Cells are typed the way a dynamically typed loader would type them:
//! empty cells are null, `true`/`false` are booleans, numeric text is a
//! number and everything else stays text. The typed cells are then projected
//! onto [`Restaurant`] by header name.

use crate::model::{LoaderError, Restaurant, Value};
use csv::{ReaderBuilder, StringRecord, Trim};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static NUMERIC: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^\s*-?(\d+\.?|\.\d+|\d+\.\d+)([eE][-+]?\d+)?\s*$").ok()
});

fn looks_numeric(raw: &str) -> bool {
    NUMERIC.as_ref().is_some_and(|re| re.is_match(raw))
}

/// Types a single raw cell. Empty cells are null.
pub fn infer(raw: &str) -> Option<Value> {
    let value = match raw {
        "" => return None,
        "true" | "TRUE" => Value::Bool(true),
        "false" | "FALSE" => Value::Bool(false),
        _ if looks_numeric(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Value::Number)
            .unwrap_or_else(|_| Value::Text(raw.to_string())),
        _ => Value::Text(raw.to_string()),
    };
    Some(value)
}

/// Header positions of the fields the widget reads.
struct Columns {
    index: HashMap<String, usize>,
}

impl Columns {
    fn new(headers: &StringRecord) -> Self {
        let index = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.to_string(), i))
            .collect();
        Self { index }
    }

    fn raw<'r>(&self, record: &'r StringRecord, name: &str) -> Option<&'r str> {
        self.index.get(name).and_then(|&i| record.get(i))
    }

    fn cell(&self, record: &StringRecord, name: &str) -> Option<Value> {
        self.raw(record, name).and_then(infer)
    }

    /// String fields keep their source text, even when it reads as a number.
    fn text(&self, record: &StringRecord, name: &str) -> Option<String> {
        self.cell(record, name)
            .and_then(|_| self.raw(record, name))
            .map(str::to_string)
    }
}

fn to_restaurant(cols: &Columns, record: &StringRecord) -> Restaurant {
    Restaurant {
        name: cols.text(record, "Name"),
        address: cols.text(record, "Address"),
        arrondissement: cols.text(record, "Arrondissement"),
        price: cols.cell(record, "Price"),
        rating: cols.cell(record, "Rating"),
        score: cols.cell(record, "Score"),
        number_reviews: cols.cell(record, "NumberReviews"),
        google_maps_place_id: cols.text(record, "GoogleMapsPlaceID"),
        image_url: cols.text(record, "ImageURL"),
    }
}

/// Parses a header-led CSV document into records, in source order.
pub fn parse_restaurants(text: &str) -> Result<Vec<Restaurant>, LoaderError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let cols = Columns::new(reader.headers()?);

    let mut restaurants = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        restaurants.push(to_restaurant(&cols, &record));
    }
    Ok(restaurants)
}
