// Core structs: Restaurant, Dataset, FilterState, error types
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

/// A present, typed CSV cell. Null cells are `None` on the record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

/// Integral numbers print without a fractional part, text prints verbatim.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// One row from either dataset. Every field is optional at parse time;
/// eligibility is decided later by [`Restaurant::is_eligible`]. The numeric
/// columns keep whatever was present, even when it is not a number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Restaurant {
    pub name: Option<String>,
    pub address: Option<String>,
    pub arrondissement: Option<String>,
    pub price: Option<Value>,
    pub rating: Option<Value>,
    pub score: Option<Value>,
    pub number_reviews: Option<Value>,
    pub google_maps_place_id: Option<String>,
    pub image_url: Option<String>,
}

impl Restaurant {
    /// A record may be displayed only when every required field is present.
    /// `Address` and `ImageURL` are not required.
    pub fn is_eligible(&self) -> bool {
        self.arrondissement.is_some()
            && self.price.is_some()
            && self.rating.is_some()
            && self.score.is_some()
            && self.number_reviews.is_some()
            && self.google_maps_place_id.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Homepage,
    Catalog,
}

impl DatasetKind {
    pub fn label(self) -> &'static str {
        match self {
            DatasetKind::Homepage => "homepage",
            DatasetKind::Catalog => "catalog",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable snapshot of one dataset. Published once by the loader and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub kind: DatasetKind,
    pub records: Vec<Restaurant>,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl Dataset {
    pub fn new(kind: DatasetKind, records: Vec<Restaurant>) -> Self {
        Self {
            kind,
            records,
            loaded_at: Some(Utc::now()),
        }
    }

    /// The snapshot seen before a load completes (or after it fails).
    pub fn empty(kind: DatasetKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
            loaded_at: None,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Current values of the two filter controls. An empty string means the
/// control is inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub district: String,
    pub price_range: String,
}

impl FilterState {
    pub fn new(district: impl Into<String>, price_range: impl Into<String>) -> Self {
        Self {
            district: district.into(),
            price_range: price_range.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.district.is_empty() && self.price_range.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected response status {0}")]
    InvalidResponse(u16),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write page: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("invalid price range: {0:?}")]
    InvalidPriceRange(String),
}
