// Data structures for the stock feed and the component render path.

use serde::{Deserialize, Serialize};

/// One vehicle listing record from a dealer's stock feed.
///
/// Field names match the feed JSON (camelCase). Real feeds are sparsely
/// populated, so everything is optional; `images` defaults to empty when
/// the feed omits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub make: Option<String>,
    pub model: Option<String>,
    pub price: Option<f64>,
    pub price_qualifier: Option<String>,
    pub transmission: Option<String>,
    pub body_type: Option<String>,
    pub colour: Option<String>,
    pub odometer: Option<String>,
    pub size: Option<String>,
    pub size_option: Option<String>,
    pub stock_number: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// A labeled display value for a listing card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub label: &'static str,
    pub value: String,
}

impl StockItem {
    /// Labeled display pairs for a listing card, with "N/A" substituted
    /// for fields the feed left out. Engine size and its unit collapse
    /// into one entry.
    pub fn features(&self) -> Vec<Feature> {
        let engine = match (self.size.as_deref(), self.size_option.as_deref()) {
            (Some(size), Some(option)) => format!("{size} {option}"),
            (Some(size), None) => size.to_string(),
            (None, Some(option)) => format!("N/A {option}"),
            (None, None) => "N/A".to_string(),
        };

        vec![
            Feature { label: "Transmission", value: or_na(&self.transmission) },
            Feature { label: "Body Type", value: or_na(&self.body_type) },
            Feature { label: "Color", value: or_na(&self.colour) },
            Feature { label: "Kilometres", value: or_na(&self.odometer) },
            Feature { label: "Engine", value: engine },
            Feature { label: "Stock №", value: or_na(&self.stock_number) },
        ]
    }
}

fn or_na(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "N/A".to_string())
}

/// A set of optional constraints narrowing a stock list.
///
/// Invariant: an absent criterion imposes no constraint, so the default
/// value matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Matched case-insensitively against make and model.
    pub text_query: Option<String>,
    /// Case-insensitive equality on make.
    pub exact_make: Option<String>,
    /// Case-insensitive containment on model.
    pub model_substring: Option<String>,
    /// Truncates the result to the first N matches.
    pub result_limit: Option<usize>,
}

/// Message payload handed to the render path in place of a result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// What a component hands the host to render: the stock on display, or a
/// notice when there is nothing to show.
///
/// Serializes untagged, so the JSON is either an array of listings or an
/// object carrying a `message` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RenderData {
    Stock(Vec<StockItem>),
    Notice(Notice),
}

impl RenderData {
    pub fn stock(&self) -> Option<&[StockItem]> {
        match self {
            RenderData::Stock(items) => Some(items),
            RenderData::Notice(_) => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            RenderData::Stock(_) => None,
            RenderData::Notice(notice) => Some(notice),
        }
    }

    /// Number of listings on display; a notice counts as zero.
    pub fn item_count(&self) -> usize {
        self.stock().map_or(0, <[StockItem]>::len)
    }
}
