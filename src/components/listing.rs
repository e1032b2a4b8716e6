use std::collections::BTreeMap;

use async_trait::async_trait;

use super::Component;
use crate::engine;
use crate::feed::StockSource;
use crate::models::{Notice, RenderData};
use crate::navigation::{NavigationContext, criteria_from_query};

/// Selector value meaning "no make constraint".
pub const ALL_MAKES: &str = "all";

const MISSING_DEALER_ID: &str = "Dealer ID not provided.";

/// One entry of the make selector.
#[derive(Debug, Clone, PartialEq)]
pub struct MakeOption {
    /// Lowercased selector value ("all" for the sentinel entry).
    pub value: String,
    /// Display label, e.g. "Toyota (3)".
    pub label: String,
    pub count: usize,
}

/// Filterable stock listing wired to the host page's query string.
///
/// On mount, `make` and `model` parameters narrow the listing; choosing
/// a make writes `make` back to the navigation context without
/// navigating. The make selector is an optional capability; without it
/// the listing filters purely from the query string.
pub struct StockListing<S: StockSource, N: NavigationContext> {
    source: S,
    nav: N,
    dealer_id: Option<String>,
    primary_col: Option<String>,
    with_make_selector: bool,
    make_counts: BTreeMap<String, usize>,
    view: RenderData,
}

impl<S, N> StockListing<S, N>
where
    S: StockSource,
    N: NavigationContext,
{
    pub fn new(source: S, nav: N, dealer_id: Option<String>) -> Self {
        Self {
            source,
            nav,
            dealer_id,
            primary_col: None,
            with_make_selector: true,
            make_counts: BTreeMap::new(),
            view: RenderData::Stock(Vec::new()),
        }
    }

    /// Drop the make selector capability.
    pub fn without_make_selector(mut self) -> Self {
        self.with_make_selector = false;
        self
    }

    async fn load(&mut self) {
        let Some(dealer_id) = self.dealer_id.clone() else {
            self.view = RenderData::Notice(Notice::new(MISSING_DEALER_ID));
            return;
        };

        match self.source.fetch_stock(&dealer_id).await {
            Ok(stocks) => {
                self.make_counts = engine::aggregate_by_make(&stocks);
                let criteria = criteria_from_query(&self.nav);
                self.view = RenderData::Stock(engine::filter_by_make_and_model(
                    &stocks,
                    criteria.exact_make.as_deref(),
                    criteria.model_substring.as_deref(),
                ));
            }
            Err(error) => {
                self.make_counts.clear();
                self.view = RenderData::Notice(error.into_notice());
            }
        }
    }

    /// Apply a make selection: sync the query string, refetch, narrow by
    /// the make alone.
    pub async fn select_make(&mut self, selected: &str) {
        if selected.is_empty() || selected.eq_ignore_ascii_case(ALL_MAKES) {
            self.nav.remove_query_param("make");
        } else {
            self.nav.set_query_param("make", &selected.to_lowercase());
        }

        let Some(dealer_id) = self.dealer_id.clone() else {
            self.view = RenderData::Notice(Notice::new(MISSING_DEALER_ID));
            return;
        };

        match self.source.fetch_stock(&dealer_id).await {
            Ok(stocks) => {
                self.make_counts = engine::aggregate_by_make(&stocks);
                let make = self.nav.query_param("make");
                self.view = RenderData::Stock(engine::filter_by_make_and_model(
                    &stocks,
                    make.as_deref(),
                    None,
                ));
            }
            Err(error) => {
                self.view = RenderData::Notice(error.into_notice());
            }
        }
    }

    /// Selector payload: the "All Makes" sentinel first, then each make
    /// in ascending order with a capitalized label and its count. Empty
    /// when the capability is off.
    pub fn make_options(&self) -> Vec<MakeOption> {
        if !self.with_make_selector {
            return Vec::new();
        }

        let mut options = vec![MakeOption {
            value: ALL_MAKES.to_string(),
            label: "All Makes".to_string(),
            count: self.make_counts.values().sum(),
        }];
        for (make, count) in &self.make_counts {
            options.push(MakeOption {
                value: make.clone(),
                label: format!("{} ({count})", capitalize(make)),
                count: *count,
            });
        }
        options
    }

    /// The make the query string currently pins, lowercased.
    pub fn selected_make(&self) -> Option<String> {
        self.nav.query_param("make").map(|make| make.to_lowercase())
    }

    /// Count for the "N Stock Items" heading.
    pub fn stock_count(&self) -> usize {
        self.view.item_count()
    }

    pub fn nav(&self) -> &N {
        &self.nav
    }

    /// Accent colour prop, for the host to apply.
    pub fn primary_col(&self) -> Option<&str> {
        self.primary_col.as_deref()
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[async_trait]
impl<S, N> Component for StockListing<S, N>
where
    S: StockSource,
    N: NavigationContext + Send + Sync,
{
    async fn on_mount(&mut self) {
        tracing::info!(dealer_id = ?self.dealer_id, "mounting stock listing");
        self.load().await;
    }

    async fn on_props_changed(
        &mut self,
        name: &str,
        _old_value: Option<&str>,
        new_value: Option<&str>,
    ) {
        match (name, new_value) {
            ("dealer-id", Some(dealer_id)) => {
                self.dealer_id = Some(dealer_id.to_string());
                self.load().await;
            }
            ("primary-col", colour) => {
                // Applying the colour is the host's concern; we only
                // carry the prop.
                self.primary_col = colour.map(str::to_string);
            }
            _ => {}
        }
    }

    fn view(&self) -> &RenderData {
        &self.view
    }
}
