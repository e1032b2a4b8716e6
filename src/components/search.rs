use async_trait::async_trait;

use super::Component;
use crate::engine;
use crate::feed::StockSource;
use crate::models::{RenderData, StockItem};
use crate::navigation::stock_detail_link;

/// How many matches the results panel shows at most.
pub const DEFAULT_RESULT_LIMIT: usize = 15;

/// Incremental search box over a dealer's stock.
///
/// Fetches the full list once on mount and shows the top of it, then
/// narrows per keystroke by make or model. A fetch failure becomes a
/// notice in place of the results.
pub struct StockSearch<S: StockSource> {
    source: S,
    dealer_id: String,
    primary_col: Option<String>,
    result_limit: usize,
    stocks: Vec<StockItem>,
    view: RenderData,
}

impl<S: StockSource> StockSearch<S> {
    pub fn new(source: S, dealer_id: impl Into<String>) -> Self {
        Self {
            source,
            dealer_id: dealer_id.into(),
            primary_col: None,
            result_limit: DEFAULT_RESULT_LIMIT,
            stocks: Vec::new(),
            view: RenderData::Stock(Vec::new()),
        }
    }

    /// Override the default top-15 cut.
    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    pub fn with_primary_col(mut self, colour: impl Into<String>) -> Self {
        self.primary_col = Some(colour.into());
        self
    }

    async fn load(&mut self) {
        match self.source.fetch_stock(&self.dealer_id).await {
            Ok(stocks) => {
                self.stocks = stocks;
                self.search("");
            }
            Err(error) => {
                self.stocks.clear();
                self.view = RenderData::Notice(error.into_notice());
            }
        }
    }

    /// Narrow the results to the query typed so far.
    pub fn search(&mut self, query: &str) {
        self.view = RenderData::Stock(engine::filter_by_text(
            &self.stocks,
            query,
            Some(self.result_limit),
        ));
    }

    /// Matches on display.
    pub fn results(&self) -> &[StockItem] {
        self.view.stock().unwrap_or(&[])
    }

    /// Link target for one result row.
    pub fn detail_link(&self, item: &StockItem) -> String {
        stock_detail_link(&self.dealer_id, self.primary_col.as_deref(), item)
    }
}

#[async_trait]
impl<S: StockSource> Component for StockSearch<S> {
    async fn on_mount(&mut self) {
        tracing::info!(dealer_id = %self.dealer_id, "mounting stock search");
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
                self.dealer_id = dealer_id.to_string();
                self.load().await;
            }
            ("primary-col", colour) => {
                self.primary_col = colour.map(str::to_string);
            }
            _ => {}
        }
    }

    fn view(&self) -> &RenderData {
        &self.view
    }
}
