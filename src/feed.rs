// Retrieval of the dealer stock feed.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;

use crate::config::Settings;
use crate::error::AppResult;
use crate::models::StockItem;

// One client per process; reqwest pools connections internally.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent(concat!("imotor-stock/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("failed to build reqwest client")
});

/// An external source of stock listings, keyed by dealer id.
///
/// Components take this as an injected collaborator so tests can supply
/// canned data; [`StockFeed`] is the HTTP implementation.
#[async_trait]
pub trait StockSource: Send + Sync {
    async fn fetch_stock(&self, dealer_id: &str) -> AppResult<Vec<StockItem>>;
}

/// The published stock feed: one static JSON document per dealer under a
/// common base URL.
#[derive(Debug, Clone)]
pub struct StockFeed {
    base_url: String,
}

impl StockFeed {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.stock_base_url.clone())
    }

    fn stock_url(&self, dealer_id: &str) -> String {
        format!(
            "{}/dealer_{}/stock.json",
            self.base_url.trim_end_matches('/'),
            dealer_id
        )
    }
}

#[async_trait]
impl StockSource for StockFeed {
    // One-shot fetch with no retry or timeout. A failure surfaces as
    // the single SourceFetch error kind.
    async fn fetch_stock(&self, dealer_id: &str) -> AppResult<Vec<StockItem>> {
        let url = self.stock_url(dealer_id);
        tracing::debug!(%url, "fetching stock feed");

        let stock: Vec<StockItem> = HTTP_CLIENT
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        tracing::info!(dealer_id, count = stock.len(), "stock feed retrieved");
        Ok(stock)
    }
}
