//! Data layer for the dealer stock-browsing widget set. Fetches a
//! dealer's vehicle stock feed, filters and aggregates it per the
//! criteria carried in the host page's query string, and hands the
//! host render-ready payloads.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod feed;
pub mod models;
pub mod navigation;

pub use components::{Component, MakeOption, StockListing, StockSearch};
pub use error::{AppError, AppResult};
pub use feed::{StockFeed, StockSource};
pub use models::{FilterCriteria, Notice, RenderData, StockItem};
pub use navigation::{NavigationContext, UrlContext};

/// Install the tracing subscriber. Hosts call this once at startup;
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "imotor_stock=info".into()))
        .with(fmt::layer())
        .init();
}
