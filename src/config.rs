// Host-side settings, loaded with the `config` crate (defaults, then an
// optional config file, then IMOTOR_-prefixed environment variables).

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Base URL the per-dealer stock documents are published under.
    pub stock_base_url: String,
    /// How many matches the search box shows at most.
    pub search_result_limit: usize,
}

impl Settings {
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok(); // Load .env file if present

        let builder = Config::builder()
            .set_default(
                "stock_base_url",
                "https://s3.ap-southeast-2.amazonaws.com/stock.publish",
            )?
            .set_default("search_result_limit", 15)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("IMOTOR"));

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}
