// Host-page URL plumbing: reading filter criteria from the query string
// and writing the make selection back without navigating.

use url::Url;
use url::form_urlencoded;

use crate::models::{FilterCriteria, StockItem};

/// Query-string access on the host page.
///
/// A browser host backs this with its location; everywhere else (and in
/// tests) [`UrlContext`] backs it with a plain URL.
pub trait NavigationContext {
    fn query_param(&self, name: &str) -> Option<String>;
    fn set_query_param(&mut self, name: &str, value: &str);
    fn remove_query_param(&mut self, name: &str);
}

/// Replace-don't-navigate query mutation over a held URL.
#[derive(Debug, Clone)]
pub struct UrlContext {
    url: Url,
}

impl UrlContext {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            url: Url::parse(input)?,
        })
    }

    /// The current URL, for the host to apply (`history.replaceState`
    /// in a browser host).
    pub fn url(&self) -> &Url {
        &self.url
    }

    fn current_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect()
    }

    fn replace_pairs(&mut self, pairs: Vec<(String, String)>) {
        if pairs.is_empty() {
            self.url.set_query(None);
            return;
        }
        let mut editor = self.url.query_pairs_mut();
        editor.clear();
        for (name, value) in &pairs {
            editor.append_pair(name, value);
        }
    }
}

impl NavigationContext for UrlContext {
    fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.into_owned())
    }

    fn set_query_param(&mut self, name: &str, value: &str) {
        let mut pairs = self.current_pairs();
        match pairs.iter_mut().find(|(key, _)| key == name) {
            Some(pair) => pair.1 = value.to_string(),
            None => pairs.push((name.to_string(), value.to_string())),
        }
        self.replace_pairs(pairs);
    }

    fn remove_query_param(&mut self, name: &str) {
        let pairs = self
            .current_pairs()
            .into_iter()
            .filter(|(key, _)| key != name)
            .collect();
        self.replace_pairs(pairs);
    }
}

/// Map the host page's query string onto filter criteria: `make` is an
/// exact constraint, `model` a substring. Blank parameters count as
/// absent.
pub fn criteria_from_query<N: NavigationContext + ?Sized>(nav: &N) -> FilterCriteria {
    FilterCriteria {
        exact_make: nav.query_param("make").filter(|value| !value.is_empty()),
        model_substring: nav.query_param("model").filter(|value| !value.is_empty()),
        ..FilterCriteria::default()
    }
}

/// Link to the stock page for one listing, carrying the dealer context
/// and the listing's make and model as query parameters.
pub fn stock_detail_link(dealer_id: &str, primary_col: Option<&str>, item: &StockItem) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("dealer-id", dealer_id);
    if let Some(colour) = primary_col {
        query.append_pair("primary-col", colour);
    }
    query.append_pair("make", item.make.as_deref().unwrap_or(""));
    query.append_pair("model", item.model.as_deref().unwrap_or(""));
    format!("stock.html?{}", query.finish())
}
