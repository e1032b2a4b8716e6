// End-to-end component flows over a canned stock source, without a live
// feed or a browser host.

use async_trait::async_trait;
use imotor_stock::components::Component;
use imotor_stock::error::AppResult;
use imotor_stock::feed::StockSource;
use imotor_stock::models::StockItem;
use imotor_stock::navigation::NavigationContext;
use imotor_stock::{StockListing, StockSearch, UrlContext};

struct FakeSource {
    items: Vec<StockItem>,
    fail: bool,
}

impl FakeSource {
    fn with_items(items: Vec<StockItem>) -> Self {
        Self { items, fail: false }
    }

    fn failing() -> Self {
        Self {
            items: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl StockSource for FakeSource {
    async fn fetch_stock(&self, _dealer_id: &str) -> AppResult<Vec<StockItem>> {
        if self.fail {
            return Err(anyhow::anyhow!("connection refused").into());
        }
        Ok(self.items.clone())
    }
}

fn item(make: &str, model: &str) -> StockItem {
    StockItem {
        make: Some(make.to_string()),
        model: Some(model.to_string()),
        ..StockItem::default()
    }
}

// 18 listings across four makes, enough to exercise the top-15 cut.
fn fleet() -> Vec<StockItem> {
    vec![
        item("Toyota", "Corolla"),
        item("Toyota", "Hilux"),
        item("Toyota", "Hilux SR5"),
        item("Toyota", "Yaris"),
        item("toyota", "Camry"),
        item("Toyota", "RAV4"),
        item("Ford", "Ranger"),
        item("Ford", "Everest"),
        item("ford", "Focus"),
        item("Ford", "Fiesta"),
        item("Ford", "Mustang"),
        item("Mazda", "CX-5"),
        item("Mazda", "Mazda3"),
        item("Mazda", "BT-50"),
        item("Mazda", "CX-30"),
        item("Kia", "Sportage"),
        item("Kia", "Cerato"),
        item("Kia", "Picanto"),
    ]
}

fn page(query: &str) -> UrlContext {
    UrlContext::parse(&format!("https://dealer.example/stock.html{query}")).unwrap()
}

#[tokio::test]
async fn search_mounts_with_the_top_fifteen() {
    let mut search = StockSearch::new(FakeSource::with_items(fleet()), "2343");
    search.on_mount().await;

    assert_eq!(search.results().len(), 15);
    assert_eq!(search.results()[0], fleet()[0]);
}

#[tokio::test]
async fn search_narrows_case_insensitively_and_resets() {
    let mut search = StockSearch::new(FakeSource::with_items(fleet()), "2343");
    search.on_mount().await;

    search.search("TOY");
    assert_eq!(search.results().len(), 6);
    assert!(search
        .results()
        .iter()
        .all(|s| s.make.as_deref().unwrap().eq_ignore_ascii_case("toyota")));

    // Model substrings match too.
    search.search("hilux");
    assert_eq!(search.results().len(), 2);
    assert_eq!(search.results()[0].model.as_deref(), Some("Hilux"));

    // Clearing the query restores the initial cut.
    search.search("");
    assert_eq!(search.results().len(), 15);
}

#[tokio::test]
async fn search_failure_renders_a_notice() {
    let mut search = StockSearch::new(FakeSource::failing(), "2343");
    search.on_mount().await;

    let notice = search.view().notice().expect("expected a notice view");
    assert!(notice.message.contains("connection refused"));
    assert!(search.results().is_empty());
}

#[tokio::test]
async fn search_refetches_when_dealer_id_prop_changes() {
    let mut search = StockSearch::new(FakeSource::with_items(fleet()), "2343");
    search
        .on_props_changed("dealer-id", Some("2343"), Some("9001"))
        .await;

    assert_eq!(search.results().len(), 15);
}

#[tokio::test]
async fn search_detail_links_carry_the_dealer_context() {
    let search = StockSearch::new(FakeSource::with_items(fleet()), "2343")
        .with_primary_col("crimson");

    let link = search.detail_link(&item("Toyota", "Hilux SR5"));
    assert_eq!(
        link,
        "stock.html?dealer-id=2343&primary-col=crimson&make=Toyota&model=Hilux+SR5"
    );
}

#[tokio::test]
async fn listing_applies_query_string_criteria_on_mount() {
    let nav = page("?make=Toyota&model=hi");
    let mut listing = StockListing::new(
        FakeSource::with_items(fleet()),
        nav,
        Some("2343".to_string()),
    );
    listing.on_mount().await;

    let shown = listing.view().stock().unwrap();
    assert_eq!(shown.len(), 2);
    assert!(shown.iter().all(|s| {
        s.make.as_deref().unwrap().eq_ignore_ascii_case("toyota")
            && s.model.as_deref().unwrap().to_lowercase().contains("hi")
    }));
    assert_eq!(listing.stock_count(), 2);
}

#[tokio::test]
async fn listing_without_dealer_id_shows_a_notice() {
    let mut listing = StockListing::new(FakeSource::with_items(fleet()), page(""), None);
    listing.on_mount().await;

    assert_eq!(
        listing.view().notice().unwrap().message,
        "Dealer ID not provided."
    );
    assert_eq!(listing.stock_count(), 0);
}

#[tokio::test]
async fn selecting_a_make_rewrites_the_query_string_and_filters() {
    let mut listing = StockListing::new(
        FakeSource::with_items(fleet()),
        page("?model=ranger"),
        Some("2343".to_string()),
    );
    listing.on_mount().await;

    listing.select_make("Ford").await;
    assert_eq!(listing.nav().query_param("make").as_deref(), Some("ford"));
    // Selection filters by make alone; the model parameter stays in the
    // URL but no longer narrows the listing.
    assert_eq!(listing.stock_count(), 5);
    assert_eq!(listing.selected_make().as_deref(), Some("ford"));
}

#[tokio::test]
async fn selecting_all_makes_clears_the_constraint() {
    let mut listing = StockListing::new(
        FakeSource::with_items(fleet()),
        page("?make=ford"),
        Some("2343".to_string()),
    );
    listing.on_mount().await;
    assert_eq!(listing.stock_count(), 5);

    listing.select_make("all").await;
    assert_eq!(listing.nav().query_param("make"), None);
    assert_eq!(listing.stock_count(), 18);
}

#[tokio::test]
async fn make_options_are_sorted_with_counts_behind_the_sentinel() {
    let mut listing = StockListing::new(
        FakeSource::with_items(fleet()),
        page(""),
        Some("2343".to_string()),
    );
    listing.on_mount().await;

    let options = listing.make_options();
    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(
        labels,
        ["All Makes", "Ford (5)", "Kia (3)", "Mazda (4)", "Toyota (6)"]
    );
    assert_eq!(options[0].value, "all");
    assert_eq!(options[0].count, 18);
}

#[tokio::test]
async fn selector_less_listing_yields_no_options() {
    let mut listing = StockListing::new(
        FakeSource::with_items(fleet()),
        page(""),
        Some("2343".to_string()),
    )
    .without_make_selector();
    listing.on_mount().await;

    assert!(listing.make_options().is_empty());
    assert_eq!(listing.stock_count(), 18);
}

#[tokio::test]
async fn listing_failure_renders_a_notice_and_no_partial_state() {
    let mut listing = StockListing::new(FakeSource::failing(), page(""), Some("2343".to_string()));
    listing.on_mount().await;

    assert!(listing.view().notice().is_some());
    // Only the sentinel survives; no stale counts from a previous fetch.
    let options = listing.make_options();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].count, 0);
    assert_eq!(listing.stock_count(), 0);
}
