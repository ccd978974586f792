//! Walk through the storefront flows against the builtin catalog.
//!
//! ```bash
//! cargo run -p storefront --example demo
//! ```

use shared::{FilterState, Purpose, SortOption};
use storefront::Storefront;
use storefront::auth::{DEMO_EMAIL, DEMO_PASSWORD};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let store = Storefront::in_memory()?;
    let facets = store.catalog().facets();
    tracing::info!(
        laptops = store.catalog().len(),
        brands = facets.brands.len(),
        "catalog loaded"
    );

    // Browse: gaming laptops, cheapest first.
    let state = FilterState::for_purpose(Purpose::Gaming, &facets);
    for laptop in store.catalog().query(&state, SortOption::PriceAsc) {
        tracing::info!(id = %laptop.id, price = laptop.price, "gaming result");
    }

    // Guest cart.
    let scope = store.scope()?;
    store.cart().add(&scope, "asus-rog-strix-g16")?;
    store.cart().add(&scope, "asus-rog-strix-g16")?;
    let summary = store.cart().summary(&scope)?;
    tracing::info!(
        items = summary.total_items,
        total = summary.total_price,
        "guest cart"
    );

    // Sign in and note the scope switch.
    let user = store.auth().login(DEMO_EMAIL, DEMO_PASSWORD)?;
    let scope = store.scope()?;
    tracing::info!(user = %user.name, key = %scope.key(), "signed in");
    let summary = store.cart().summary(&scope)?;
    tracing::info!(items = summary.total_items, "cart after sign-in");

    // Similar items for a product page.
    for laptop in store.catalog().similar("asus-rog-strix-g16", 4) {
        tracing::info!(id = %laptop.id, "similar");
    }

    Ok(())
}
