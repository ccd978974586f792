//! End-to-end storefront flows: identity switching, cart/favorites
//! isolation, and persistence across a reopen.

use storefront::auth::{DEMO_EMAIL, DEMO_PASSWORD};
use storefront::{Scope, Storefront};

#[test]
fn guest_cart_survives_a_login_cycle() {
    let store = Storefront::in_memory().unwrap();

    // Guest fills a cart.
    let guest = store.scope().unwrap();
    assert_eq!(guest, Scope::Guest);
    store.cart().add(&guest, "asus-vivobook-15").unwrap();
    store.cart().add(&guest, "asus-vivobook-15").unwrap();
    store.cart().add(&guest, "hp-pavilion-15").unwrap();

    // Signing in switches to an empty, separate cart.
    let user = store.auth().login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
    let user_scope = store.scope().unwrap();
    assert_eq!(user_scope, Scope::User(user.id));
    assert!(store.cart().items(&user_scope).unwrap().is_empty());

    store.cart().add(&user_scope, "dell-xps-15").unwrap();
    assert_eq!(store.cart().items(&user_scope).unwrap().len(), 1);

    // Signing out restores the guest cart untouched.
    store.auth().logout().unwrap();
    let back = store.scope().unwrap();
    assert_eq!(back, Scope::Guest);
    let summary = store.cart().summary(&back).unwrap();
    assert_eq!(summary.total_items, 3);
}

#[test]
fn favorites_are_scoped_per_identity() {
    let store = Storefront::in_memory().unwrap();

    let guest = Scope::Guest;
    store.favorites().add(&guest, "dell-xps-15").unwrap();

    let user = store
        .auth()
        .register("Aibek", "aibek@example.com", "pw")
        .unwrap();
    let user_scope = Scope::User(user.id);
    assert!(store.favorites().ids(&user_scope).unwrap().is_empty());

    store
        .favorites()
        .add(&user_scope, "apple-macbook-air-13-m3")
        .unwrap();
    assert!(store.favorites().is_favorite(&guest, "dell-xps-15").unwrap());
    assert!(
        !store
            .favorites()
            .is_favorite(&guest, "apple-macbook-air-13-m3")
            .unwrap()
    );

    let laptops = store.favorites().laptops(&user_scope).unwrap();
    assert_eq!(laptops.len(), 1);
    assert_eq!(laptops[0].brand, "Apple");
}

#[test]
fn cart_totals_follow_catalog_prices() {
    let store = Storefront::in_memory().unwrap();
    let scope = Scope::Guest;

    store.cart().add(&scope, "acer-aspire-3").unwrap();
    store.cart().update_quantity(&scope, "acer-aspire-3", 2).unwrap();

    let price = store.catalog().get_by_id("acer-aspire-3").unwrap().price;
    let summary = store.cart().summary(&scope).unwrap();
    assert_eq!(summary.total_items, 2);
    assert_eq!(summary.total_price, price * 2);

    // Dropping the quantity to zero empties the cart entirely.
    store.cart().update_quantity(&scope, "acer-aspire-3", 0).unwrap();
    assert!(store.cart().items(&scope).unwrap().is_empty());
}

#[test]
fn state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("store.redb");

    {
        let store = Storefront::open(&db_path).unwrap();
        store.auth().login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
        let scope = store.scope().unwrap();
        store.cart().add(&scope, "msi-katana-15").unwrap();
        store.favorites().add(&scope, "lenovo-legion-5-pro").unwrap();
    }

    let store = Storefront::open(&db_path).unwrap();
    let user = store.auth().current_user().unwrap().expect("session kept");
    assert_eq!(user.email, DEMO_EMAIL);

    let scope = store.scope().unwrap();
    let lines = store.cart().lines(&scope).unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].laptop.id, "msi-katana-15");
    assert!(
        store
            .favorites()
            .is_favorite(&scope, "lenovo-legion-5-pro")
            .unwrap()
    );
}
