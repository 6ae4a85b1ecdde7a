use super::*;

#[test]
fn wishlist_paths() {
    assert_eq!(wishlists(), "/wishlists");
    assert_eq!(wishlist(12), "/wishlists/12");
    assert_eq!(wishlists_by_customer(42), "/wishlists?customer_id=42");
}

#[test]
fn item_paths_nest_under_wishlist() {
    assert_eq!(items(3), "/wishlists/3/items");
    assert_eq!(item(3, 7), "/wishlists/3/items/7");
    assert_eq!(item_purchase(3, 7), "/wishlists/3/items/7/purchase");
}
