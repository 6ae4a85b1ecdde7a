//! Path builders for the wishlist REST API.
//!
//! Every backend route the panels touch is spelled out here, so callers hand
//! the dispatcher a path instead of formatting URLs inline.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

pub fn wishlists() -> String {
    "/wishlists".to_owned()
}

pub fn wishlist(wishlist_id: i64) -> String {
    format!("/wishlists/{wishlist_id}")
}

pub fn wishlists_by_customer(customer_id: i64) -> String {
    format!("/wishlists?customer_id={customer_id}")
}

pub fn items(wishlist_id: i64) -> String {
    format!("/wishlists/{wishlist_id}/items")
}

pub fn item(wishlist_id: i64, item_id: i64) -> String {
    format!("/wishlists/{wishlist_id}/items/{item_id}")
}

pub fn item_purchase(wishlist_id: i64, item_id: i64) -> String {
    format!("/wishlists/{wishlist_id}/items/{item_id}/purchase")
}
