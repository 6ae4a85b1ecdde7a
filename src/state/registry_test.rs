use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::error::TransportError;
use crate::net::testing;

fn wishlist(id: i64, name: &str) -> Wishlist {
    Wishlist { id, name: name.to_owned(), customer_id: 42 }
}

#[test]
fn registry_starts_unloaded() {
    let registry = WishlistRegistry::default();
    assert!(!registry.is_loaded());
    assert!(registry.is_empty());
    assert!(registry.snapshot().is_none());
    assert!(registry.get(0).is_none());
}

#[test]
fn apply_sorts_and_stores_snapshot() {
    let mut registry = WishlistRegistry::default();
    registry.apply(Some(vec![wishlist(5, "b"), wishlist(2, "a")]));
    let ids: Vec<i64> = registry.wishlists().iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![2, 5]);
    assert_eq!(registry.get(1).map(|w| w.id), Some(5));
    assert_eq!(registry.find(2).map(|w| w.name.as_str()), Some("a"));
}

#[test]
fn failed_refresh_keeps_stale_snapshot() {
    let mut registry = WishlistRegistry::default();
    registry.apply(Some(vec![wishlist(1, "Birthday")]));
    registry.apply(None);
    assert_eq!(registry.wishlists().len(), 1);
}

#[test]
fn fetch_wishlists_gets_collection_sorted() {
    let (dispatcher, transport) = testing::dispatcher();
    transport.reply(
        200,
        json!([
            { "id": 3, "name": "c", "customer_id": 1 },
            { "id": 1, "name": "a", "customer_id": 1 }
        ]),
    );
    let fetched = block_on(fetch_wishlists(&dispatcher)).unwrap();
    assert_eq!(fetched.iter().map(|w| w.id).collect::<Vec<_>>(), vec![1, 3]);
    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].url, testing::url("/wishlists"));
}

#[test]
fn fetch_wishlists_returns_none_on_failure() {
    let (dispatcher, transport) = testing::dispatcher();
    transport.reply(500, json!({ "message": "db down" }));
    transport.fail(TransportError::Network("offline".to_owned()));
    transport.reply(200, json!({ "not": "a list" }));
    assert!(block_on(fetch_wishlists(&dispatcher)).is_none());
    assert!(block_on(fetch_wishlists(&dispatcher)).is_none());
    assert!(block_on(fetch_wishlists(&dispatcher)).is_none());
}
