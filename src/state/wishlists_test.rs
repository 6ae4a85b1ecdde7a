use futures::executor::block_on;
use serde_json::{Value, json};

use super::*;
use crate::net::testing;
use crate::state::registry::{WishlistRegistry, fetch_wishlists};

fn body(request: &crate::net::dispatch::HttpRequest) -> Value {
    serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
}

// =============================================================
// create
// =============================================================

#[test]
fn create_birthday_wishlist_refreshes_registry_once() {
    let (dispatcher, transport) = testing::dispatcher();
    transport.reply(201, json!({ "id": 11, "name": "Birthday", "customer_id": 42 }));
    transport.reply(200, json!([{ "id": 11, "name": "Birthday", "customer_id": 42 }]));

    let mut panel = WishlistPanelState::default();
    let mut registry = WishlistRegistry::default();
    panel.begin();
    assert!(panel.result.is_sending());

    let mutation = block_on(create(&dispatcher, "Birthday", "42"));
    panel.finish(&mutation);
    if mutation.refresh {
        registry.apply(block_on(fetch_wishlists(&dispatcher)));
    }

    let sent = transport.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].url, testing::url("/wishlists"));
    assert_eq!(body(&sent[0]), json!({ "name": "Birthday", "customer_id": 42 }));
    assert_eq!(sent[1].method, Method::Get);
    assert_eq!(sent[1].url, testing::url("/wishlists"));

    assert_eq!(panel.result.message, "Wishlist created successfully!");
    assert_eq!(panel.result.response_code, Some(201));
    assert_eq!(registry.find(11).map(|w| w.name.as_str()), Some("Birthday"));
}

#[test]
fn create_failure_reports_message_without_refresh() {
    let (dispatcher, transport) = testing::dispatcher();
    transport.reply(
        400,
        json!({ "message": "Invalid Wishlist: body of request contained bad or no data" }),
    );
    let mutation = block_on(create(&dispatcher, "Birthday", "42"));
    assert!(!mutation.refresh);
    assert!(!mutation.result.is_success());
    assert_eq!(
        mutation.result.message,
        "Invalid Wishlist: body of request contained bad or no data"
    );
    assert_eq!(transport.sent_count(), 1);
}

#[test]
fn create_rejects_invalid_input_without_dispatch() {
    let (dispatcher, transport) = testing::dispatcher();
    let mutation = block_on(create(&dispatcher, "Birthday", "forty-two"));
    assert_eq!(mutation.result.message, "Customer ID must be a whole number");
    assert_eq!(transport.sent_count(), 0);

    let mutation = block_on(create(&dispatcher, "  ", "42"));
    assert_eq!(mutation.result.message, "Name is required");
    assert_eq!(transport.sent_count(), 0);
}

// =============================================================
// update / delete
// =============================================================

#[test]
fn update_puts_row_fields() {
    let (dispatcher, transport) = testing::dispatcher();
    transport.reply(200, json!({ "id": 4, "name": "Holiday", "customer_id": 7 }));
    let mutation = block_on(update(&dispatcher, Some(4), "Holiday", "7")).unwrap();
    assert!(mutation.refresh);
    assert_eq!(mutation.result.message, "Wishlist updated successfully");
    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Put);
    assert_eq!(sent[0].url, testing::url("/wishlists/4"));
    assert_eq!(body(&sent[0]), json!({ "name": "Holiday", "customer_id": 7 }));
}

#[test]
fn update_and_delete_without_row_id_send_nothing() {
    let (dispatcher, transport) = testing::dispatcher();
    assert!(block_on(update(&dispatcher, None, "Holiday", "7")).is_none());
    assert!(block_on(delete(&dispatcher, None)).is_none());
    assert_eq!(transport.sent_count(), 0);
}

#[test]
fn delete_expects_no_content() {
    let (dispatcher, transport) = testing::dispatcher();
    transport.reply_empty(204);
    transport.reply(404, json!({ "message": "Wishlist with id '4' was not found." }));

    let deleted = block_on(delete(&dispatcher, Some(4))).unwrap();
    assert!(deleted.refresh);
    assert_eq!(deleted.result.message, "Wishlist deleted successfully");
    assert_eq!(transport.sent()[0].method, Method::Delete);
    assert_eq!(transport.sent()[0].body, None);

    let missing = block_on(delete(&dispatcher, Some(4))).unwrap();
    assert!(!missing.refresh);
    assert_eq!(missing.result.message, "Wishlist with id '4' was not found.");
}

// =============================================================
// list / read-one / search
// =============================================================

#[test]
fn list_renders_rows_sorted_by_id() {
    let (dispatcher, transport) = testing::dispatcher();
    transport.reply(
        200,
        json!([
            { "id": 8, "name": "z", "customer_id": 1 },
            { "id": 2, "name": "y", "customer_id": 1 },
            { "id": 5, "name": "x", "customer_id": 2 }
        ]),
    );
    let mut panel = WishlistPanelState::default();
    panel.show_read(block_on(list(&dispatcher)));
    let ids: Vec<i64> = panel.read_listing.as_ref().unwrap().rows().iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![2, 5, 8]);
    assert_eq!(panel.result.message, "Wishlists printed below");
    assert!(panel.search_listing.is_none());
}

#[test]
fn list_with_no_rows_is_empty_listing() {
    let (dispatcher, transport) = testing::dispatcher();
    transport.reply(200, json!([]));
    let query = block_on(list(&dispatcher));
    assert_eq!(query.listing, Some(Listing::Empty));
    assert_eq!(query.result.message, "No wishlists exist");
}

#[test]
fn read_one_fetches_item_path() {
    let (dispatcher, transport) = testing::dispatcher();
    transport.reply(200, json!({ "id": 6, "name": "Trip", "customer_id": 3 }));
    let query = block_on(read_one(&dispatcher, "6"));
    assert_eq!(transport.sent()[0].url, testing::url("/wishlists/6"));
    assert_eq!(query.listing.unwrap().rows()[0].name, "Trip");
    assert_eq!(query.result.message, "Wishlist printed below");
}

#[test]
fn read_one_not_found_is_error() {
    let (dispatcher, transport) = testing::dispatcher();
    transport.reply(404, json!({ "message": "Wishlist with id '6' was not found." }));
    let query = block_on(read_one(&dispatcher, "6"));
    assert!(query.listing.is_none());
    assert_eq!(query.result.response_code, Some(404));
}

#[test]
fn search_filters_by_customer_id() {
    let (dispatcher, transport) = testing::dispatcher();
    transport.reply(200, json!([]));
    let mut panel = WishlistPanelState::default();
    panel.show_search(block_on(search(&dispatcher, " 42 ")));
    assert_eq!(transport.sent()[0].url, testing::url("/wishlists?customer_id=42"));
    assert_eq!(panel.search_listing, Some(Listing::Empty));
    assert_eq!(panel.result.message, "No wishlists exist with that Customer ID");
    assert!(panel.read_listing.is_none());
}

#[test]
fn search_requires_numeric_customer_id() {
    let (dispatcher, transport) = testing::dispatcher();
    let query = block_on(search(&dispatcher, "abc"));
    assert_eq!(query.result.message, "Customer ID must be a whole number");
    assert_eq!(transport.sent_count(), 0);
}

#[test]
fn clear_result_returns_to_awaiting() {
    let mut panel = WishlistPanelState {
        result: TransactionResult::success(201, CREATED),
        ..WishlistPanelState::default()
    };
    panel.clear_result();
    assert_eq!(panel.result, TransactionResult::awaiting());
}
