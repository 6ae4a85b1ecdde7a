use super::*;
use crate::net::types::Item;

fn item(id: i64) -> Item {
    Item { id, wishlist_id: 1, name: format!("item {id}"), purchased: false }
}

#[test]
fn from_records_sorts_rows_by_id() {
    let listing = Listing::from_records(vec![item(4), item(1), item(3)]);
    let ids: Vec<i64> = listing.rows().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
    assert!(!listing.is_empty());
}

#[test]
fn from_records_empty_becomes_empty_variant() {
    let listing: Listing<Item> = Listing::from_records(Vec::new());
    assert_eq!(listing, Listing::Empty);
    assert!(listing.rows().is_empty());
}

#[test]
fn no_records_text_is_literal() {
    assert_eq!(NO_RECORDS, "No records");
}
