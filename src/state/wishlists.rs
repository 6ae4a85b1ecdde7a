//! Wishlist panel state and operations.
//!
//! DESIGN
//! ======
//! Each operation collects input, dispatches once, and resolves to a
//! `Mutation` or `Query`. Mutations ask the root to refresh the registry on
//! success; queries only fill this panel's read/search tables.

#[cfg(test)]
#[path = "wishlists_test.rs"]
mod wishlists_test;

use super::listing::Listing;
use super::outcome::{Mutation, Query};
use super::transaction::TransactionResult;
use super::validate::{self, InputError};
use crate::net::api;
use crate::net::dispatch::{Dispatcher, Method, Transport};
use crate::net::types::{Wishlist, WishlistPayload};

pub const CREATED: &str = "Wishlist created successfully!";
pub const UPDATED: &str = "Wishlist updated successfully";
pub const DELETED: &str = "Wishlist deleted successfully";
pub const LISTED: &str = "Wishlists printed below";
pub const READ_ONE: &str = "Wishlist printed below";
pub const NONE_EXIST: &str = "No wishlists exist";
pub const SEARCHED: &str = "Search results below";
pub const NONE_FOR_CUSTOMER: &str = "No wishlists exist with that Customer ID";

const NAME_FIELD: &str = "Name";
const CUSTOMER_FIELD: &str = "Customer ID";
const WISHLIST_ID_FIELD: &str = "Wishlist ID";

/// Transient state owned by the wishlist panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WishlistPanelState {
    pub result: TransactionResult,
    pub read_listing: Option<Listing<Wishlist>>,
    pub search_listing: Option<Listing<Wishlist>>,
}

impl WishlistPanelState {
    pub fn begin(&mut self) {
        self.result = TransactionResult::sending();
    }

    pub fn clear_result(&mut self) {
        self.result = TransactionResult::awaiting();
    }

    pub fn finish(&mut self, mutation: &Mutation) {
        self.result = mutation.result.clone();
    }

    pub fn show_read(&mut self, query: Query<Wishlist>) {
        self.result = query.result;
        self.read_listing = query.listing;
    }

    pub fn show_search(&mut self, query: Query<Wishlist>) {
        self.result = query.result;
        self.search_listing = query.listing;
    }
}

/// Validate the create/update form fields.
///
/// # Errors
///
/// Returns the first failing field's `InputError`.
pub fn payload(name: &str, customer_id: &str) -> Result<WishlistPayload, InputError> {
    Ok(WishlistPayload {
        name: validate::name(NAME_FIELD, name)?,
        customer_id: validate::integer(CUSTOMER_FIELD, customer_id)?,
    })
}

/// `POST /wishlists`; success is 201.
pub async fn create<T: Transport>(
    dispatcher: &Dispatcher<T>,
    name: &str,
    customer_id: &str,
) -> Mutation {
    let payload = match payload(name, customer_id) {
        Ok(payload) => payload,
        Err(e) => return Mutation::rejected(e),
    };
    let response = dispatcher
        .dispatch_json(&api::wishlists(), Method::Post, &payload)
        .await;
    Mutation::from_response(&response, 201, CREATED)
}

/// `PUT /wishlists/{id}`; success is 200.
///
/// Returns `None` without sending anything when the row has no id.
pub async fn update<T: Transport>(
    dispatcher: &Dispatcher<T>,
    row_id: Option<i64>,
    name: &str,
    customer_id: &str,
) -> Option<Mutation> {
    let id = row_id?;
    let payload = match payload(name, customer_id) {
        Ok(payload) => payload,
        Err(e) => return Some(Mutation::rejected(e)),
    };
    let response = dispatcher
        .dispatch_json(&api::wishlist(id), Method::Put, &payload)
        .await;
    Some(Mutation::from_response(&response, 200, UPDATED))
}

/// `DELETE /wishlists/{id}`; success is 204.
///
/// Returns `None` without sending anything when the row has no id.
pub async fn delete<T: Transport>(
    dispatcher: &Dispatcher<T>,
    row_id: Option<i64>,
) -> Option<Mutation> {
    let id = row_id?;
    let response = dispatcher.dispatch(&api::wishlist(id), Method::Delete, None).await;
    Some(Mutation::from_response(&response, 204, DELETED))
}

/// `GET /wishlists` into the read table.
pub async fn list<T: Transport>(dispatcher: &Dispatcher<T>) -> Query<Wishlist> {
    let response = dispatcher.dispatch(&api::wishlists(), Method::Get, None).await;
    Query::from_list(&response, LISTED, NONE_EXIST)
}

/// `GET /wishlists/{id}` into the read table.
pub async fn read_one<T: Transport>(
    dispatcher: &Dispatcher<T>,
    wishlist_id: &str,
) -> Query<Wishlist> {
    let id = match validate::integer(WISHLIST_ID_FIELD, wishlist_id) {
        Ok(id) => id,
        Err(e) => return Query::rejected(e),
    };
    let response = dispatcher.dispatch(&api::wishlist(id), Method::Get, None).await;
    Query::from_one(&response, READ_ONE, NONE_EXIST)
}

/// `GET /wishlists?customer_id={n}` into the search table.
pub async fn search<T: Transport>(
    dispatcher: &Dispatcher<T>,
    customer_id: &str,
) -> Query<Wishlist> {
    let customer_id = match validate::integer(CUSTOMER_FIELD, customer_id) {
        Ok(id) => id,
        Err(e) => return Query::rejected(e),
    };
    let response = dispatcher
        .dispatch(&api::wishlists_by_customer(customer_id), Method::Get, None)
        .await;
    Query::from_list(&response, SEARCHED, NONE_FOR_CUSTOMER)
}
