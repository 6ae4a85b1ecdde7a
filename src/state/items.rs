//! Item panel state: wishlist selection plus item operations.
//!
//! DESIGN
//! ======
//! Item operations take an `ItemScope`, which only a panel with a selected
//! wishlist can hand out. "No selection" therefore cannot reach the network.
//!
//! Every completion (item-list fetch, read table, mutation result) is tagged
//! with the scope it was issued for. A late completion for a wishlist that is
//! no longer selected is dropped on arrival.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use super::listing::Listing;
use super::outcome::{Mutation, Query};
use super::registry::WishlistRegistry;
use super::transaction::TransactionResult;
use super::validate::{self, InputError};
use crate::net::api;
use crate::net::dispatch::{Dispatcher, Method, Transport};
use crate::net::types::{Item, ItemPayload, Wishlist, sort_by_id};

pub const ADDED: &str = "Item added successfully!";
pub const UPDATED: &str = "Item updated successfully";
pub const DELETED: &str = "Item deleted successfully";
pub const PURCHASED: &str = "Item purchased";
pub const LISTED: &str = "Items listed below";
pub const NONE_ON_WISHLIST: &str = "No items on this wishlist";

const ITEM_NAME_FIELD: &str = "Item name";

/// Proof of a selected wishlist; required by every item operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemScope {
    wishlist_id: i64,
}

impl ItemScope {
    pub fn wishlist_id(self) -> i64 {
        self.wishlist_id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemPanelState {
    selected: Option<Wishlist>,
    /// Items of the selected wishlist, sorted by id; backs the edit table.
    pub items: Vec<Item>,
    pub read_listing: Option<Listing<Item>>,
    pub result: TransactionResult,
}

impl ItemPanelState {
    pub fn selected(&self) -> Option<&Wishlist> {
        self.selected.as_ref()
    }

    pub fn scope(&self) -> Option<ItemScope> {
        self.selected
            .as_ref()
            .map(|w| ItemScope { wishlist_id: w.id })
    }

    /// Switch selection. Clears items, read table and result, and returns
    /// the scope whose items should be fetched next.
    pub fn select(&mut self, wishlist: Option<Wishlist>) -> Option<ItemScope> {
        self.selected = wishlist;
        self.items.clear();
        self.read_listing = None;
        self.result = TransactionResult::awaiting();
        self.scope()
    }

    /// Store fetched items if `scope` is still selected. `None` (a failed
    /// fetch) keeps the current list. Returns whether anything was applied.
    pub fn apply_items(&mut self, scope: ItemScope, fetched: Option<Vec<Item>>) -> bool {
        if !self.is_current(scope) {
            return false;
        }
        let Some(mut items) = fetched else {
            return false;
        };
        sort_by_id(&mut items);
        self.items = items;
        true
    }

    /// Follow registry changes: pick up a renamed selection, or drop a
    /// selection whose wishlist no longer exists. Returns `true` when the
    /// selection was cleared.
    pub fn reconcile(&mut self, registry: &WishlistRegistry) -> bool {
        let Some(current) = self.selected.as_ref() else {
            return false;
        };
        match registry.find(current.id) {
            Some(fresh) => {
                if fresh != current {
                    self.selected = Some(fresh.clone());
                }
                false
            }
            None if registry.is_loaded() => {
                self.select(None);
                true
            }
            None => false,
        }
    }

    pub fn begin(&mut self) {
        self.result = TransactionResult::sending();
    }

    pub fn clear_result(&mut self) {
        self.result = TransactionResult::awaiting();
    }

    fn is_current(&self, scope: ItemScope) -> bool {
        if self.scope() == Some(scope) {
            return true;
        }
        log::debug!("dropping stale completion for wishlist {}", scope.wishlist_id);
        false
    }

    /// Show a mutation result issued under `scope`. Returns `false` if the
    /// selection has changed since.
    pub fn finish(&mut self, scope: ItemScope, mutation: &Mutation) -> bool {
        if !self.is_current(scope) {
            return false;
        }
        self.result = mutation.result.clone();
        true
    }

    pub fn show_read(&mut self, scope: ItemScope, query: Query<Item>) -> bool {
        if !self.is_current(scope) {
            return false;
        }
        self.result = query.result;
        self.read_listing = query.listing;
        true
    }
}

fn payload(scope: ItemScope, name: &str) -> Result<ItemPayload, InputError> {
    Ok(ItemPayload {
        name: validate::name(ITEM_NAME_FIELD, name)?,
        wishlist_id: scope.wishlist_id,
    })
}

/// `GET /wishlists/{id}/items`, sorted by id. `None` on any failure.
pub async fn fetch_items<T: Transport>(
    dispatcher: &Dispatcher<T>,
    scope: ItemScope,
) -> Option<Vec<Item>> {
    let response = dispatcher
        .dispatch(&api::items(scope.wishlist_id), Method::Get, None)
        .await;
    if !response.is(200) {
        log::warn!(
            "item fetch for wishlist {} failed: status {}",
            scope.wishlist_id,
            response.status
        );
        return None;
    }
    let mut items = response.json::<Vec<Item>>().unwrap_or_default();
    sort_by_id(&mut items);
    Some(items)
}

/// `POST /wishlists/{id}/items`; success is 201.
pub async fn create<T: Transport>(
    dispatcher: &Dispatcher<T>,
    scope: ItemScope,
    name: &str,
) -> Mutation {
    let payload = match payload(scope, name) {
        Ok(payload) => payload,
        Err(e) => return Mutation::rejected(e),
    };
    let response = dispatcher
        .dispatch_json(&api::items(scope.wishlist_id), Method::Post, &payload)
        .await;
    Mutation::from_response(&response, 201, ADDED)
}

/// `GET /wishlists/{id}/items` into the read table.
pub async fn list<T: Transport>(dispatcher: &Dispatcher<T>, scope: ItemScope) -> Query<Item> {
    let response = dispatcher
        .dispatch(&api::items(scope.wishlist_id), Method::Get, None)
        .await;
    Query::from_list(&response, LISTED, NONE_ON_WISHLIST)
}

/// `PUT /wishlists/{id}/items/{item_id}`; success is 200.
///
/// Returns `None` without sending anything when the row has no id.
pub async fn update<T: Transport>(
    dispatcher: &Dispatcher<T>,
    scope: ItemScope,
    item_id: Option<i64>,
    name: &str,
) -> Option<Mutation> {
    let item_id = item_id?;
    let payload = match payload(scope, name) {
        Ok(payload) => payload,
        Err(e) => return Some(Mutation::rejected(e)),
    };
    let response = dispatcher
        .dispatch_json(&api::item(scope.wishlist_id, item_id), Method::Put, &payload)
        .await;
    Some(Mutation::from_response(&response, 200, UPDATED))
}

/// `DELETE /wishlists/{id}/items/{item_id}`; success is 204.
pub async fn delete<T: Transport>(
    dispatcher: &Dispatcher<T>,
    scope: ItemScope,
    item_id: Option<i64>,
) -> Option<Mutation> {
    let item_id = item_id?;
    let response = dispatcher
        .dispatch(&api::item(scope.wishlist_id, item_id), Method::Delete, None)
        .await;
    Some(Mutation::from_response(&response, 204, DELETED))
}

/// `PUT /wishlists/{id}/items/{item_id}/purchase` with no body; success is 200.
pub async fn purchase<T: Transport>(
    dispatcher: &Dispatcher<T>,
    scope: ItemScope,
    item_id: Option<i64>,
) -> Option<Mutation> {
    let item_id = item_id?;
    let response = dispatcher
        .dispatch(&api::item_purchase(scope.wishlist_id, item_id), Method::Put, None)
        .await;
    Some(Mutation::from_response(&response, 200, PURCHASED))
}
