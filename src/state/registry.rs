//! Root-held snapshot of all wishlists.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root owns the only writable copy and refreshes it at startup and
//! after each successful wishlist mutation. Both panels read it: the wishlist
//! panel builds its edit table from it, the item panel its selector.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use crate::net::api;
use crate::net::dispatch::{Dispatcher, Method, Transport};
use crate::net::types::{Wishlist, sort_by_id};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WishlistRegistry {
    /// `None` until the first successful load.
    snapshot: Option<Vec<Wishlist>>,
}

impl WishlistRegistry {
    /// Store a fetched snapshot. `None` keeps the previous one.
    pub fn apply(&mut self, fetched: Option<Vec<Wishlist>>) {
        if let Some(mut wishlists) = fetched {
            sort_by_id(&mut wishlists);
            self.snapshot = Some(wishlists);
        }
    }

    pub fn snapshot(&self) -> Option<&[Wishlist]> {
        self.snapshot.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.as_ref().map_or(true, Vec::is_empty)
    }

    pub fn wishlists(&self) -> &[Wishlist] {
        self.snapshot.as_deref().unwrap_or_default()
    }

    /// Row lookup for the edit table.
    pub fn get(&self, index: usize) -> Option<&Wishlist> {
        self.wishlists().get(index)
    }

    pub fn find(&self, id: i64) -> Option<&Wishlist> {
        self.wishlists().iter().find(|w| w.id == id)
    }
}

/// Load the wishlist collection, sorted by id.
///
/// Returns `None` on any failure so the caller keeps its current snapshot.
pub async fn fetch_wishlists<T: Transport>(dispatcher: &Dispatcher<T>) -> Option<Vec<Wishlist>> {
    let response = dispatcher.dispatch(&api::wishlists(), Method::Get, None).await;
    if !response.is(200) {
        log::warn!("wishlist refresh failed: status {}", response.status);
        return None;
    }
    let Some(mut wishlists) = response.json::<Vec<Wishlist>>() else {
        log::warn!("wishlist refresh returned an unreadable body");
        return None;
    };
    sort_by_id(&mut wishlists);
    Some(wishlists)
}
