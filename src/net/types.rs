//! Wire DTOs for the wishlist REST API.
//!
//! DESIGN
//! ======
//! Entity shapes are fixed, so each entity declares its table columns
//! statically instead of carrying per-field metadata for form generation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A record with a server-assigned integer id.
pub trait Keyed {
    fn id(&self) -> i64;
}

/// Sort records in place by ascending id.
pub fn sort_by_id<T: Keyed>(records: &mut [T]) {
    records.sort_by_key(Keyed::id);
}

/// A named collection of items belonging to a customer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    /// Server-assigned identifier; immutable.
    pub id: i64,
    pub name: String,
    pub customer_id: i64,
}

impl Wishlist {
    pub const COLUMNS: [&'static str; 3] = ["ID", "Name", "Customer ID"];
}

impl Keyed for Wishlist {
    fn id(&self) -> i64 {
        self.id
    }
}

/// A named entry on a wishlist with a purchased flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    /// Owning wishlist; fixed once the item is created.
    pub wishlist_id: i64,
    pub name: String,
    #[serde(default)]
    pub purchased: bool,
}

impl Item {
    pub const COLUMNS: [&'static str; 3] = ["ID", "Name", "Purchased"];
}

impl Keyed for Item {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Body for `POST /wishlists` and `PUT /wishlists/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WishlistPayload {
    pub name: String,
    pub customer_id: i64,
}

/// Body for item create and rename.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemPayload {
    pub name: String,
    pub wishlist_id: i64,
}

/// Error body returned by the backend on validation failures.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
