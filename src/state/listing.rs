//! Panel-local display results for read, list and search operations.
//!
//! DESIGN
//! ======
//! A `Listing` is what a panel shows on screen. It is never written back into
//! the wishlist registry, which holds cross-panel selection data.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::types::{Keyed, sort_by_id};

/// Shown in place of a table when a result set is empty.
pub const NO_RECORDS: &str = "No records";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing<T> {
    Empty,
    Rows(Vec<T>),
}

impl<T: Keyed> Listing<T> {
    /// Sort records by ascending id; an empty set becomes `Empty`.
    pub fn from_records(mut records: Vec<T>) -> Self {
        if records.is_empty() {
            return Self::Empty;
        }
        sort_by_id(&mut records);
        Self::Rows(records)
    }
}

impl<T> Listing<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn rows(&self) -> &[T] {
        match self {
            Self::Empty => &[],
            Self::Rows(rows) => rows,
        }
    }
}
