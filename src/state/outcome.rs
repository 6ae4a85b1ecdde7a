//! Completion values returned by panel operations.
//!
//! Operations are `async fn`s that resolve to one of these instead of calling
//! back into the panel; the component applies the value to its signal.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use serde::de::DeserializeOwned;

use super::listing::Listing;
use super::transaction::TransactionResult;
use super::validate::InputError;
use crate::net::dispatch::Response;
use crate::net::types::Keyed;

/// Outcome of a create/update/delete/purchase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mutation {
    pub result: TransactionResult,
    /// Whether the owning data set should be re-fetched.
    pub refresh: bool,
}

impl Mutation {
    pub fn from_response(response: &Response, expected: u16, message: &str) -> Self {
        Self {
            result: TransactionResult::from_response(response, expected, message),
            refresh: response.is(expected),
        }
    }

    pub fn rejected(error: InputError) -> Self {
        Self { result: TransactionResult::invalid(error.to_string()), refresh: false }
    }
}

/// Outcome of a list/read/search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query<T> {
    pub result: TransactionResult,
    /// `None` when the request failed; the panel hides its table.
    pub listing: Option<Listing<T>>,
}

impl<T: Keyed + DeserializeOwned> Query<T> {
    /// Interpret a 200 list body. A missing or empty payload is an empty
    /// listing, not an error.
    pub fn from_list(response: &Response, found: &str, empty: &str) -> Self {
        if !response.is(200) {
            return Self::failed(response);
        }
        let records = response.json::<Vec<T>>().unwrap_or_default();
        Self::found(Listing::from_records(records), found, empty)
    }

    /// Interpret a 200 single-record body.
    pub fn from_one(response: &Response, found: &str, empty: &str) -> Self {
        if !response.is(200) {
            return Self::failed(response);
        }
        let records = response.json::<T>().into_iter().collect();
        Self::found(Listing::from_records(records), found, empty)
    }

    fn found(listing: Listing<T>, found: &str, empty: &str) -> Self {
        let message = if listing.is_empty() { empty } else { found };
        Self { result: TransactionResult::success(200, message), listing: Some(listing) }
    }
}

impl<T> Query<T> {
    pub fn failed(response: &Response) -> Self {
        Self { result: TransactionResult::failed(response), listing: None }
    }

    pub fn rejected(error: InputError) -> Self {
        Self { result: TransactionResult::invalid(error.to_string()), listing: None }
    }
}
