//! Read-only tables for panel listings.
//!
//! An empty listing renders the "No records" text instead of an empty
//! `<table>`; a failed query renders nothing.

#[cfg(test)]
#[path = "record_table_test.rs"]
mod record_table_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::{Item, Wishlist};
use crate::state::listing::{Listing, NO_RECORDS};

/// A record that renders as one table row.
pub trait TableRow {
    const COLUMNS: [&'static str; 3];
    fn cells(&self) -> [String; 3];
}

impl TableRow for Wishlist {
    const COLUMNS: [&'static str; 3] = Wishlist::COLUMNS;

    fn cells(&self) -> [String; 3] {
        [self.id.to_string(), self.name.clone(), self.customer_id.to_string()]
    }
}

impl TableRow for Item {
    const COLUMNS: [&'static str; 3] = Item::COLUMNS;

    fn cells(&self) -> [String; 3] {
        [self.id.to_string(), self.name.clone(), self.purchased.to_string()]
    }
}

pub fn listing_view<T: TableRow>(listing: Option<Listing<T>>) -> AnyView {
    match listing {
        None => ().into_any(),
        Some(Listing::Empty) => view! { <p class="noRecords">{NO_RECORDS}</p> }.into_any(),
        Some(Listing::Rows(rows)) => {
            let header = T::COLUMNS
                .into_iter()
                .map(|column| view! { <th>{column}</th> })
                .collect::<Vec<_>>();
            let body = rows
                .iter()
                .map(|row| {
                    let cells = row
                        .cells()
                        .into_iter()
                        .map(|cell| view! { <td>{cell}</td> })
                        .collect::<Vec<_>>();
                    view! { <tr class="dataRow">{cells}</tr> }
                })
                .collect::<Vec<_>>();
            view! {
                <table class="wishlistTable">
                    <thead>
                        <tr>{header}</tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            }
            .into_any()
        }
    }
}
