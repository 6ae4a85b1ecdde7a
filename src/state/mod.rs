//! Client-side state and the operations that change it.
//!
//! DESIGN
//! ======
//! State is plain data split by owner: the root holds the `registry`, each
//! panel holds its own `wishlists`/`items` state. Components wrap these in
//! `RwSignal`s; everything here is testable without a browser.

pub mod items;
pub mod listing;
pub mod outcome;
pub mod registry;
pub mod transaction;
pub mod validate;
pub mod wishlists;
