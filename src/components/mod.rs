//! UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Panels own their transient state signals and read the registry as a
//! read-only signal from the app root. The dispatcher comes from context.

pub mod item_panel;
pub mod record_table;
pub mod result_box;
pub mod wishlist_panel;
