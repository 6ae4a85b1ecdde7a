//! Networking modules for the wishlist REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dispatch` normalizes every request/response pair, `http` is the browser
//! transport behind it, `api` names the backend routes, and `types` defines
//! the wire schema.

pub mod api;
pub mod dispatch;
pub mod error;
pub mod http;
#[cfg(test)]
pub mod testing;
pub mod types;

/// Dispatcher used by the running app.
pub type ApiDispatcher = dispatch::Dispatcher<http::BrowserTransport>;
