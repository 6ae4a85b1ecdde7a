//! Transport-level failures.
//!
//! These never cross the dispatcher boundary; `Dispatcher::dispatch` folds
//! them into a `Response` with status `0`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request encoding failed: {0}")]
    Encode(String),
    #[error("http transport unavailable outside the browser")]
    Unavailable,
}
