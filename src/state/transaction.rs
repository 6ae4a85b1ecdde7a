//! Per-panel transaction result.
//!
//! DESIGN
//! ======
//! A `TransactionResult` is an immutable value. Each completion builds a new
//! one and the panel swaps it in wholesale, so a render never observes a
//! half-updated status/message pair.

#[cfg(test)]
#[path = "transaction_test.rs"]
mod transaction_test;

use crate::net::dispatch::Response;

/// Lifecycle of the most recent operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransactionStatus {
    #[default]
    Awaiting,
    Sending,
    Complete,
}

impl TransactionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Awaiting => "Awaiting next action",
            Self::Sending => "Sending request",
            Self::Complete => "Transaction complete",
        }
    }
}

/// Styling of the result message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageClass {
    Success,
    Error,
    #[default]
    None,
}

impl MessageClass {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::None => "",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionResult {
    pub status: TransactionStatus,
    pub response_code: Option<u16>,
    pub message: String,
    pub message_class: MessageClass,
}

impl TransactionResult {
    pub fn awaiting() -> Self {
        Self::default()
    }

    pub fn sending() -> Self {
        Self { status: TransactionStatus::Sending, ..Self::default() }
    }

    pub fn success(response_code: u16, message: impl Into<String>) -> Self {
        Self {
            status: TransactionStatus::Complete,
            response_code: Some(response_code),
            message: message.into(),
            message_class: MessageClass::Success,
        }
    }

    /// A completed failure. `response_code` is `None` when nothing came back.
    pub fn failure(response_code: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status: TransactionStatus::Complete,
            response_code,
            message: message.into(),
            message_class: MessageClass::Error,
        }
    }

    /// Rejected before dispatch; there is no response code.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::failure(None, message)
    }

    /// Success with `message` if `response` has the `expected` status,
    /// otherwise a failure carrying the backend message.
    pub fn from_response(response: &Response, expected: u16, message: &str) -> Self {
        if response.is(expected) {
            Self::success(response.status, message)
        } else {
            Self::failed(response)
        }
    }

    pub fn failed(response: &Response) -> Self {
        let code = (!response.is_transport_failure()).then_some(response.status);
        Self::failure(code, response.error_message())
    }

    pub fn is_success(&self) -> bool {
        self.message_class == MessageClass::Success
    }

    pub fn is_sending(&self) -> bool {
        self.status == TransactionStatus::Sending
    }

    /// Response code as shown in the result box; blank when absent.
    pub fn response_code_text(&self) -> String {
        self.response_code.map(|code| code.to_string()).unwrap_or_default()
    }
}
