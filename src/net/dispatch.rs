//! Generic request dispatch for every panel.
//!
//! DESIGN
//! ======
//! One entry point, `Dispatcher::dispatch`, turns `(path, method, body)` into
//! a request against the configured API root and always resolves to a
//! `Response`. Transport failures and non-2xx statuses travel the same path,
//! so callers interpret a status code and never handle a separate error arm.
//!
//! The dispatcher is stateless apart from its transport handle and config.
//! Concurrent dispatches are independent: no retry, timeout, or queueing.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::TransportError;
use super::types::ErrorBody;
use crate::config::ApiConfig;

pub const JSON_CONTENT_TYPE: &str = "application/json";

const UNREACHABLE_MESSAGE: &str = "Unable to reach the wishlist service";

/// HTTP verbs used by the wishlist API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Canonical request descriptor handed to a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Serialized JSON payload, if any.
    pub body: Option<String>,
}

impl HttpRequest {
    /// `Content-Type` to send; only set when a body is present.
    pub fn content_type(&self) -> Option<&'static str> {
        self.body.as_ref().map(|_| JSON_CONTENT_TYPE)
    }
}

/// Status and raw body text as received from the network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// The network seam. Implemented by `BrowserTransport` in the WASM build and
/// by scripted transports in tests.
pub trait Transport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>>;
}

/// Normalized outcome of a dispatch.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    /// HTTP status, or `TRANSPORT_FAILURE` when no response was received.
    pub status: u16,
    /// Parsed JSON body; `None` for empty or non-JSON bodies.
    pub data: Option<Value>,
}

impl Response {
    pub const TRANSPORT_FAILURE: u16 = 0;

    pub fn transport_failure() -> Self {
        Self { status: Self::TRANSPORT_FAILURE, data: None }
    }

    fn from_raw(raw: RawResponse) -> Self {
        let data = if raw.body.trim().is_empty() {
            None
        } else {
            serde_json::from_str(&raw.body).ok()
        };
        Self { status: raw.status, data }
    }

    pub fn is(&self, status: u16) -> bool {
        self.status == status
    }

    pub fn is_transport_failure(&self) -> bool {
        self.status == Self::TRANSPORT_FAILURE
    }

    /// Decode the body into `T`, if there is one and it fits.
    pub fn json<T: DeserializeOwned>(&self) -> Option<T> {
        self.data
            .clone()
            .and_then(|value| serde_json::from_value(value).ok())
    }

    /// User-facing failure text: the backend `message` when present,
    /// otherwise a status-derived fallback.
    pub fn error_message(&self) -> String {
        if let Some(body) = self.json::<ErrorBody>() {
            return body.message;
        }
        if self.is_transport_failure() {
            return UNREACHABLE_MESSAGE.to_owned();
        }
        format!("Request failed with status {}", self.status)
    }
}

/// Whether a payload should be sent at all.
fn has_body(body: &Value) -> bool {
    match body {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

/// Builds requests against the API root and hands them to a transport.
#[derive(Clone, Debug)]
pub struct Dispatcher<T> {
    transport: T,
    api: ApiConfig,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T, api: ApiConfig) -> Self {
        Self { transport, api }
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the canonical request for `path`, `method` and optional `body`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Encode` if the body cannot be serialized.
    pub fn build_request(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<HttpRequest, TransportError> {
        let body = match body.filter(|value| has_body(value)) {
            Some(value) => Some(
                serde_json::to_string(value).map_err(|e| TransportError::Encode(e.to_string()))?,
            ),
            None => None,
        };
        Ok(HttpRequest { method, url: self.api.url_for(path), body })
    }

    /// Send a request and normalize whatever comes back.
    pub async fn dispatch(&self, path: &str, method: Method, body: Option<Value>) -> Response {
        let request = match self.build_request(path, method, body.as_ref()) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("{} {path}: {e}", method.as_str());
                return Response::transport_failure();
            }
        };
        log::debug!("{} {}", method.as_str(), request.url);
        match self.transport.send(request).await {
            Ok(raw) => {
                let response = Response::from_raw(raw);
                log::debug!("{} {path} -> {}", method.as_str(), response.status);
                response
            }
            Err(e) => {
                log::warn!("{} {path} failed: {e}", method.as_str());
                Response::transport_failure()
            }
        }
    }

    /// Serialize `body` and dispatch it.
    pub async fn dispatch_json<B: Serialize>(
        &self,
        path: &str,
        method: Method,
        body: &B,
    ) -> Response {
        match serde_json::to_value(body) {
            Ok(value) => self.dispatch(path, method, Some(value)).await,
            Err(e) => {
                log::warn!("{} {path}: encode failed: {e}", method.as_str());
                Response::transport_failure()
            }
        }
    }
}
