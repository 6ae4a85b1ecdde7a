//! Browser HTTP transport.
//!
//! Client-side (csr): real requests via `gloo-net`.
//! Elsewhere: every send reports `TransportError::Unavailable`, which the
//! dispatcher folds into a status-0 response like any network failure.

#![allow(clippy::unused_async)]

use super::dispatch::{HttpRequest, RawResponse, Transport};
use super::error::TransportError;
#[cfg(feature = "csr")]
use super::dispatch::Method;

/// `fetch`-backed transport. Holds no state, so clones are free.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "csr")]
fn gloo_method(method: Method) -> gloo_net::http::Method {
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Delete => gloo_net::http::Method::DELETE,
    }
}

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            let mut builder = gloo_net::http::RequestBuilder::new(&request.url)
                .method(gloo_method(request.method));
            if let Some(content_type) = request.content_type() {
                builder = builder.header("Content-Type", content_type);
            }
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::Encode(e.to_string()))?;
            let resp = prepared
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}
