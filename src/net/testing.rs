//! In-memory transport for driving dispatch flows in tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::Value;

use super::dispatch::{Dispatcher, HttpRequest, RawResponse, Transport};
use super::error::TransportError;
use crate::config::ApiConfig;

pub const TEST_ROOT: &str = "http://wishlists.test";

/// Replays queued responses in order and records every request sent.
///
/// Clones share the same queue and log.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<RawResponse, TransportError>>>>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: Value) -> &Self {
        let body = if body.is_null() { String::new() } else { body.to_string() };
        self.replies
            .borrow_mut()
            .push_back(Ok(RawResponse { status, body }));
        self
    }

    pub fn reply_empty(&self, status: u16) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(RawResponse { status, body: String::new() }));
        self
    }

    pub fn fail(&self, error: TransportError) -> &Self {
        self.replies.borrow_mut().push_back(Err(error));
        self
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_owned())))
    }
}

pub fn dispatcher() -> (Dispatcher<ScriptedTransport>, ScriptedTransport) {
    let transport = ScriptedTransport::new();
    let dispatcher = Dispatcher::new(transport.clone(), ApiConfig::new(TEST_ROOT));
    (dispatcher, transport)
}

pub fn url(path: &str) -> String {
    format!("{TEST_ROOT}{path}")
}
