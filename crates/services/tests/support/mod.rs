#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use adgrid_core::{AdGridResult, RetryPolicy};
use adgrid_services::{AdGridClient, Transport};

/// In-memory transport: pops canned responses in order and records every
/// call so tests can assert on paths and request bodies. Clones share
/// state, letting a test keep a handle after the client takes ownership.
#[derive(Clone)]
pub struct MockTransport {
    inner: Arc<Inner>,
}

struct Inner {
    responses: Mutex<VecDeque<AdGridResult<serde_json::Value>>>,
    calls: Mutex<Vec<(String, serde_json::Value)>>,
}

impl MockTransport {
    pub fn new(responses: Vec<AdGridResult<serde_json::Value>>) -> Self {
        Self {
            inner: Arc::new(Inner {
                responses: Mutex::new(responses.into_iter().collect()),
                calls: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn calls(&self) -> Vec<(String, serde_json::Value)> {
        self.inner.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.calls.lock().unwrap().len()
    }
}

impl Transport for MockTransport {
    async fn call(&self, path: &str, body: serde_json::Value) -> AdGridResult<serde_json::Value> {
        self.inner
            .calls
            .lock()
            .unwrap()
            .push((path.to_string(), body));
        self.inner
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(serde_json::json!({"results": []})))
    }
}

/// Mutate response naming a single created or updated resource.
pub fn mutate_result(resource_name: &str) -> AdGridResult<serde_json::Value> {
    Ok(serde_json::json!({"results": [{"resourceName": resource_name}]}))
}

pub fn client(transport: MockTransport) -> AdGridClient<MockTransport> {
    AdGridClient::with_transport(transport, "v1", fast_retry())
}

/// Retry policy with millisecond sleeps so exhaustion tests stay fast.
pub fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        initial_backoff_ms: 1,
        max_backoff_ms: 2,
        multiplier: 2.0,
        jitter: false,
    }
}
