//! Mock gateway for tests and dry runs.
//!
//! Plays back a script of responses (the last entry repeats once the script is
//! exhausted) and records every request it receives, so tests can assert on the
//! rendered prompt, the temperature and the number of calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::error::GatewayError;
use super::types::{ChatRequest, ChatResponse};
use super::ModelGateway;

/// Scripted gateway.
///
/// **Interaction**: Implements `ModelGateway`; injected wherever an
/// `Arc<dyn ModelGateway>` is expected.
pub struct MockGateway {
    script: Vec<Result<String, GatewayError>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockGateway {
    /// Plays back `script` in order; the last entry repeats afterwards.
    pub fn scripted(script: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with `content`.
    pub fn with_fixed_response(content: impl Into<String>) -> Self {
        Self::scripted(vec![Ok(content.into())])
    }

    /// Plays back successful responses in order.
    pub fn with_responses<I, T>(responses: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::scripted(responses.into_iter().map(|r| Ok(r.into())).collect())
    }

    /// Always fails with `err`.
    pub fn failing(err: GatewayError) -> Self {
        Self::scripted(vec![Err(err)])
    }

    /// Number of `chat` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every request received, in call order.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl ModelGateway for MockGateway {
    async fn chat(&self, req: ChatRequest) -> Result<ChatResponse, GatewayError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(req);
        let entry = self
            .script
            .get(n)
            .or_else(|| self.script.last())
            .ok_or_else(|| GatewayError::Api("mock gateway has no scripted response".into()))?;
        entry.clone().map(ChatResponse::text)
    }
}
