//! Scripted `GenerativeModel` for unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use super::{GenerativeModel, LlmError, ResponseSchema};

/// Replays queued replies in order and records every prompt it receives.
/// With a gate attached, each call waits for `release()` before answering.
#[derive(Default)]
pub struct StubModel {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    prompts: Mutex<Vec<String>>,
    schemas: Mutex<Vec<ResponseSchema>>,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl StubModel {
    pub fn replying(text: &str) -> Self {
        let stub = Self::default();
        stub.push_reply(Ok(text.to_string()));
        stub
    }

    pub fn failing(error: LlmError) -> Self {
        let stub = Self::default();
        stub.push_reply(Err(error));
        stub
    }

    /// Holds every call until the returned handle is notified.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn push_reply(&self, reply: Result<String, LlmError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn schemas(&self) -> Vec<ResponseSchema> {
        self.schemas.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for StubModel {
    async fn generate_json(
        &self,
        prompt: &str,
        schema: &ResponseSchema,
    ) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.schemas.lock().unwrap().push(schema.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(LlmError::EmptyContent {
                    reason: "stub has no scripted reply".to_string(),
                })
            })
    }
}
