//! In-memory `Completion` used by handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{Completion, LlmError};

pub struct FakeCompletion {
    reply: Option<String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeCompletion {
    /// Answers every call with `reply`.
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call with an API error.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(prompt, system)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Completion for FakeCompletion {
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), system.to_string()));
        self.reply.clone().ok_or(LlmError::Api {
            status: 429,
            message: "Rate limit reached".to_string(),
        })
    }
}
