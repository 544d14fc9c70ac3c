//! Mock completion backend
//!
//! Returns a canned reply and records every prompt.

use async_trait::async_trait;
use selectionproofread::core::completion::CompletionBackend;
use selectionproofread::error::{ProofreadError, ProofreadResult};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    ApiError(u16, String),
}

#[derive(Debug, Clone)]
pub struct MockCompletion {
    pub reply: Reply,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl MockCompletion {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Reply::Text(text.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            reply: Reply::ApiError(status, message.to_string()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionBackend for MockCompletion {
    async fn complete(&self, prompt: &str) -> ProofreadResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::ApiError(status, message) => Err(ProofreadError::CompletionApi {
                status: *status,
                message: message.clone(),
            }),
        }
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}
