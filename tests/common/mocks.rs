use async_trait::async_trait;
use marketing_gateway::{
    Error, Result,
    llm::{ChatMessage, Choice, CompletionClient, CompletionRequest, CompletionResponse},
};
use std::sync::{Arc, Mutex};

/// Builds a single-choice completion response with the given content.
pub fn completion_response(content: &str) -> CompletionResponse {
    CompletionResponse {
        id: "chatcmpl-test".to_string(),
        model: "gpt-3.5-turbo".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChatMessage {
                role: "assistant".to_string(),
                content: content.to_string(),
            },
            finish_reason: Some("stop".to_string()),
        }],
        usage: None,
    }
}

/// Scripted outcome for one mock completion call.
pub enum MockOutcome {
    Reply(String),
    Failure(String),
}

/// Mock completion client for testing.
///
/// Plays back scripted outcomes in order and records every request it sees,
/// so tests can assert on attempt counts and forwarded prompts.
pub struct MockCompletionClient {
    pub outcomes: Arc<Mutex<Vec<MockOutcome>>>,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_outcomes(self, outcomes: Vec<MockOutcome>) -> Self {
        *self.outcomes.lock().unwrap() = outcomes;
        self
    }

    pub fn replying(content: &str) -> Self {
        Self::new().with_outcomes(vec![MockOutcome::Reply(content.to_string())])
    }

    pub fn attempt_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn forwarded_prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter_map(|r| r.messages.first().map(|m| m.content.clone()))
            .collect()
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn create_chat_completion(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse> {
        self.requests.lock().unwrap().push(request);

        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Err(Error::llm("upstream completion service unavailable"));
        }

        match outcomes.remove(0) {
            MockOutcome::Reply(content) => Ok(completion_response(&content)),
            MockOutcome::Failure(error) => Err(Error::llm(error)),
        }
    }
}
