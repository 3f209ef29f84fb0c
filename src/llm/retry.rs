use super::client::CompletionClient;
use super::types::{ChatMessage, CompletionRequest};
use crate::{Error, Result};
use std::time::Duration;
use tracing::{debug, warn};

/// Bounded-attempt exponential backoff for completion calls.
///
/// The delay before retry `n` (counting from 0 after the first failure) is
/// `min(base_delay * 2^n, max_delay)`. The default policy waits 1s then 2s
/// and gives up after 3 total attempts.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(20),
        }
    }
}

impl RetryPolicy {
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exp = attempt.min(31);
        let delay = self
            .base_delay
            .saturating_mul(2u32.saturating_pow(exp));
        delay.min(self.max_delay)
    }
}

/// Sends `prompt` as a single user message and returns the first choice's
/// content. Any failure (transport, non-2xx, empty choice list) is retried
/// per `policy`; the last error is propagated once attempts are exhausted.
///
/// Blocks the calling task during backoff sleeps.
pub async fn complete_with_retry(
    client: &dyn CompletionClient,
    policy: &RetryPolicy,
    prompt: &str,
    max_tokens: u32,
) -> Result<String> {
    let mut last_error: Option<Error> = None;

    for attempt in 0..policy.max_attempts {
        if attempt > 0 {
            let delay = policy.delay_for(attempt - 1);
            debug!(
                "Retrying completion call (attempt {}/{}) after {:?}",
                attempt + 1,
                policy.max_attempts,
                delay
            );
            tokio::time::sleep(delay).await;
        }

        let request = CompletionRequest {
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: Some(max_tokens),
            temperature: None,
        };

        match client.create_chat_completion(request).await {
            Ok(response) => match response.first_content() {
                Some(content) => return Ok(content.to_string()),
                None => {
                    warn!("Completion response contained no choices");
                    last_error = Some(Error::llm("Completion response contained no choices"));
                }
            },
            Err(e) => {
                warn!(
                    "Completion call failed (attempt {}/{}): {}",
                    attempt + 1,
                    policy.max_attempts,
                    e
                );
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| Error::llm("Completion call never attempted")))
}
