mod client;
mod retry;
mod types;

pub use client::{CompletionClient, OpenAiClient};
pub use retry::{RetryPolicy, complete_with_retry};
pub use types::*;
