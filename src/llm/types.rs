use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessageArgs,
    ChatCompletionRequestUserMessageContent,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub id: String,
    pub model: String,
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone)]
pub struct Choice {
    pub index: u32,
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn to_openai_message(&self) -> Result<ChatCompletionRequestMessage, crate::Error> {
        match self.role.as_str() {
            "system" => {
                let msg = ChatCompletionRequestSystemMessageArgs::default()
                    .content(ChatCompletionRequestSystemMessageContent::Text(
                        self.content.clone(),
                    ))
                    .build()
                    .map_err(|e| {
                        crate::Error::llm(format!("Failed to build system message: {}", e))
                    })?;
                Ok(msg.into())
            }
            "user" => {
                let msg = ChatCompletionRequestUserMessageArgs::default()
                    .content(ChatCompletionRequestUserMessageContent::Text(
                        self.content.clone(),
                    ))
                    .build()
                    .map_err(|e| {
                        crate::Error::llm(format!("Failed to build user message: {}", e))
                    })?;
                Ok(msg.into())
            }
            "assistant" => {
                let msg = ChatCompletionRequestAssistantMessageArgs::default()
                    .content(ChatCompletionRequestAssistantMessageContent::Text(
                        self.content.clone(),
                    ))
                    .build()
                    .map_err(|e| {
                        crate::Error::llm(format!("Failed to build assistant message: {}", e))
                    })?;
                Ok(msg.into())
            }
            _ => Err(crate::Error::llm(format!(
                "Unknown message role: {}",
                self.role
            ))),
        }
    }
}

impl CompletionResponse {
    /// Content of the first choice, the only part the gateway relays.
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_chat_message_to_openai_system() {
        let msg = ChatMessage {
            role: "system".to_string(),
            content: "You are a marketing assistant".to_string(),
        };

        let openai_msg = msg.to_openai_message().unwrap();
        assert!(matches!(
            openai_msg,
            ChatCompletionRequestMessage::System(_)
        ));
    }

    #[test]
    fn test_chat_message_to_openai_user() {
        let msg = ChatMessage::user("Write me an ad");

        let openai_msg = msg.to_openai_message().unwrap();
        assert!(matches!(openai_msg, ChatCompletionRequestMessage::User(_)));
    }

    #[test]
    fn test_chat_message_to_openai_assistant() {
        let msg = ChatMessage {
            role: "assistant".to_string(),
            content: "Here is your ad copy".to_string(),
        };

        let openai_msg = msg.to_openai_message().unwrap();
        assert!(matches!(
            openai_msg,
            ChatCompletionRequestMessage::Assistant(_)
        ));
    }

    #[test]
    fn test_chat_message_invalid_role() {
        let msg = ChatMessage {
            role: "tool".to_string(),
            content: "This should fail".to_string(),
        };

        let result = msg.to_openai_message();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Unknown message role")
        );
    }

    #[test]
    fn test_first_content() {
        let response = CompletionResponse {
            id: "chatcmpl-123".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            choices: vec![Choice {
                index: 0,
                message: ChatMessage {
                    role: "assistant".to_string(),
                    content: "Hello!".to_string(),
                },
                finish_reason: Some("stop".to_string()),
            }],
            usage: None,
        };

        assert_eq!(response.first_content(), Some("Hello!"));
    }

    #[test]
    fn test_first_content_empty_choices() {
        let response = CompletionResponse {
            id: "chatcmpl-456".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            choices: vec![],
            usage: None,
        };

        assert_eq!(response.first_content(), None);
    }
}
