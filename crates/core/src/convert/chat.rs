use serde::{Deserialize, Serialize};

use super::ConvertError;

/// OpenAI-compatible endpoint the converter talks to.
pub const BASE_URL: &str = "https://api.groq.com/openai/v1";
/// Model identifier sent with every request.
pub const MODEL: &str = "llama-3.3-70b-versatile";
/// Sampling temperature, kept low so output stays close to the rules.
pub const TEMPERATURE: f32 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Body of a `POST /chat/completions` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// Assemble a request with one system message followed by one user message.
pub fn build_chat_request(model: &str, system: &str, user: &str, temperature: f32) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: system.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: user.to_string(),
            },
        ],
        temperature,
    }
}

/// Take the content of the first completion choice.
pub fn first_choice_content(response: ChatResponse) -> Result<String, ConvertError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(ConvertError::EmptyCompletion)
}

/// Resolve the chat-completions URL for a base URL such as `https://host/v1/`.
pub fn completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}
