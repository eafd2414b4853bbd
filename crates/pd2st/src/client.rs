use crate::prelude::*;
use pd2st_core::convert::chat::{ChatResponse, MODEL, TEMPERATURE};
use pd2st_core::convert::{build_chat_request, completions_url, first_choice_content};

/// Thin client for one OpenAI-compatible `/chat/completions` endpoint.
pub struct ChatClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl ChatClient {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            url: completions_url(base_url),
            api_key: api_key.to_string(),
        }
    }

    /// Send one system and one user message and return the first choice's text.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, Error> {
        let body = build_chat_request(MODEL, system, user, TEMPERATURE);

        log::debug!(
            "POST {} (model {}, prompt length {} chars)",
            self.url,
            MODEL,
            user.len()
        );

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Chat completion failed with HTTP {}", status);
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::InvalidResponse(e.to_string()))?;

        Ok(first_choice_content(completion)?)
    }
}
