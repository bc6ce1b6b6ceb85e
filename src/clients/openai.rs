use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::clients::CompletionClient;
use crate::config::Config;
use crate::error::{AppError, Result};

// Completion settings are fixed: the quiz prompt always asks for the same
// shape of output.
const MODEL: &str = "text-davinci-003";
const MAX_TOKENS: u32 = 800;
const TEMPERATURE: f32 = 0.7;
const CANDIDATES: u32 = 1;

pub struct OpenAiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
    n: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    text: String,
}

impl OpenAiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.openai_base_url, &config.openai_api_key)
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<Option<String>> {
        let url = format!("{}/v1/completions", self.base_url);
        let body = CompletionRequest {
            model: MODEL,
            prompt,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            n: CANDIDATES,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::External(format!("OpenAI request failed: {e}")))?;

        // Error envelopes from the API carry no `choices`, so they come back
        // as `None` and the caller's fallback text, not a failed request.
        let completion: CompletionResponse = response.json().await.map_err(|e| {
            AppError::External(format!("OpenAI response was not valid JSON: {e}"))
        })?;

        Ok(completion.choices.into_iter().next().map(|choice| choice.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn returns_first_choice_text() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/completions")
            .match_header("authorization", "Bearer oa-key")
            .match_body(mockito::Matcher::PartialJson(json!({
                "model": "text-davinci-003",
                "max_tokens": 800,
                "temperature": 0.7,
                "n": 1
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"text":"  Idea 1...\n"},{"text":"unused"}]}"#)
            .create_async()
            .await;

        let client = OpenAiClient::new(server.url(), "oa-key");
        let text = client.complete("the prompt").await.unwrap();
        assert_eq!(text.as_deref(), Some("  Idea 1...\n"));
    }

    #[tokio::test]
    async fn empty_choices_is_none() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let client = OpenAiClient::new(server.url(), "oa-key");
        assert_eq!(client.complete("the prompt").await.unwrap(), None);
    }

    #[tokio::test]
    async fn error_envelope_is_none() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/completions")
            .with_status(401)
            .with_body(r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#)
            .create_async()
            .await;

        let client = OpenAiClient::new(server.url(), "bad-key");
        assert_eq!(client.complete("the prompt").await.unwrap(), None);
    }

    #[tokio::test]
    async fn non_json_body_is_external_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/completions")
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let client = OpenAiClient::new(server.url(), "oa-key");
        let err = client.complete("the prompt").await.unwrap_err();
        assert!(matches!(err, AppError::External(_)));
    }
}
