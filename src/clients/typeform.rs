use async_trait::async_trait;
use reqwest::Client;

use crate::clients::SurveyClient;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::survey::{Answer, ResponsePage};

pub struct TypeformClient {
    http: Client,
    base_url: String,
    token: String,
}

impl TypeformClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.typeform_base_url, &config.typeform_token)
    }
}

#[async_trait]
impl SurveyClient for TypeformClient {
    async fn fetch_answers(&self, form_id: &str, response_id: &str) -> Result<Vec<Answer>> {
        let url = format!("{}/forms/{}/responses", self.base_url, form_id);
        let response = self
            .http
            .get(&url)
            .query(&[("included_response_ids", response_id)])
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| AppError::External(format!("Typeform request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::External(format!(
                "Typeform returned {status}: {body}"
            )));
        }

        let page: ResponsePage = response.json().await.map_err(|e| {
            AppError::External(format!("Typeform response was not valid JSON: {e}"))
        })?;

        match page.items.into_iter().next() {
            Some(item) => Ok(item.answers),
            None => Err(AppError::NotFound("No Typeform response found for ID.".into())),
        }
    }
}
