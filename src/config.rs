use crate::error::{AppError, Result};

const DEFAULT_TYPEFORM_BASE_URL: &str = "https://api.typeform.com";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Settings read once from the environment when a request comes in. The two
/// tokens are secrets and must never end up in logs or response bodies.
pub struct Config {
    pub typeform_token: String,
    pub openai_api_key: String,
    pub typeform_base_url: String,
    pub openai_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let typeform_token = std::env::var("TYPEFORM_API_TOKEN")
            .map_err(|_| AppError::External("Missing TYPEFORM_API_TOKEN".into()))?;
        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| AppError::External("Missing OPENAI_API_KEY".into()))?;
        let typeform_base_url = std::env::var("TYPEFORM_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_TYPEFORM_BASE_URL.to_string());
        let openai_base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string());
        Ok(Self {
            typeform_token,
            openai_api_key,
            typeform_base_url,
            openai_base_url,
        })
    }
}
