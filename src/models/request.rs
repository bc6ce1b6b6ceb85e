use serde::Deserialize;

use crate::error::{AppError, Result};

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct IdeasRequest {
    pub form_id: String,
    pub response_id: String,
}

impl IdeasRequest {
    /// Parses the inbound body. An unparsable or empty body degrades to a
    /// default request so the caller gets the validation 400, not a parse
    /// error.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.form_id.is_empty() || self.response_id.is_empty() {
            return Err(AppError::Validation("Missing formId or responseId".into()));
        }
        Ok(())
    }
}
