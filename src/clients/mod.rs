pub mod openai;
pub mod typeform;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::survey::Answer;

/// Read side of the survey service.
#[async_trait]
pub trait SurveyClient: Send + Sync {
    /// Fetches the answer list of a single completed submission. Fails with
    /// `NotFound` when the form has no response with the given id.
    async fn fetch_answers(&self, form_id: &str, response_id: &str) -> Result<Vec<Answer>>;
}

/// Text-generation side. `None` means the service produced no candidate; the
/// caller decides what to substitute.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<Option<String>>;
}
