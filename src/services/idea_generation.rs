use crate::clients::openai::OpenAiClient;
use crate::clients::typeform::TypeformClient;
use crate::clients::{CompletionClient, SurveyClient};
use crate::config::Config;
use crate::error::Result;
use crate::models::request::IdeasRequest;
use crate::models::survey::SurveyAnswers;
use crate::services::prompt::build_prompt;

/// Returned whenever the completion service yields no candidate.
pub const FALLBACK_IDEAS: &str = "Sorry, I couldn't generate ideas.";

pub struct IdeaService {
    survey: Box<dyn SurveyClient>,
    completion: Box<dyn CompletionClient>,
}

impl IdeaService {
    pub fn new(survey: Box<dyn SurveyClient>, completion: Box<dyn CompletionClient>) -> Self {
        Self { survey, completion }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Box::new(TypeformClient::from_config(config)),
            Box::new(OpenAiClient::from_config(config)),
        )
    }

    /// Runs the pipeline for one submission: validate, fetch the quiz
    /// answers, template them into the prompt, ask for ideas.
    pub async fn generate(&self, request: &IdeasRequest) -> Result<String> {
        request.validate()?;

        let answers = self
            .survey
            .fetch_answers(&request.form_id, &request.response_id)
            .await?;
        let answers = SurveyAnswers::from_answers(&answers);
        let prompt = build_prompt(&answers);
        tracing::debug!(prompt_len = prompt.len(), "submitting completion request");

        let ideas = match self.completion.complete(&prompt).await? {
            Some(text) => text.trim().to_string(),
            None => FALLBACK_IDEAS.to_string(),
        };
        Ok(ideas)
    }
}
