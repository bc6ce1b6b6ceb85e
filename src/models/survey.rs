use serde::Deserialize;

/// One page of the survey service's responses query, reduced to the fields
/// this service reads.
#[derive(Deserialize, Debug)]
pub struct ResponsePage {
    #[serde(default)]
    pub items: Vec<ResponseItem>,
}

#[derive(Deserialize, Debug)]
pub struct ResponseItem {
    #[serde(default)]
    pub answers: Vec<Answer>,
}

/// A single answer, tagged by its `type` field. Tags this service does not
/// recognize land in `Other` and extract as an empty string.
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Answer {
    Text { text: String },
    Choice { choice: SelectedChoice },
    Number { number: serde_json::Number },
    Boolean { boolean: bool },
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SelectedChoice {
    pub label: String,
}

impl Answer {
    pub fn display_value(&self) -> String {
        match self {
            Answer::Text { text } => text.clone(),
            Answer::Choice { choice } => choice.label.clone(),
            Answer::Number { number } => number.to_string(),
            Answer::Boolean { boolean: true } => "Yes".to_string(),
            Answer::Boolean { boolean: false } => "No".to_string(),
            Answer::Other => String::new(),
        }
    }
}

/// The six quiz slots, filled positionally from the answer list. The survey
/// reports answers in question order, so reordering the quiz's questions
/// shifts every slot.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SurveyAnswers {
    pub interests: String,
    pub skills: String,
    pub lifestyle: String,
    pub goal: String,
    pub tech: String,
    pub constraints: String,
}

impl SurveyAnswers {
    pub fn from_answers(answers: &[Answer]) -> Self {
        let slot = |i: usize| answers.get(i).map(Answer::display_value).unwrap_or_default();
        Self {
            interests: slot(0),
            skills: slot(1),
            lifestyle: slot(2),
            goal: slot(3),
            tech: slot(4),
            constraints: slot(5),
        }
    }
}
