use crate::modules::predictions::core::prediction::Scores;
use serde::Deserialize;

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct SubmitFeedback {
    pub text: String,
    pub predicted_label: String,
    pub user_label: Option<String>,
    pub scores: Option<Scores>,
    pub notes: Option<String>,
}
