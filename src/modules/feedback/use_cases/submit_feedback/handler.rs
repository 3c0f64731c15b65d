use crate::modules::feedback::core::feedback::{FeedbackDetails, FeedbackLine, FeedbackStore};
use crate::modules::feedback::use_cases::submit_feedback::command::SubmitFeedback;
use crate::shared::core::validation::{MAX_NOTES_CHARS, ValidationError, bounded_text, input_text, non_empty};
use std::sync::Arc;

pub struct SubmitFeedbackHandler {
    feedback: Arc<FeedbackStore>,
}

impl SubmitFeedbackHandler {
    pub fn new(feedback: Arc<FeedbackStore>) -> Self {
        Self { feedback }
    }

    /// Validates and appends one feedback entry, returning it as stored.
    pub async fn handle(&self, command: SubmitFeedback) -> Result<FeedbackLine, ValidationError> {
        let text = input_text(&command.text)?;
        let predicted_label = non_empty("predicted_label", &command.predicted_label)?;
        let user_label = command
            .user_label
            .as_deref()
            .map(|label| non_empty("user_label", label))
            .transpose()?;
        let notes = command
            .notes
            .as_deref()
            .map(|notes| bounded_text("notes", notes, MAX_NOTES_CHARS))
            .transpose()?;

        let details = FeedbackDetails {
            user_label,
            scores: command.scores,
            notes,
        };
        let record = self.feedback.record(&text, predicted_label, details).await;
        Ok(record.to_line())
    }
}
